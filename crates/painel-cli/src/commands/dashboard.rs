//! Dashboard command implementation

use anyhow::{Context, Result};
use painel_core::api::FinanceApi;
use painel_core::{format_brl, Dashboard, Session, SessionStore};

use super::render::render_line_chart;

/// Height of the text chart in rows
const CHART_HEIGHT: usize = 10;

pub async fn cmd_dashboard(
    api: &dyn FinanceApi,
    store: &dyn SessionStore,
    json: bool,
) -> Result<()> {
    let session = Session::require(store).context("Run 'painel login' first")?;

    let (dashboard, error) = Dashboard::load_or_empty(api, &session).await;
    if let Some(e) = error {
        eprintln!("⚠️  Could not load data: {}", e);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        return Ok(());
    }

    print_dashboard(&dashboard);
    Ok(())
}

fn print_dashboard(dashboard: &Dashboard) {
    let totals = &dashboard.totals;

    println!();
    println!("📊 Resumo Financeiro");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Receitas: {:>18}", format_brl(totals.income));
    println!("   Despesas: {:>18}", format_brl(totals.expense));
    println!("   Saldo:    {:>18}", format_brl(totals.balance));

    println!();
    println!("   {:5} │ {:>16} │ {:>16}", "Mês", "Receita", "Despesa");
    println!("   ──────┼──────────────────┼──────────────────");
    for (label, income, expense) in dashboard.summary.rows() {
        println!(
            "   {:5} │ {:>16} │ {:>16}",
            label,
            format_brl(income),
            format_brl(expense)
        );
    }

    println!();
    println!("📈 Evolução Mensal");
    for line in render_line_chart(&dashboard.chart, CHART_HEIGHT) {
        println!("   {}", line);
    }

    if dashboard.entry_count == 0 {
        println!();
        println!("   No entries found.");
    }
}
