//! Data models for Painel

use serde::{Deserialize, Serialize};

/// Number of monthly slots in a summary (January through December)
pub const MONTHS: usize = 12;

/// Fixed pt-BR three-letter month labels, in calendar order
pub const MONTH_LABELS: [&str; MONTHS] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// Wire value of `tipo` that marks an income entry; anything else is an expense
pub const INCOME_TIPO: &str = "RECEITA";

/// Chart color for the income series
pub const INCOME_COLOR: &str = "#2e7d32";

/// Chart color for the expense series
pub const EXPENSE_COLOR: &str = "#c62828";

/// Whether an entry adds to income or to expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Map the finance API's `tipo` field. Only `RECEITA` is income.
    pub fn from_tipo(tipo: &str) -> Self {
        if tipo == INCOME_TIPO {
            Self::Income
        } else {
            Self::Expense
        }
    }
}

impl std::str::FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" | "receita" => Ok(Self::Income),
            "expense" | "despesa" => Ok(Self::Expense),
            _ => Err(format!(
                "Unknown entry kind: {} (valid: income, expense)",
                s
            )),
        }
    }
}

/// A single financial entry as returned by the finance API
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialEntry {
    /// Calendar month, 1-12
    pub month: u8,
    pub kind: EntryKind,
    /// Non-negative amount
    pub amount: f64,
}

impl FinancialEntry {
    pub fn new(month: u8, kind: EntryKind, amount: f64) -> Self {
        Self {
            month,
            kind,
            amount,
        }
    }

    pub fn income(month: u8, amount: f64) -> Self {
        Self::new(month, EntryKind::Income, amount)
    }

    pub fn expense(month: u8, amount: f64) -> Self {
        Self::new(month, EntryKind::Expense, amount)
    }
}

/// Per-month income and expense totals
///
/// The three sequences are parallel and always have exactly 12 slots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub labels: [&'static str; MONTHS],
    pub income: [f64; MONTHS],
    pub expense: [f64; MONTHS],
}

impl MonthlySummary {
    /// All-zero summary
    pub fn new() -> Self {
        Self {
            labels: MONTH_LABELS,
            income: [0.0; MONTHS],
            expense: [0.0; MONTHS],
        }
    }

    /// Sum of all monthly income slots
    pub fn income_total(&self) -> f64 {
        self.income.iter().sum()
    }

    /// Sum of all monthly expense slots
    pub fn expense_total(&self) -> f64 {
        self.expense.iter().sum()
    }

    /// Rows of (label, income, expense) in calendar order
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, f64, f64)> + '_ {
        self.labels
            .iter()
            .zip(self.income.iter().zip(self.expense.iter()))
            .map(|(label, (income, expense))| (*label, *income, *expense))
    }
}

impl Default for MonthlySummary {
    fn default() -> Self {
        Self::new()
    }
}

/// Grand totals across all entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialTotals {
    pub income: f64,
    pub expense: f64,
    /// `income - expense`; may be negative
    pub balance: f64,
}

impl FinancialTotals {
    pub fn new(income: f64, expense: f64) -> Self {
        Self {
            income,
            expense,
            balance: income - expense,
        }
    }
}

/// One line of the monthly evolution chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    pub label: &'static str,
    pub color: &'static str,
    pub data: Vec<f64>,
}

/// Line chart data: month labels with an income and an expense series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub labels: Vec<&'static str>,
    pub datasets: Vec<ChartDataset>,
}

impl LineChart {
    pub fn from_summary(summary: &MonthlySummary) -> Self {
        Self {
            labels: summary.labels.to_vec(),
            datasets: vec![
                ChartDataset {
                    label: "Receita",
                    color: INCOME_COLOR,
                    data: summary.income.to_vec(),
                },
                ChartDataset {
                    label: "Despesa",
                    color: EXPENSE_COLOR,
                    data: summary.expense.to_vec(),
                },
            ],
        }
    }

    /// Largest value across all datasets (0.0 for an empty chart)
    pub fn max_value(&self) -> f64 {
        self.datasets
            .iter()
            .flat_map(|d| d.data.iter().copied())
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kind_from_tipo() {
        assert_eq!(EntryKind::from_tipo("RECEITA"), EntryKind::Income);
        assert_eq!(EntryKind::from_tipo("DESPESA"), EntryKind::Expense);
        // Anything other than the exact income marker counts as expense
        assert_eq!(EntryKind::from_tipo("receita"), EntryKind::Expense);
        assert_eq!(EntryKind::from_tipo(""), EntryKind::Expense);
    }

    #[test]
    fn test_entry_kind_from_str() {
        assert_eq!("income".parse::<EntryKind>().unwrap(), EntryKind::Income);
        assert_eq!("DESPESA".parse::<EntryKind>().unwrap(), EntryKind::Expense);
        assert!("transfer".parse::<EntryKind>().is_err());
    }

    #[test]
    fn test_summary_rows_in_calendar_order() {
        let mut summary = MonthlySummary::new();
        summary.income[0] = 10.0;
        summary.expense[11] = 5.0;

        let rows: Vec<_> = summary.rows().collect();
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0], ("Jan", 10.0, 0.0));
        assert_eq!(rows[11], ("Dez", 0.0, 5.0));
    }

    #[test]
    fn test_totals_balance_may_be_negative() {
        let totals = FinancialTotals::new(10.0, 25.0);
        assert_eq!(totals.balance, -15.0);
    }

    #[test]
    fn test_line_chart_from_summary() {
        let mut summary = MonthlySummary::new();
        summary.income[2] = 300.0;
        summary.expense[3] = 120.0;

        let chart = LineChart::from_summary(&summary);
        assert_eq!(chart.labels.len(), 12);
        assert_eq!(chart.datasets.len(), 2);
        assert_eq!(chart.datasets[0].label, "Receita");
        assert_eq!(chart.datasets[0].color, INCOME_COLOR);
        assert_eq!(chart.datasets[1].data[3], 120.0);
        assert_eq!(chart.max_value(), 300.0);
    }

    #[test]
    fn test_empty_chart_max_is_zero() {
        let chart = LineChart::from_summary(&MonthlySummary::new());
        assert_eq!(chart.max_value(), 0.0);
    }
}
