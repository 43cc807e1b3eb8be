//! Integration tests for painel-core
//!
//! These tests exercise the login -> dashboard and color -> palette workflows
//! against the in-memory mock backend.

use painel_core::{
    aggregate, build_scheme_query, classify, ColorGenerator, Dashboard, Error, FileSessionStore,
    FinancialEntry, FinancialTotals, HexColor, MemorySessionStore, MockBackend, SchemeMode,
    Session, SessionStore,
};

fn sample_entries() -> Vec<FinancialEntry> {
    vec![
        FinancialEntry::income(1, 100.0),
        FinancialEntry::expense(1, 40.0),
        FinancialEntry::income(2, 50.0),
    ]
}

// =============================================================================
// Finance Dashboard
// =============================================================================

#[tokio::test]
async fn test_login_then_dashboard() {
    let api = MockBackend::new().with_entries(sample_entries());
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = FileSessionStore::new(dir.path().join("session.json"));

    // No session yet
    assert!(Session::restore(&store).unwrap().is_none());

    Session::sign_in(&api, &store, &api.email, &api.senha)
        .await
        .expect("Login failed");

    // A fresh store over the same file sees the session (app restart)
    let restarted = FileSessionStore::new(dir.path().join("session.json"));
    let session = Session::require(&restarted).expect("Session not persisted");

    let dashboard = Dashboard::load(&api, &session).await.unwrap();
    assert_eq!(dashboard.summary.income[0], 100.0);
    assert_eq!(dashboard.summary.expense[0], 40.0);
    assert_eq!(dashboard.summary.income[1], 50.0);
    assert_eq!(
        dashboard.totals,
        FinancialTotals {
            income: 150.0,
            expense: 40.0,
            balance: 110.0
        }
    );

    session.sign_out(&restarted).unwrap();
    assert!(matches!(
        Session::require(&store),
        Err(Error::NotLoggedIn)
    ));
}

#[tokio::test]
async fn test_rejected_login_keeps_user_logged_out() {
    let api = MockBackend::new();
    let store = MemorySessionStore::new();

    let result = Session::sign_in(&api, &store, &api.email, "wrong").await;
    assert!(matches!(result, Err(Error::Auth(_))));
    assert_eq!(store.get("usuarioId").unwrap(), None);
}

#[test]
fn test_aggregate_invariants_over_many_entries() {
    let entries: Vec<FinancialEntry> = (0..240)
        .map(|i| {
            let month = (i % 12 + 1) as u8;
            if i % 3 == 0 {
                FinancialEntry::expense(month, f64::from(i) * 0.25)
            } else {
                FinancialEntry::income(month, f64::from(i) * 0.5)
            }
        })
        .collect();

    let (summary, totals) = aggregate(&entries).unwrap();
    assert!((summary.income_total() - totals.income).abs() < 1e-9);
    assert!((summary.expense_total() - totals.expense).abs() < 1e-9);
    assert_eq!(totals.balance, totals.income - totals.expense);
    assert!(summary.income.iter().all(|v| *v >= 0.0));
    assert!(summary.expense.iter().all(|v| *v >= 0.0));
}

// =============================================================================
// Color Generator
// =============================================================================

#[tokio::test]
async fn test_generate_then_palette() {
    let api = MockBackend::new();
    let mut generator = ColorGenerator::new();

    let generated = generator.generate(&api).await;
    assert!(!generated.is_fallback());

    let palette = generator.palette(&api).await.unwrap();
    assert_eq!(palette.base, *generator.current());
    assert_eq!(palette.len(), 5);
}

#[tokio::test]
async fn test_offline_generation_still_yields_valid_color() {
    let api = MockBackend::new().offline();
    let mut generator = ColorGenerator::new();

    let generated = generator.generate(&api).await;
    assert!(generated.is_fallback());
    let contrast = classify(generator.current().as_str()).unwrap();
    assert_eq!(contrast, *generator.contrast());
}

#[test]
fn test_scheme_query_for_edited_color() {
    let mut generator = ColorGenerator::new();
    generator.set_color("#FF5733").unwrap();
    assert!(generator.set_color("#GG0000").is_err());

    let query = build_scheme_query(generator.current());
    assert_eq!(query.hex, "FF5733");
    assert_eq!(query.mode, SchemeMode::Analogic);
    assert_eq!(query.count, 5);
}

#[test]
fn test_shorthand_and_full_forms_agree() {
    for (short, full) in [("#FFF", "#FFFFFF"), ("#08F", "#0088FF"), ("#a1c", "#aa11cc")] {
        assert_eq!(classify(short).unwrap(), classify(full).unwrap());
        assert_eq!(HexColor::parse(short).unwrap().expanded(), full);
    }
}
