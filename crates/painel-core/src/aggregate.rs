//! Monthly aggregation of financial entries
//!
//! One linear pass over the entries fills twelve income slots and twelve
//! expense slots. Grand totals are summed from the slots so they always equal
//! the sum of the monthly figures.

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{EntryKind, FinancialEntry, FinancialTotals, MonthlySummary, MONTHS};

/// Aggregate entries into per-month totals and grand totals
///
/// Months are validated before anything is accumulated, so an out-of-range
/// month yields `Error::MonthOutOfRange` and never a partial summary.
pub fn aggregate(entries: &[FinancialEntry]) -> Result<(MonthlySummary, FinancialTotals)> {
    if let Some(bad) = entries
        .iter()
        .find(|e| e.month == 0 || usize::from(e.month) > MONTHS)
    {
        return Err(Error::MonthOutOfRange(bad.month));
    }

    let mut summary = MonthlySummary::new();

    for entry in entries {
        let slot = usize::from(entry.month) - 1;
        match entry.kind {
            EntryKind::Income => summary.income[slot] += entry.amount,
            EntryKind::Expense => summary.expense[slot] += entry.amount,
        }
    }

    let income = summary.income_total();
    let expense = summary.expense_total();

    debug!(
        "Aggregated {} entries: income={} expense={}",
        entries.len(),
        income,
        expense
    );

    Ok((summary, FinancialTotals::new(income, expense)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_empty() {
        let (summary, totals) = aggregate(&[]).unwrap();
        assert_eq!(summary.income, [0.0; 12]);
        assert_eq!(summary.expense, [0.0; 12]);
        assert_eq!(totals, FinancialTotals::default());
    }

    #[test]
    fn test_aggregate_dashboard_scenario() {
        let entries = vec![
            FinancialEntry::income(1, 100.0),
            FinancialEntry::expense(1, 40.0),
            FinancialEntry::income(2, 50.0),
        ];

        let (summary, totals) = aggregate(&entries).unwrap();
        assert_eq!(summary.income[0], 100.0);
        assert_eq!(summary.expense[0], 40.0);
        assert_eq!(summary.income[1], 50.0);
        assert_eq!(summary.expense[1], 0.0);
        assert_eq!(totals.income, 150.0);
        assert_eq!(totals.expense, 40.0);
        assert_eq!(totals.balance, 110.0);
    }

    #[test]
    fn test_slot_sums_match_totals() {
        let entries = vec![
            FinancialEntry::income(3, 1200.5),
            FinancialEntry::income(3, 99.5),
            FinancialEntry::expense(7, 80.25),
            FinancialEntry::expense(12, 19.75),
            FinancialEntry::income(12, 10.0),
        ];

        let (summary, totals) = aggregate(&entries).unwrap();
        assert_eq!(summary.income_total(), totals.income);
        assert_eq!(summary.expense_total(), totals.expense);
        assert_eq!(totals.balance, totals.income - totals.expense);
        assert_eq!(summary.income[2], 1300.0);
        assert_eq!(summary.expense[11], 19.75);
    }

    #[test]
    fn test_totals_equal_slot_sums_for_inexact_amounts() {
        // 0.1 and 1.1 have no exact binary form; summing in entry order
        // would give 1.3 while the slots sum to 1.3000000000000003
        let entries = vec![
            FinancialEntry::income(1, 0.1),
            FinancialEntry::income(2, 0.1),
            FinancialEntry::income(1, 1.1),
            FinancialEntry::expense(4, 0.7),
            FinancialEntry::expense(2, 0.2),
            FinancialEntry::expense(4, 0.1),
        ];

        let (summary, totals) = aggregate(&entries).unwrap();
        assert_eq!(summary.income.iter().sum::<f64>(), totals.income);
        assert_eq!(summary.expense.iter().sum::<f64>(), totals.expense);
        assert_eq!(totals.balance, totals.income - totals.expense);
    }

    #[test]
    fn test_negative_balance() {
        let entries = vec![
            FinancialEntry::income(5, 10.0),
            FinancialEntry::expense(5, 35.0),
        ];
        let (_, totals) = aggregate(&entries).unwrap();
        assert_eq!(totals.balance, -25.0);
    }

    #[test]
    fn test_month_zero_rejected() {
        let entries = vec![FinancialEntry::income(0, 10.0)];
        let err = aggregate(&entries).unwrap_err();
        assert!(matches!(err, Error::MonthOutOfRange(0)));
    }

    #[test]
    fn test_month_thirteen_rejected_without_partial_result() {
        let entries = vec![
            FinancialEntry::income(1, 10.0),
            FinancialEntry::expense(13, 5.0),
        ];
        let err = aggregate(&entries).unwrap_err();
        assert!(matches!(err, Error::MonthOutOfRange(13)));
        assert!(err.to_string().contains("1-12"));
    }
}
