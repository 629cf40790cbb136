use std::cmp::Reverse;

use crate::analytics::month_key::{day_of_month, MonthKey};
use crate::models::transaction::TransactionView;

/// Selects the transactions belonging to `month`, most recent day first.
///
/// Membership is exact month-key equality on the derived key, so the result
/// agrees with a persistence layer that pre-filters by the month's half-open
/// date range. Transactions with unparseable dates never match. The sort is
/// stable: same-day transactions keep their input order.
pub fn transactions_for_month(
    month: MonthKey,
    transactions: &[TransactionView],
) -> Vec<TransactionView> {
    let mut selected: Vec<TransactionView> = transactions
        .iter()
        .filter(|t| MonthKey::from_date_str(&t.date) == Some(month))
        .cloned()
        .collect();
    selected.sort_by_key(|t| Reverse(day_of_month(&t.date).unwrap_or(0)));
    selected
}

/// Distinct month keys present in the history, most recent first. Drives the
/// month selector.
pub fn distinct_months(transactions: &[TransactionView]) -> Vec<MonthKey> {
    let mut months: Vec<MonthKey> = Vec::new();
    for transaction in transactions {
        if let Some(key) = MonthKey::from_date_str(&transaction.date) {
            if !months.contains(&key) {
                months.push(key);
            }
        }
    }
    months.sort_by(|a, b| b.cmp(a));
    months
}
