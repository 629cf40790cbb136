use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::analytics::month_key::day_of_month;
use crate::models::reports::DailyPoint;
use crate::models::transaction::{TransactionType, TransactionView};

/// The series covers days 1 through 30 of a month, whatever its actual
/// length. Day-31 transactions are silently dropped from the chart; they
/// still count toward the month's totals elsewhere.
pub const SERIES_DAYS: u32 = 30;

/// Reporting every other day keeps the chart's point count bounded
/// regardless of month length. Callers wanting full daily granularity pass
/// stride 1.
pub const DEFAULT_STRIDE: u32 = 2;

/// Buckets an already-month-filtered transaction set into fixed day slots
/// for charting, summing income and expenses separately per day.
///
/// The output always covers days 1, 1+stride, … up to [`SERIES_DAYS`], with
/// zero sums for days that had no transactions. Days skipped by the stride
/// are absent from the output entirely, not folded into neighbors.
pub fn daily_series(transactions: &[TransactionView], stride: u32) -> Vec<DailyPoint> {
    let mut by_day: HashMap<u32, (Decimal, Decimal)> = HashMap::new();

    for transaction in transactions {
        let Some(day) = day_of_month(&transaction.date) else {
            continue;
        };
        let sums = by_day.entry(day).or_insert((Decimal::ZERO, Decimal::ZERO));
        match transaction.kind {
            TransactionType::Income => sums.0 += transaction.amount,
            TransactionType::Expense => sums.1 += transaction.amount,
        }
    }

    let stride = stride.max(1);
    (1..=SERIES_DAYS)
        .step_by(stride as usize)
        .map(|day| {
            let (income, expenses) = by_day.get(&day).copied().unwrap_or_default();
            DailyPoint {
                day,
                income,
                expenses,
            }
        })
        .collect()
}
