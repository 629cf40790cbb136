use rust_decimal::Decimal;

use crate::analytics::month_key::MonthKey;
use crate::models::reports::MonthComparison;
use crate::models::transaction::{TransactionType, TransactionView};

/// How many trailing months the comparison chart shows.
pub const COMPARISON_WINDOW: usize = 5;

/// Groups the entire transaction history by month, sums income and expenses
/// per group, and returns the most recent `window` months in chronological
/// order, labeled with short month names.
///
/// An empty history returns a single `"Actual"` placeholder with zero sums
/// rather than an empty list, so the chart always has something to render.
pub fn monthly_comparison(
    transactions: &[TransactionView],
    window: usize,
) -> Vec<MonthComparison> {
    let mut groups: Vec<(MonthKey, Decimal, Decimal)> = Vec::new();

    for transaction in transactions {
        let Some(key) = MonthKey::from_date_str(&transaction.date) else {
            continue;
        };
        let index = match groups.iter().position(|(k, _, _)| *k == key) {
            Some(index) => index,
            None => {
                groups.push((key, Decimal::ZERO, Decimal::ZERO));
                groups.len() - 1
            }
        };
        let group = &mut groups[index];
        match transaction.kind {
            TransactionType::Income => group.1 += transaction.amount,
            TransactionType::Expense => group.2 += transaction.amount,
        }
    }

    groups.sort_by_key(|(key, _, _)| *key);

    let skip = groups.len().saturating_sub(window);
    let comparison: Vec<MonthComparison> = groups
        .into_iter()
        .skip(skip)
        .map(|(key, income, expenses)| MonthComparison {
            month: key.short_name().to_string(),
            income,
            expenses,
        })
        .collect();

    if comparison.is_empty() {
        return vec![MonthComparison {
            month: "Actual".to_string(),
            income: Decimal::ZERO,
            expenses: Decimal::ZERO,
        }];
    }
    comparison
}
