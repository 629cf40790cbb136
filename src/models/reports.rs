use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Income/expense totals for one month (or for the whole history).
/// `balance` is income minus expenses and may be negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "total_income": 4500.0,
    "total_expenses": 280.0,
    "balance": 4220.0
}))]
pub struct MonthlySummary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
}

impl MonthlySummary {
    pub fn zero() -> Self {
        Self {
            total_income: Decimal::ZERO,
            total_expenses: Decimal::ZERO,
            balance: Decimal::ZERO,
        }
    }
}

/// One slot of the per-day chart series: income and expense sums for a single
/// day of the month. Days without transactions carry zero sums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DailyPoint {
    pub day: u32,
    pub income: Decimal,
    pub expenses: Decimal,
}

/// Total spent in one expense category over a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "name": "Alimentación",
    "total": 280.0
}))]
pub struct CategoryTotal {
    pub name: String,
    pub total: Decimal,
}

/// One month of the trailing cross-month comparison, labeled with a short
/// month name for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "month": "Dic",
    "income": 5900.0,
    "expenses": 2845.0
}))]
pub struct MonthComparison {
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
}
