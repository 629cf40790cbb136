use rust_decimal::Decimal;

use crate::models::reports::MonthlySummary;
use crate::models::transaction::{TransactionType, TransactionView};

/// Reduces a transaction set to its income/expense totals and balance.
///
/// Amounts are summed as decimals, so the totals carry no binary
/// floating-point drift regardless of how many transactions go in. An empty
/// input yields all zeros.
pub fn summarize(transactions: &[TransactionView]) -> MonthlySummary {
    let mut total_income = Decimal::ZERO;
    let mut total_expenses = Decimal::ZERO;

    for transaction in transactions {
        match transaction.kind {
            TransactionType::Income => total_income += transaction.amount,
            TransactionType::Expense => total_expenses += transaction.amount,
        }
    }

    MonthlySummary {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
    }
}

/// Percentage of total income that `value` represents. A month without
/// income yields 0% instead of a division error, so summary cards always
/// have a defined value to show.
pub fn income_share(value: Decimal, total_income: Decimal) -> Decimal {
    if total_income.is_zero() {
        Decimal::ZERO
    } else {
        value / total_income * Decimal::ONE_HUNDRED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::analytics::test_support::{expense, income};

    #[test]
    fn sums_income_and_expenses_separately() {
        let transactions = vec![
            income("01/12/2024", 4500, "Salario"),
            expense("02/12/2024", 280, "Alimentación"),
        ];

        let summary = summarize(&transactions);
        assert_eq!(summary.total_income, dec!(4500));
        assert_eq!(summary.total_expenses, dec!(280));
        assert_eq!(summary.balance, dec!(4220));
    }

    #[test]
    fn empty_input_yields_all_zeros() {
        let summary = summarize(&[]);
        assert_eq!(summary, crate::models::reports::MonthlySummary::zero());
    }

    #[test]
    fn balance_may_be_negative() {
        let transactions = vec![
            income("01/12/2024", 100, "Salario"),
            expense("05/12/2024", 1200, "Vivienda"),
        ];

        let summary = summarize(&transactions);
        assert_eq!(summary.balance, dec!(-1100));
    }

    #[test]
    fn balance_equals_income_minus_expenses_exactly() {
        let transactions = vec![
            income("01/12/2024", dec!(0.10), "Salario"),
            income("03/12/2024", dec!(0.20), "Freelance"),
            expense("05/12/2024", dec!(0.30), "Servicios"),
        ];

        let summary = summarize(&transactions);
        assert_eq!(
            summary.balance,
            summary.total_income - summary.total_expenses
        );
        // Decimal sums stay exact where f64 would drift.
        assert_eq!(summary.total_income, dec!(0.30));
        assert_eq!(summary.balance, Decimal::ZERO);
    }

    #[test]
    fn decimal_sums_do_not_drift_over_many_entries() {
        let transactions: Vec<_> = (0..1000)
            .map(|_| income("01/12/2024", dec!(0.10), "Salario"))
            .collect();

        assert_eq!(summarize(&transactions).total_income, dec!(100.00));
    }

    #[test]
    fn income_share_guards_division_by_zero() {
        assert_eq!(income_share(dec!(280), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(income_share(dec!(50), dec!(200)), dec!(25));
    }
}
