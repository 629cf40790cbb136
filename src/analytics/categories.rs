use crate::models::reports::CategoryTotal;
use crate::models::transaction::{TransactionType, TransactionView};

/// Groups a month's expenses by category name and ranks them by magnitude.
///
/// Income entries are ignored. The sort is stable and descending by summed
/// total, so categories with equal totals keep first-encountered order. A
/// month without expenses yields an empty list; the chart layer renders the
/// zero-slice case itself.
pub fn category_breakdown(transactions: &[TransactionView]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for transaction in transactions {
        if transaction.kind != TransactionType::Expense {
            continue;
        }
        match totals.iter().position(|c| c.name == transaction.category) {
            Some(index) => totals[index].total += transaction.amount,
            None => totals.push(CategoryTotal {
                name: transaction.category.clone(),
                total: transaction.amount,
            }),
        }
    }

    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::analytics::summary::summarize;
    use crate::analytics::test_support::{expense, income};

    #[test]
    fn groups_expenses_by_category_descending() {
        let transactions = vec![
            expense("02/12/2024", 280, "Alimentación"),
            expense("05/12/2024", 1200, "Vivienda"),
            expense("15/12/2024", 210, "Alimentación"),
            income("01/12/2024", 4500, "Salario"),
        ];

        let breakdown = category_breakdown(&transactions);

        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].name, "Vivienda");
        assert_eq!(breakdown[0].total, dec!(1200));
        assert_eq!(breakdown[1].name, "Alimentación");
        assert_eq!(breakdown[1].total, dec!(490));
    }

    #[test]
    fn income_only_month_yields_empty_breakdown() {
        let transactions = vec![income("01/12/2024", 4500, "Salario")];
        assert!(category_breakdown(&transactions).is_empty());
    }

    #[test]
    fn equal_totals_keep_first_encountered_order() {
        let transactions = vec![
            expense("02/12/2024", 100, "Ocio"),
            expense("03/12/2024", 100, "Salud"),
            expense("04/12/2024", 100, "Compras"),
        ];

        let breakdown = category_breakdown(&transactions);
        let names: Vec<&str> = breakdown.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Ocio", "Salud", "Compras"]);
    }

    #[test]
    fn breakdown_totals_add_up_to_the_expense_total() {
        let transactions = vec![
            expense("02/12/2024", dec!(280.50), "Alimentación"),
            expense("05/12/2024", dec!(1200), "Vivienda"),
            expense("07/12/2024", dec!(119.99), "Transporte"),
            income("01/12/2024", dec!(4500), "Salario"),
        ];

        let breakdown_sum: Decimal = category_breakdown(&transactions)
            .iter()
            .map(|c| c.total)
            .sum();
        assert_eq!(breakdown_sum, summarize(&transactions).total_expenses);
    }
}
