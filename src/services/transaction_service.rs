use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::analytics;
use crate::analytics::month_key::MonthKey;
use crate::models::reports::{CategoryTotal, DailyPoint, MonthComparison, MonthlySummary};
use crate::models::transaction::{
    CreateTransactionRequest, PaymentType, Transaction, TransactionType, TransactionView,
    TransactionWithCategory, UpdateTransactionRequest,
};
use crate::repositories::transaction_repository::{TransactionQuery, TransactionRepository};
use crate::repositories::RepositoryError;
use crate::services::category_service::{CategoryError, CategoryService};

/// Display name for transactions whose category join came back empty.
const UNCATEGORIZED: &str = "Sin categoría";

/// Transaction service errors
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    #[error("Transaction not found")]
    EntryNotFound,

    #[error("Bank name is required when payment type is bank")]
    MissingBank,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<RepositoryError> for TransactionError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => TransactionError::EntryNotFound,
            RepositoryError::DatabaseError(msg) => TransactionError::DatabaseError(msg),
            RepositoryError::ConstraintViolation(msg) => TransactionError::DatabaseError(msg),
        }
    }
}

impl From<CategoryError> for TransactionError {
    fn from(error: CategoryError) -> Self {
        TransactionError::DatabaseError(error.to_string())
    }
}

/// Trait defining transaction operations and the month-keyed reports built
/// on top of them. Every call is scoped to one owner.
#[async_trait]
pub trait TransactionService: Send + Sync {
    /// Record a transaction, get-or-creating its category
    async fn create(
        &self,
        user_id: Uuid,
        request: CreateTransactionRequest,
    ) -> Result<TransactionView, TransactionError>;

    /// One month's transactions, optionally restricted to one kind, most
    /// recent day first
    async fn list_month(
        &self,
        user_id: Uuid,
        month: MonthKey,
        kind: Option<TransactionType>,
    ) -> Result<Vec<TransactionView>, TransactionError>;

    /// Partially update one of the user's transactions
    async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        request: UpdateTransactionRequest,
    ) -> Result<TransactionView, TransactionError>;

    /// Delete one of the user's transactions
    async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), TransactionError>;

    /// Distinct `MM-YYYY` keys of the user's history, most recent first
    async fn months(&self, user_id: Uuid) -> Result<Vec<String>, TransactionError>;

    /// Income/expense totals over the user's entire history
    async fn all_time_summary(&self, user_id: Uuid) -> Result<MonthlySummary, TransactionError>;

    /// Income/expense totals for one month
    async fn month_summary(
        &self,
        user_id: Uuid,
        month: MonthKey,
    ) -> Result<MonthlySummary, TransactionError>;

    /// Fixed-cadence per-day chart series for one month
    async fn daily_report(
        &self,
        user_id: Uuid,
        month: MonthKey,
    ) -> Result<Vec<DailyPoint>, TransactionError>;

    /// Expense totals per category for one month, largest first
    async fn category_report(
        &self,
        user_id: Uuid,
        month: MonthKey,
    ) -> Result<Vec<CategoryTotal>, TransactionError>;

    /// Income/expense totals for the trailing months, oldest first
    async fn comparison_report(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<MonthComparison>, TransactionError>;
}

/// Implementation of TransactionService
pub struct TransactionServiceImpl {
    transaction_repository: Arc<dyn TransactionRepository>,
    category_service: Arc<dyn CategoryService>,
}

impl TransactionServiceImpl {
    pub fn new(
        transaction_repository: Arc<dyn TransactionRepository>,
        category_service: Arc<dyn CategoryService>,
    ) -> Self {
        Self {
            transaction_repository,
            category_service,
        }
    }

    /// Adapts a stored row to the client/report shape: display-form date and
    /// a single normalized category name.
    fn to_view(record: TransactionWithCategory) -> TransactionView {
        let TransactionWithCategory {
            transaction,
            category_name,
        } = record;
        Self::view_with_category(
            transaction,
            category_name.unwrap_or_else(|| UNCATEGORIZED.to_string()),
        )
    }

    fn view_with_category(transaction: Transaction, category: String) -> TransactionView {
        TransactionView {
            id: transaction.id,
            date: analytics::to_display_date(&transaction.date.to_string()),
            description: transaction.description,
            amount: transaction.amount,
            kind: transaction.kind,
            category,
            payment_type: transaction.payment_type,
            bank: transaction.bank,
        }
    }

    /// Full history for one owner, adapted to views.
    async fn all_views(&self, user_id: Uuid) -> Result<Vec<TransactionView>, TransactionError> {
        let records = self
            .transaction_repository
            .find_by_user(user_id, TransactionQuery::default())
            .await?;
        Ok(records.into_iter().map(Self::to_view).collect())
    }
}

#[async_trait]
impl TransactionService for TransactionServiceImpl {
    async fn create(
        &self,
        user_id: Uuid,
        request: CreateTransactionRequest,
    ) -> Result<TransactionView, TransactionError> {
        let category = self
            .category_service
            .get_or_create(user_id, &request.category, request.kind)
            .await?;

        let payment_type = request.payment_type.unwrap_or_default();
        let bank = match payment_type {
            PaymentType::Bank => request.bank,
            PaymentType::Cash => None,
        };

        let now = chrono::Utc::now();
        let transaction = Transaction {
            id: Uuid::new_v4(),
            user_id,
            date: request.date,
            description: request.description.trim().to_string(),
            amount: request.amount,
            kind: request.kind,
            category_id: category.id,
            payment_type,
            bank,
            created_at: now,
            updated_at: now,
        };

        let created = self.transaction_repository.create(transaction).await?;
        tracing::debug!(user_id = %user_id, transaction_id = %created.id, "recorded transaction");
        Ok(Self::view_with_category(created, category.name))
    }

    async fn list_month(
        &self,
        user_id: Uuid,
        month: MonthKey,
        kind: Option<TransactionType>,
    ) -> Result<Vec<TransactionView>, TransactionError> {
        // The repository pre-filters by the month's half-open date range;
        // the in-memory month filter must agree with it, and also supplies
        // the day-descending ordering.
        let records = self
            .transaction_repository
            .find_by_user(
                user_id,
                TransactionQuery {
                    date_range: Some(month.date_range()),
                    kind,
                },
            )
            .await?;

        let views: Vec<TransactionView> = records.into_iter().map(Self::to_view).collect();
        Ok(analytics::transactions_for_month(month, &views))
    }

    async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        request: UpdateTransactionRequest,
    ) -> Result<TransactionView, TransactionError> {
        let existing = self
            .transaction_repository
            .find_by_id(user_id, id)
            .await?
            .ok_or(TransactionError::EntryNotFound)?;

        let kind = request.kind.unwrap_or(existing.kind);

        // A transaction's category always carries the transaction's own
        // kind, so a category change, or a kind change without a new
        // category name, re-resolves under the effective kind.
        let category = match (&request.category, request.kind) {
            (Some(name), _) => Some(
                self.category_service
                    .get_or_create(user_id, name, kind)
                    .await?,
            ),
            (None, Some(new_kind)) if new_kind != existing.kind => {
                let current = self
                    .category_service
                    .find_by_id(user_id, existing.category_id)
                    .await?;
                match current {
                    Some(current) => Some(
                        self.category_service
                            .get_or_create(user_id, &current.name, kind)
                            .await?,
                    ),
                    None => None,
                }
            }
            _ => None,
        };

        let payment_type = request.payment_type.unwrap_or(existing.payment_type);
        let bank = match payment_type {
            PaymentType::Cash => None,
            PaymentType::Bank => request.bank.or(existing.bank.clone()),
        };
        if payment_type == PaymentType::Bank
            && bank.as_deref().map_or(true, |b| b.trim().is_empty())
        {
            return Err(TransactionError::MissingBank);
        }

        let updated = Transaction {
            id,
            user_id,
            date: request.date.unwrap_or(existing.date),
            description: request
                .description
                .map(|d| d.trim().to_string())
                .unwrap_or(existing.description),
            amount: request.amount.unwrap_or(existing.amount),
            kind,
            category_id: category
                .as_ref()
                .map(|c| c.id)
                .unwrap_or(existing.category_id),
            payment_type,
            bank,
            created_at: existing.created_at,
            updated_at: chrono::Utc::now(),
        };

        let category_name = match category {
            Some(category) => category.name,
            None => self
                .category_service
                .find_by_id(user_id, updated.category_id)
                .await?
                .map(|c| c.name)
                .unwrap_or_else(|| UNCATEGORIZED.to_string()),
        };

        let saved = self.transaction_repository.update(updated).await?;
        Ok(Self::view_with_category(saved, category_name))
    }

    async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), TransactionError> {
        self.transaction_repository.delete(user_id, id).await?;
        tracing::debug!(user_id = %user_id, transaction_id = %id, "deleted transaction");
        Ok(())
    }

    async fn months(&self, user_id: Uuid) -> Result<Vec<String>, TransactionError> {
        let views = self.all_views(user_id).await?;
        Ok(analytics::distinct_months(&views)
            .iter()
            .map(MonthKey::to_string)
            .collect())
    }

    async fn all_time_summary(&self, user_id: Uuid) -> Result<MonthlySummary, TransactionError> {
        let views = self.all_views(user_id).await?;
        Ok(analytics::summarize(&views))
    }

    async fn month_summary(
        &self,
        user_id: Uuid,
        month: MonthKey,
    ) -> Result<MonthlySummary, TransactionError> {
        let views = self.list_month(user_id, month, None).await?;
        Ok(analytics::summarize(&views))
    }

    async fn daily_report(
        &self,
        user_id: Uuid,
        month: MonthKey,
    ) -> Result<Vec<DailyPoint>, TransactionError> {
        let views = self.list_month(user_id, month, None).await?;
        Ok(analytics::daily_series(&views, analytics::DEFAULT_STRIDE))
    }

    async fn category_report(
        &self,
        user_id: Uuid,
        month: MonthKey,
    ) -> Result<Vec<CategoryTotal>, TransactionError> {
        let views = self.list_month(user_id, month, None).await?;
        Ok(analytics::category_breakdown(&views))
    }

    async fn comparison_report(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<MonthComparison>, TransactionError> {
        let views = self.all_views(user_id).await?;
        Ok(analytics::monthly_comparison(
            &views,
            analytics::COMPARISON_WINDOW,
        ))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use crate::services::category_service::tests::MockCategoryRepository;
    use crate::services::category_service::CategoryServiceImpl;

    /// In-memory TransactionRepository mirroring the Postgres ordering and
    /// owner scoping, joined against a category lookup.
    pub(crate) struct MockTransactionRepository {
        pub(crate) transactions: Mutex<HashMap<Uuid, Transaction>>,
        pub(crate) category_names: Mutex<HashMap<Uuid, String>>,
    }

    impl MockTransactionRepository {
        pub(crate) fn new() -> Self {
            Self {
                transactions: Mutex::new(HashMap::new()),
                category_names: Mutex::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl TransactionRepository for MockTransactionRepository {
        async fn create(&self, transaction: Transaction) -> Result<Transaction, RepositoryError> {
            let mut transactions = self.transactions.lock().unwrap();
            transactions.insert(transaction.id, transaction.clone());
            Ok(transaction)
        }

        async fn update(&self, transaction: Transaction) -> Result<Transaction, RepositoryError> {
            let mut transactions = self.transactions.lock().unwrap();
            match transactions.get(&transaction.id) {
                Some(existing) if existing.user_id == transaction.user_id => {
                    transactions.insert(transaction.id, transaction.clone());
                    Ok(transaction)
                }
                _ => Err(RepositoryError::NotFound),
            }
        }

        async fn find_by_id(
            &self,
            user_id: Uuid,
            id: Uuid,
        ) -> Result<Option<Transaction>, RepositoryError> {
            let transactions = self.transactions.lock().unwrap();
            Ok(transactions
                .get(&id)
                .filter(|t| t.user_id == user_id)
                .cloned())
        }

        async fn find_by_user(
            &self,
            user_id: Uuid,
            query: TransactionQuery,
        ) -> Result<Vec<TransactionWithCategory>, RepositoryError> {
            let transactions = self.transactions.lock().unwrap();
            let category_names = self.category_names.lock().unwrap();

            let mut records: Vec<Transaction> = transactions
                .values()
                .filter(|t| t.user_id == user_id)
                .filter(|t| {
                    query
                        .date_range
                        .map_or(true, |(start, end)| t.date >= start && t.date < end)
                })
                .filter(|t| query.kind.map_or(true, |k| t.kind == k))
                .cloned()
                .collect();
            records.sort_by(|a, b| b.date.cmp(&a.date));

            Ok(records
                .into_iter()
                .map(|transaction| {
                    let category_name = category_names.get(&transaction.category_id).cloned();
                    TransactionWithCategory {
                        transaction,
                        category_name,
                    }
                })
                .collect())
        }

        async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), RepositoryError> {
            let mut transactions = self.transactions.lock().unwrap();
            match transactions.get(&id) {
                Some(existing) if existing.user_id == user_id => {
                    transactions.remove(&id);
                    Ok(())
                }
                _ => Err(RepositoryError::NotFound),
            }
        }
    }

    struct Fixture {
        repository: Arc<MockTransactionRepository>,
        service: TransactionServiceImpl,
    }

    fn fixture() -> Fixture {
        let repository = Arc::new(MockTransactionRepository::new());
        let category_service =
            Arc::new(CategoryServiceImpl::new(Arc::new(MockCategoryRepository::new())));
        let service = TransactionServiceImpl::new(repository.clone(), category_service);
        Fixture {
            repository,
            service,
        }
    }

    fn create_request(
        date: (i32, u32, u32),
        amount: rust_decimal::Decimal,
        kind: TransactionType,
        category: &str,
    ) -> CreateTransactionRequest {
        CreateTransactionRequest {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            description: category.to_string(),
            amount,
            kind,
            category: category.to_string(),
            payment_type: None,
            bank: None,
        }
    }

    #[tokio::test]
    async fn create_auto_creates_the_category_and_returns_the_view() {
        let Fixture {
            repository,
            service,
        } = fixture();
        let user_id = Uuid::new_v4();

        let view = service
            .create(
                user_id,
                create_request((2024, 12, 2), dec!(280), TransactionType::Expense, "Alimentación"),
            )
            .await
            .unwrap();

        assert_eq!(view.date, "02/12/2024");
        assert_eq!(view.category, "Alimentación");
        assert_eq!(view.amount, dec!(280));
        assert_eq!(view.payment_type, PaymentType::Cash);
        assert!(view.bank.is_none());
        assert_eq!(repository.transactions.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_month_filters_and_orders_day_descending() {
        let Fixture {
            repository,
            service,
        } = fixture();
        let user_id = Uuid::new_v4();

        for (date, amount, kind, category) in [
            ((2024, 12, 1), dec!(4500), TransactionType::Income, "Salario"),
            ((2024, 11, 3), dec!(250), TransactionType::Expense, "Alimentación"),
            ((2024, 12, 15), dec!(210), TransactionType::Expense, "Alimentación"),
        ] {
            service
                .create(user_id, create_request(date, amount, kind, category))
                .await
                .unwrap();
        }
        sync_category_names(&repository, &service, user_id).await;

        let december = service
            .list_month(user_id, MonthKey::parse("12-2024").unwrap(), None)
            .await
            .unwrap();

        let dates: Vec<&str> = december.iter().map(|t| t.date.as_str()).collect();
        assert_eq!(dates, ["15/12/2024", "01/12/2024"]);
    }

    #[tokio::test]
    async fn list_month_can_restrict_to_one_kind() {
        let Fixture {
            repository,
            service,
        } = fixture();
        let user_id = Uuid::new_v4();

        service
            .create(
                user_id,
                create_request((2024, 12, 1), dec!(4500), TransactionType::Income, "Salario"),
            )
            .await
            .unwrap();
        service
            .create(
                user_id,
                create_request((2024, 12, 2), dec!(280), TransactionType::Expense, "Alimentación"),
            )
            .await
            .unwrap();
        sync_category_names(&repository, &service, user_id).await;

        let incomes = service
            .list_month(
                user_id,
                MonthKey::parse("12-2024").unwrap(),
                Some(TransactionType::Income),
            )
            .await
            .unwrap();

        assert_eq!(incomes.len(), 1);
        assert_eq!(incomes[0].kind, TransactionType::Income);
    }

    #[tokio::test]
    async fn update_is_scoped_to_the_owner() {
        let Fixture {
            repository: _,
            service,
        } = fixture();
        let owner = Uuid::new_v4();
        let other = Uuid::new_v4();

        let view = service
            .create(
                owner,
                create_request((2024, 12, 2), dec!(280), TransactionType::Expense, "Alimentación"),
            )
            .await
            .unwrap();

        let result = service
            .update(
                other,
                view.id,
                UpdateTransactionRequest {
                    amount: Some(dec!(1)),
                    ..empty_update()
                },
            )
            .await;
        assert!(matches!(result, Err(TransactionError::EntryNotFound)));
    }

    #[tokio::test]
    async fn update_merges_partial_fields() {
        let Fixture {
            repository: _,
            service,
        } = fixture();
        let user_id = Uuid::new_v4();

        let view = service
            .create(
                user_id,
                create_request((2024, 12, 2), dec!(280), TransactionType::Expense, "Alimentación"),
            )
            .await
            .unwrap();

        let updated = service
            .update(
                user_id,
                view.id,
                UpdateTransactionRequest {
                    amount: Some(dec!(300)),
                    ..empty_update()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.amount, dec!(300));
        assert_eq!(updated.category, "Alimentación");
        assert_eq!(updated.date, "02/12/2024");
    }

    #[tokio::test]
    async fn update_to_bank_payment_requires_a_bank_name() {
        let Fixture {
            repository: _,
            service,
        } = fixture();
        let user_id = Uuid::new_v4();

        let view = service
            .create(
                user_id,
                create_request((2024, 12, 2), dec!(280), TransactionType::Expense, "Alimentación"),
            )
            .await
            .unwrap();

        let missing = service
            .update(
                user_id,
                view.id,
                UpdateTransactionRequest {
                    payment_type: Some(PaymentType::Bank),
                    ..empty_update()
                },
            )
            .await;
        assert!(matches!(missing, Err(TransactionError::MissingBank)));

        let updated = service
            .update(
                user_id,
                view.id,
                UpdateTransactionRequest {
                    payment_type: Some(PaymentType::Bank),
                    bank: Some("BBVA".to_string()),
                    ..empty_update()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.bank.as_deref(), Some("BBVA"));

        // Switching back to cash drops the bank name.
        let cash = service
            .update(
                user_id,
                view.id,
                UpdateTransactionRequest {
                    payment_type: Some(PaymentType::Cash),
                    ..empty_update()
                },
            )
            .await
            .unwrap();
        assert!(cash.bank.is_none());
    }

    #[tokio::test]
    async fn changing_kind_re_resolves_the_category_under_the_new_kind() {
        let Fixture {
            repository: _,
            service,
        } = fixture();
        let user_id = Uuid::new_v4();

        let view = service
            .create(
                user_id,
                create_request((2024, 12, 12), dec!(600), TransactionType::Expense, "Freelance"),
            )
            .await
            .unwrap();

        let updated = service
            .update(
                user_id,
                view.id,
                UpdateTransactionRequest {
                    kind: Some(TransactionType::Income),
                    ..empty_update()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.kind, TransactionType::Income);
        assert_eq!(updated.category, "Freelance");
    }

    #[tokio::test]
    async fn delete_is_scoped_to_the_owner() {
        let Fixture {
            repository,
            service,
        } = fixture();
        let owner = Uuid::new_v4();
        let other = Uuid::new_v4();

        let view = service
            .create(
                owner,
                create_request((2024, 12, 2), dec!(280), TransactionType::Expense, "Alimentación"),
            )
            .await
            .unwrap();

        let result = service.delete(other, view.id).await;
        assert!(matches!(result, Err(TransactionError::EntryNotFound)));
        assert_eq!(repository.transactions.lock().unwrap().len(), 1);

        service.delete(owner, view.id).await.unwrap();
        assert!(repository.transactions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn months_lists_distinct_keys_most_recent_first() {
        let Fixture {
            repository,
            service,
        } = fixture();
        let user_id = Uuid::new_v4();

        for date in [(2024, 11, 3), (2024, 12, 1), (2024, 12, 15), (2025, 1, 5)] {
            service
                .create(
                    user_id,
                    create_request(date, dec!(100), TransactionType::Income, "Salario"),
                )
                .await
                .unwrap();
        }
        sync_category_names(&repository, &service, user_id).await;

        let months = service.months(user_id).await.unwrap();
        assert_eq!(months, ["01-2025", "12-2024", "11-2024"]);
    }

    #[tokio::test]
    async fn reports_cover_summary_daily_categories_and_comparison() {
        let Fixture {
            repository,
            service,
        } = fixture();
        let user_id = Uuid::new_v4();

        service
            .create(
                user_id,
                create_request((2024, 12, 1), dec!(4500), TransactionType::Income, "Salario"),
            )
            .await
            .unwrap();
        service
            .create(
                user_id,
                create_request((2024, 12, 2), dec!(280), TransactionType::Expense, "Alimentación"),
            )
            .await
            .unwrap();
        sync_category_names(&repository, &service, user_id).await;

        let month = MonthKey::parse("12-2024").unwrap();

        let summary = service.month_summary(user_id, month).await.unwrap();
        assert_eq!(summary.total_income, dec!(4500));
        assert_eq!(summary.total_expenses, dec!(280));
        assert_eq!(summary.balance, dec!(4220));

        let daily = service.daily_report(user_id, month).await.unwrap();
        assert_eq!(daily.len(), 15);
        assert_eq!(daily[0].income, dec!(4500));

        let categories = service.category_report(user_id, month).await.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Alimentación");
        assert_eq!(categories[0].total, dec!(280));

        let comparison = service.comparison_report(user_id).await.unwrap();
        assert_eq!(comparison.len(), 1);
        assert_eq!(comparison[0].month, "Dic");

        let all_time = service.all_time_summary(user_id).await.unwrap();
        assert_eq!(all_time.balance, dec!(4220));
    }

    #[tokio::test]
    async fn empty_history_reports_zeros_and_the_placeholder() {
        let Fixture {
            repository: _,
            service,
        } = fixture();
        let user_id = Uuid::new_v4();

        let summary = service
            .month_summary(user_id, MonthKey::parse("12-2024").unwrap())
            .await
            .unwrap();
        assert_eq!(summary, MonthlySummary::zero());

        let comparison = service.comparison_report(user_id).await.unwrap();
        assert_eq!(comparison.len(), 1);
        assert_eq!(comparison[0].month, "Actual");

        assert!(service.months(user_id).await.unwrap().is_empty());
    }

    fn empty_update() -> UpdateTransactionRequest {
        UpdateTransactionRequest {
            date: None,
            description: None,
            amount: None,
            kind: None,
            category: None,
            payment_type: None,
            bank: None,
        }
    }

    /// The mock repository joins category names through a side table;
    /// mirror what the SQL LEFT JOIN would see.
    async fn sync_category_names(
        repository: &Arc<MockTransactionRepository>,
        service: &TransactionServiceImpl,
        user_id: Uuid,
    ) {
        let categories = service
            .category_service
            .get_categories(user_id, None)
            .await
            .unwrap();
        let mut names = repository.category_names.lock().unwrap();
        for category in categories {
            names.insert(category.id, category.name);
        }
    }
}
