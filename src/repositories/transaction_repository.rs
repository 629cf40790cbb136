use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::transaction::{Transaction, TransactionType, TransactionWithCategory};
use crate::repositories::RepositoryError;

/// Optional pre-filters for transaction listings. The date range is
/// half-open: `start <= date < end`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionQuery {
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub kind: Option<TransactionType>,
}

/// Trait defining transaction repository operations. Every operation is
/// scoped to one owner; a transaction that exists under another user behaves
/// as if it did not exist.
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Persist a new transaction
    async fn create(&self, transaction: Transaction) -> Result<Transaction, RepositoryError>;

    /// Replace an existing transaction (last write wins)
    async fn update(&self, transaction: Transaction) -> Result<Transaction, RepositoryError>;

    /// Find one of the user's transactions by ID
    async fn find_by_id(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Transaction>, RepositoryError>;

    /// The user's transactions joined with their category names, optionally
    /// pre-filtered, ordered by date descending
    async fn find_by_user(
        &self,
        user_id: Uuid,
        query: TransactionQuery,
    ) -> Result<Vec<TransactionWithCategory>, RepositoryError>;

    /// Delete one of the user's transactions by ID
    async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), RepositoryError>;
}

/// PostgreSQL implementation of TransactionRepository
pub struct PostgresTransactionRepository {
    pool: PgPool,
}

impl PostgresTransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionRepository for PostgresTransactionRepository {
    async fn create(&self, transaction: Transaction) -> Result<Transaction, RepositoryError> {
        let created = sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (
                id, user_id, date, description, amount, kind,
                category_id, payment_type, bank, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, user_id, date, description, amount, kind,
                      category_id, payment_type, bank, created_at, updated_at
            "#,
        )
        .bind(transaction.id)
        .bind(transaction.user_id)
        .bind(transaction.date)
        .bind(&transaction.description)
        .bind(transaction.amount)
        .bind(transaction.kind)
        .bind(transaction.category_id)
        .bind(transaction.payment_type)
        .bind(&transaction.bank)
        .bind(transaction.created_at)
        .bind(transaction.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(&self, transaction: Transaction) -> Result<Transaction, RepositoryError> {
        let updated = sqlx::query_as::<_, Transaction>(
            r#"
            UPDATE transactions
            SET date = $3,
                description = $4,
                amount = $5,
                kind = $6,
                category_id = $7,
                payment_type = $8,
                bank = $9,
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, date, description, amount, kind,
                      category_id, payment_type, bank, created_at, updated_at
            "#,
        )
        .bind(transaction.id)
        .bind(transaction.user_id)
        .bind(transaction.date)
        .bind(&transaction.description)
        .bind(transaction.amount)
        .bind(transaction.kind)
        .bind(transaction.category_id)
        .bind(transaction.payment_type)
        .bind(&transaction.bank)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(updated)
    }

    async fn find_by_id(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Transaction>, RepositoryError> {
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, user_id, date, description, amount, kind,
                   category_id, payment_type, bank, created_at, updated_at
            FROM transactions
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(transaction)
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
        query: TransactionQuery,
    ) -> Result<Vec<TransactionWithCategory>, RepositoryError> {
        // Build the filtered query dynamically, binding in condition order.
        let mut sql = String::from(
            r#"
            SELECT t.id, t.user_id, t.date, t.description, t.amount, t.kind,
                   t.category_id, t.payment_type, t.bank, t.created_at, t.updated_at,
                   c.name AS category_name
            FROM transactions t
            LEFT JOIN categories c ON c.id = t.category_id
            WHERE t.user_id = $1
            "#,
        );

        let mut param_count = 1;

        if query.date_range.is_some() {
            sql.push_str(&format!(
                " AND t.date >= ${} AND t.date < ${}",
                param_count + 1,
                param_count + 2
            ));
            param_count += 2;
        }

        if query.kind.is_some() {
            sql.push_str(&format!(" AND t.kind = ${}", param_count + 1));
        }

        sql.push_str(" ORDER BY t.date DESC");

        let mut sqlx_query =
            sqlx::query_as::<_, TransactionWithCategory>(&sql).bind(user_id);

        if let Some((start, end)) = query.date_range {
            sqlx_query = sqlx_query.bind(start).bind(end);
        }

        if let Some(kind) = query.kind {
            sqlx_query = sqlx_query.bind(kind);
        }

        let transactions = sqlx_query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(transactions)
    }

    async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM transactions
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
