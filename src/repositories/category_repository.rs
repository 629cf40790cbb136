use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::category::Category;
use crate::models::transaction::TransactionType;
use crate::repositories::RepositoryError;

/// Trait defining category repository operations
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Get-or-create a category keyed by `(user, name, kind)`. Must be
    /// atomic: concurrent upserts of the same tuple converge on one row.
    async fn upsert(
        &self,
        user_id: Uuid,
        name: &str,
        kind: TransactionType,
    ) -> Result<Category, RepositoryError>;

    /// Find a category by ID, scoped to its owner
    async fn find_by_id(&self, user_id: Uuid, id: Uuid)
        -> Result<Option<Category>, RepositoryError>;

    /// All of a user's categories, optionally restricted to one kind,
    /// ordered ascending by name
    async fn find_by_user(
        &self,
        user_id: Uuid,
        kind: Option<TransactionType>,
    ) -> Result<Vec<Category>, RepositoryError>;
}

/// PostgreSQL implementation of CategoryRepository
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn upsert(
        &self,
        user_id: Uuid,
        name: &str,
        kind: TransactionType,
    ) -> Result<Category, RepositoryError> {
        // ON CONFLICT DO UPDATE (rather than DO NOTHING) so the RETURNING
        // clause yields the surviving row for concurrent upserts too.
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (id, user_id, name, kind)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, name, kind)
            DO UPDATE SET name = EXCLUDED.name
            RETURNING id, user_id, name, kind, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(name)
        .bind(kind)
        .fetch_one(&self.pool)
        .await?;

        Ok(category)
    }

    async fn find_by_id(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Category>, RepositoryError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, user_id, name, kind, created_at
            FROM categories
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
        kind: Option<TransactionType>,
    ) -> Result<Vec<Category>, RepositoryError> {
        let categories = match kind {
            Some(kind) => {
                sqlx::query_as::<_, Category>(
                    r#"
                    SELECT id, user_id, name, kind, created_at
                    FROM categories
                    WHERE user_id = $1 AND kind = $2
                    ORDER BY name ASC
                    "#,
                )
                .bind(user_id)
                .bind(kind)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Category>(
                    r#"
                    SELECT id, user_id, name, kind, created_at
                    FROM categories
                    WHERE user_id = $1
                    ORDER BY name ASC
                    "#,
                )
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(categories)
    }
}
