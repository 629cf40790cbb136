use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::category::Category;
use crate::models::transaction::TransactionType;
use crate::repositories::category_repository::CategoryRepository;
use crate::repositories::RepositoryError;

/// Category service errors
#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<RepositoryError> for CategoryError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => CategoryError::CategoryNotFound,
            RepositoryError::DatabaseError(msg) => CategoryError::DatabaseError(msg),
            RepositoryError::ConstraintViolation(msg) => CategoryError::DatabaseError(msg),
        }
    }
}

/// Trait defining category service operations
#[async_trait]
pub trait CategoryService: Send + Sync {
    /// All of a user's categories, optionally restricted to one kind,
    /// ordered ascending by name
    async fn get_categories(
        &self,
        user_id: Uuid,
        kind: Option<TransactionType>,
    ) -> Result<Vec<Category>, CategoryError>;

    /// Get-or-create a category by `(name, kind)` for the user. First use of
    /// a name under a kind creates it; later uses return the existing row.
    async fn get_or_create(
        &self,
        user_id: Uuid,
        name: &str,
        kind: TransactionType,
    ) -> Result<Category, CategoryError>;

    /// Find one of the user's categories by ID
    async fn find_by_id(&self, user_id: Uuid, id: Uuid)
        -> Result<Option<Category>, CategoryError>;
}

/// Implementation of CategoryService
pub struct CategoryServiceImpl {
    category_repository: Arc<dyn CategoryRepository>,
}

impl CategoryServiceImpl {
    pub fn new(category_repository: Arc<dyn CategoryRepository>) -> Self {
        Self {
            category_repository,
        }
    }
}

#[async_trait]
impl CategoryService for CategoryServiceImpl {
    async fn get_categories(
        &self,
        user_id: Uuid,
        kind: Option<TransactionType>,
    ) -> Result<Vec<Category>, CategoryError> {
        Ok(self.category_repository.find_by_user(user_id, kind).await?)
    }

    async fn get_or_create(
        &self,
        user_id: Uuid,
        name: &str,
        kind: TransactionType,
    ) -> Result<Category, CategoryError> {
        // The repository upsert is atomic on (user, name, kind), so two
        // concurrent callers racing on a new name converge on one row.
        let category = self
            .category_repository
            .upsert(user_id, name.trim(), kind)
            .await?;
        Ok(category)
    }

    async fn find_by_id(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Category>, CategoryError> {
        Ok(self.category_repository.find_by_id(user_id, id).await?)
    }
}
