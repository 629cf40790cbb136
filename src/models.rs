pub mod auth;
pub mod category;
pub mod reports;
pub mod transaction;
pub mod user;

pub use auth::{AuthToken, LoginRequest};
pub use category::{Category, CreateCategoryRequest};
pub use reports::{CategoryTotal, DailyPoint, MonthComparison, MonthlySummary};
pub use transaction::{
    CreateTransactionRequest, PaymentType, Transaction, TransactionType, TransactionView,
    TransactionWithCategory, UpdateTransactionRequest,
};
pub use user::{CreateUserRequest, User};
