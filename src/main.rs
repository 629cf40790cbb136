use sqlx::postgres::PgPoolOptions;
use std::env;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use finance_tracker::handlers::ErrorResponse;
use finance_tracker::models::auth::{AuthToken, LoginRequest};
use finance_tracker::models::category::{Category, CreateCategoryRequest};
use finance_tracker::models::reports::{CategoryTotal, DailyPoint, MonthComparison, MonthlySummary};
use finance_tracker::models::transaction::{
    CreateTransactionRequest, PaymentType, TransactionType, TransactionView,
    UpdateTransactionRequest,
};
use finance_tracker::models::user::{CreateUserRequest, User};
use finance_tracker::repositories::category_repository::PostgresCategoryRepository;
use finance_tracker::repositories::transaction_repository::PostgresTransactionRepository;
use finance_tracker::repositories::user_repository::PostgresUserRepository;
use finance_tracker::routes::{router, AppState};
use finance_tracker::services::auth_service::{AuthService, AuthServiceImpl};
use finance_tracker::services::category_service::{CategoryService, CategoryServiceImpl};
use finance_tracker::services::transaction_service::{TransactionService, TransactionServiceImpl};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        finance_tracker::handlers::auth_handlers::register_handler,
        finance_tracker::handlers::auth_handlers::login_handler,
        finance_tracker::handlers::transaction_handlers::list_transactions_handler,
        finance_tracker::handlers::transaction_handlers::create_transaction_handler,
        finance_tracker::handlers::transaction_handlers::update_transaction_handler,
        finance_tracker::handlers::transaction_handlers::delete_transaction_handler,
        finance_tracker::handlers::category_handlers::list_categories_handler,
        finance_tracker::handlers::category_handlers::create_category_handler,
        finance_tracker::handlers::report_handlers::months_handler,
        finance_tracker::handlers::report_handlers::summary_handler,
        finance_tracker::handlers::report_handlers::monthly_summary_handler,
        finance_tracker::handlers::report_handlers::daily_report_handler,
        finance_tracker::handlers::report_handlers::category_report_handler,
        finance_tracker::handlers::report_handlers::comparison_handler,
    ),
    components(schemas(
        User,
        CreateUserRequest,
        LoginRequest,
        AuthToken,
        ErrorResponse,
        Category,
        CreateCategoryRequest,
        TransactionView,
        CreateTransactionRequest,
        UpdateTransactionRequest,
        TransactionType,
        PaymentType,
        MonthlySummary,
        DailyPoint,
        CategoryTotal,
        MonthComparison,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "transactions", description = "Transaction recording and editing"),
        (name = "categories", description = "Category listing and creation"),
        (name = "reports", description = "Monthly summaries and chart data"),
    ),
    info(
        title = "Finance Tracker API",
        version = "0.1.0",
        description = "REST API for tracking personal income and expenses with monthly reports",
    )
)]
struct ApiDoc;

/// Registers the bearer-token security scheme referenced by the handlers
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")));
    tracing_subscriber::registry().with(fmt_layer).init();

    // Get configuration from environment
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("connected to database");

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("migrations completed");

    // Initialize repositories
    let user_repository = Arc::new(PostgresUserRepository::new(pool.clone()));
    let category_repository = Arc::new(PostgresCategoryRepository::new(pool.clone()));
    let transaction_repository = Arc::new(PostgresTransactionRepository::new(pool.clone()));

    // Initialize services
    let auth_service: Arc<dyn AuthService> =
        Arc::new(AuthServiceImpl::new(user_repository, jwt_secret));
    let category_service: Arc<dyn CategoryService> =
        Arc::new(CategoryServiceImpl::new(category_repository));
    let transaction_service: Arc<dyn TransactionService> = Arc::new(TransactionServiceImpl::new(
        transaction_repository,
        category_service.clone(),
    ));

    let state = AppState {
        auth_service,
        category_service,
        transaction_service,
    };

    // Build router with Swagger UI and CORS
    let app = router(state)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(%addr, "server running");
    tracing::info!("API docs at http://{}/api/docs", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
