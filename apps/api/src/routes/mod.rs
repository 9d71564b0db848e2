pub mod health;

use axum::{
    http::Uri,
    routing::{any, get},
    Router,
};

use crate::errors::AppError;
use crate::weather::handlers;

async fn not_found(uri: Uri) -> Result<(), AppError> {
    Err(AppError::NotFound(format!("no route for {uri}")))
}

pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Data API: the fixture endpoint answers every method identically
        .route("/api/data", any(handlers::handle_get_data))
        .fallback(not_found)
}
