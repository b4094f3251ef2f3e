use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Category table
        .route("/api/v1/categories", get(handlers::list_categories))

        // Display pipeline
        .route("/api/v1/products/display", post(handlers::display_products))

        .with_state(state)
}
