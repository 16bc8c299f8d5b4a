pub mod analyze;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/analyze", post(analyze::handle_analyze))
        .route("/bulk_analyze", post(analyze::handle_bulk_analyze))
        .with_state(state)
}
