pub mod health;
pub mod invoice;
pub mod metrics;

use axum::routing::{get, post};
use axum::Router;

use crate::app_state::AppState;

/// Application routes. Shared by `main` and the integration tests so both
/// drive the same handler wiring.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/invoice", post(invoice::analyze_invoice))
        .with_state(state)
}
