pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::currency::handlers as currency;
use crate::integrations::handlers as integrations;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Currency API
        .route(
            "/api/v1/currency",
            get(currency::handle_get_currency).post(currency::handle_resolve_currency),
        )
        // Board API
        .route("/api/v1/board", post(jobs::handle_build_board))
        // Integrations API (POST only; other methods get 405)
        .route(
            "/api/v1/integrations/sync",
            post(integrations::handle_sync_all),
        )
        .with_state(state)
}
