//! Axum route handlers for the Integrations API.

use axum::{extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::integrations::client::SyncSummary;
use crate::integrations::session::Session;
use crate::state::AppState;

/// POST /api/v1/integrations/sync
///
/// Triggers a sync of every connected integration. Requests without a session
/// are rejected by the `Session` extractor before anything is forwarded.
pub async fn handle_sync_all(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<SyncSummary>, AppError> {
    info!("Forwarding sync-all request to integration service");
    let summary = state.sync.sync_all(&session).await?;
    Ok(Json(summary))
}
