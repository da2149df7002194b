use std::sync::Arc;

use crate::integrations::client::IntegrationSync;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable sync transport. Default: HttpIntegrationSync.
    pub sync: Arc<dyn IntegrationSync>,
}
