//! Integration sync client — pluggable, trait-based forwarder to the external sync service.
//!
//! Default: `HttpIntegrationSync` (reqwest, retries on 429/5xx and connection failures).
//! `AppState` holds an `Arc<dyn IntegrationSync>` so handlers never see the transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::integrations::session::Session;

const MAX_RETRIES: u32 = 3;
const BASE_BACKOFF_MS: u64 = 500;
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Sync service error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Sync service unavailable after {retries} attempts")]
    Exhausted { retries: u32 },
}

/// Result of a sync-all run, passed through from the sync service untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncSummary {
    pub results: Value,
}

/// Implement this to swap the sync transport without touching the handler.
#[async_trait]
pub trait IntegrationSync: Send + Sync {
    async fn sync_all(&self, session: &Session) -> Result<SyncSummary, AppError>;
}

/// Forwards sync-all requests to the external sync service over HTTP.
#[derive(Clone)]
pub struct HttpIntegrationSync {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    backoff_base: Duration,
}

impl HttpIntegrationSync {
    pub fn new(base_url: String, api_key: Option<String>) -> Result<Self, SyncError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url,
            api_key,
            backoff_base: Duration::from_millis(BASE_BACKOFF_MS),
        })
    }

    /// Overrides the first retry delay; later retries double it.
    #[cfg(test)]
    pub fn with_backoff_base(mut self, backoff_base: Duration) -> Self {
        self.backoff_base = backoff_base;
        self
    }

    fn sync_all_url(&self) -> String {
        format!("{}/sync-all", self.base_url.trim_end_matches('/'))
    }

    async fn post_sync_all(&self, session: &Session) -> Result<Value, SyncError> {
        let url = self.sync_all_url();
        let mut last_error: Option<SyncError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 500ms, 1s by default
                let delay = self.backoff_base * (1 << (attempt - 1));
                warn!(
                    "Sync attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let mut request = self.client.post(&url).bearer_auth(session.token());
            if let Some(key) = &self.api_key {
                request = request.header("x-api-key", key);
            }

            // Only connection failures are retried: the request never reached the
            // service. Timeouts and broken responses may have started a sync already.
            let response = match request.send().await {
                Ok(r) => r,
                Err(e) if e.is_connect() => {
                    last_error = Some(SyncError::Http(e));
                    continue;
                }
                Err(e) => return Err(SyncError::Http(e)),
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Sync service returned {}: {}", status, body);
                last_error = Some(SyncError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(SyncError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let results: Value = response.json().await?;
            debug!("Sync-all succeeded on attempt {}", attempt + 1);
            return Ok(results);
        }

        Err(last_error.unwrap_or(SyncError::Exhausted {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl IntegrationSync for HttpIntegrationSync {
    async fn sync_all(&self, session: &Session) -> Result<SyncSummary, AppError> {
        let results = self.post_sync_all(session).await?;
        Ok(SyncSummary { results })
    }
}
