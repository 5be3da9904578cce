/// Upstream record source — fetches raw CV records from the CV store API.
///
/// The engine never talks to the network. Handlers that work on a stored CV fetch
/// the raw record through a `RecordSource` first; if that fails the engine is not
/// invoked and the failure surfaces as "could not fetch CV".
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_ATTEMPTS: u32 = 3;
const BASE_BACKOFF_MS: u64 = 500;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CV {id} not found upstream")]
    NotFound { id: String },

    #[error("Upstream returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Upstream unavailable after {attempts} attempts")]
    Exhausted { attempts: u32 },
}

/// Where raw records come from. `AppState` holds an `Arc<dyn RecordSource>`;
/// tests swap in an in-memory implementation.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Raw record for `id`. `Value::Null` is a valid (empty) record.
    async fn fetch(&self, id: &str) -> Result<Value, UpstreamError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HttpRecordSource — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// `GET {base_url}/cvs/{id}` with optional bearer auth, retried on transport
/// errors, 429 and 5xx with exponential backoff.
#[derive(Clone)]
pub struct HttpRecordSource {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpRecordSource {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self, UpstreamError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            base_url: base_url.into(),
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch(&self, id: &str) -> Result<Value, UpstreamError> {
        let url = record_url(&self.base_url, id);
        let mut last_error: Option<UpstreamError> = None;

        for attempt in 0..MAX_ATTEMPTS {
            if attempt > 0 {
                let delay = backoff_delay(attempt);
                warn!(
                    "Upstream fetch attempt {} for CV {} failed, retrying after {}ms...",
                    attempt,
                    id,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let mut request = self.client.get(&url).header("accept", "application/json");
            if let Some(token) = &self.token {
                request = request.bearer_auth(token);
            }

            let response = match request.send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(UpstreamError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if is_retryable(status) {
                let body = response.text().await.unwrap_or_default();
                warn!("Upstream returned {}: {}", status, body);
                last_error = Some(UpstreamError::Status {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if status == StatusCode::NOT_FOUND {
                return Err(UpstreamError::NotFound { id: id.to_string() });
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(UpstreamError::Status {
                    status: status.as_u16(),
                    message: body,
                });
            }

            let body = response.bytes().await?;
            let record = unwrap_data(serde_json::from_slice(&body)?);
            debug!("Fetched CV {} from upstream ({} bytes)", id, body.len());

            return Ok(record);
        }

        Err(last_error.unwrap_or(UpstreamError::Exhausted {
            attempts: MAX_ATTEMPTS,
        }))
    }
}

fn record_url(base_url: &str, id: &str) -> String {
    format!("{}/cvs/{}", base_url.trim_end_matches('/'), id)
}

fn is_retryable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// 500ms, 1s, 2s, ...
fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_millis(BASE_BACKOFF_MS << attempt.saturating_sub(1))
}

/// Producers wrap records as `{"data": {...}}`; anything else is the record itself.
fn unwrap_data(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.len() == 1 && map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}
