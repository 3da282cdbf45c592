//! Transport abstraction between the request engine and an HTTP stack.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::errors::Error;

/// Raw transport result: the HTTP status plus the unparsed body bytes.
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Contract the request engine expects from its HTTP transport.
///
/// The API is read-only, so only GET is required. Cancellation is
/// cooperative: the engine drops the returned future, and the transport is
/// expected to abandon the exchange at its next suspension point.
#[async_trait]
pub trait Session: Send + Sync {
    async fn execute(&self, url: Url) -> Result<RawResponse, Error>;
}

/// Default transport backed by reqwest. Builds a fresh HTTP client per
/// request with a configurable timeout.
pub struct DefaultSession {
    timeout: Duration,
}

impl DefaultSession {
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for DefaultSession {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Session for DefaultSession {
    async fn execute(&self, url: Url) -> Result<RawResponse, Error> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("failed to build HTTP client: {}", e);
                Error::Transport(e.to_string())
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("request failed: {}", e);
                Error::Transport(e.to_string())
            })?;

        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .await
            .map_err(|e| {
                tracing::error!("failed to read response body: {}", e);
                Error::Transport(e.to_string())
            })?
            .to_vec();

        Ok(RawResponse { status, body })
    }
}
