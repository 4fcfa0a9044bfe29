//! Blocking HTTP client for the import route.

use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use tracing::{debug, info, warn};

use store_model::ImportEnvelope;

use crate::config::UploadConfig;
use crate::error::{Result, UploadError};
use crate::outcome::UploadOutcome;

/// Client that posts import envelopes to one endpoint.
pub struct ImportClient {
    /// HTTP client.
    client: Client,
    /// Parsed import route.
    endpoint: Url,
    /// Total request timeout.
    timeout: Duration,
}

impl ImportClient {
    /// Create a client for the configured endpoint and timeout.
    pub fn new(config: &UploadConfig) -> Result<Self> {
        let endpoint = config.endpoint_url()?;
        let timeout = config.timeout();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UploadError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    /// The import route this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn transport_error(&self, err: &reqwest::Error) -> UploadError {
        if err.is_timeout() {
            UploadError::Timeout {
                timeout_secs: self.timeout.as_secs(),
            }
        } else {
            UploadError::Network(err.to_string())
        }
    }

    /// Posts the envelope once and returns whatever the server answered.
    ///
    /// Fails only when no response could be obtained; the status code is
    /// never inspected to decide success.
    pub fn send(&self, envelope: &ImportEnvelope) -> Result<UploadOutcome> {
        let body = serde_json::to_vec(envelope)?;
        info!(
            endpoint = %self.endpoint,
            stores = envelope.len(),
            delete_existing = envelope.delete_existing,
            bytes = body.len(),
            "posting import envelope"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, format!("store-import/{}", env!("CARGO_PKG_VERSION")))
            .body(body)
            .send()
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| self.transport_error(&e))?;
        debug!(status, bytes = body.len(), "received import response");

        let outcome = UploadOutcome { status, body };
        if !outcome.is_success() {
            warn!(status, "import route answered with a non-success status");
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ImportClient::new(&UploadConfig::default()).unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "http://localhost:3000/api/stores/import"
        );
    }

    #[test]
    fn test_client_rejects_bad_endpoint() {
        let config = UploadConfig::default().with_endpoint("not a url");
        assert!(matches!(
            ImportClient::new(&config),
            Err(UploadError::InvalidEndpoint { .. })
        ));
    }
}
