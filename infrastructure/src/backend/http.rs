//! HTTP adapter for the chat backend
//!
//! Implements the [`ChatBackend`] and [`HealthProbe`] ports against the
//! backend's JSON API. One adapter instance serves both ports so the
//! controller and the health monitor share a connection pool.

use super::protocol::{ChatRequest, ChatResponse, HealthResponse};
use async_trait::async_trait;
use campus_application::ports::chat_backend::{BackendError, ChatBackend};
use campus_application::ports::health::{ConnectionStatus, HealthProbe};
use tracing::{debug, trace};

/// Chat backend reached over HTTP.
///
/// No request timeout is set; transport defaults govern.
pub struct HttpChatBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpChatBackend {
    /// Create an adapter for the backend at `base_url`.
    ///
    /// A trailing slash on the base URL is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    /// Exchange one message with the backend.
    ///
    /// The envelope decides the outcome, not the HTTP status: a non-2xx
    /// answer that still carries a well-formed failure envelope counts as a
    /// rejection. Only missing or unreadable responses are transport errors.
    async fn send(&self, message: &str) -> Result<String, BackendError> {
        let url = self.endpoint("/chat");
        trace!("POST {} ({} bytes)", url, message.len());

        let response = self
            .client
            .post(&url)
            .json(&ChatRequest { message })
            .send()
            .await
            .map_err(|e| BackendError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        let envelope: ChatResponse =
            response
                .json()
                .await
                .map_err(|e| BackendError::Transport {
                    message: format!("unreadable response (HTTP {}): {}", status.as_u16(), e),
                })?;

        if envelope.success {
            envelope.response.ok_or_else(|| BackendError::Transport {
                message: "success envelope without response text".to_string(),
            })
        } else {
            Err(BackendError::Rejected {
                reason: envelope
                    .error
                    .unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
            })
        }
    }
}

#[async_trait]
impl HealthProbe for HttpChatBackend {
    /// Probe `GET /health`. Anything but a readable `"healthy"` answer is
    /// reported as offline.
    async fn check(&self) -> ConnectionStatus {
        let url = self.endpoint("/health");
        let result = async {
            let response = self.client.get(&url).send().await?;
            response.json::<HealthResponse>().await
        }
        .await;

        match result {
            Ok(health) if health.is_healthy() => ConnectionStatus::Online,
            Ok(health) => {
                debug!("Health endpoint reported {:?}", health.status);
                ConnectionStatus::Offline
            }
            Err(e) => {
                debug!("Health check failed: {}", e);
                ConnectionStatus::Offline
            }
        }
    }
}
