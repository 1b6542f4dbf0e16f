//! Chat backend port
//!
//! Defines the interface for sending user messages to the assistant backend.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during a message exchange.
///
/// The two variants deliberately mirror the two user-facing failure modes:
/// the backend answered but refused the message, or the request never
/// produced a usable answer at all.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend replied with a well-formed failure envelope.
    #[error("Backend rejected the message: {reason}")]
    Rejected { reason: String },

    /// The request did not complete: connection refused, timeout, or an
    /// unreadable response.
    #[error("Transport error: {message}")]
    Transport { message: String },
}

impl BackendError {
    /// The canned reply shown in the transcript in place of a real answer.
    pub fn fallback_text(&self) -> &'static str {
        match self {
            Self::Rejected { .. } => "Sorry, I encountered an error. Please try again.",
            Self::Transport { .. } => {
                "Sorry, I'm having trouble connecting. \
                 Please check your internet connection and try again."
            }
        }
    }
}

/// Gateway for message exchange with the assistant backend.
///
/// This port defines how the application layer talks to the chat service.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one user message and return the assistant's reply text.
    async fn send(&self, message: &str) -> Result<String, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_fallback_text() {
        let err = BackendError::Rejected {
            reason: "model unavailable".to_string(),
        };
        assert_eq!(
            err.fallback_text(),
            "Sorry, I encountered an error. Please try again."
        );
    }

    #[test]
    fn test_transport_fallback_mentions_connection() {
        let err = BackendError::Transport {
            message: "connection refused".to_string(),
        };
        assert!(err.fallback_text().contains("trouble connecting"));
    }

    #[test]
    fn test_display_includes_detail() {
        let err = BackendError::Rejected {
            reason: "bad request".to_string(),
        };
        assert!(err.to_string().contains("bad request"));
    }
}
