//! Wire types for the chat backend HTTP API
//!
//! The backend speaks a small JSON protocol: `POST /chat` takes a message
//! and answers with a success/error envelope, `GET /health` reports a
//! status string. These structs mirror that wire format exactly.

use serde::{Deserialize, Serialize};

/// Request body for `POST /chat`.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Response envelope from `POST /chat`.
///
/// Exactly one of `response` (when `success`) or `error` (when not) is
/// expected, but the adapter tolerates either field missing.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response body from `GET /health`.
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_serializes_message_field() {
        let body = serde_json::to_value(ChatRequest { message: "hi there" }).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "hi there" }));
    }

    #[test]
    fn test_success_envelope() {
        let envelope: ChatResponse =
            serde_json::from_str(r#"{"success": true, "response": "Hello!"}"#).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.response.as_deref(), Some("Hello!"));
        assert!(envelope.error.is_none());
    }

    #[test]
    fn test_failure_envelope() {
        let envelope: ChatResponse =
            serde_json::from_str(r#"{"success": false, "error": "model unavailable"}"#).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.error.as_deref(), Some("model unavailable"));
    }

    #[test]
    fn test_missing_fields_tolerated() {
        let envelope: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(!envelope.success);
        assert!(envelope.response.is_none());
        assert!(envelope.error.is_none());
    }

    #[test]
    fn test_health_status() {
        let health: HealthResponse = serde_json::from_str(r#"{"status": "healthy"}"#).unwrap();
        assert!(health.is_healthy());

        let health: HealthResponse = serde_json::from_str(r#"{"status": "degraded"}"#).unwrap();
        assert!(!health.is_healthy());

        let health: HealthResponse = serde_json::from_str("{}").unwrap();
        assert!(!health.is_healthy());
    }
}
