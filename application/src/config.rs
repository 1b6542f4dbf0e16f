//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases
//! behave, such as the greeting text and the canned reply delay.

use std::time::Duration;

/// Default greeting pushed into the transcript on startup.
pub const DEFAULT_WELCOME: &str =
    "Hello! I'm your campus assistant. Ask me about courses, facilities, events, or anything else about campus life!";

/// Application behavior configuration.
///
/// Controls runtime behavior of the chat controller: what the opening
/// greeting says and how long canned replies pretend to think.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Greeting text appended as the first bot message.
    pub welcome_text: String,
    /// Simulated typing delay before a canned reply appears.
    pub canned_delay: Duration,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            welcome_text: DEFAULT_WELCOME.to_string(),
            canned_delay: Duration::from_millis(500),
        }
    }
}

impl BehaviorConfig {
    /// Replace the greeting text.
    pub fn with_welcome_text(mut self, text: impl Into<String>) -> Self {
        self.welcome_text = text.into();
        self
    }

    /// Set the canned reply delay in milliseconds.
    pub fn with_canned_delay_ms(mut self, millis: u64) -> Self {
        self.canned_delay = Duration::from_millis(millis);
        self
    }
}
