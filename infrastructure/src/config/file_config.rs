//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; accessor methods apply fallbacks and
//! clamps so the rest of the application never sees unusable values.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend endpoint settings
    pub backend: FileBackendConfig,
    /// Health polling settings
    pub health: FileHealthConfig,
    /// Conversation settings
    pub chat: FileChatConfig,
    /// Presentation settings
    pub ui: FileUiConfig,
}

impl FileConfig {
    /// Validate the configuration, returning human-readable warnings.
    ///
    /// Nothing here is fatal: every reported problem has a fallback that
    /// the accessor methods apply.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let url = self.backend.base_url.trim();
        if url.is_empty() {
            warnings.push(format!(
                "backend.base_url is empty, using {}",
                FileBackendConfig::DEFAULT_BASE_URL
            ));
        } else if !url.starts_with("http://") && !url.starts_with("https://") {
            warnings.push(format!(
                "backend.base_url '{}' has no http(s) scheme, requests will fail",
                url
            ));
        }

        if self.health.interval_secs == 0 {
            warnings.push("health.interval_secs: 0 is too small, using 1".to_string());
        }

        if self.ui.notice_secs == 0 {
            warnings.push("ui.notice_secs: 0 is too small, using 1".to_string());
        }

        if let Some(welcome) = &self.chat.welcome
            && welcome.trim().is_empty()
        {
            warnings.push("chat.welcome is blank, using the built-in greeting".to_string());
        }

        warnings
    }
}

/// Backend endpoint configuration from TOML (`[backend]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Base URL of the chat backend
    pub base_url: String,
}

impl FileBackendConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:5000";

    /// Base URL with the empty-string fallback applied.
    pub fn base_url(&self) -> &str {
        let url = self.base_url.trim();
        if url.is_empty() {
            Self::DEFAULT_BASE_URL
        } else {
            url
        }
    }
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Health polling configuration from TOML (`[health]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHealthConfig {
    /// Seconds between backend health probes
    pub interval_secs: u64,
}

impl FileHealthConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }
}

impl Default for FileHealthConfig {
    fn default() -> Self {
        Self { interval_secs: 30 }
    }
}

/// Conversation configuration from TOML (`[chat]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Override for the greeting message
    pub welcome: Option<String>,
    /// Simulated typing delay for canned replies, in milliseconds
    pub canned_delay_ms: u64,
}

impl FileChatConfig {
    /// Greeting override, ignoring blank strings.
    pub fn welcome(&self) -> Option<&str> {
        self.welcome
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn canned_delay(&self) -> Duration {
        Duration::from_millis(self.canned_delay_ms)
    }
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            welcome: None,
            canned_delay_ms: 500,
        }
    }
}

/// Presentation configuration from TOML (`[ui]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileUiConfig {
    /// Seconds a notice stays on screen
    pub notice_secs: u64,
    /// Show HH:MM timestamps next to messages
    pub show_timestamps: bool,
}

impl FileUiConfig {
    pub fn notice_duration(&self) -> Duration {
        Duration::from_secs(self.notice_secs.max(1))
    }
}

impl Default for FileUiConfig {
    fn default() -> Self {
        Self {
            notice_secs: 3,
            show_timestamps: true,
        }
    }
}
