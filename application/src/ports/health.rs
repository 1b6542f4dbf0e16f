//! Health probe port
//!
//! Defines the interface for checking whether the assistant backend is
//! reachable and reporting healthy.

use async_trait::async_trait;

/// Backend connection status as shown in the status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Backend reachable and reporting healthy
    Online,
    /// Backend unreachable or reporting anything else
    Offline,
    /// No check has completed yet
    Unknown,
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Offline => "Offline",
            Self::Unknown => "Connecting",
        }
    }
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Probe for the backend health endpoint.
///
/// A probe never fails: any transport or protocol problem is reported as
/// [`ConnectionStatus::Offline`]. Adapters log the underlying cause.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn check(&self) -> ConnectionStatus;
}
