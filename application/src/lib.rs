//! Application layer for campus-chat
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    chat_backend::{BackendError, ChatBackend},
    health::{ConnectionStatus, HealthProbe},
    ui_event::{Notice, NoticeKind, UiEvent},
};
pub use use_cases::chat_controller::{ChatCommand, ChatController};
pub use use_cases::health_monitor::{DEFAULT_HEALTH_INTERVAL, HealthMonitor};
