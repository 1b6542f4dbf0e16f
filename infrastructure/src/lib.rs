//! Infrastructure layer for campus-chat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod backend;
pub mod config;

// Re-export commonly used types
pub use backend::http::HttpChatBackend;
pub use config::{ConfigLoader, FileConfig};
