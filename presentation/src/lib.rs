//! Presentation layer for campus-chat
//!
//! This crate contains the interactive terminal UI and the one-shot
//! console output surface. Both render the event stream coming from the
//! application layer; neither touches the network directly.

pub mod cli;
pub mod console;
pub mod tui;

// Re-export commonly used types
pub use cli::Cli;
pub use console::ConsoleChat;
pub use tui::{TuiApp, TuiOptions};
