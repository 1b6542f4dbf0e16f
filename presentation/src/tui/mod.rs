//! TUI (Text User Interface) module for campus-chat
//!
//! This module provides a terminal-based chat interface using ratatui.
//! It renders the transcript, the waiting indicator, connection status
//! and transient notices from the application event stream.

mod app;
mod mode;
mod presenter;
mod state;
mod widgets;

pub use app::TuiApp;
pub use mode::{Action, KeyHandler, Mode};
pub use presenter::TuiPresenter;
pub use state::{ActiveNotice, ConfirmPrompt, TuiOptions, TuiState};
pub use widgets::{
    HeaderWidget, InputWidget, MainLayout, NoticeWidget, StatusBarWidget, TranscriptWidget,
};
