//! UI event types emitted by ChatController for presentation layer rendering
//!
//! These events form the output port from the application layer to the
//! presentation layer. The presentation layer receives them over a channel
//! and renders them appropriately (TUI transcript view, console printer).
//!
//! The event stream is the only way transcript content reaches the screen,
//! so replaying it in order always reproduces the controller's transcript.

use crate::ports::health::ConnectionStatus;
use campus_domain::Message;

/// Events emitted by ChatController for the presentation layer to render
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// A message was appended to the transcript
    MessageAppended(Message),
    /// A backend exchange started; show the waiting indicator
    WaitingStarted,
    /// The backend exchange settled; hide the waiting indicator
    WaitingEnded,
    /// Transcript was cleared; `welcome` is the retained greeting, if any
    TranscriptCleared { welcome: Option<Message> },
    /// Connection status changed (or was explicitly re-checked)
    StatusChanged(ConnectionStatus),
    /// Transient notification for the notice area
    Notice(Notice),
}

/// Severity of a [`Notice`], used for styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

/// A transient notification message.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Info,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Warning,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Error,
        }
    }
}
