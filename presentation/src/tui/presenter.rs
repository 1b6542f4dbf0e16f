//! TUI Presenter - Converts Application Events to TUI State
//!
//! This module serves as the adapter between the application layer
//! (which emits [`UiEvent`]s) and the TUI layer (which owns view state).
//! Applying the event stream in order reproduces the controller's
//! transcript exactly; the presenter never invents or reorders content.

use super::state::TuiState;
use campus_application::UiEvent;

/// Applies [`UiEvent`]s to the view state.
pub struct TuiPresenter;

impl TuiPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Fold one event into the state.
    pub fn apply(&self, state: &mut TuiState, event: UiEvent) {
        match event {
            UiEvent::MessageAppended(msg) => state.push_message(msg),
            UiEvent::WaitingStarted => state.waiting = true,
            UiEvent::WaitingEnded => state.waiting = false,
            UiEvent::TranscriptCleared { welcome } => state.reset_transcript(welcome),
            UiEvent::StatusChanged(status) => state.status = status,
            UiEvent::Notice(notice) => state.push_notice(notice),
        }
    }
}

impl Default for TuiPresenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_application::{ConnectionStatus, Notice, NoticeKind};
    use campus_domain::{Message, Sender};

    fn apply_all(state: &mut TuiState, events: Vec<UiEvent>) {
        let presenter = TuiPresenter::new();
        for event in events {
            presenter.apply(state, event);
        }
    }

    #[test]
    fn test_message_appended_grows_transcript() {
        let mut state = TuiState::new();
        apply_all(
            &mut state,
            vec![
                UiEvent::MessageAppended(Message::bot("welcome", "08:00")),
                UiEvent::MessageAppended(Message::user("hi", "08:01")),
            ],
        );

        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages[0].sender, Sender::Bot);
        assert_eq!(state.messages[1].text, "hi");
    }

    #[test]
    fn test_waiting_events_toggle_indicator() {
        let mut state = TuiState::new();
        let presenter = TuiPresenter::new();

        presenter.apply(&mut state, UiEvent::WaitingStarted);
        assert!(state.waiting);

        presenter.apply(&mut state, UiEvent::WaitingEnded);
        assert!(!state.waiting);
    }

    #[test]
    fn test_transcript_cleared_keeps_welcome() {
        let mut state = TuiState::new();
        apply_all(
            &mut state,
            vec![
                UiEvent::MessageAppended(Message::bot("welcome", "08:00")),
                UiEvent::MessageAppended(Message::user("q", "08:01")),
                UiEvent::TranscriptCleared {
                    welcome: Some(Message::bot("welcome", "09:30")),
                },
            ],
        );

        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].timestamp, "09:30");
    }

    #[test]
    fn test_transcript_cleared_without_welcome_empties_view() {
        let mut state = TuiState::new();
        apply_all(
            &mut state,
            vec![
                UiEvent::MessageAppended(Message::user("hi", "08:00")),
                UiEvent::TranscriptCleared { welcome: None },
            ],
        );

        assert!(state.messages.is_empty());
    }

    #[test]
    fn test_status_changed_updates_indicator() {
        let mut state = TuiState::new();
        assert_eq!(state.status, ConnectionStatus::Unknown);

        let presenter = TuiPresenter::new();
        presenter.apply(
            &mut state,
            UiEvent::StatusChanged(ConnectionStatus::Online),
        );
        assert_eq!(state.status, ConnectionStatus::Online);

        presenter.apply(
            &mut state,
            UiEvent::StatusChanged(ConnectionStatus::Offline),
        );
        assert_eq!(state.status, ConnectionStatus::Offline);
    }

    #[test]
    fn test_notice_queued_for_display() {
        let mut state = TuiState::new();
        let presenter = TuiPresenter::new();

        presenter.apply(&mut state, UiEvent::Notice(Notice::error("no backend")));

        assert_eq!(state.notices.len(), 1);
        assert_eq!(state.notices[0].notice.kind, NoticeKind::Error);
        assert_eq!(state.notices[0].notice.text, "no backend");
    }

    #[test]
    fn test_replaying_event_stream_reproduces_exchange() {
        // The event order the controller emits for one exchange
        let mut state = TuiState::new();
        apply_all(
            &mut state,
            vec![
                UiEvent::MessageAppended(Message::bot("welcome", "08:00")),
                UiEvent::MessageAppended(Message::user("library hours?", "08:01")),
                UiEvent::WaitingStarted,
                UiEvent::WaitingEnded,
                UiEvent::MessageAppended(Message::bot("Open until 22:00.", "08:01")),
            ],
        );

        let texts: Vec<_> = state.messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["welcome", "library hours?", "Open until 22:00."]);
        assert!(!state.waiting);
    }
}
