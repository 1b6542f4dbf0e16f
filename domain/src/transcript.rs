//! Transcript domain entities

use serde::{Deserialize, Serialize};

/// Who authored a message in the transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Bot => "Assistant",
        }
    }
}

/// A single chat message (Entity)
///
/// `text` keeps the raw, untransformed content; inline markup is only
/// interpreted at render time. `timestamp` is pre-formatted for display
/// (`HH:MM`) and carries no ordering semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub timestamp: String,
}

impl Message {
    pub fn user(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            timestamp: timestamp.into(),
        }
    }

    pub fn bot(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// Ordered, append-only sequence of chat messages (Entity)
///
/// Holds the canonical conversation history for one session. Messages are
/// never reordered or edited; the only removal is [`clear_retaining_welcome`],
/// which keeps the very first entry.
///
/// [`clear_retaining_welcome`]: Transcript::clear_retaining_welcome
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Drop everything except the very first (welcome) message.
    ///
    /// The retained message is rebuilt with `fresh_timestamp` so the welcome
    /// bubble shows the clear time rather than the session start. Returns the
    /// retained message, or `None` when the transcript was already empty.
    pub fn clear_retaining_welcome(&mut self, fresh_timestamp: impl Into<String>) -> Option<&Message> {
        let first = self.messages.first()?;
        let welcome = Message {
            sender: first.sender,
            text: first.text.clone(),
            timestamp: fresh_timestamp.into(),
        };
        self.messages.clear();
        self.messages.push(welcome);
        self.messages.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let msg = Message::user("hello", "09:15");
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.text, "hello");
        assert_eq!(msg.timestamp, "09:15");

        let msg = Message::bot("hi there", "09:16");
        assert_eq!(msg.sender, Sender::Bot);
    }

    #[test]
    fn test_sender_labels() {
        assert_eq!(Sender::User.label(), "You");
        assert_eq!(Sender::Bot.label(), "Assistant");
    }

    #[test]
    fn test_push_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.push(Message::bot("welcome", "08:00"));
        transcript.push(Message::user("first", "08:01"));
        transcript.push(Message::user("second", "08:02"));

        let texts: Vec<_> = transcript.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["welcome", "first", "second"]);
        assert_eq!(transcript.len(), 3);
    }

    #[test]
    fn test_clear_retains_welcome_with_fresh_timestamp() {
        let mut transcript = Transcript::new();
        transcript.push(Message::bot("welcome", "08:00"));
        transcript.push(Message::user("question", "08:05"));
        transcript.push(Message::bot("answer", "08:05"));

        let retained = transcript.clear_retaining_welcome("12:30").unwrap();
        assert_eq!(retained.text, "welcome");
        assert_eq!(retained.timestamp, "12:30");
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_clear_empty_transcript_is_noop() {
        let mut transcript = Transcript::new();
        assert!(transcript.clear_retaining_welcome("12:30").is_none());
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_clear_twice_keeps_single_welcome() {
        let mut transcript = Transcript::new();
        transcript.push(Message::bot("welcome", "08:00"));
        transcript.push(Message::user("hi", "08:01"));

        transcript.clear_retaining_welcome("09:00");
        transcript.clear_retaining_welcome("10:00");

        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0].timestamp, "10:00");
    }
}
