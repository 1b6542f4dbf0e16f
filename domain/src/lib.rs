//! Domain layer for campus-chat
//!
//! This crate contains the core entities and pure message-handling logic.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Transcript
//!
//! The conversation is an append-only list of [`Message`]s. Messages are
//! never edited or reordered after they are pushed; the only removal is a
//! full clear, which keeps the welcome message with a fresh timestamp.
//!
//! ## Markup
//!
//! Message text carries a tiny inline vocabulary (`**bold**`, `*italic*`,
//! `` `code` ``, newlines) that [`markup::render_lines`] interprets into
//! styled segments. Raw text is stored as received; interpretation happens
//! only at render time.

pub mod canned;
pub mod markup;
pub mod transcript;
pub mod util;

// Re-export commonly used types
pub use markup::{Segment, SegmentStyle, render_lines};
pub use transcript::{Message, Sender, Transcript};
