//! TUI application state
//!
//! Single source of truth for everything the TUI renders.
//! Updated by TuiPresenter (UiEvent -> state) and by key actions.

use super::mode::Mode;
use campus_application::{ConnectionStatus, DEFAULT_HEALTH_INTERVAL, Notice};
use campus_domain::Message;
use std::time::{Duration, Instant};

/// Presentation-side tuning knobs.
///
/// Values are typically populated from infrastructure config at startup;
/// the defaults match the stock widget behavior.
#[derive(Debug, Clone)]
pub struct TuiOptions {
    /// How long a notice stays on screen.
    pub notice_ttl: Duration,
    /// Whether message bubbles show their HH:MM timestamp.
    pub show_timestamps: bool,
    /// Gap between periodic backend health probes.
    pub health_interval: Duration,
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self {
            notice_ttl: Duration::from_secs(3),
            show_timestamps: true,
            health_interval: DEFAULT_HEALTH_INTERVAL,
        }
    }
}

/// A notice plus the moment it appeared, for expiry.
#[derive(Debug, Clone)]
pub struct ActiveNotice {
    pub notice: Notice,
    created: Instant,
}

/// Pending yes/no prompt rendered as a modal.
#[derive(Debug, Clone)]
pub struct ConfirmPrompt {
    pub message: String,
}

/// Central TUI state — owned by the TuiApp select! loop
pub struct TuiState {
    // -- Mode --
    pub mode: Mode,

    // -- Input buffer (Insert mode) --
    pub input: String,
    pub cursor_pos: usize,

    // -- Command buffer (for : mode) --
    pub command_input: String,
    pub command_cursor: usize,

    // -- Transcript mirror (fed by the event stream) --
    pub messages: Vec<Message>,
    pub waiting: bool,

    // -- Connection --
    pub status: ConnectionStatus,

    // -- Notices (stacked toasts, oldest first) --
    pub notices: Vec<ActiveNotice>,

    // -- Scrolling (offset 0 = pinned to the newest message) --
    pub scroll_offset: usize,
    pub auto_scroll: bool,

    // -- Overlays --
    pub show_help: bool,
    pub confirm: Option<ConfirmPrompt>,

    // -- Display --
    pub show_timestamps: bool,
    /// Advances on every loop tick; drives the waiting animation.
    pub tick: u64,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            input: String::new(),
            cursor_pos: 0,
            command_input: String::new(),
            command_cursor: 0,
            messages: Vec::new(),
            waiting: false,
            status: ConnectionStatus::Unknown,
            notices: Vec::new(),
            scroll_offset: 0,
            auto_scroll: true,
            show_help: false,
            confirm: None,
            show_timestamps: true,
            tick: 0,
            should_quit: false,
        }
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Input editing --

    pub fn insert_char(&mut self, c: char) {
        let cursor = self.active_cursor();
        self.active_input_mut().insert(cursor, c);
        *self.active_cursor_mut() += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        let cursor = self.active_cursor();
        if cursor > 0 {
            let input = self.active_input_mut();
            let prev_char_len = input[..cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            input.remove(cursor - prev_char_len);
            *self.active_cursor_mut() -= prev_char_len;
        }
    }

    pub fn cursor_left(&mut self) {
        let cursor = self.active_cursor();
        if cursor > 0 {
            let input = self.active_input();
            let prev_char_len = input[..cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            *self.active_cursor_mut() -= prev_char_len;
        }
    }

    pub fn cursor_right(&mut self) {
        let cursor = self.active_cursor();
        let len = self.active_input().len();
        if cursor < len {
            let input = self.active_input();
            let next_char_len = input[cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            *self.active_cursor_mut() += next_char_len;
        }
    }

    pub fn cursor_start(&mut self) {
        *self.active_cursor_mut() = 0;
    }

    pub fn cursor_end(&mut self) {
        let len = self.active_input().len();
        *self.active_cursor_mut() = len;
    }

    /// Take the current input buffer contents and clear it
    pub fn take_input(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.input)
    }

    /// Take the command buffer contents and clear it
    pub fn take_command(&mut self) -> String {
        self.command_cursor = 0;
        std::mem::take(&mut self.command_input)
    }

    // -- Active buffer helpers (routes to input or command based on mode) --

    fn active_input(&self) -> &str {
        match self.mode {
            Mode::Command => &self.command_input,
            _ => &self.input,
        }
    }

    fn active_input_mut(&mut self) -> &mut String {
        match self.mode {
            Mode::Command => &mut self.command_input,
            _ => &mut self.input,
        }
    }

    fn active_cursor(&self) -> usize {
        match self.mode {
            Mode::Command => self.command_cursor,
            _ => self.cursor_pos,
        }
    }

    fn active_cursor_mut(&mut self) -> &mut usize {
        match self.mode {
            Mode::Command => &mut self.command_cursor,
            _ => &mut self.cursor_pos,
        }
    }

    // -- Transcript mirror --

    pub fn push_message(&mut self, msg: Message) {
        self.messages.push(msg);
        if self.auto_scroll {
            self.scroll_offset = 0;
        }
    }

    /// Replace the transcript with just the retained welcome, if any.
    pub fn reset_transcript(&mut self, welcome: Option<Message>) {
        self.messages.clear();
        if let Some(msg) = welcome {
            self.messages.push(msg);
        }
        self.scroll_offset = 0;
        self.auto_scroll = true;
    }

    // -- Scrolling --

    pub fn scroll_up(&mut self) {
        self.auto_scroll = false;
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_offset > 0 {
            self.scroll_offset = self.scroll_offset.saturating_sub(1);
        } else {
            self.auto_scroll = true;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.auto_scroll = false;
        self.scroll_offset = usize::MAX; // Will be clamped during render
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
        self.auto_scroll = true;
    }

    // -- Notices --

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push(ActiveNotice {
            notice,
            created: Instant::now(),
        });
    }

    /// Drop notices older than the given duration
    pub fn expire_notices(&mut self, max_age: Duration) {
        self.notices.retain(|n| n.created.elapsed() <= max_age);
    }
}
