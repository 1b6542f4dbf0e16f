//! TUI widgets — ratatui components for the main layout
//!
//! Layout:
//! ┌── Header (3) ────────────────────────────────────┐
//! ├── Transcript (flex) ─────────────────────────────┤
//! ├── Input (3) ─────────────────────────────────────┤
//! └── StatusBar (1) ─────────────────────────────────┘
//!
//! Notices, the help dialog and the confirm prompt render as overlays
//! on top of this grid.

pub mod header;
pub mod input;
pub mod notice;
pub mod status_bar;
pub mod transcript;

pub use header::HeaderWidget;
pub use input::InputWidget;
pub use notice::NoticeWidget;
pub use status_bar::StatusBarWidget;
pub use transcript::TranscriptWidget;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub header: Rect,
    pub transcript: Rect,
    pub input: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    /// Fixed-height header, input and status bar; the transcript takes the rest.
    pub fn compute(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Fill(1),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: vertical[0],
            transcript: vertical[1],
            input: vertical[2],
            status_bar: vertical[3],
        }
    }

    /// Centered overlay rectangle for the help dialog and confirm prompt
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vert[1])[1]
    }

    /// Overlay anchored to the top-right corner, just below the header.
    ///
    /// The requested size is clamped so the overlay always fits the frame.
    pub fn notice_overlay(area: Rect, width: u16, height: u16) -> Rect {
        let w = width.min(area.width.saturating_sub(2));
        let h = height.min(area.height.saturating_sub(4));
        let x = area.x + area.width.saturating_sub(w + 1);
        let y = area.y + 3;
        Rect::new(x, y, w, h)
    }
}
