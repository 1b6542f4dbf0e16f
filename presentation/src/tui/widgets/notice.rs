//! Notice widget — stacked transient notifications in the top-right corner

use crate::tui::state::TuiState;
use campus_application::NoticeKind;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

fn kind_color(kind: NoticeKind) -> Color {
    match kind {
        NoticeKind::Info => Color::Blue,
        NoticeKind::Success => Color::Green,
        NoticeKind::Warning => Color::Yellow,
        NoticeKind::Error => Color::Red,
    }
}

pub struct NoticeWidget<'a> {
    state: &'a TuiState,
}

impl<'a> NoticeWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    /// Width and height the stack wants before clamping to the frame.
    pub fn desired_size(state: &TuiState) -> (u16, u16) {
        let widest = state
            .notices
            .iter()
            .map(|n| n.notice.text.chars().count())
            .max()
            .unwrap_or(0);
        let width = (widest as u16).saturating_add(4); // borders + padding
        let height = (state.notices.len() as u16).saturating_add(2);
        (width, height)
    }
}

impl<'a> Widget for NoticeWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .state
            .notices
            .iter()
            .map(|n| {
                Line::from(Span::styled(
                    format!(" {} ", n.notice.text),
                    Style::default().fg(kind_color(n.notice.kind)),
                ))
            })
            .collect();

        // Border follows the newest notice's severity
        let border_color = self
            .state
            .notices
            .last()
            .map(|n| kind_color(n.notice.kind))
            .unwrap_or(Color::Blue);

        let block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(border_color));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
