//! Header widget — assistant title and connection indicator

use crate::tui::state::TuiState;
use campus_application::ConnectionStatus;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

/// Indicator color for a connection status
pub fn status_color(status: ConnectionStatus) -> Color {
    match status {
        ConnectionStatus::Online => Color::Green,
        ConnectionStatus::Offline => Color::Red,
        ConnectionStatus::Unknown => Color::Yellow,
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let status = self.state.status;

        let line = Line::from(vec![
            Span::styled(
                "Campus Assistant",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled("● ", Style::default().fg(status_color(status))),
            Span::styled(status.label(), Style::default().fg(Color::White)),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Campus Chat ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(line).block(block).render(area, buf);
    }
}
