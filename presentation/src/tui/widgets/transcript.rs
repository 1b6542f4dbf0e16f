//! Transcript widget — message history with inline markup and the
//! waiting indicator

use crate::tui::state::TuiState;
use campus_domain::{Sender, SegmentStyle, render_lines};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct TranscriptWidget<'a> {
    state: &'a TuiState,
}

impl<'a> TranscriptWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

fn sender_color(sender: Sender) -> Color {
    match sender {
        Sender::User => Color::Cyan,
        Sender::Bot => Color::Green,
    }
}

fn segment_style(style: SegmentStyle) -> Style {
    match style {
        SegmentStyle::Plain => Style::default(),
        SegmentStyle::Bold => Style::default().add_modifier(Modifier::BOLD),
        SegmentStyle::Italic => Style::default().add_modifier(Modifier::ITALIC),
        SegmentStyle::Code => Style::default().fg(Color::Yellow),
    }
}

/// Build the full list of transcript lines: one heading per message, its
/// body rendered through the inline markup pass, and the animated waiting
/// indicator at the bottom while an exchange is in flight.
fn transcript_lines(state: &TuiState) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = Vec::new();

    for msg in &state.messages {
        let role_style = Style::default()
            .fg(sender_color(msg.sender))
            .add_modifier(Modifier::BOLD);

        let mut heading = vec![Span::styled(format!("{}:", msg.sender.label()), role_style)];
        if state.show_timestamps {
            heading.push(Span::styled(
                format!("  {}", msg.timestamp),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(heading));

        for segments in render_lines(&msg.text) {
            let mut spans = vec![Span::raw("  ")];
            for segment in segments {
                spans.push(Span::styled(segment.text, segment_style(segment.style)));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(""));
    }

    if state.waiting {
        let dots = "●".repeat((state.tick % 3) as usize + 1);
        lines.push(Line::from(Span::styled(
            format!("  {dots}"),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    lines
}

impl<'a> Widget for TranscriptWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from(transcript_lines(self.state));
        let visible_height = area.height.saturating_sub(2); // borders
        let content_width = area.width.saturating_sub(2); // borders

        // Use Paragraph's own line_count() which uses WordWrapper internally,
        // matching the exact wrapping algorithm used during rendering.
        let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
        let total_lines = paragraph.line_count(content_width) as u16;

        // Calculate scroll: scroll_offset=0 means "show bottom"
        let scroll = if total_lines > visible_height {
            let max_scroll = total_lines - visible_height;
            let offset = (self.state.scroll_offset as u16).min(max_scroll);
            max_scroll - offset
        } else {
            0
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Transcript ")
            .style(Style::default().fg(Color::White));

        paragraph.block(block).scroll((scroll, 0)).render(area, buf);
    }
}
