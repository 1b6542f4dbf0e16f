//! Input widget — single-line text entry with mode-aware prompt
//!
//! Insert mode edits the message buffer behind a "> " prompt; Command
//! mode edits the command buffer behind ":". Normal and Confirm modes
//! show the message buffer dimmed, without a cursor.

use crate::tui::mode::Mode;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct InputWidget<'a> {
    state: &'a TuiState,
}

impl<'a> InputWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for InputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (prompt, text, cursor_pos, color, active) = match self.state.mode {
            Mode::Insert => (
                "> ",
                self.state.input.as_str(),
                self.state.cursor_pos,
                Color::Green,
                true,
            ),
            Mode::Command => (
                ":",
                self.state.command_input.as_str(),
                self.state.command_cursor,
                Color::Yellow,
                true,
            ),
            Mode::Normal | Mode::Confirm => (
                "> ",
                self.state.input.as_str(),
                self.state.cursor_pos,
                Color::DarkGray,
                false,
            ),
        };

        let line = if active {
            build_active_line(prompt, text, cursor_pos, color)
        } else {
            build_inactive_line(prompt, text, color)
        };

        let border_style = if active {
            Style::default().fg(color)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Input ")
            .style(border_style);

        // Scroll horizontally so the cursor column stays visible
        let inner_width = area.width.saturating_sub(2) as usize;
        let cursor_col = prompt.chars().count() + text[..cursor_pos.min(text.len())].chars().count();
        let x_scroll = if active && cursor_col + 1 > inner_width {
            (cursor_col + 1 - inner_width) as u16
        } else {
            0
        };

        Paragraph::new(line)
            .block(block)
            .scroll((0, x_scroll))
            .render(area, buf);
    }
}

/// Build the line for active (Insert/Command) mode with a block cursor
fn build_active_line(prompt: &str, text: &str, cursor_pos: usize, color: Color) -> Line<'static> {
    let prompt_span = Span::styled(
        prompt.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    );
    let cursor_style = Style::default().fg(Color::Black).bg(color);

    let pos = cursor_pos.min(text.len());
    let before = &text[..pos];
    let after = &text[pos..];

    let mut spans = vec![prompt_span, Span::raw(before.to_string())];

    if after.is_empty() {
        // Cursor at end — show block cursor on space
        spans.push(Span::styled(" ", cursor_style));
    } else {
        let ch_len = after.chars().next().map(char::len_utf8).unwrap_or(1);
        spans.push(Span::styled(after[..ch_len].to_string(), cursor_style));
        if ch_len < after.len() {
            spans.push(Span::raw(after[ch_len..].to_string()));
        }
    }

    Line::from(spans)
}

/// Build the line for inactive (Normal/Confirm) mode — no cursor
fn build_inactive_line(prompt: &str, text: &str, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            prompt.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(text.to_string(), Style::default().fg(color)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_cursor_at_end_renders_block_on_space() {
        let line = build_active_line("> ", "hello", 5, Color::Green);
        // prompt, "hello", block cursor
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[2].content.as_ref(), " ");
        assert_eq!(line.spans[2].style.bg, Some(Color::Green));
    }

    #[test]
    fn test_cursor_mid_text_highlights_character() {
        let line = build_active_line("> ", "hello", 1, Color::Green);
        assert_eq!(line.spans[1].content.as_ref(), "h");
        assert_eq!(line.spans[2].content.as_ref(), "e");
        assert_eq!(line.spans[2].style.bg, Some(Color::Green));
        assert_eq!(line.spans[3].content.as_ref(), "llo");
        assert_eq!(line_text(&line), "> hello");
    }

    #[test]
    fn test_cursor_on_multibyte_character() {
        // "é" is 2 bytes
        let line = build_active_line("> ", "héllo", 1, Color::Green);
        assert_eq!(line.spans[2].content.as_ref(), "é");
        assert_eq!(line.spans[3].content.as_ref(), "llo");
    }

    #[test]
    fn test_inactive_line_has_no_cursor() {
        let line = build_inactive_line("> ", "draft", Color::DarkGray);
        assert_eq!(line.spans.len(), 2);
        assert!(line.spans.iter().all(|s| s.style.bg.is_none()));
        assert_eq!(line_text(&line), "> draft");
    }

    #[test]
    fn test_command_prompt_renders_colon() {
        let line = build_active_line(":", "clear", 5, Color::Yellow);
        assert_eq!(line_text(&line), ":clear ");
        assert_eq!(line.spans[0].style.fg, Some(Color::Yellow));
    }
}
