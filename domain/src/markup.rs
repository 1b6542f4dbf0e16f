//! Inline message markup
//!
//! Chat messages carry a tiny markdown-like vocabulary: `**bold**`,
//! `*italic*`, `` `code` `` and newlines. [`render_lines`] interprets it into
//! styled segments for the presentation layer. The source string is never
//! altered — the transcript keeps raw text — and the output is plain data,
//! so backend-supplied content cannot smuggle in any styling beyond these
//! four patterns.
//!
//! Passes run per line in a fixed order (bold, italic, code) and only over
//! still-plain segments, so `**` pairs are consumed before `*` can see them.
//! A delimiter without a closing partner on the same line stays literal;
//! pairs never span lines.

use serde::{Deserialize, Serialize};

/// Style of a rendered segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentStyle {
    Plain,
    Bold,
    Italic,
    Code,
}

/// A run of text with a single style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub style: SegmentStyle,
    pub text: String,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            style: SegmentStyle::Plain,
            text: text.into(),
        }
    }

    pub fn styled(style: SegmentStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }
}

/// Render raw message text into display lines of styled segments.
///
/// The outer `Vec` is one entry per source line (newline-to-break); an empty
/// line yields an empty segment list.
pub fn render_lines(text: &str) -> Vec<Vec<Segment>> {
    text.split('\n').map(render_line).collect()
}

fn render_line(line: &str) -> Vec<Segment> {
    let mut segments = if line.is_empty() {
        Vec::new()
    } else {
        vec![Segment::plain(line)]
    };
    segments = apply_delimiter(segments, "**", SegmentStyle::Bold);
    segments = apply_delimiter(segments, "*", SegmentStyle::Italic);
    segments = apply_delimiter(segments, "`", SegmentStyle::Code);
    segments
}

/// Split every still-plain segment on `delim … delim` pairs, styling the
/// enclosed text. Already-styled segments pass through untouched.
fn apply_delimiter(segments: Vec<Segment>, delim: &str, style: SegmentStyle) -> Vec<Segment> {
    let mut out = Vec::with_capacity(segments.len());
    for segment in segments {
        if segment.style != SegmentStyle::Plain {
            out.push(segment);
            continue;
        }
        split_pairs(&segment.text, delim, style, &mut out);
    }
    out
}

fn split_pairs(text: &str, delim: &str, style: SegmentStyle, out: &mut Vec<Segment>) {
    let mut rest = text;
    loop {
        let Some(open) = rest.find(delim) else {
            break;
        };
        let after_open = &rest[open + delim.len()..];
        let Some(close) = after_open.find(delim) else {
            // Unmatched opener: everything from here on is literal
            break;
        };

        if open > 0 {
            out.push(Segment::plain(&rest[..open]));
        }
        out.push(Segment::styled(style, &after_open[..close]));
        rest = &after_open[close + delim.len()..];
    }
    if !rest.is_empty() {
        out.push(Segment::plain(rest));
    }
}
