//! Shared rendering utilities and helpers.
//!
//! Components do not print directly. They draw into a [`Frame`], a buffer of
//! ANSI-styled output that the renderer flushes to stdout once per render. This
//! keeps every component testable against plain strings.
//!
//! # Features
//!
//! - **Cursor Positioning**: 1-indexed `move_to` matching the terminal's coordinates
//! - **Match Highlighting**: Renders text with highlighted character ranges
//! - **UTF-8 Safe**: Widths and ranges operate on characters, not bytes
//!
//! # Example
//!
//! ```rust
//! use fruitstand::ui::helpers::{render_highlighted_text, Frame};
//! use fruitstand::ui::Theme;
//!
//! let theme = Theme::default();
//! let mut frame = Frame::default();
//! render_highlighted_text(&mut frame, "Pineapple", &[(4, 9)], &theme, false);
//! assert!(frame.plain_text().contains("Pineapple"));
//! ```

use crate::ui::theme::Theme;
use std::fmt::Write;

/// Buffer of ANSI-styled output for one render.
#[derive(Debug, Default, Clone)]
pub struct Frame {
    buf: String,
}

impl Frame {
    /// Positions the cursor at a 1-indexed row and column.
    pub fn move_to(&mut self, row: usize, col: usize) {
        let _ = write!(self.buf, "\u{1b}[{row};{col}H");
    }

    /// Appends raw text or escape sequences.
    pub fn push(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Appends `count` spaces.
    pub fn pad(&mut self, count: usize) {
        self.buf.extend(std::iter::repeat(' ').take(count));
    }

    /// Appends `text` and pads it with spaces to `width` characters.
    ///
    /// Longer text is written unchanged.
    pub fn push_padded(&mut self, text: &str, width: usize) {
        self.push(text);
        self.pad(width.saturating_sub(text.chars().count()));
    }

    /// Appends `text` centered in `width` characters.
    pub fn push_centered(&mut self, text: &str, width: usize) {
        let len = text.chars().count().min(width);
        let padding = width.saturating_sub(len) / 2;
        self.pad(padding);
        self.push(text);
        self.pad(width.saturating_sub(padding + len));
    }

    /// Raw buffer including escape sequences.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Buffer with every escape sequence removed.
    #[must_use]
    pub fn plain_text(&self) -> String {
        strip_ansi(&self.buf)
    }
}

/// Removes every ANSI escape sequence, keeping the printable text.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    strip_ansi_escapes::strip_str(text)
}

/// Renders text with highlighted character ranges for search matches.
///
/// Ranges are `(start, end)` character indices, end exclusive. When
/// `is_selected` is `true` the text is written plain so the selection colors of
/// the row stay intact.
pub fn render_highlighted_text(
    frame: &mut Frame,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        frame.push(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            frame.push(&chars[current_pos..start].iter().collect::<String>());
        }

        frame.push(&Theme::fg(&theme.colors.match_highlight_fg));
        frame.push(&Theme::bg(&theme.colors.match_highlight_bg));
        frame.push(&chars[start..end].iter().collect::<String>());
        frame.push(Theme::reset());
        frame.push(&Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        frame.push(&chars[current_pos..].iter().collect::<String>());
    }
}
