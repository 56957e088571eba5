//! Shared rendering utilities.
//!
//! Components draw into a [`Frame`], an in-memory buffer of text and ANSI
//! escapes that the renderer prints in one go. Widths are counted in
//! characters, not bytes, so Cyrillic labels line up with ASCII ones.
//!
//! # Example
//!
//! ```rust
//! use zelltable::ui::helpers::{pad_to, Frame};
//!
//! let mut frame = Frame::new();
//! frame.goto(2, 1);
//! frame.push(&pad_to("Имя", 6));
//! assert_eq!(frame.as_str(), "\u{1b}[2;1HИмя   ");
//! ```

use crate::ui::theme::Theme;

/// Buffer of positioned, styled terminal output.
#[derive(Debug, Default)]
pub struct Frame {
    buf: String,
}

impl Frame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor to a 1-indexed row and column.
    pub fn goto(&mut self, row: usize, col: usize) {
        self.buf.push_str(&format!("\u{1b}[{row};{col}H"));
    }

    /// Appends text or an escape sequence.
    pub fn push(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Appends `count` spaces.
    pub fn spaces(&mut self, count: usize) {
        self.buf.extend(std::iter::repeat(' ').take(count));
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Display width of `text`, one cell per character.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Truncates or right-pads `text` to exactly `width` characters.
#[must_use]
pub fn pad_to(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let shown = text_width(&out);
    out.extend(std::iter::repeat(' ').take(width - shown));
    out
}

/// Centers `text` within `width` characters, truncating if it does not fit.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let shown: String = text.chars().take(width).collect();
    let left = (width - text_width(&shown)) / 2;
    pad_to(&format!("{}{shown}", " ".repeat(left)), width)
}

/// Writes `text` with the given character ranges highlighted as search
/// matches.
///
/// `base_style` is the escape sequence in effect for the surrounding cell; it
/// is restored after each highlighted section so the row keeps its colors.
/// Ranges are character indices, end exclusive, and must not overlap.
pub fn push_highlighted(
    frame: &mut Frame,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    base_style: &str,
) {
    if ranges.is_empty() {
        frame.push(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        frame.push(&chars[current_pos..start].iter().collect::<String>());

        frame.push(&Theme::fg(&theme.colors.match_highlight_fg));
        frame.push(&Theme::bg(&theme.colors.match_highlight_bg));
        frame.push(&chars[start..end].iter().collect::<String>());
        frame.push(Theme::reset());
        frame.push(base_style);

        current_pos = end;
    }

    if current_pos < chars.len() {
        frame.push(&chars[current_pos..].iter().collect::<String>());
    }
}
