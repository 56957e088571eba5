//! Header component rendering the centered title bar.

use crate::ui::helpers::{center, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title centered across the full width.
///
/// Returns the next available row.
pub fn render_header(frame: &mut Frame, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    frame.goto(row, 1);
    frame.push(Theme::bold());
    frame.push(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        frame.push(&Theme::bg(bg));
    }

    frame.push(&center(&header.title, cols));

    frame.push(Theme::reset());
    row + 1
}
