//! Empty state shown in place of table rows.

use crate::ui::helpers::{center, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the message and its dimmed subtitle, one blank row below `row`.
pub fn render_empty_state(frame: &mut Frame, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    frame.goto(row + 1, 1);
    frame.push(&Theme::fg(&theme.colors.empty_state_fg));
    frame.push(&center(&empty.message, cols));
    frame.push(Theme::reset());

    frame.goto(row + 2, 1);
    frame.push(Theme::dim());
    frame.push(&Theme::fg(&theme.colors.text_dim));
    frame.push(&center(&empty.subtitle, cols));
    frame.push(Theme::reset());
}
