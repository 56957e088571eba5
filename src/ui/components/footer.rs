//! Footer component with keybinding help for the current mode.

use crate::ui::helpers::{center, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

pub fn render_footer(frame: &mut Frame, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    frame.goto(row, 1);
    frame.push(&Theme::fg(&theme.colors.text_dim));
    frame.push(&center(&footer.keybindings, cols));
    frame.push(Theme::reset());
    row + 1
}
