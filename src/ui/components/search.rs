//! Search bar component: a three-line bordered box holding the query.
//!
//! ```text
//!      ┌──────────────────────────┐
//!      │ Search: ann              │
//!      └──────────────────────────┘
//! ```

use crate::ui::helpers::{pad_to, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin on both sides of the box.
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search box starting at `row`.
///
/// Returns the row after the box (always `row + 3`).
pub fn render_search_bar(frame: &mut Frame, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    frame.goto(row, 1);
    frame.spaces(SEARCH_BOX_MARGIN);
    frame.push(&border);
    frame.push(&format!("┌{}┐", "─".repeat(inner_width)));
    frame.push(Theme::reset());

    let search_text = format!(" {}: {}", search.label, search.query);

    frame.goto(row + 1, 1);
    frame.spaces(SEARCH_BOX_MARGIN);
    frame.push(&border);
    frame.push("│");
    frame.push(&Theme::fg(&theme.colors.text_normal));
    frame.push(&pad_to(&search_text, inner_width));
    frame.push(&border);
    frame.push("│");
    frame.push(Theme::reset());

    frame.goto(row + 2, 1);
    frame.spaces(SEARCH_BOX_MARGIN);
    frame.push(&border);
    frame.push(&format!("└{}┘", "─".repeat(inner_width)));
    frame.push(Theme::reset());

    row + 3
}
