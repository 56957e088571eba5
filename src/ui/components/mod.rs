//! Composable UI component renderers.
//!
//! Each component draws one part of the interface into a [`Frame`] and
//! returns the next free row, so the layout reads top to bottom.
//!
//! # Components
//!
//! - [`header`]: Title bar with visible/total counts
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search input box
//! - [`table`]: Column titles and record rows
//! - [`empty`]: Message shown when no row is visible
//! - [`modal`]: Create/edit form overlay
//! - [`prompt`]: Delete confirmation overlay
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines, search mode only]
//! [Column titles]
//! [Rows or empty state]
//! [Border]
//! [Footer]
//! ```
//!
//! The modal and the prompt are drawn last, centered over the table.

mod empty;
mod footer;
mod header;
mod modal;
mod prompt;
mod search;
mod table;

use crate::ui::helpers::{pad_to, text_width, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use modal::render_modal;
use prompt::render_prompt;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(frame: &mut Frame, row: usize, color: &str, cols: usize) -> usize {
    frame.goto(row, 1);
    frame.push(&Theme::fg(color));
    frame.push(&"─".repeat(cols));
    frame.push(Theme::reset());
    row + 1
}

/// Renders the full screen for a view model.
///
/// # Line Accounting
///
/// Reserves 6 lines for chrome in normal mode (blank, header, 2 borders,
/// column titles, footer) and 3 more for the search box in search mode.
pub fn render_layout(frame: &mut Frame, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(frame, current_row, &vm.header, theme, cols);
    current_row = render_border(frame, current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(frame, current_row, search, theme, cols);
    }
    current_row = render_table_headers(frame, current_row, &vm.columns, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(frame, current_row, empty, theme, cols);
    } else {
        render_table_rows(frame, current_row, &vm.display_items, &vm.columns, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(frame, border_row, &theme.colors.border, cols);
    render_footer(frame, footer_start, &vm.footer, theme, cols);

    if let Some(modal) = &vm.modal {
        render_modal(frame, modal, theme, cols, rows);
    }
    if let Some(prompt) = &vm.prompt {
        render_prompt(frame, prompt, theme, cols, rows);
    }
}

/// Places a centered overlay box.
///
/// Returns `(top_row, left_col, inner_width)`; the box is narrowed to fit
/// small panes.
fn overlay_geometry(width: usize, height: usize, cols: usize, rows: usize) -> (usize, usize, usize) {
    let box_width = width.min(cols.saturating_sub(2)).max(4);
    let left = cols.saturating_sub(box_width) / 2 + 1;
    let top = rows.saturating_sub(height) / 2 + 1;
    (top, left, box_width - 2)
}

fn render_box_top(frame: &mut Frame, row: usize, left: usize, inner: usize, title: &str, border: &str) -> usize {
    frame.goto(row, left);
    frame.push(border);
    if title.is_empty() {
        frame.push(&format!("┌{}┐", "─".repeat(inner)));
    } else {
        let title: String = title.chars().take(inner.saturating_sub(4)).collect();
        let rest = inner.saturating_sub(text_width(&title) + 3);
        frame.push(&format!("┌─ {}{title}{border} {}┐", Theme::bold(), "─".repeat(rest)));
    }
    frame.push(Theme::reset());
    row + 1
}

fn render_box_line(
    frame: &mut Frame,
    row: usize,
    left: usize,
    inner: usize,
    border: &str,
    style: &str,
    text: &str,
) -> usize {
    frame.goto(row, left);
    frame.push(border);
    frame.push("│");
    frame.push(Theme::reset());
    frame.push(style);
    frame.push(&pad_to(text, inner));
    frame.push(Theme::reset());
    frame.push(border);
    frame.push("│");
    frame.push(Theme::reset());
    row + 1
}

fn render_box_bottom(frame: &mut Frame, row: usize, left: usize, inner: usize, border: &str) -> usize {
    frame.goto(row, left);
    frame.push(border);
    frame.push(&format!("└{}┘", "─".repeat(inner)));
    frame.push(Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_is_centered_and_shrinks_to_fit() {
        assert_eq!(overlay_geometry(40, 10, 80, 24), (8, 21, 38));
        assert_eq!(overlay_geometry(40, 10, 20, 6), (1, 2, 16));
    }

    #[test]
    fn box_lines_pad_to_inner_width() {
        let mut frame = Frame::new();
        let next = render_box_line(&mut frame, 3, 5, 6, "", "", "ab");
        assert_eq!(next, 4);
        assert!(frame.as_str().starts_with("\u{1b}[3;5H│"));
        assert!(frame.as_str().contains("ab    "));
    }
}
