//! Table component: column titles and record rows.
//!
//! Columns have fixed widths except the last, which takes what is left.
//!
//! ```text
//! NAME ▲                          DATE          AGE
//! Ann                             09-01-2024    30
//! ```

use crate::app::removal::RowHint;
use crate::app::view::SortOrder;
use crate::ui::helpers::{self, pad_to, text_width, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ColumnHeader, DisplayItem};

/// Renders the column titles with the active sort arrow.
///
/// Returns the next available row.
pub fn render_table_headers(frame: &mut Frame, row: usize, columns: &[ColumnHeader], theme: &Theme, cols: usize) -> usize {
    frame.goto(row, 1);
    frame.push(Theme::bold());

    let mut used = 0;
    for column in columns {
        let width = column.width.unwrap_or_else(|| cols.saturating_sub(used));
        let arrow = match column.sort {
            Some(SortOrder::Ascending) => " ▲",
            Some(SortOrder::Descending) => " ▼",
            None => "",
        };

        frame.push(&Theme::fg(&theme.colors.header_fg));
        frame.push(&column.title);
        frame.push(&Theme::fg(&theme.colors.sort_indicator_fg));
        frame.push(arrow);
        frame.spaces(width.saturating_sub(text_width(&column.title) + text_width(arrow)));
        used += width;
    }

    frame.push(Theme::reset());
    row + 1
}

/// Renders every row, one per line, starting at `row`.
///
/// Returns the row after the last one drawn.
pub fn render_table_rows(
    frame: &mut Frame,
    row: usize,
    items: &[DisplayItem],
    columns: &[ColumnHeader],
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(frame, current_row, item, columns, theme, cols);
    }
    current_row
}

fn render_table_row(
    frame: &mut Frame,
    row: usize,
    item: &DisplayItem,
    columns: &[ColumnHeader],
    theme: &Theme,
    cols: usize,
) -> usize {
    frame.goto(row, 1);

    let mut base_style = if item.is_selected {
        Theme::fg(&theme.colors.selection_fg) + &Theme::bg(&theme.colors.selection_bg)
    } else if item.hint == RowHint::FadingOut {
        Theme::fg(&theme.colors.fading_out_fg)
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    if item.hint == RowHint::FadingOut {
        base_style.push_str(Theme::strikethrough());
    }
    frame.push(&base_style);

    let cells = [
        (&item.name, &item.highlights.name),
        (&item.date, &item.highlights.date),
        (&item.age, &item.highlights.age),
    ];

    let mut used = 0;
    for ((text, ranges), column) in cells.into_iter().zip(columns) {
        let width = column.width.unwrap_or_else(|| cols.saturating_sub(used));
        let shown = pad_to(text, width);
        let text_len = text_width(text).min(width);
        let visible: String = shown.chars().take(text_len).collect();

        helpers::push_highlighted(frame, &visible, ranges, theme, &base_style);
        frame.spaces(width - text_len);
        used += width;
    }

    frame.push(Theme::reset());
    row + 1
}
