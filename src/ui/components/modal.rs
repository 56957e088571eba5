//! Create/edit modal drawn over the table.
//!
//! ```text
//! ┌─ Add record ─────────────────────────┐
//! │                                      │
//! │ › NAME                               │
//! │   Ann                                │
//! │                                      │
//! │   DATE                               │
//! │   DD-MM-YYYY                         │
//! │   Use the DD-MM-YYYY format          │
//! │ ...                                  │
//! │ Enter: Save  Esc: Cancel             │
//! └──────────────────────────────────────┘
//! ```

use super::{overlay_geometry, render_box_bottom, render_box_line, render_box_top};
use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ModalInfo;

const MODAL_WIDTH: usize = 48;

/// Top border, blank line, actions line, bottom border.
const CHROME_ROWS: usize = 4;

/// Label, value, and error line for each field.
const ROWS_PER_FIELD: usize = 3;

/// Renders the modal centered in the pane.
pub fn render_modal(frame: &mut Frame, modal: &ModalInfo, theme: &Theme, cols: usize, rows: usize) {
    let height = CHROME_ROWS + ROWS_PER_FIELD * modal.fields.len();
    let (top, left, inner) = overlay_geometry(MODAL_WIDTH, height, cols, rows);
    let border = Theme::fg(&theme.colors.modal_border);
    let normal = Theme::fg(&theme.colors.text_normal);

    let mut row = render_box_top(frame, top, left, inner, &modal.title, &border);
    row = render_box_line(frame, row, left, inner, &border, &normal, "");

    for field in &modal.fields {
        let (marker, label_style) = if field.is_focused {
            ("› ", Theme::bold().to_string() + &Theme::fg(&theme.colors.input_focus_fg))
        } else {
            ("  ", Theme::fg(&theme.colors.text_dim))
        };
        row = render_box_line(
            frame,
            row,
            left,
            inner,
            &border,
            &label_style,
            &format!(" {marker}{}", field.label),
        );

        let value_line = if field.value.is_empty() {
            (Theme::dim().to_string() + &Theme::fg(&theme.colors.text_dim), &field.placeholder)
        } else {
            (normal.clone(), &field.value)
        };
        row = render_box_line(
            frame,
            row,
            left,
            inner,
            &border,
            &value_line.0,
            &format!("   {}", value_line.1),
        );

        let error = field.error.as_deref().unwrap_or_default();
        row = render_box_line(
            frame,
            row,
            left,
            inner,
            &border,
            &Theme::fg(&theme.colors.error_fg),
            &format!("   {error}"),
        );
    }

    row = render_box_line(
        frame,
        row,
        left,
        inner,
        &border,
        &Theme::fg(&theme.colors.text_dim),
        &format!(" {}", modal.actions),
    );
    render_box_bottom(frame, row, left, inner, &border);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::FormFieldInfo;

    fn field(label: &str, value: &str, error: Option<&str>) -> FormFieldInfo {
        FormFieldInfo {
            label: label.into(),
            value: value.into(),
            placeholder: "DD-MM-YYYY".into(),
            is_focused: label == "NAME",
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn shows_values_placeholders_and_errors() {
        let modal = ModalInfo {
            title: "Add record".into(),
            fields: vec![
                field("NAME", "Ann", None),
                field("DATE", "", Some("Select a date")),
            ],
            actions: "Enter: Save  Esc: Cancel".into(),
        };
        let theme = Theme::default();
        let mut frame = Frame::new();
        render_modal(&mut frame, &modal, &theme, 80, 24);

        let out = frame.as_str();
        assert!(out.contains("Add record"));
        assert!(out.contains("› NAME"));
        assert!(out.contains("   Ann"));
        assert!(out.contains("   DD-MM-YYYY"));
        assert!(out.contains("   Select a date"));
        assert!(out.contains(&Theme::fg(&theme.colors.error_fg)));
        assert!(out.contains("Enter: Save"));
    }
}
