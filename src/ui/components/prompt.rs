//! Delete confirmation prompt.

use super::{overlay_geometry, render_box_bottom, render_box_line, render_box_top};
use crate::app::modes::PromptChoice;
use crate::ui::helpers::{center, text_width, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PromptInfo;

const PROMPT_WIDTH: usize = 44;
const PROMPT_HEIGHT: usize = 6;

/// Renders the prompt centered in the pane, with the highlighted answer in
/// selection colors.
pub fn render_prompt(frame: &mut Frame, prompt: &PromptInfo, theme: &Theme, cols: usize, rows: usize) {
    let (top, left, inner) = overlay_geometry(PROMPT_WIDTH, PROMPT_HEIGHT, cols, rows);
    let border = Theme::fg(&theme.colors.modal_border);
    let normal = Theme::fg(&theme.colors.text_normal);

    let mut row = render_box_top(frame, top, left, inner, "", &border);
    row = render_box_line(frame, row, left, inner, &border, &normal, &center(&prompt.message, inner));
    row = render_box_line(
        frame,
        row,
        left,
        inner,
        &border,
        &(Theme::bold().to_string() + &normal),
        &center(&format!("\"{}\"", prompt.subject), inner),
    );
    row = render_box_line(frame, row, left, inner, &border, &normal, "");

    let yes = format!("[ {} ]", prompt.yes);
    let no = format!("[ {} ]", prompt.no);
    let buttons_width = text_width(&yes) + 3 + text_width(&no);
    let pad = inner.saturating_sub(buttons_width) / 2;

    let button = |label: &str, chosen: bool| {
        if chosen {
            format!(
                "{}{}{label}{}{normal}",
                Theme::fg(&theme.colors.selection_fg),
                Theme::bg(&theme.colors.selection_bg),
                Theme::reset()
            )
        } else {
            label.to_string()
        }
    };

    frame.goto(row, left);
    frame.push(&border);
    frame.push("│");
    frame.push(&normal);
    frame.spaces(pad);
    frame.push(&button(&yes, prompt.choice == PromptChoice::Yes));
    frame.spaces(3);
    frame.push(&button(&no, prompt.choice == PromptChoice::No));
    frame.spaces(inner.saturating_sub(pad + buttons_width));
    frame.push(&border);
    frame.push("│");
    frame.push(Theme::reset());

    render_box_bottom(frame, row + 1, left, inner, &border);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(choice: PromptChoice) -> PromptInfo {
        PromptInfo {
            message: "Are you sure you want to delete?".into(),
            subject: "Ann".into(),
            yes: "Yes".into(),
            no: "No".into(),
            choice,
        }
    }

    #[test]
    fn highlights_only_the_chosen_answer() {
        let theme = Theme::default();
        let selected = Theme::bg(&theme.colors.selection_bg);

        let mut frame = Frame::new();
        render_prompt(&mut frame, &prompt(PromptChoice::No), &theme, 80, 24);
        let out = frame.as_str();
        assert!(out.contains("\"Ann\""));
        assert!(out.contains(&format!("{selected}[ No ]")));
        assert!(!out.contains(&format!("{selected}[ Yes ]")));
    }
}
