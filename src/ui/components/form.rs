//! Sign-up form and its error alert.
//!
//! Each field takes three rows: label, boxed value and error line. The alert is
//! drawn last, over the form, centered on the screen.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{AlertInfo, FieldView, FormView};

const MARGIN: usize = 4;
const ALERT_WIDTH: usize = 40;

/// Renders the section caption, the fields, the button and the status line.
pub fn render_form(frame: &mut Frame, row: usize, form: &FormView, theme: &Theme, cols: usize) -> usize {
    let width = cols.saturating_sub(MARGIN * 2).max(10);
    let mut current_row = row;

    frame.move_to(current_row, 1);
    frame.pad(MARGIN);
    frame.push(Theme::bold());
    frame.push(&Theme::fg(&theme.colors.header_fg));
    frame.push(form.section);
    frame.push(Theme::reset());
    current_row += 2;

    for field in &form.fields {
        current_row = render_field(frame, current_row, field, theme, width);
    }

    current_row = render_button(frame, current_row, form.submit_focused, theme);

    if let Some(status) = &form.status_line {
        current_row += 1;
        frame.move_to(current_row, 1);
        frame.pad(MARGIN);
        frame.push(&Theme::fg(&theme.colors.success_fg));
        frame.push(status);
        frame.push(Theme::reset());
        current_row += 1;
    }

    current_row
}

fn render_field(frame: &mut Frame, row: usize, field: &FieldView, theme: &Theme, width: usize) -> usize {
    let accent = if field.is_focused {
        Theme::fg(&theme.colors.search_bar_border)
    } else {
        Theme::fg(&theme.colors.border)
    };

    frame.move_to(row, 1);
    frame.pad(MARGIN);
    frame.push(&Theme::fg(&theme.colors.text_dim));
    frame.push(field.label);
    frame.push(Theme::reset());

    frame.move_to(row + 1, 1);
    frame.pad(MARGIN);
    frame.push(&accent);
    frame.push(if field.is_focused { "▌ " } else { "  " });
    let inner = width.saturating_sub(2);
    if field.value.is_empty() {
        frame.push(&Theme::fg(&theme.colors.text_dim));
        frame.push_padded(field.placeholder, inner);
    } else {
        frame.push(&Theme::fg(&theme.colors.text_normal));
        let shown: String = field.value.chars().take(inner).collect();
        frame.push_padded(&shown, inner);
    }
    frame.push(Theme::reset());

    frame.move_to(row + 2, 1);
    frame.pad(MARGIN);
    frame.push(&Theme::fg(&theme.colors.error_fg));
    frame.push_padded(field.error.unwrap_or(""), width);
    frame.push(Theme::reset());

    row + 3
}

fn render_button(frame: &mut Frame, row: usize, focused: bool, theme: &Theme) -> usize {
    frame.move_to(row, 1);
    frame.pad(MARGIN);
    if focused {
        frame.push(Theme::bold());
        frame.push(&Theme::fg(&theme.colors.tab_active_fg));
        frame.push(&Theme::bg(&theme.colors.tab_active_bg));
    } else {
        frame.push(&Theme::fg(&theme.colors.text_normal));
    }
    frame.push("[ Sign Up ]");
    frame.push(Theme::reset());
    row + 1
}

/// Renders the modal alert box centered in the pane.
pub fn render_alert(frame: &mut Frame, alert: &AlertInfo, theme: &Theme, rows: usize, cols: usize) {
    let width = ALERT_WIDTH.min(cols.saturating_sub(2)).max(12);
    let inner = width - 2;
    let left = cols.saturating_sub(width) / 2 + 1;
    let top = rows.saturating_sub(6) / 2 + 1;
    let border = Theme::fg(&theme.colors.error_fg);
    let button = format!("[ {} ]", alert.button);

    let lines = [alert.title, "", alert.message, button.as_str()];

    frame.move_to(top, left);
    frame.push(&border);
    frame.push(&format!("┌{}┐", "─".repeat(inner)));
    for (offset, text) in lines.iter().enumerate() {
        frame.move_to(top + 1 + offset, left);
        frame.push(&border);
        frame.push("│");
        if offset == 0 {
            frame.push(Theme::bold());
        }
        frame.push(&Theme::fg(&theme.colors.text_normal));
        frame.push_centered(text, inner);
        frame.push(Theme::reset());
        frame.push(&border);
        frame.push("│");
    }
    frame.move_to(top + 1 + lines.len(), left);
    frame.push(&border);
    frame.push(&format!("└{}┘", "─".repeat(inner)));
    frame.push(Theme::reset());
}
