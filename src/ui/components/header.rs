//! Tab bar and title line.
//!
//! Row 1 holds the tab bar, row 2 the centered screen title.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HeaderInfo, TabBarInfo};

/// Renders the tab labels left to right, the active one in the accent colors.
///
/// Returns the next available row.
pub fn render_tabs(frame: &mut Frame, row: usize, tabs: &TabBarInfo, theme: &Theme, cols: usize) -> usize {
    frame.move_to(row, 1);

    let mut used = 0;
    for (idx, label) in tabs.labels.iter().enumerate() {
        let cell = format!(" {label} ");
        if idx == tabs.active {
            frame.push(Theme::bold());
            frame.push(&Theme::fg(&theme.colors.tab_active_fg));
            frame.push(&Theme::bg(&theme.colors.tab_active_bg));
        } else {
            frame.push(&Theme::fg(&theme.colors.text_dim));
        }
        frame.push(&cell);
        frame.push(Theme::reset());
        frame.push(" ");
        used += cell.chars().count() + 1;
    }

    frame.pad(cols.saturating_sub(used));
    row + 1
}

/// Renders the screen title centered across the full width.
pub fn render_header(frame: &mut Frame, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    frame.move_to(row, 1);
    frame.push(Theme::bold());
    frame.push(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        frame.push(&Theme::bg(bg));
    }

    frame.push_centered(&header.title, cols);

    frame.push(Theme::reset());
    row + 1
}
