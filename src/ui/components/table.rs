//! Catalog table with NAME, PRICE and IMAGE columns.

use crate::app::state::{name_column_width, PRICE_COLUMN_WIDTH};
use crate::ui::helpers::{self, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Renders the column titles.
pub fn render_table_headers(frame: &mut Frame, row: usize, theme: &Theme, cols: usize) -> usize {
    frame.move_to(row, 1);
    frame.push(Theme::bold());
    frame.push(&Theme::fg(&theme.colors.header_fg));
    frame.push_padded("NAME", name_column_width(cols));
    frame.push_padded("PRICE", PRICE_COLUMN_WIDTH);
    frame.push("IMAGE");
    frame.push(Theme::reset());
    row + 1
}

/// Renders one line per item and returns the row after the last one.
pub fn render_table_rows(frame: &mut Frame, row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(frame, current_row, item, theme, cols);
    }
    current_row
}

fn render_table_row(frame: &mut Frame, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    frame.move_to(row, 1);
    let name_width = name_column_width(cols);

    let base = if item.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    frame.push(&base);

    helpers::render_highlighted_text(frame, &item.name, &item.highlight_ranges, theme, item.is_selected);
    if !item.is_selected && !item.highlight_ranges.is_empty() {
        frame.push(&base);
    }
    frame.pad(name_width.saturating_sub(item.name.chars().count()));

    if !item.is_selected {
        frame.push(&Theme::fg(&theme.colors.price_fg));
    }
    frame.push_padded(&item.price, PRICE_COLUMN_WIDTH);

    if !item.is_selected {
        let image_color = if item.image_ready {
            &theme.colors.image_ready_fg
        } else {
            &theme.colors.text_dim
        };
        frame.push(&Theme::fg(image_color));
    }
    let used = name_width.max(item.name.chars().count()) + PRICE_COLUMN_WIDTH.max(item.price.chars().count());
    let image: String = item.image.chars().take(cols.saturating_sub(used)).collect();
    frame.push(&image);
    frame.pad(cols.saturating_sub(used + image.chars().count()));

    frame.push(Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, selected: bool) -> DisplayItem {
        DisplayItem {
            name: name.to_string(),
            price: "8 SR".to_string(),
            image: "◌ loading".to_string(),
            image_ready: false,
            is_selected: selected,
            highlight_ranges: vec![],
        }
    }

    #[test]
    fn rows_line_up_in_columns() {
        let theme = Theme::default();
        let mut frame = Frame::default();
        let next = render_table_rows(&mut frame, 4, &[item("Kiwi", true), item("Mango", false)], &theme, 60);
        assert_eq!(next, 6);

        let text = frame.plain_text();
        let kiwi = format!("{:<28}{:<10}◌ loading", "Kiwi", "8 SR");
        assert!(text.contains(&kiwi), "{text}");
    }

    #[test]
    fn narrow_panes_shrink_the_name_column() {
        let theme = Theme::default();
        let mut frame = Frame::default();
        render_table_rows(&mut frame, 1, &[item("Kiwi", false)], &theme, 24);

        let text = frame.plain_text();
        assert_eq!(text, format!("{:<8}{:<10}◌ load", "Kiwi", "8 SR"));
        assert_eq!(text.chars().count(), 24);
    }

    #[test]
    fn selected_row_uses_selection_colors() {
        let theme = Theme::default();
        let mut frame = Frame::default();
        render_table_rows(&mut frame, 4, &[item("Kiwi", true)], &theme, 60);
        assert!(frame.as_str().contains(&Theme::bg(&theme.colors.selection_bg)));
    }
}
