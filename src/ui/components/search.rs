//! Search input box.
//!
//! A three-line bordered box with the query and, while typing, a block cursor.
//! Queries wider than the box show their last characters.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

const SEARCH_BOX_MARGIN: usize = 5;
const SEARCH_LABEL: &str = " Search: ";

/// Renders the search box starting at `row` and returns the row after it.
pub fn render_search_bar(frame: &mut Frame, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    frame.move_to(row, 1);
    frame.pad(SEARCH_BOX_MARGIN);
    frame.push(&border);
    frame.push(&format!("┌{}┐", "─".repeat(inner_width)));
    frame.push(Theme::reset());

    let cursor = if search.is_typing { "█" } else { "" };
    let room = inner_width.saturating_sub(SEARCH_LABEL.chars().count() + cursor.chars().count());
    let query_len = search.query.chars().count();
    let shown: String = search.query.chars().skip(query_len.saturating_sub(room)).collect();
    let search_text: String = format!("{SEARCH_LABEL}{shown}{cursor}").chars().take(inner_width).collect();

    frame.move_to(row + 1, 1);
    frame.pad(SEARCH_BOX_MARGIN);
    frame.push(&border);
    frame.push("│");
    if search.is_typing {
        frame.push(&Theme::fg(&theme.colors.text_normal));
    } else {
        frame.push(&Theme::fg(&theme.colors.text_dim));
    }
    frame.push_padded(&search_text, inner_width);
    frame.push(&border);
    frame.push("│");
    frame.push(Theme::reset());

    frame.move_to(row + 2, 1);
    frame.pad(SEARCH_BOX_MARGIN);
    frame.push(&border);
    frame.push(&format!("└{}┘", "─".repeat(inner_width)));
    frame.push(Theme::reset());

    row + 3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(query: &str) -> SearchBarInfo {
        SearchBarInfo {
            query: query.to_string(),
            is_typing: true,
        }
    }

    #[test]
    fn short_query_is_padded_inside_the_box() {
        let mut frame = Frame::default();
        let next = render_search_bar(&mut frame, 4, &bar("kiwi"), &Theme::default(), 30);
        assert_eq!(next, 7);
        assert!(frame.plain_text().contains("│ Search: kiwi█    │"));
    }

    #[test]
    fn long_query_keeps_its_tail_within_the_border() {
        let mut frame = Frame::default();
        render_search_bar(&mut frame, 4, &bar("watermelonpineapple"), &Theme::default(), 30);

        let text = frame.plain_text();
        assert!(text.contains("│ Search: ineapple█│"), "{text}");
        assert!(!text.contains("watermelon"));
    }
}
