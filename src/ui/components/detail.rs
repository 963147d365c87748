//! Card detail screen.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

const LABEL_WIDTH: usize = 8;
const MARGIN: usize = 2;

/// Renders the card fields one per line starting at `row`.
pub fn render_detail(frame: &mut Frame, row: usize, detail: &DetailView, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    let value_width = cols.saturating_sub(MARGIN + LABEL_WIDTH);

    current_row = render_field(frame, current_row, "Name", &detail.title, &theme.colors.text_normal, theme, value_width);
    current_row = render_field(frame, current_row, "Price", &detail.price, &theme.colors.price_fg, theme, value_width);

    let image_color = if detail.image_ready {
        &theme.colors.image_ready_fg
    } else {
        &theme.colors.text_dim
    };
    current_row = render_field(frame, current_row, "Image", &detail.image, image_color, theme, value_width);
    if let Some(reference) = &detail.image_reference {
        current_row = render_field(frame, current_row, "Source", reference, &theme.colors.text_dim, theme, value_width);
    }

    current_row += 1;
    frame.move_to(current_row, 1);
    frame.pad(MARGIN);
    frame.push(&Theme::fg(&theme.colors.text_normal));
    frame.push_padded(&detail.description, cols.saturating_sub(MARGIN));
    frame.push(Theme::reset());

    current_row + 1
}

fn render_field(
    frame: &mut Frame,
    row: usize,
    label: &str,
    value: &str,
    color: &str,
    theme: &Theme,
    width: usize,
) -> usize {
    frame.move_to(row, 1);
    frame.pad(MARGIN);
    frame.push(Theme::bold());
    frame.push(&Theme::fg(&theme.colors.header_fg));
    frame.push_padded(label, LABEL_WIDTH);
    frame.push(Theme::reset());

    frame.push(&Theme::fg(color));
    let shown: String = value.chars().take(width).collect();
    frame.push_padded(&shown, width);
    frame.push(Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_lists_card_fields() {
        let detail = DetailView {
            title: "Kiwi".to_string(),
            price: "8 SR".to_string(),
            description: "This is a picture of Kiwi.".to_string(),
            image_reference: Some("https://img.example/?Kiwi".to_string()),
            image: "Loading image...".to_string(),
            image_ready: false,
        };

        let mut frame = Frame::default();
        let next = render_detail(&mut frame, 4, &detail, &Theme::default(), 60);
        let text = frame.plain_text();

        assert!(text.contains("Kiwi"));
        assert!(text.contains("8 SR"));
        assert!(text.contains("https://img.example/?Kiwi"));
        assert!(text.contains("This is a picture of Kiwi."));
        assert_eq!(next, 10);
    }
}
