use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints centered and dimmed.
pub fn render_footer(frame: &mut Frame, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    frame.move_to(row, 1);
    frame.push(&Theme::fg(&theme.colors.text_dim));
    frame.push_centered(&footer.keybindings, cols);
    frame.push(Theme::reset());
    row + 1
}
