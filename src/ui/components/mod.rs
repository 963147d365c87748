//! Composable UI component renderers.
//!
//! Each component draws one part of the interface into a [`Frame`] and returns
//! the next free row, so screens are assembled top to bottom.
//!
//! # Components
//!
//! - `header`: Tab bar and title line
//! - `footer`: Keybinding hints
//! - `search`: Search input box (border, query text)
//! - `table`: Catalog list with columns (NAME, PRICE, IMAGE)
//! - `empty`: Empty state message for no items
//! - `detail`: Fields of one card
//! - `form`: Sign-up fields, button and error alert
//!
//! # Layouts
//!
//! - [`render_catalog`]: Tabs + Header + `SearchBar` + Table + Footer
//! - [`render_detail_screen`]: Tabs + Header + Detail + Footer
//! - [`render_sign_up`]: Tabs + Header + Form + Alert + Footer

mod detail;
mod empty;
mod footer;
mod form;
mod header;
mod search;
mod table;

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CatalogView, DetailView, FormView, UIViewModel};

use footer::render_footer;
use header::{render_header, render_tabs};
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// Returns the next available row position (row + 1).
fn render_border(frame: &mut Frame, row: usize, color: &str, cols: usize) -> usize {
    frame.move_to(row, 1);
    frame.push(&Theme::fg(color));
    frame.push(&"─".repeat(cols));
    frame.push(Theme::reset());
    row + 1
}

/// Tab bar, title and separator shared by every screen.
fn render_chrome(frame: &mut Frame, vm: &UIViewModel, theme: &Theme, cols: usize) -> usize {
    let mut current_row = render_tabs(frame, 1, &vm.tabs, theme, cols);
    current_row = render_header(frame, current_row, &vm.header, theme, cols);
    render_border(frame, current_row, &theme.colors.border, cols)
}

/// Bottom separator and footer, pinned to the last two rows.
fn render_bottom(frame: &mut Frame, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let footer_start = rows.max(2);
    let border_row = footer_start - 1;

    render_border(frame, border_row, &theme.colors.border, cols);
    render_footer(frame, footer_start, &vm.footer, theme, cols);
}

/// Renders the catalog layout.
///
/// Layout structure:
/// ```text
/// [Tabs]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines, while searching]
/// [Table Headers]
/// [Table Rows | Empty State]
/// [Border]
/// [Footer]
/// ```
///
/// Reserves 6 lines for chrome, 9 while the search bar is shown, matching the
/// window computed by the view model.
pub fn render_catalog(frame: &mut Frame, vm: &UIViewModel, catalog: &CatalogView, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = render_chrome(frame, vm, theme, cols);

    if let Some(search) = &catalog.search_bar {
        current_row = render_search_bar(frame, current_row, search, theme, cols);
    }

    if let Some(empty) = &catalog.empty_state {
        empty::render_empty_state(frame, current_row + 1, empty, theme, cols);
    } else {
        current_row = render_table_headers(frame, current_row, theme, cols);
        render_table_rows(frame, current_row, &catalog.display_items, theme, cols);
    }

    render_bottom(frame, vm, theme, rows, cols);
}

/// Renders the detail layout for one card.
pub fn render_detail_screen(frame: &mut Frame, vm: &UIViewModel, detail: &DetailView, theme: &Theme, rows: usize, cols: usize) {
    let current_row = render_chrome(frame, vm, theme, cols);
    detail::render_detail(frame, current_row + 1, detail, theme, cols);
    render_bottom(frame, vm, theme, rows, cols);
}

/// Renders the sign-up layout; the alert, when present, is drawn last.
pub fn render_sign_up(frame: &mut Frame, vm: &UIViewModel, form_view: &FormView, theme: &Theme, rows: usize, cols: usize) {
    let current_row = render_chrome(frame, vm, theme, cols);
    form::render_form(frame, current_row + 1, form_view, theme, cols);
    render_bottom(frame, vm, theme, rows, cols);

    if let Some(alert) = &form_view.alert {
        form::render_alert(frame, alert, theme, rows, cols);
    }
}
