//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point: it computes the view
//! model, dispatches to the layout for the current screen and flushes the
//! finished frame to stdout in one write.
//!
//! # Example
//!
//! ```rust
//! use fruitstand::app::AppState;
//! use fruitstand::ui::{render_to_string, Theme};
//!
//! let state = AppState::new(vec![], Theme::default());
//! let frame = render_to_string(&state, 24, 80);
//! assert!(frame.contains("The catalog is empty"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

/// Renders the plugin UI to stdout.
///
/// Does not clear the screen; the host redraws the pane before each render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let frame = render_frame(state, rows, cols);
    print!("{}", frame.as_str());
}

/// Renders the plugin UI and returns the output with escape sequences removed.
#[must_use]
pub fn render_to_string(state: &AppState, rows: usize, cols: usize) -> String {
    render_frame(state, rows, cols).plain_text()
}

fn render_frame(state: &AppState, rows: usize, cols: usize) -> Frame {
    let _span = tracing::trace_span!("render", rows = rows, cols = cols).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);
    let mut frame = Frame::default();
    render_viewmodel(&mut frame, &viewmodel, &state.theme, rows, cols);
    frame
}

/// Chooses the layout for the body of the view model.
fn render_viewmodel(frame: &mut Frame, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    match &vm.body {
        Body::Catalog(catalog) => components::render_catalog(frame, vm, catalog, theme, rows, cols),
        Body::Detail(detail) => components::render_detail_screen(frame, vm, detail, theme, rows, cols),
        Body::SignUp(form) => components::render_sign_up(frame, vm, form, theme, rows, cols),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Event};
    use crate::domain::build_catalog;

    fn state() -> AppState {
        AppState::new(build_catalog(&["Apple", "Kiwi"], "https://img.example/?"), Theme::default())
    }

    #[test]
    fn catalog_frame_lists_cards_and_tabs() {
        let text = render_to_string(&state(), 24, 80);
        assert!(text.contains(" Home "));
        assert!(text.contains(" Sign Up "));
        assert!(text.contains("Fruits Catalog (2)"));
        assert!(text.contains("NAME"));
        assert!(text.contains("Kiwi"));
    }

    #[test]
    fn sign_up_frame_shows_alert_after_bad_submit() {
        let mut state = state();
        handle_event(&mut state, &Event::ShowSignUp).unwrap();
        handle_event(&mut state, &Event::Submit).unwrap();

        let text = render_to_string(&state, 24, 80);
        assert!(text.contains("Sign Up Details"));
        assert!(text.contains("Please enter valid information"));
    }
}
