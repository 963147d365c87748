//! Keyboard mapping from host key events to reducer events.
//!
//! The same key means different things per screen, so mapping reads the
//! current screen, input mode and alert state. Keys without a meaning in the
//! current context map to `None` and never reach the reducer.
//!
//! # Keybindings
//!
//! Catalog, normal mode:
//! - `j`/`Down`/`Ctrl+n`: Move down
//! - `k`/`Up`/`Ctrl+p`: Move up
//! - `Enter`: Open card
//! - `/`: Search
//! - `Tab`: Sign-up tab
//! - `q`: Close plugin
//!
//! Catalog, search mode:
//! - Characters and `Backspace` edit the query while typing
//! - `Enter`: Focus results (typing) or open card (navigating)
//! - `/`: Back to typing
//! - `Esc`: Leave search
//!
//! Detail: `Esc`/`Backspace`/`h`/`Left` back, `Tab` sign-up tab, `q` close.
//!
//! Sign-up: `Tab`/`Down` next element, `Shift+Tab`/`Up` previous, `Enter` next
//! element or submit on the button, `Esc` back to the catalog. While the alert is
//! shown only `Enter`/`Esc` (dismiss) are accepted.

use super::modes::{FormField, InputMode, Screen, SearchFocus};
use super::{AppState, Event};
use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

/// Maps a key press to the reducer event it triggers in the current state.
#[must_use]
pub fn map_key(state: &AppState, key: &KeyWithModifier) -> Option<Event> {
    tracing::trace!(bare_key = ?key.bare_key, screen = ?state.screen, "key event");

    match state.screen {
        Screen::Catalog => map_catalog_key(state.input_mode, key),
        Screen::Detail(_) => map_detail_key(key),
        Screen::SignUp => map_form_key(state, key),
    }
}

fn ctrl(key: &KeyWithModifier, c: char) -> bool {
    key.bare_key == BareKey::Char(c) && key.has_modifiers(&[KeyModifier::Ctrl])
}

fn map_catalog_key(mode: InputMode, key: &KeyWithModifier) -> Option<Event> {
    if ctrl(key, 'n') {
        return Some(Event::KeyDown);
    }
    if ctrl(key, 'p') {
        return Some(Event::KeyUp);
    }

    Some(match (mode, key.bare_key) {
        (_, BareKey::Down) => Event::KeyDown,
        (_, BareKey::Up) => Event::KeyUp,

        (InputMode::Normal, BareKey::Char('j')) => Event::KeyDown,
        (InputMode::Normal, BareKey::Char('k')) => Event::KeyUp,
        (InputMode::Normal, BareKey::Enter) => Event::OpenSelected,
        (InputMode::Normal, BareKey::Char('/')) => Event::SearchMode,
        (InputMode::Normal, BareKey::Tab) => Event::NextTab,
        (InputMode::Normal, BareKey::Char('q')) => Event::CloseFocus,
        (InputMode::Normal, BareKey::Esc) => Event::Escape,

        (InputMode::Search(_), BareKey::Esc) => Event::ExitSearch,

        (InputMode::Search(SearchFocus::Typing), BareKey::Enter | BareKey::Tab) => Event::FocusResults,
        (InputMode::Search(SearchFocus::Typing), BareKey::Backspace) => Event::Backspace,
        (InputMode::Search(SearchFocus::Typing), BareKey::Char(c)) => Event::Char(c),

        (InputMode::Search(SearchFocus::Navigating), BareKey::Char('j')) => Event::KeyDown,
        (InputMode::Search(SearchFocus::Navigating), BareKey::Char('k')) => Event::KeyUp,
        (InputMode::Search(SearchFocus::Navigating), BareKey::Enter) => Event::OpenSelected,
        (InputMode::Search(SearchFocus::Navigating), BareKey::Char('/') | BareKey::Backspace) => {
            Event::FocusSearchBar
        }

        _ => return None,
    })
}

fn map_detail_key(key: &KeyWithModifier) -> Option<Event> {
    Some(match key.bare_key {
        BareKey::Esc | BareKey::Backspace | BareKey::Left | BareKey::Char('h') => Event::Back,
        BareKey::Tab => Event::NextTab,
        BareKey::Char('q') => Event::CloseFocus,
        _ => return None,
    })
}

fn map_form_key(state: &AppState, key: &KeyWithModifier) -> Option<Event> {
    if state.form.showing_alert {
        return match key.bare_key {
            BareKey::Enter | BareKey::Esc => Some(Event::DismissAlert),
            _ => None,
        };
    }

    Some(match key.bare_key {
        BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::FocusPreviousField,
        BareKey::Tab | BareKey::Down => Event::FocusNextField,
        BareKey::Up => Event::FocusPreviousField,
        BareKey::Enter if state.form.focus == FormField::Submit => Event::Submit,
        BareKey::Enter => Event::FocusNextField,
        BareKey::Esc => Event::ShowCatalog,
        BareKey::Backspace => Event::Backspace,
        BareKey::Char(c) if key.has_no_modifiers() || key.has_modifiers(&[KeyModifier::Shift]) => Event::Char(c),
        _ => return None,
    })
}
