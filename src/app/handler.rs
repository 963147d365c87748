//! Event handling and state transition logic.
//!
//! This module implements the reducer that processes user input and host
//! callbacks, translating them into state changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (keys, web results, permissions)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and `SignUpForm` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `OpenSelected`, `Back`, `NextTab`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`, `SearchChanged`
//! - **Text input**: `Char`, `Backspace` (routed to the search bar or the focused form field)
//! - **Form**: `FocusNextField`, `FocusPreviousField`, `FieldChanged`, `Submit`, `DismissAlert`
//! - **Host**: `PermissionsGranted`, `PermissionsDenied`, `ImageLoaded`, `ImageFailed`
//! - **Account hook**: `SignUpAccepted`, `SignUpFailed`
//!
//! # Example
//!
//! ```rust
//! use fruitstand::app::{handle_event, AppState, Event};
//! use fruitstand::domain::build_catalog;
//! use fruitstand::ui::Theme;
//!
//! let mut state = AppState::new(build_catalog(&["Apple", "Kiwi"], ""), Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), fruitstand::FruitstandError>(())
//! ```

use super::form::Submission;
use super::images::ImageStatus;
use super::modes::{FormField, InputMode, Screen, SearchFocus};
use crate::account::AccountReceipt;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use uuid::Uuid;

/// Events triggered by user input or host callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,
    /// Opens the detail screen for the selected card.
    OpenSelected,
    /// Returns from the detail screen to the catalog.
    Back,
    /// Switches to the other tab.
    NextTab,
    /// Shows the catalog tab, discarding the sign-up form.
    ShowCatalog,
    /// Shows the sign-up tab with a fresh form.
    ShowSignUp,

    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating mode).
    FocusSearchBar,
    /// Focuses the search results list (from typing mode).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Full new value of the search bar.
    SearchChanged {
        query: String,
    },

    /// Appends a character to whatever currently accepts text.
    Char(char),
    /// Removes the last character from whatever currently accepts text.
    Backspace,
    /// Clears search query and returns to normal mode.
    Escape,

    /// Moves form focus to the next element.
    FocusNextField,
    /// Moves form focus to the previous element.
    FocusPreviousField,
    /// Full new value of a form field.
    FieldChanged {
        field: FormField,
        value: String,
    },
    /// Presses the "Sign Up" button.
    Submit,
    /// Dismisses the generic error alert.
    DismissAlert,

    /// Host granted the requested permissions, web access included.
    PermissionsGranted,
    /// Host denied the requested permissions.
    PermissionsDenied,
    /// A card image finished downloading.
    ImageLoaded {
        id: Uuid,
        bytes: usize,
    },
    /// A card image could not be downloaded.
    ImageFailed {
        id: Uuid,
        status: Option<u16>,
    },

    /// The account hook accepted a submission.
    SignUpAccepted(AccountReceipt),
    /// The account hook failed a submission.
    SignUpFailed {
        error: String,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the UI needs a redraw and the side effects
/// to run, in order.
///
/// # Errors
///
/// Reserved for state transitions that can fail; every current transition is
/// total and returns `Ok`.
#[allow(clippy::cognitive_complexity, clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            if state.screen != Screen::Catalog {
                return Ok((false, vec![]));
            }
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if state.screen != Screen::Catalog {
                return Ok((false, vec![]));
            }
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::OpenSelected => {
            let Some(item) = state.selected_item() else {
                tracing::debug!("no card selected");
                if matches!(state.input_mode, InputMode::Search(_)) {
                    tracing::debug!("exiting search mode (no selection)");
                    state.input_mode = InputMode::Normal;
                    state.set_search_query(String::new());
                    return Ok((true, vec![]));
                }
                return Ok((false, vec![]));
            };

            let id = item.id;
            tracing::debug!(card_id = %id, title = %item.title, "opening card detail");
            state.screen = Screen::Detail(id);
            let actions = state.request_images(&[id]);
            Ok((true, actions))
        }
        Event::Back => {
            if !matches!(state.screen, Screen::Detail(_)) {
                return Ok((false, vec![]));
            }
            state.screen = Screen::Catalog;
            Ok((true, vec![]))
        }
        Event::NextTab => {
            let next = match state.screen {
                Screen::Catalog | Screen::Detail(_) => Event::ShowSignUp,
                Screen::SignUp => Event::ShowCatalog,
            };
            handle_event(state, &next)
        }
        Event::ShowCatalog => {
            if state.screen == Screen::SignUp {
                tracing::debug!("leaving sign-up, form discarded");
                state.reset_form();
            }
            state.screen = Screen::Catalog;
            Ok((true, vec![]))
        }
        Event::ShowSignUp => {
            if state.screen == Screen::SignUp {
                return Ok((false, vec![]));
            }
            state.reset_form();
            state.screen = Screen::SignUp;
            Ok((true, vec![]))
        }
        Event::SearchMode => {
            if state.screen != Screen::Catalog {
                return Ok((false, vec![]));
            }
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.set_search_query(String::new());
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
                state.apply_search_filter();
                return Ok((true, vec![]));
            }

            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch | Event::Escape => {
            tracing::debug!(query = %state.search_query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.set_search_query(String::new());
            Ok((true, vec![]))
        }
        Event::SearchChanged { query } => {
            if &state.search_query == query {
                return Ok((false, vec![]));
            }
            state.set_search_query(query.clone());
            tracing::trace!(query = %state.search_query, "search query updated");
            Ok((true, vec![]))
        }
        Event::Char(c) => match state.screen {
            Screen::Catalog if matches!(state.input_mode, InputMode::Search(_)) => {
                let mut query = state.search_query.clone();
                query.push(*c);
                handle_event(state, &Event::SearchChanged { query })
            }
            Screen::SignUp if !state.form.showing_alert => Ok((state.form.push_char(*c), vec![])),
            _ => Ok((false, vec![])),
        },
        Event::Backspace => match state.screen {
            Screen::Catalog if matches!(state.input_mode, InputMode::Search(_)) => {
                let mut query = state.search_query.clone();
                query.pop();
                handle_event(state, &Event::SearchChanged { query })
            }
            Screen::SignUp if !state.form.showing_alert => Ok((state.form.pop_char(), vec![])),
            _ => Ok((false, vec![])),
        },
        Event::FocusNextField => {
            if state.screen != Screen::SignUp || state.form.showing_alert {
                return Ok((false, vec![]));
            }
            state.form.focus = state.form.focus.next();
            Ok((true, vec![]))
        }
        Event::FocusPreviousField => {
            if state.screen != Screen::SignUp || state.form.showing_alert {
                return Ok((false, vec![]));
            }
            state.form.focus = state.form.focus.previous();
            Ok((true, vec![]))
        }
        Event::FieldChanged { field, value } => {
            if state.screen != Screen::SignUp {
                return Ok((false, vec![]));
            }
            Ok((state.form.set_value(*field, value.clone()), vec![]))
        }
        Event::Submit => {
            if state.screen != Screen::SignUp || state.form.showing_alert {
                return Ok((false, vec![]));
            }
            match state.form.submit() {
                Submission::Accepted(request) => {
                    tracing::debug!(request = ?request, "sign-up form accepted");
                    Ok((true, vec![Action::SubmitSignUp(request)]))
                }
                Submission::Rejected => {
                    state.form.showing_alert = true;
                    Ok((true, vec![]))
                }
            }
        }
        Event::DismissAlert => {
            if !state.form.showing_alert {
                return Ok((false, vec![]));
            }
            state.form.showing_alert = false;
            Ok((true, vec![]))
        }
        Event::PermissionsGranted => {
            state.web_access = true;
            let ids: Vec<Uuid> = state.items.iter().map(|item| item.id).collect();
            let actions = state.request_images(&ids);
            Ok((false, actions))
        }
        Event::PermissionsDenied => {
            tracing::warn!("permissions denied - images stay as placeholders");
            state.web_access = false;
            Ok((false, vec![]))
        }
        Event::ImageLoaded { id, bytes } => {
            let changed = state
                .images
                .resolve(id, ImageStatus::Loaded { bytes: *bytes });
            tracing::debug!(card_id = %id, bytes = bytes, changed = changed, "image loaded");
            Ok((changed, vec![]))
        }
        Event::ImageFailed { id, status } => {
            let changed = state
                .images
                .resolve(id, ImageStatus::Failed { status: *status });
            tracing::debug!(card_id = %id, status = ?status, changed = changed, "image failed, keeping placeholder");
            // failed images render exactly like pending ones
            Ok((false, vec![]))
        }
        Event::SignUpAccepted(receipt) => {
            if state.screen != Screen::SignUp {
                tracing::debug!("sign-up receipt arrived after form was discarded");
                return Ok((false, vec![]));
            }
            state.form.receipt = Some(receipt.clone());
            Ok((true, vec![]))
        }
        Event::SignUpFailed { error } => {
            tracing::error!("Account service error: {}", error);
            Ok((false, vec![]))
        }
    }
}
