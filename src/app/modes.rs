//! Screen, input and focus state types for the application.
//!
//! These enums drive which keybindings are active, how typed characters are
//! routed and what the renderer lays out.
//!
//! # State Machine
//!
//! The plugin shows one of three screens:
//! - **Catalog**: searchable list of cards (Home tab)
//! - **Detail**: one card, reached from the catalog (Home tab)
//! - **`SignUp`**: the sign-up form (Sign Up tab)
//!
//! On the catalog, input is either **Normal** (navigation and commands) or
//! **Search** (typing into the query or navigating its results).
//!
//! # Example
//!
//! ```rust
//! use fruitstand::app::modes::{InputMode, Screen, SearchFocus, Tab};
//!
//! let input_mode = InputMode::Search(SearchFocus::Typing);
//! assert_eq!(Screen::Catalog.tab(), Tab::Home);
//! ```

use uuid::Uuid;

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Characters edit the query.
    Typing,

    /// j/k move through the filtered results, `/` returns to typing.
    Navigating,
}

/// Current input handling mode on the catalog screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigation and command keys.
    Normal,

    /// Search bar is visible; the inner focus says where keys go.
    Search(SearchFocus),
}

/// Screen currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Card list with the search bar.
    Catalog,

    /// Detail view of the card with this identifier.
    Detail(Uuid),

    /// Sign-up form.
    SignUp,
}

impl Screen {
    /// Tab this screen belongs to.
    #[must_use]
    pub const fn tab(self) -> Tab {
        match self {
            Self::Catalog | Self::Detail(_) => Tab::Home,
            Self::SignUp => Tab::SignUp,
        }
    }
}

/// Top-level tabs shown in the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    SignUp,
}

impl Tab {
    pub const ALL: [Self; 2] = [Self::Home, Self::SignUp];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::SignUp => "Sign Up",
        }
    }
}

/// Focusable elements of the sign-up form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Password,
    /// The "Sign Up" button.
    Submit,
}

impl FormField {
    pub const ORDER: [Self; 4] = [Self::Name, Self::Email, Self::Password, Self::Submit];

    /// Next element in tab order, wrapping to the first.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    /// Previous element in tab order, wrapping to the last.
    #[must_use]
    pub fn previous(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Whether the element accepts typed text.
    #[must_use]
    pub const fn is_text(self) -> bool {
        !matches!(self, Self::Submit)
    }
}
