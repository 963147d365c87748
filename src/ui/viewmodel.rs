//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by the
//! renderer. They hold display-ready strings, flags and highlight ranges only; no
//! business logic runs during rendering.
//!
//! # Example
//!
//! ```rust
//! use fruitstand::ui::viewmodel::{Body, CatalogView, DisplayItem, FooterInfo, HeaderInfo, TabBarInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     tabs: TabBarInfo { labels: vec!["Home", "Sign Up"], active: 0 },
//!     header: HeaderInfo { title: " Fruits Catalog (1) ".to_string() },
//!     body: Body::Catalog(CatalogView {
//!         display_items: vec![DisplayItem {
//!             name: "Kiwi".to_string(),
//!             price: "8 SR".to_string(),
//!             image: "◌ loading".to_string(),
//!             image_ready: false,
//!             is_selected: true,
//!             highlight_ranges: vec![],
//!         }],
//!         selected_index: 0,
//!         search_bar: None,
//!         empty_state: None,
//!     }),
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//! };
//! assert!(matches!(vm.body, Body::Catalog(_)));
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Tab bar at the top of every screen.
    pub tabs: TabBarInfo,

    /// Title line under the tab bar.
    pub header: HeaderInfo,

    /// Screen-specific content.
    pub body: Body,

    /// Keybinding hints.
    pub footer: FooterInfo,
}

/// Screen-specific part of the view model.
#[derive(Debug, Clone)]
pub enum Body {
    Catalog(CatalogView),
    Detail(DetailView),
    SignUp(FormView),
}

/// Tab bar labels and the active tab index.
#[derive(Debug, Clone)]
pub struct TabBarInfo {
    pub labels: Vec<&'static str>,
    pub active: usize,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "j/k: navigate  /: search  q: quit").
    pub keybindings: String,
}

/// Visible window of the catalog list.
#[derive(Debug, Clone)]
pub struct CatalogView {
    /// Cards inside the visible window.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected card within `display_items`.
    pub selected_index: usize,

    /// Present while searching.
    pub search_bar: Option<SearchBarInfo>,

    /// Present when there is nothing to list.
    pub empty_state: Option<EmptyState>,
}

/// One catalog row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Card title, truncated to the name column.
    pub name: String,

    /// Formatted price, e.g. "8 SR".
    pub price: String,

    /// Image badge: placeholder text or loaded size.
    pub image: String,

    /// Whether the image has loaded.
    pub image_ready: bool,

    /// Whether this row holds the cursor.
    pub is_selected: bool,

    /// Character ranges of `name` matching the search query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No fruits match 'xyz'").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,

    /// Whether keystrokes currently edit the query.
    pub is_typing: bool,
}

/// Detail screen for one card.
#[derive(Debug, Clone)]
pub struct DetailView {
    pub title: String,
    pub price: String,
    pub description: String,
    /// Image reference, if the card has one.
    pub image_reference: Option<String>,
    /// Placeholder or loaded-image caption.
    pub image: String,
    pub image_ready: bool,
}

/// Sign-up form screen.
#[derive(Debug, Clone)]
pub struct FormView {
    /// Section caption above the fields.
    pub section: &'static str,

    pub fields: Vec<FieldView>,

    /// Whether the submit button holds focus.
    pub submit_focused: bool,

    /// Generic alert, present while it is showing.
    pub alert: Option<AlertInfo>,

    /// Confirmation after an accepted submission.
    pub status_line: Option<String>,
}

/// One labelled text field.
#[derive(Debug, Clone)]
pub struct FieldView {
    pub label: &'static str,
    /// Display text; passwords are masked.
    pub value: String,
    pub placeholder: &'static str,
    pub error: Option<&'static str>,
    pub is_focused: bool,
}

/// Modal alert content.
#[derive(Debug, Clone)]
pub struct AlertInfo {
    pub title: &'static str,
    pub message: &'static str,
    pub button: &'static str,
}
