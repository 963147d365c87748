//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin,
//! along with methods for filtering, selection management, image bookkeeping and
//! UI view model generation. It is the single source of truth for all transient
//! UI state.
//!
//! # Architecture
//!
//! `AppState` separates core data (the catalog) from derived state (filtered
//! items, selected index) so that every state transition can rebuild the derived
//! part from the search query alone. View models are computed on demand from
//! state snapshots.
//!
//! # State Components
//!
//! - **Items**: The catalog, built once at startup and never mutated
//! - **Filtered Items**: Catalog subsequence matching the search query
//! - **Selection**: Cursor position within the filtered items
//! - **Screen / Input Mode**: Which screen is shown and how keys are routed
//! - **Images**: Per-card image loading status
//! - **Form**: The sign-up form, discarded whenever its tab is left
//!
//! # Example
//!
//! ```rust
//! use fruitstand::app::AppState;
//! use fruitstand::domain::build_catalog;
//! use fruitstand::ui::Theme;
//!
//! let items = build_catalog(&["Apple", "Kiwi"], "https://img.example/?");
//! let mut state = AppState::new(items, Theme::default());
//! state.set_search_query("ki".to_string());
//! assert_eq!(state.filtered_items.len(), 1);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! ```

use super::form::SignUpForm;
use super::images::{format_size, ImageBoard};
use super::modes::{FormField, InputMode, Screen, SearchFocus, Tab};
use super::Action;
use crate::domain::search::match_range;
use crate::domain::{filter, CatalogItem, GENERIC_FORM_ERROR};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    AlertInfo, Body, CatalogView, DetailView, DisplayItem, EmptyState, FieldView, FooterInfo,
    FormView, HeaderInfo, SearchBarInfo, TabBarInfo, UIViewModel,
};
use unicode_segmentation::UnicodeSegmentation;
use uuid::Uuid;

/// Width of the NAME column in characters.
pub const NAME_COLUMN_WIDTH: usize = 28;

/// Width of the PRICE column in characters.
pub const PRICE_COLUMN_WIDTH: usize = 10;

/// Room kept for the IMAGE column before the NAME column shrinks.
const IMAGE_COLUMN_WIDTH: usize = 12;

const MIN_NAME_COLUMN_WIDTH: usize = 8;

/// Width of the NAME column in a pane `cols` wide.
///
/// Full width while price and image still fit beside it, then shrinking down to
/// eight characters.
#[must_use]
pub fn name_column_width(cols: usize) -> usize {
    cols.saturating_sub(PRICE_COLUMN_WIDTH + IMAGE_COLUMN_WIDTH)
        .clamp(MIN_NAME_COLUMN_WIDTH, NAME_COLUMN_WIDTH)
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Every card in the catalog, in source order.
    pub items: Vec<CatalogItem>,

    /// Cards matching the current search query.
    ///
    /// Recomputed by `apply_search_filter()`. Used for rendering and selection
    /// bounds checking.
    pub filtered_items: Vec<CatalogItem>,

    /// Zero-based index of the selected card within `filtered_items`.
    pub selected_index: usize,

    /// Current input handling mode on the catalog.
    pub input_mode: InputMode,

    /// Current search query string.
    pub search_query: String,

    /// Screen currently shown.
    pub screen: Screen,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Image status per card.
    pub images: ImageBoard,

    /// Whether card images are fetched at all.
    pub load_images: bool,

    /// Whether the host granted web access.
    pub web_access: bool,

    /// Sign-up form; replaced with a fresh one when its tab is entered or left.
    pub form: SignUpForm,
}

impl AppState {
    /// Creates a new application state over a catalog.
    ///
    /// All cards are visible, nothing is selected beyond the first card and no
    /// image has been requested.
    #[must_use]
    pub fn new(items: Vec<CatalogItem>, theme: Theme) -> Self {
        let images = ImageBoard::for_items(&items);
        let filtered_items = items.clone();
        Self {
            items,
            filtered_items,
            selected_index: 0,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            screen: Screen::Catalog,
            theme,
            images,
            load_images: true,
            web_access: false,
            form: SignUpForm::default(),
        }
    }

    /// Moves selection cursor down by one position, wrapping to top if at end.
    pub fn move_selection_down(&mut self) {
        if self.filtered_items.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered_items.len();
    }

    /// Moves selection cursor up by one position, wrapping to bottom if at start.
    pub fn move_selection_up(&mut self) {
        if self.filtered_items.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered_items.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the currently selected card, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&CatalogItem> {
        self.filtered_items.get(self.selected_index)
    }

    /// Looks up a card by identifier.
    #[must_use]
    pub fn item(&self, id: &Uuid) -> Option<&CatalogItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Replaces the search query and re-filters.
    ///
    /// This is the text-change handler for the search bar: it receives the full
    /// current value on every keystroke.
    pub fn set_search_query(&mut self, query: String) {
        self.search_query = query;
        self.apply_search_filter();
    }

    /// Re-derives `filtered_items` from the catalog and the search query.
    ///
    /// Clamps `selected_index` to the new bounds.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            total_items = self.items.len(),
            query_len = self.search_query.chars().count()
        )
        .entered();

        self.filtered_items = filter(&self.items, &self.search_query);

        if self.filtered_items.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered_items.len() - 1);
        }

        tracing::debug!(
            filtered_count = self.filtered_items.len(),
            "search filter applied"
        );
    }

    /// Replaces the sign-up form with an empty one.
    pub fn reset_form(&mut self) {
        self.form = SignUpForm::default();
    }

    /// Issues image requests for `ids` that have not been requested yet.
    ///
    /// Nothing is requested while images are disabled or web access is missing.
    pub fn request_images<'a>(&mut self, ids: impl IntoIterator<Item = &'a Uuid>) -> Vec<Action> {
        if !self.load_images || !self.web_access {
            return vec![];
        }

        let mut actions = vec![];
        for id in ids {
            let Some(url) = self
                .items
                .iter()
                .find(|item| &item.id == id)
                .and_then(|item| item.image_reference.clone())
            else {
                continue;
            };
            if self.images.begin(id) {
                actions.push(Action::FetchImage { id: *id, url });
            }
        }

        tracing::debug!(request_count = actions.len(), "image requests issued");
        actions
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Calculate available rows after subtracting UI chrome (tabs, header, footer, search)
    /// 2. Center window around selected index
    /// 3. Adjust window if near start/end to maximize visible items
    /// 4. Compute relative selection index within visible window
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let body = match self.screen {
            Screen::Catalog => Body::Catalog(self.compute_catalog_view(rows, cols)),
            Screen::Detail(id) => match self.item(&id) {
                Some(item) => Body::Detail(self.compute_detail_view(item)),
                None => Body::Catalog(self.compute_catalog_view(rows, cols)),
            },
            Screen::SignUp => Body::SignUp(self.compute_form_view()),
        };

        UIViewModel {
            tabs: self.compute_tabs(),
            header: self.compute_header(),
            body,
            footer: self.compute_footer(),
        }
    }

    fn compute_catalog_view(&self, rows: usize, cols: usize) -> CatalogView {
        let search_bar = self.compute_search_bar();

        if self.filtered_items.is_empty() {
            return CatalogView {
                display_items: vec![],
                selected_index: 0,
                search_bar,
                empty_state: Some(self.compute_empty_state()),
            };
        }

        let available_rows = self.calculate_available_rows(rows).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.filtered_items.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && self.filtered_items.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_items = self.filtered_items[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, item)| self.compute_display_item(item, visible_start + relative_idx, cols))
            .collect();

        CatalogView {
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            search_bar,
            empty_state: None,
        }
    }

    /// Computes one catalog row: truncated name, price, image badge and the
    /// highlighted range of the search match.
    fn compute_display_item(&self, item: &CatalogItem, absolute_idx: usize, cols: usize) -> DisplayItem {
        let max_name_chars = name_column_width(cols) - 2;

        let name_chars = item.title.chars().count();
        let (name, visible_chars) = if name_chars > max_name_chars {
            let keep = max_name_chars - 3;
            (format!("{}...", item.title.chars().take(keep).collect::<String>()), keep)
        } else {
            (item.title.clone(), name_chars)
        };

        let highlight_ranges = match_range(&item.title, &self.search_query)
            .filter(|(start, _)| *start < visible_chars)
            .map(|(start, end)| vec![(start, end.min(visible_chars))])
            .unwrap_or_default();

        let (image, image_ready) = self.image_badge(item);

        DisplayItem {
            name,
            price: item.display_price(),
            image,
            image_ready,
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    fn image_badge(&self, item: &CatalogItem) -> (String, bool) {
        match self.images.status(&item.id) {
            None => ("-".to_string(), false),
            Some(status) if status.shows_placeholder() => ("◌ loading".to_string(), false),
            Some(status) => (format!("▣ {}", format_size(status.loaded_bytes().unwrap_or(0))), true),
        }
    }

    fn compute_detail_view(&self, item: &CatalogItem) -> DetailView {
        let (image, image_ready) = match self.images.status(&item.id) {
            None => ("No image available".to_string(), false),
            Some(status) if status.shows_placeholder() => ("Loading image...".to_string(), false),
            Some(status) => (format!("Image loaded ({})", format_size(status.loaded_bytes().unwrap_or(0))), true),
        };

        DetailView {
            title: item.title.clone(),
            price: item.display_price(),
            description: item.description.clone(),
            image_reference: item.image_reference.clone(),
            image,
            image_ready,
        }
    }

    fn compute_form_view(&self) -> FormView {
        let form = &self.form;
        let field_view = |field: FormField, label, placeholder, value: String, error| FieldView {
            label,
            value,
            placeholder,
            error,
            is_focused: form.focus == field,
        };

        let fields = vec![
            field_view(FormField::Name, "Name", "Name", form.name.clone(), None),
            field_view(FormField::Email, "Email", "Email", form.email.clone(), form.email_error()),
            field_view(
                FormField::Password,
                "Password",
                "Password",
                "•".repeat(form.password.graphemes(true).count()),
                form.password_error(),
            ),
        ];

        let alert = form.showing_alert.then_some(AlertInfo {
            title: "Error",
            message: GENERIC_FORM_ERROR,
            button: "OK",
        });

        let status_line = form.receipt.as_ref().map(|receipt| {
            format!(
                "Signed up {} at {}",
                receipt.email,
                receipt.submitted_at.format("%H:%M:%S UTC")
            )
        });

        FormView {
            section: "Sign Up Details",
            fields,
            submit_focused: form.focus == FormField::Submit,
            alert,
            status_line,
        }
    }

    fn compute_tabs(&self) -> TabBarInfo {
        let active = self.screen.tab();
        TabBarInfo {
            labels: Tab::ALL.iter().map(|tab| tab.label()).collect(),
            active: Tab::ALL.iter().position(|tab| *tab == active).unwrap_or(0),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match self.screen {
            Screen::Catalog => format!(" Fruits Catalog ({}) ", self.filtered_items.len()),
            Screen::Detail(id) => self
                .item(&id)
                .map_or_else(|| " Fruits Catalog ".to_string(), |item| format!(" {} ", item.title)),
            Screen::SignUp => " Sign Up ".to_string(),
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.screen, self.input_mode) {
            (Screen::Catalog, InputMode::Search(SearchFocus::Typing)) => {
                "ESC: exit search  Enter: results  Ctrl+n/p: navigate  Type to filter"
            }
            (Screen::Catalog, InputMode::Search(SearchFocus::Navigating)) => {
                "ESC: exit search  /: edit query  j/k or Ctrl+n/p: navigate  Enter: open"
            }
            (Screen::Catalog, InputMode::Normal) => {
                "j/k or Ctrl+n/p: navigate  /: search  Enter: open  Tab: sign up  q: quit"
            }
            (Screen::Detail(_), _) => "Esc/h: back  Tab: sign up  q: quit",
            (Screen::SignUp, _) if self.form.showing_alert => "Enter/Esc: dismiss",
            (Screen::SignUp, _) => "Tab/Down: next  Shift+Tab/Up: previous  Enter: next / sign up  Esc: home",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        match self.input_mode {
            InputMode::Search(focus) => Some(SearchBarInfo {
                query: self.search_query.clone(),
                is_typing: focus == SearchFocus::Typing,
            }),
            InputMode::Normal => None,
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        if self.items.is_empty() {
            EmptyState {
                message: "The catalog is empty".to_string(),
                subtitle: "Set 'fruits' in the plugin configuration to add items".to_string(),
            }
        } else {
            EmptyState {
                message: format!("No fruits match '{}'", self.search_query),
                subtitle: "Edit or clear the search to see more".to_string(),
            }
        }
    }

    /// Rows left for the card list after the tab bar, header, borders, table
    /// headers, footer and (while searching) the 3-line search bar.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(6),
            InputMode::Search(_) => total_rows.saturating_sub(9),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ImageStatus;
    use crate::domain::build_catalog;

    fn state(names: &[&str]) -> AppState {
        AppState::new(build_catalog(names, "https://img.example/?"), Theme::default())
    }

    fn catalog_view(vm: UIViewModel) -> CatalogView {
        match vm.body {
            Body::Catalog(view) => view,
            other => panic!("expected catalog body, got {other:?}"),
        }
    }

    #[test]
    fn new_state_shows_whole_catalog() {
        let state = state(&["Apple", "Kiwi", "Mango"]);
        assert_eq!(state.filtered_items, state.items);
        assert_eq!(state.selected_item().map(|i| i.title.as_str()), Some("Apple"));
    }

    #[test]
    fn selection_wraps() {
        let mut state = state(&["Apple", "Kiwi"]);
        state.move_selection_up();
        assert_eq!(state.selected_index, 1);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn filter_clamps_selection() {
        let mut state = state(&["Apple", "Kiwi", "Mango"]);
        state.selected_index = 2;
        state.set_search_query("apple".to_string());
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.filtered_items.len(), 1);
    }

    #[test]
    fn window_follows_selection() {
        let names: Vec<String> = (0..40).map(|i| format!("Fruit {i}")).collect();
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut state = state(&names);
        state.selected_index = 39;

        let view = catalog_view(state.compute_viewmodel(16, 80));
        assert_eq!(view.display_items.len(), 10);
        assert_eq!(view.display_items.last().map(|i| i.name.as_str()), Some("Fruit 39"));
        assert!(view.display_items[view.selected_index].is_selected);
    }

    #[test]
    fn highlight_covers_search_match() {
        let mut state = state(&["Pineapple"]);
        state.input_mode = InputMode::Search(SearchFocus::Typing);
        state.set_search_query("APPLE".to_string());

        let view = catalog_view(state.compute_viewmodel(24, 80));
        assert_eq!(view.display_items[0].highlight_ranges, vec![(4, 9)]);
        assert_eq!(view.search_bar.map(|s| s.query), Some("APPLE".to_string()));
    }

    #[test]
    fn long_names_are_truncated_by_characters() {
        let state = state(&["Ягода-малина-земляника-клубника-черника"]);
        let view = catalog_view(state.compute_viewmodel(24, 80));
        let name = &view.display_items[0].name;
        assert!(name.ends_with("..."));
        assert_eq!(name.chars().count(), NAME_COLUMN_WIDTH - 2);
    }

    #[test]
    fn names_fit_narrow_panes() {
        assert_eq!(name_column_width(80), NAME_COLUMN_WIDTH);
        assert_eq!(name_column_width(40), 18);
        assert_eq!(name_column_width(10), 8);

        let state = state(&["Watermelon", "Kiwi"]);
        let view = catalog_view(state.compute_viewmodel(24, 30));
        assert_eq!(view.display_items[0].name, "Wat...");
        assert_eq!(view.display_items[1].name, "Kiwi");
    }

    #[test]
    fn failed_images_keep_the_loading_badge() {
        let mut state = state(&["Apple", "Kiwi"]);
        let (apple, kiwi) = (state.items[0].id, state.items[1].id);
        state.web_access = true;
        state.request_images(&[apple, kiwi]);
        state.images.resolve(&apple, ImageStatus::Loaded { bytes: 2048 });
        state.images.resolve(&kiwi, ImageStatus::Failed { status: Some(500) });

        let view = catalog_view(state.compute_viewmodel(24, 80));
        assert_eq!(view.display_items[0].image, "▣ 2.0 KB");
        assert!(view.display_items[0].image_ready);
        assert_eq!(view.display_items[1].image, "◌ loading");
        assert!(!view.display_items[1].image_ready);
    }

    #[test]
    fn empty_search_result_has_message() {
        let mut state = state(&["Apple"]);
        state.set_search_query("zzz".to_string());
        let view = catalog_view(state.compute_viewmodel(24, 80));
        assert!(view.display_items.is_empty());
        assert_eq!(
            view.empty_state.map(|e| e.message),
            Some("No fruits match 'zzz'".to_string())
        );
    }

    #[test]
    fn header_counts_filtered_items() {
        let mut state = state(&["Apple", "Pineapple", "Kiwi"]);
        state.set_search_query("apple".to_string());
        assert_eq!(state.compute_viewmodel(24, 80).header.title, " Fruits Catalog (2) ");
    }

    #[test]
    fn images_wait_for_web_access() {
        let mut state = state(&["Apple"]);
        let ids: Vec<Uuid> = state.items.iter().map(|i| i.id).collect();
        assert!(state.request_images(&ids).is_empty());

        state.web_access = true;
        let actions = state.request_images(&ids);
        assert_eq!(
            actions,
            vec![Action::FetchImage {
                id: ids[0],
                url: "https://img.example/?Apple".to_string()
            }]
        );
        assert!(state.request_images(&ids).is_empty());
    }

    #[test]
    fn password_mask_has_one_bullet_per_grapheme() {
        let mut state = state(&["Apple"]);
        state.screen = Screen::SignUp;
        state.form.focus = FormField::Password;
        for c in "e\u{301}".repeat(6).chars() {
            state.form.push_char(c);
        }

        let Body::SignUp(view) = state.compute_viewmodel(24, 80).body else {
            panic!("expected sign-up body");
        };
        assert_eq!(view.fields[2].value, "••••••");
        assert_eq!(view.fields[2].error, None);
    }

    #[test]
    fn password_is_masked_in_form_view() {
        let mut state = state(&["Apple"]);
        state.screen = Screen::SignUp;
        state.form.focus = FormField::Password;
        for c in "hunter2".chars() {
            state.form.push_char(c);
        }

        let Body::SignUp(view) = state.compute_viewmodel(24, 80).body else {
            panic!("expected sign-up body");
        };
        assert_eq!(view.fields[2].value, "•••••••");
        assert!(view.fields[2].is_focused);
        assert_eq!(view.fields[2].error, None);
        assert!(view.alert.is_none());
    }
}
