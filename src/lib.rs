//! Fruitstand: a Zellij plugin with a fruit catalog and a sign-up form.
//!
//! Fruitstand is a small storefront rendered inside a terminal pane:
//! - Case-insensitive, Unicode-aware search over a catalog of fruit cards
//! - A detail screen per card with its price, description and image status
//! - A sign-up form validating email and password on every keystroke
//! - Card images fetched through the host's web requests, with placeholders

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! Dependencies point downward; nothing below `app` knows about Zellij events:
//!
//! ```text
//!  main.rs (wasm only)   keys, web results, permissions -> Event
//!        |               Action -> hide_self / web_request / AccountService
//!        v
//!  app/                  AppState, handle_event, map_key, sign-up form, image board
//!        |
//!        +--> ui/              view model -> components -> Frame -> stdout
//!        +--> account/         AccountService hook for accepted sign-ups
//!        +--> infrastructure/  /host paths, web request context
//!        v
//!  domain/               catalog, filter, validators, FruitstandError
//!
//!  observability/        tracing -> OpenTelemetry -> rotated OTLP-JSON file
//! ```
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/fruitstand.wasm" {
//!         fruits "Apple,Kiwi,Mango"
//!         image_base_url "https://source.unsplash.com/500x300/?"
//!         load_images "true"
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, initialize tracing,
//!    build the catalog and `AppState`, request permissions, subscribe to events
//! 2. **Permission Grant**: the reducer emits one image fetch per card
//! 3. **Web Results**: each result is matched back to its card by identifier
//! 4. **Input**: keys become reducer events; actions run in the shim
//!
//! # Example
//!
//! ```rust
//! use fruitstand::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! for event in [Event::SearchMode, Event::Char('k'), Event::Char('i')] {
//!     handle_event(&mut state, &event)?;
//! }
//! assert_eq!(state.filtered_items.len(), 1);
//! # Ok::<(), fruitstand::FruitstandError>(())
//! ```
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Native**: the library and its tests build on any host; the binary only
//!   prints a hint there

pub mod account;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, Screen, SearchFocus};
pub use domain::{CatalogItem, FruitstandError, Result, ValidationResult};
pub use ui::Theme;

use domain::{build_catalog, DEFAULT_FRUITS, DEFAULT_IMAGE_BASE_URL};
use observability::rotation::{DEFAULT_BACKUPS, DEFAULT_MAX_BYTES};
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Every key is optional; unparseable values fall back to their defaults.
///
/// ```kdl
/// plugin location="file:/path/to/fruitstand.wasm" {
///     fruits "Apple,Kiwi"
///     image_base_url ""
///     load_images "false"
///     theme "catppuccin-mocha"
///     theme_file "~/themes/orchard.toml"
///     trace_level "fruitstand=debug"
///     trace_max_bytes "1048576"
///     trace_backups "4"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Names the catalog is built from, in display order.
    pub fruits: Vec<String>,

    /// Prefix the card title is appended to for its image reference.
    ///
    /// Empty disables image references altogether.
    pub image_base_url: String,

    /// Whether card images are fetched through the host.
    pub load_images: bool,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` maps onto the host home.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for the trace file. Default: `"info"`
    pub trace_level: String,

    /// Size at which the trace file rotates.
    pub trace_max_bytes: u64,

    /// Rotated trace files kept.
    pub trace_backups: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fruits: DEFAULT_FRUITS.iter().map(ToString::to_string).collect(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            load_images: true,
            theme_name: None,
            theme_file: None,
            trace_level: "info".to_string(),
            trace_max_bytes: DEFAULT_MAX_BYTES,
            trace_backups: DEFAULT_BACKUPS,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `fruits`: comma-separated, trimmed, blanks dropped; an empty list keeps the default
    /// - `image_base_url`: taken verbatim (empty disables images)
    /// - `load_images`: `true`/`false`, `yes`/`no`, `1`/`0`
    /// - `theme`, `theme_file`: taken verbatim
    /// - `trace_level`: taken verbatim, blank keeps `"info"`
    /// - `trace_max_bytes` (> 0), `trace_backups`: integers
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use fruitstand::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("fruits".to_string(), "Kiwi, Mango,,".to_string());
    /// map.insert("load_images".to_string(), "no".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.fruits, vec!["Kiwi", "Mango"]);
    /// assert!(!config.load_images);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let fruits = config
            .get("fruits")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|names: &Vec<String>| !names.is_empty())
            .unwrap_or(defaults.fruits);

        let load_images = config
            .get("load_images")
            .and_then(|s| parse_bool(s))
            .unwrap_or(defaults.load_images);

        let trace_level = config
            .get("trace_level")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map_or(defaults.trace_level, String::from);

        let trace_max_bytes = config
            .get("trace_max_bytes")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|bytes| *bytes > 0)
            .unwrap_or(defaults.trace_max_bytes);

        let trace_backups = config
            .get("trace_backups")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(defaults.trace_backups);

        Self {
            fruits,
            image_base_url: config
                .get("image_base_url")
                .cloned()
                .unwrap_or(defaults.image_base_url),
            load_images,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level,
            trace_max_bytes,
            trace_backups,
        }
    }

    /// Resolves the theme: `theme_file`, then `theme`, then the default.
    ///
    /// Load failures are logged and fall back to the default theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" => Some(false),
        _ => None,
    }
}

/// Builds the initial application state from configuration.
///
/// The catalog is built once here and never changes afterwards. Tracing is not
/// touched; the plugin shim installs it before calling this.
///
/// ```rust
/// use fruitstand::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.items.len(), 12);
/// assert!(!state.web_access);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        fruit_count = config.fruits.len(),
        load_images = config.load_images,
        "initializing fruitstand plugin"
    );

    let items = build_catalog(&config.fruits, &config.image_base_url);
    let mut state = AppState::new(items, config.theme());
    state.load_images = config.load_images;
    state
}
