//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! plugin runtime (main.rs) and the domain/account layers. It implements the
//! event-driven architecture that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──── Web Results / Account Hook ───┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`form`]: Sign-up form fields, validation status and submission gate
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`images`]: Per-card image loading status
//! - [`keys`]: Host key events mapped to reducer events per screen
//! - [`modes`]: Screen, input and form focus state machine types
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use fruitstand::app::{handle_event, AppState, Event};
//! use fruitstand::ui::Theme;
//!
//! let mut state = AppState::new(vec![], Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(should_render && actions.is_empty());
//! # Ok::<(), fruitstand::FruitstandError>(())
//! ```

pub mod actions;
pub mod form;
pub mod handler;
pub mod images;
pub mod keys;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use form::{FieldStatus, SignUpForm, Submission};
pub use handler::{handle_event, Event};
pub use images::{ImageBoard, ImageStatus};
pub use keys::map_key;
pub use modes::{FormField, InputMode, Screen, SearchFocus, Tab};
pub use state::AppState;
