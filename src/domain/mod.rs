//! Domain layer for the fruitstand plugin.
//!
//! Pure data and functions with no dependency on Zellij APIs: the catalog data
//! source, the title filter and the sign-up validators. Every function here is
//! total and side-effect free apart from debug tracing.
//!
//! # Organization
//!
//! - [`catalog`]: Catalog card model and construction from a name list
//! - [`search`]: Case-insensitive title filter and match ranges
//! - [`validation`]: Email/password classifiers and the submission gate
//! - [`error`]: Error types and result alias
//!
//! # Examples
//!
//! ```
//! use fruitstand::domain::{build_catalog, filter, DEFAULT_FRUITS, DEFAULT_IMAGE_BASE_URL};
//!
//! let items = build_catalog(&DEFAULT_FRUITS, DEFAULT_IMAGE_BASE_URL);
//! let matches = filter(&items, "an");
//! assert!(matches.iter().any(|item| item.title == "Banana"));
//! ```

pub mod catalog;
pub mod error;
pub mod search;
pub mod validation;

pub use catalog::{
    build_catalog, CatalogItem, CURRENCY, DEFAULT_FRUITS, DEFAULT_IMAGE_BASE_URL, UNIT_PRICE,
};
pub use error::{FruitstandError, Result};
pub use search::filter;
pub use validation::{
    can_submit, validate_email, validate_password, ValidationResult, GENERIC_FORM_ERROR,
};
