//! Error types for the fruitstand plugin.
//!
//! This module defines the centralized error type [`FruitstandError`] and a type alias
//! [`Result`] used throughout the crate. Validation outcomes are not errors: they are
//! modelled by [`crate::domain::ValidationResult`] and never travel through this type.

use thiserror::Error;

/// The main error type for fruitstand operations.
///
/// # Examples
///
/// ```
/// use fruitstand::FruitstandError;
///
/// fn check_base_url(url: &str) -> Result<(), FruitstandError> {
///     if url.contains(' ') {
///         return Err(FruitstandError::Config(format!("invalid image_base_url: {url}")));
///     }
///     Ok(())
/// }
///
/// assert!(check_base_url("https://example.com/?").is_ok());
/// ```
#[derive(Debug, Error)]
pub enum FruitstandError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration value is malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The account-creation hook rejected or failed a submission.
    #[error("Account service error: {0}")]
    Account(String),
}

/// A specialized `Result` type for fruitstand operations.
pub type Result<T> = std::result::Result<T, FruitstandError>;
