//! Infrastructure layer for the Zellij sandbox and host services.
//!
//! This module provides the pieces that sit next to the host API without
//! calling it: path handling for the `/host` mount and the translation of web
//! request results into reducer events, plus the escaping of image URLs.

pub mod paths;
pub mod web;

pub use paths::{expand_tilde, get_data_dir};
pub use web::{image_event, request_context, request_url, REQUIRED_PERMISSIONS};
