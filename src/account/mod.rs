//! Account-creation hook for accepted sign-up submissions.
//!
//! The application has no authentication backend. A submission that passes the
//! gate is handed to an [`AccountService`]; the built-in
//! [`DiagnosticAccountService`] only records the submission in the trace log and
//! returns a receipt. Embedders can supply their own implementation.
//!
//! # Example
//!
//! ```
//! use fruitstand::account::{AccountService, DiagnosticAccountService, SignUpRequest};
//!
//! let mut service = DiagnosticAccountService::default();
//! let request = SignUpRequest {
//!     name: "Ana".to_string(),
//!     email: "ana@fruit.co".to_string(),
//!     password: "secret1".to_string(),
//! };
//! let receipt = service.create_account(&request)?;
//! assert_eq!(receipt.email, "ana@fruit.co");
//! # Ok::<(), fruitstand::FruitstandError>(())
//! ```

pub mod service;

pub use service::{submit, AccountReceipt, AccountService, DiagnosticAccountService, SignUpRequest};
