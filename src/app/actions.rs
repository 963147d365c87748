//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! reducer itself never touches the host: closing the pane, issuing web requests
//! for card images and calling the account hook all happen in the plugin shim.
//!
//! # Example
//!
//! ```rust
//! use fruitstand::app::Action;
//! use uuid::Uuid;
//!
//! let actions = vec![Action::FetchImage {
//!     id: Uuid::new_v4(),
//!     url: "https://source.unsplash.com/500x300/?Kiwi".to_string(),
//! }];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::account::SignUpRequest;
use uuid::Uuid;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Asks the host to download a card image.
    ///
    /// The card identifier travels in the request context so the result can be
    /// matched back to its card.
    FetchImage {
        /// Card the image belongs to.
        id: Uuid,
        /// Image reference to request.
        url: String,
    },

    /// Hands an accepted sign-up form to the account hook.
    SubmitSignUp(SignUpRequest),
}
