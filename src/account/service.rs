//! Account service trait and the diagnostic implementation.

use crate::app::Event;
use crate::domain::error::{FruitstandError, Result};
use chrono::{DateTime, Utc};

/// Values captured from an accepted sign-up form.
#[derive(Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

// Passwords never reach logs through `?request`.
impl std::fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Confirmation returned by an [`AccountService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountReceipt {
    pub name: String,
    pub email: String,
    pub submitted_at: DateTime<Utc>,
}

/// Abstraction over whatever creates accounts from accepted submissions.
///
/// Called synchronously on the plugin thread, once per accepted submission.
pub trait AccountService: Send {
    /// Creates an account for `request`.
    ///
    /// # Errors
    ///
    /// Returns [`FruitstandError::Account`] when the service refuses or fails the
    /// request.
    fn create_account(&mut self, request: &SignUpRequest) -> Result<AccountReceipt>;
}

/// Records submissions in the trace log and accepts them.
///
/// Submissions with a blank email are refused; the form gate never produces one,
/// so that path only guards embedders calling the service directly.
#[derive(Debug, Default)]
pub struct DiagnosticAccountService {
    submissions: usize,
}

impl DiagnosticAccountService {
    /// Number of submissions accepted so far.
    #[must_use]
    pub const fn submissions(&self) -> usize {
        self.submissions
    }
}

impl AccountService for DiagnosticAccountService {
    fn create_account(&mut self, request: &SignUpRequest) -> Result<AccountReceipt> {
        if request.email.trim().is_empty() {
            return Err(FruitstandError::Account("email is required".to_string()));
        }

        self.submissions += 1;
        tracing::info!(
            username = %request.name,
            email = %request.email,
            password_len = request.password.chars().count(),
            submission = self.submissions,
            "sign-up submitted"
        );

        Ok(AccountReceipt {
            name: request.name.clone(),
            email: request.email.clone(),
            submitted_at: Utc::now(),
        })
    }
}

/// Runs `request` through `service` and turns the outcome into a reducer event.
pub fn submit(service: &mut dyn AccountService, request: &SignUpRequest) -> Event {
    match service.create_account(request) {
        Ok(receipt) => {
            tracing::debug!(email = %receipt.email, "account service accepted submission");
            Event::SignUpAccepted(receipt)
        }
        Err(e) => {
            tracing::debug!(error = %e, "account service failed");
            Event::SignUpFailed {
                error: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str) -> SignUpRequest {
        SignUpRequest {
            name: "Ana".to_string(),
            email: email.to_string(),
            password: "secret1".to_string(),
        }
    }

    #[test]
    fn debug_output_hides_password() {
        let rendered = format!("{:?}", request("ana@fruit.co"));
        assert!(rendered.contains("ana@fruit.co"));
        assert!(!rendered.contains("secret1"));
    }

    #[test]
    fn diagnostic_service_accepts_and_counts() {
        let mut service = DiagnosticAccountService::default();
        let event = submit(&mut service, &request("ana@fruit.co"));
        match event {
            Event::SignUpAccepted(receipt) => {
                assert_eq!(receipt.name, "Ana");
                assert_eq!(receipt.email, "ana@fruit.co");
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert_eq!(service.submissions(), 1);
    }

    #[test]
    fn blank_email_is_refused() {
        let mut service = DiagnosticAccountService::default();
        let event = submit(&mut service, &request("  "));
        assert_eq!(
            event,
            Event::SignUpFailed {
                error: "Account service error: email is required".to_string()
            }
        );
        assert_eq!(service.submissions(), 0);
    }
}
