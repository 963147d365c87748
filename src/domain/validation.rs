//! Sign-up field validation and the submission gate.
//!
//! Validators are pure classifiers: invalid input is an expected outcome carried by
//! [`ValidationResult`], never an error. The gate combines the two field results
//! into a single yes/no answer; callers report a failure with one generic message.

use regex::Regex;
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

/// Minimum password length in user-perceived characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Message shown when the submission gate refuses the form.
pub const GENERIC_FORM_ERROR: &str = "Please enter valid information";

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

/// Classification of a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    /// Required value is empty.
    Missing,
    /// Value is present but malformed.
    Invalid,
    /// Value is shorter than the minimum length.
    TooShort,
    /// Value passes every rule.
    Valid,
}

impl ValidationResult {
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// User-facing message for a failed check, `None` when valid.
    #[must_use]
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Missing => Some("Email is required"),
            Self::Invalid => Some("Invalid email"),
            Self::TooShort => Some("Password must be at least 6 digits"),
            Self::Valid => None,
        }
    }
}

/// Classifies an email address syntactically.
///
/// ```
/// use fruitstand::domain::{validate_email, ValidationResult};
///
/// assert_eq!(validate_email(""), ValidationResult::Missing);
/// assert_eq!(validate_email("not-an-email"), ValidationResult::Invalid);
/// assert_eq!(validate_email("kiwi@fruit.co"), ValidationResult::Valid);
/// ```
#[must_use]
pub fn validate_email(value: &str) -> ValidationResult {
    if value.is_empty() {
        ValidationResult::Missing
    } else if email_regex().is_match(value) {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid
    }
}

/// Classifies a password by length alone.
///
/// ```
/// use fruitstand::domain::{validate_password, ValidationResult};
///
/// assert_eq!(validate_password("12345"), ValidationResult::TooShort);
/// assert_eq!(validate_password("123456"), ValidationResult::Valid);
/// ```
#[must_use]
pub fn validate_password(value: &str) -> ValidationResult {
    if value.graphemes(true).count() < MIN_PASSWORD_LEN {
        ValidationResult::TooShort
    } else {
        ValidationResult::Valid
    }
}

/// Returns `true` only when both fields are valid.
#[must_use]
pub const fn can_submit(email: ValidationResult, password: ValidationResult) -> bool {
    email.is_valid() && password.is_valid()
}

#[cfg(test)]
mod tests {
    use super::ValidationResult::{Invalid, Missing, TooShort, Valid};
    use super::*;

    #[test]
    fn empty_email_is_missing() {
        assert_eq!(validate_email(""), Missing);
    }

    #[test]
    fn well_formed_emails_are_valid() {
        for email in [
            "a@b.co",
            "first.last@example.com",
            "user+tag@sub.domain.org",
            "under_score%x@my-host.io",
        ] {
            assert_eq!(validate_email(email), Valid, "{email}");
        }
    }

    #[test]
    fn malformed_emails_are_invalid() {
        for email in [
            "not-an-email",
            "@example.com",
            "user@",
            "user@example",
            "user@example.c",
            "user@example.c0m",
            "user name@example.com",
            " user@example.com",
            "user@example.com ",
            "a@b@c.com",
        ] {
            assert_eq!(validate_email(email), Invalid, "{email}");
        }
    }

    #[test]
    fn single_letter_top_level_label_is_rejected() {
        assert_eq!(validate_email("a@b.c"), Invalid);
    }

    #[test]
    fn password_length_boundary() {
        assert_eq!(validate_password(""), TooShort);
        assert_eq!(validate_password("12345"), TooShort);
        assert_eq!(validate_password("123456"), Valid);
        assert_eq!(validate_password("a much longer passphrase"), Valid);
    }

    #[test]
    fn password_counts_perceived_characters() {
        // five family emoji are five characters despite many code points
        assert_eq!(validate_password(&"👨‍👩‍👧".repeat(5)), TooShort);
        assert_eq!(validate_password("ééééé\u{301}"), TooShort);
        assert_eq!(validate_password("çççççç"), Valid);
    }

    #[test]
    fn gate_requires_both_fields_valid() {
        assert!(can_submit(Valid, Valid));
        assert!(!can_submit(Invalid, Valid));
        assert!(!can_submit(Missing, TooShort));
        assert!(!can_submit(Valid, TooShort));
    }

    #[test]
    fn messages_only_for_failures() {
        assert_eq!(Missing.message(), Some("Email is required"));
        assert_eq!(Invalid.message(), Some("Invalid email"));
        assert_eq!(TooShort.message(), Some("Password must be at least 6 digits"));
        assert_eq!(Valid.message(), None);
    }
}
