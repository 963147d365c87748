//! Sign-up form state.
//!
//! [`SignUpForm`] owns the three text fields, their validation status, the
//! focused element and the generic error alert. Email and password are
//! re-validated on every change; a field that has never been edited stays
//! [`FieldStatus::Untouched`] and shows no message. The whole structure is
//! replaced with a fresh one whenever the sign-up screen is left.

use crate::account::{AccountReceipt, SignUpRequest};
use crate::app::modes::FormField;
use crate::domain::{can_submit, validate_email, validate_password, ValidationResult};

/// Validation state of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    /// Never edited since the form was opened.
    #[default]
    Untouched,
    /// Result of validating the latest value.
    Checked(ValidationResult),
}

impl FieldStatus {
    /// Error message to show under the field, if any.
    #[must_use]
    pub const fn error(self) -> Option<&'static str> {
        match self {
            Self::Untouched => None,
            Self::Checked(result) => result.message(),
        }
    }
}

/// Outcome of pressing the submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Both fields valid; hand the request to the account hook.
    Accepted(SignUpRequest),
    /// At least one field invalid; show the generic alert.
    Rejected,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub email_status: FieldStatus,
    pub password_status: FieldStatus,
    pub focus: FormField,
    pub showing_alert: bool,
    pub receipt: Option<AccountReceipt>,
}

impl SignUpForm {
    #[must_use]
    pub fn email_error(&self) -> Option<&'static str> {
        self.email_status.error()
    }

    #[must_use]
    pub fn password_error(&self) -> Option<&'static str> {
        self.password_status.error()
    }

    /// Current text of a field; the submit button has none.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::Submit => "",
        }
    }

    /// Replaces the value of `field` and re-validates it.
    ///
    /// Returns `false` when `field` is not a text field.
    pub fn set_value(&mut self, field: FormField, value: String) -> bool {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => {
                self.email_status = FieldStatus::Checked(validate_email(&value));
                self.email = value;
            }
            FormField::Password => {
                self.password_status = FieldStatus::Checked(validate_password(&value));
                self.password = value;
            }
            FormField::Submit => return false,
        }

        tracing::trace!(
            field = ?field,
            email_status = ?self.email_status,
            password_status = ?self.password_status,
            "form field changed"
        );
        true
    }

    /// Appends a character to the focused field.
    pub fn push_char(&mut self, c: char) -> bool {
        let field = self.focus;
        if !field.is_text() {
            return false;
        }
        let mut value = self.value(field).to_string();
        value.push(c);
        self.set_value(field, value)
    }

    /// Removes the last character of the focused field.
    pub fn pop_char(&mut self) -> bool {
        let field = self.focus;
        if !field.is_text() {
            return false;
        }
        let mut value = self.value(field).to_string();
        if value.pop().is_none() {
            return false;
        }
        self.set_value(field, value)
    }

    /// Evaluates the submission gate on the current values.
    ///
    /// Fields that were never edited are judged on their (empty) values, so an
    /// untouched form is rejected.
    #[must_use]
    pub fn submit(&self) -> Submission {
        let email = validate_email(&self.email);
        let password = validate_password(&self.password);

        if can_submit(email, password) {
            Submission::Accepted(SignUpRequest {
                name: self.name.clone(),
                email: self.email.clone(),
                password: self.password.clone(),
            })
        } else {
            tracing::debug!(email = ?email, password = ?password, "submission gate refused form");
            Submission::Rejected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ValidationResult::{Invalid, Missing, TooShort, Valid};

    fn type_into(form: &mut SignUpForm, field: FormField, text: &str) {
        form.focus = field;
        for c in text.chars() {
            form.push_char(c);
        }
    }

    #[test]
    fn untouched_fields_show_no_errors() {
        let form = SignUpForm::default();
        assert_eq!(form.email_error(), None);
        assert_eq!(form.password_error(), None);
        assert_eq!(form.focus, FormField::Name);
    }

    #[test]
    fn email_is_revalidated_on_every_keystroke() {
        let mut form = SignUpForm::default();
        form.focus = FormField::Email;

        form.push_char('a');
        assert_eq!(form.email_status, FieldStatus::Checked(Invalid));
        assert_eq!(form.email_error(), Some("Invalid email"));

        type_into(&mut form, FormField::Email, "@fruit.co");
        assert_eq!(form.email, "a@fruit.co");
        assert_eq!(form.email_status, FieldStatus::Checked(Valid));

        for _ in 0..form.email.len() {
            form.pop_char();
        }
        assert_eq!(form.email_status, FieldStatus::Checked(Missing));
        assert_eq!(form.email_error(), Some("Email is required"));
    }

    #[test]
    fn password_error_clears_at_six_characters() {
        let mut form = SignUpForm::default();
        type_into(&mut form, FormField::Password, "12345");
        assert_eq!(form.password_status, FieldStatus::Checked(TooShort));
        assert_eq!(form.password_error(), Some("Password must be at least 6 digits"));

        form.push_char('6');
        assert_eq!(form.password_error(), None);
    }

    #[test]
    fn name_is_never_validated() {
        let mut form = SignUpForm::default();
        type_into(&mut form, FormField::Name, "Kiwi Lover");
        assert_eq!(form.name, "Kiwi Lover");
        assert_eq!(form.email_status, FieldStatus::Untouched);
        assert_eq!(form.password_status, FieldStatus::Untouched);
    }

    #[test]
    fn submit_button_ignores_text() {
        let mut form = SignUpForm::default();
        form.focus = FormField::Submit;
        assert!(!form.push_char('x'));
        assert!(!form.pop_char());
        assert!(!form.set_value(FormField::Submit, "x".to_string()));
    }

    #[test]
    fn untouched_form_is_rejected() {
        assert_eq!(SignUpForm::default().submit(), Submission::Rejected);
    }

    #[test]
    fn valid_form_produces_request() {
        let mut form = SignUpForm::default();
        type_into(&mut form, FormField::Name, "Ana");
        type_into(&mut form, FormField::Email, "ana@fruit.co");
        type_into(&mut form, FormField::Password, "secret1");

        match form.submit() {
            Submission::Accepted(request) => {
                assert_eq!(request.name, "Ana");
                assert_eq!(request.email, "ana@fruit.co");
                assert_eq!(request.password, "secret1");
            }
            Submission::Rejected => panic!("expected accepted submission"),
        }
    }

    #[test]
    fn one_bad_field_rejects_submission() {
        let mut form = SignUpForm::default();
        type_into(&mut form, FormField::Email, "ana@fruit.co");
        type_into(&mut form, FormField::Password, "123");
        assert_eq!(form.submit(), Submission::Rejected);
    }
}
