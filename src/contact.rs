//! Contact form validation.
//!
//! The generated site never sends mail. A submission is checked locally and,
//! when valid, turned into a [`Confirmation`] that echoes what was entered.
//! The same rules run in the browser via `static/contact.js`, and the
//! `contact` CLI command exposes them for scripted checks.
//!
//! ## Rules
//!
//! 1. `name`, `email`, and `message` must all be non-blank.
//! 2. `email` must contain `@`, and the part after the last `@` must contain
//!    a `.`. This is a shape check, not RFC 5322 validation.

use serde::Serialize;
use thiserror::Error;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill all fields before sending.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please provide a valid email address.";
pub const CONFIRMATION_MESSAGE: &str = "Thanks, your message was recorded locally.";
pub const DELIVERY_NOTE: &str =
    "This site does not forward messages. Connect an email API to enable delivery.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill all fields before sending. Missing: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Please provide a valid email address.")]
    InvalidEmail,
}

impl ContactError {
    /// The inline message shown next to the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            ContactError::MissingFields(_) => MISSING_FIELDS_MESSAGE,
            ContactError::InvalidEmail => INVALID_EMAIL_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Local confirmation state for an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

impl Confirmation {
    /// `From: name, email` line shown under the confirmation.
    pub fn from_line(&self) -> String {
        format!("From: {}, {}", self.from_name, self.from_email)
    }
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn validate(&self) -> Result<Confirmation, ContactError> {
        let missing: Vec<&'static str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();
        if !missing.is_empty() {
            return Err(ContactError::MissingFields(missing));
        }

        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(Confirmation {
            from_name: self.name.trim().to_string(),
            from_email: self.email.trim().to_string(),
            message: self.message.clone(),
        })
    }
}

/// `@` present and a `.` somewhere after the last `@`.
pub fn is_plausible_email(email: &str) -> bool {
    match email.rsplit_once('@') {
        Some((_, domain)) => domain.contains('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_complete_submission() {
        let sub = ContactSubmission::new("Ada", "a@b.com", "Hello there");
        let confirmation = sub.validate().unwrap();
        assert_eq!(confirmation.from_name, "Ada");
        assert_eq!(confirmation.from_email, "a@b.com");
        assert_eq!(confirmation.message, "Hello there");
        assert_eq!(confirmation.from_line(), "From: Ada, a@b.com");
    }

    #[test]
    fn rejects_email_without_at() {
        let sub = ContactSubmission::new("Ada", "a.b.com", "Hello");
        assert_eq!(sub.validate(), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn rejects_email_without_dot_after_at() {
        let sub = ContactSubmission::new("Ada", "a@b", "Hello");
        assert_eq!(sub.validate(), Err(ContactError::InvalidEmail));
        // A dot before the @ doesn't count.
        assert!(!is_plausible_email("first.last@localhost"));
    }

    #[test]
    fn domain_is_after_last_at() {
        assert!(is_plausible_email("odd@name@example.org"));
        assert!(!is_plausible_email("a@b.c@d"));
    }

    #[test]
    fn reports_every_missing_field() {
        let sub = ContactSubmission::new("", "   ", "Hi");
        let err = sub.validate().unwrap_err();
        assert_eq!(err, ContactError::MissingFields(vec!["name", "email"]));
        assert_eq!(err.user_message(), MISSING_FIELDS_MESSAGE);
        assert!(err.to_string().ends_with("Missing: name, email"));
    }

    #[test]
    fn missing_fields_checked_before_email_shape() {
        let sub = ContactSubmission::new("Ada", "not-an-email", "");
        assert!(matches!(sub.validate(), Err(ContactError::MissingFields(_))));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let sub = ContactSubmission::new("  Ada ", " a@b.com ", "Hi");
        let confirmation = sub.validate().unwrap();
        assert_eq!(confirmation.from_name, "Ada");
        assert_eq!(confirmation.from_email, "a@b.com");
    }
}
