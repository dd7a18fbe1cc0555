//! Contact form validation.

use std::sync::LazyLock;

use regex::Regex;
use skillscout_types::{FieldError, MAX_MESSAGE_CHARS, ValidationResult};

// local-part @ domain . tld, no whitespace and no extra '@' in any segment.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Whether `email` looks like `local@domain.tld`.
///
/// Deliberately permissive: it checks shape only, so some undeliverable
/// addresses pass and some exotic valid ones fail.
#[must_use]
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validate both contact fields as given (no trimming).
///
/// Both field errors are reported when both fields are bad.
#[must_use]
pub fn validate_contact(email: &str, message: &str) -> ValidationResult {
    let email_error = if email.is_empty() {
        Some(FieldError::EmailRequired)
    } else if !validate_email(email) {
        Some(FieldError::EmailInvalid)
    } else {
        None
    };

    let message_error = if message.is_empty() {
        Some(FieldError::MessageEmpty)
    } else if message.chars().count() > MAX_MESSAGE_CHARS {
        Some(FieldError::MessageTooLong {
            max: MAX_MESSAGE_CHARS,
        })
    } else {
        None
    };

    ValidationResult {
        email_error,
        message_error,
    }
}

/// Proof that a contact message passed validation.
///
/// Holds the trimmed field values that were validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    email: String,
    message: String,
}

impl ContactSubmission {
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Trim raw field contents and validate them.
pub fn validate_submission(
    email: &str,
    message: &str,
) -> Result<ContactSubmission, ValidationResult> {
    let email = email.trim();
    let message = message.trim();
    let result = validate_contact(email, message);
    if result.is_valid() {
        Ok(ContactSubmission {
            email: email.to_string(),
            message: message.to_string(),
        })
    } else {
        Err(result)
    }
}
