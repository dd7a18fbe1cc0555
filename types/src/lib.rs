//! Core domain types for SkillScout.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod sanitize;
mod text;
pub mod ui;

pub use sanitize::sanitize_field_text;
pub use text::{truncate_to_fit, truncate_with_ellipsis};

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Longest contact message accepted, counted in Unicode scalar values.
pub const MAX_MESSAGE_CHARS: usize = 1000;

// ============================================================================
// Resources
// ============================================================================

/// A titled, described, linked external learning resource.
///
/// Records are compiled into the binary; they have no identity beyond their
/// position in a catalog list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceRecord {
    pub title: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

impl ResourceRecord {
    #[must_use]
    pub const fn new(title: &'static str, url: &'static str, description: &'static str) -> Self {
        Self {
            title,
            url,
            description,
        }
    }
}

/// A normalized catalog key: lowercase, with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SkillKey(String);

impl SkillKey {
    /// Normalize raw user input into a key.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        Self(raw.to_lowercase().trim().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SkillKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Contact form validation
// ============================================================================

/// Per-field validation failure. `Display` is the user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Email is required.")]
    EmailRequired,
    #[error("Please enter a valid email address.")]
    EmailInvalid,
    #[error("Message cannot be empty.")]
    MessageEmpty,
    #[error("Message must be less than {max} characters.")]
    MessageTooLong { max: usize },
}

/// Outcome of validating one contact submission.
///
/// Created on submit and discarded once the errors have been shown; both
/// field errors may be present at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub email_error: Option<FieldError>,
    pub message_error: Option<FieldError>,
}

impl ValidationResult {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.email_error.is_none() && self.message_error.is_none()
    }
}
