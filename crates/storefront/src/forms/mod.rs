//! Fixed-shape form records and their validation.
//!
//! Each form is a plain struct filled in by the front-end and checked field
//! by field before anything is submitted. A failed check never produces a
//! partial result; the caller keeps the form and re-prompts.

use thiserror::Error;

pub mod auth;
pub mod listing;

pub use auth::{LoginForm, SignUpForm};
pub use listing::{ProductDraft, ValidDraft};

/// Errors raised while validating a form submission.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was left blank.
    #[error("Please fill all fields ({field} is missing)")]
    MissingField { field: &'static str },

    /// Sign-up password and confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// The category is not one the marketplace offers.
    #[error("Unknown category: {0}")]
    InvalidCategory(String),

    /// The price is not a non-negative number.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),
}

impl ValidationError {
    /// Shorthand for [`ValidationError::MissingField`].
    #[must_use]
    pub const fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }
}

/// Only empty text counts as missing; content is never altered.
fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::missing(field))
    } else {
        Ok(())
    }
}
