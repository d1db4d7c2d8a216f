//! Contact form submissions.
//!
//! The site's contact form is a stub: a submission is validated, logged, and
//! acknowledged. Nothing is sent anywhere.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// The input string is empty.
    #[error("email cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("email must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input has no `@` separating a local part from a domain.
    #[error("email must look like local@domain")]
    Malformed,
}

/// A loosely validated email address.
///
/// Only the shape `local@domain` is checked; deliverability is not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Maximum length of an email address (RFC 5321).
    pub const MAX_LENGTH: usize = 254;

    /// Parse an email address, trimming whitespace and lowercasing it.
    ///
    /// # Errors
    ///
    /// Returns an [`EmailError`] if the input is empty, too long, or has an
    /// empty local part or domain.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        let normalized = s.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(EmailError::Empty);
        }
        if normalized.len() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }
        match normalized.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self(normalized))
            }
            _ => Err(EmailError::Malformed),
        }
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors that can occur when validating a [`ContactSubmission`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// The sender's name is blank.
    #[error("name is required")]
    MissingName,
    /// The message body is blank.
    #[error("message is required")]
    MissingMessage,
    /// The email address is invalid.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// A validated contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: Email,
    pub message: String,
}

impl ContactSubmission {
    /// Validate raw form fields into a submission.
    ///
    /// # Errors
    ///
    /// Returns a [`ContactError`] if the name or message is blank or the
    /// email address is invalid.
    pub fn new(name: &str, email: &str, message: &str) -> Result<Self, ContactError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = Email::parse(email)?;
        let message = message.trim();
        if message.is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(Self {
            name: name.to_owned(),
            email,
            message: message.to_owned(),
        })
    }
}
