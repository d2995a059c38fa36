//! Contact-form submission and its validity predicate.
//!
//! Validation runs in two ordered steps: required fields, then email shape.
//! Nothing is observable outside this module until both pass.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Characters excluded from every part of an address: `@` plus the
/// ECMAScript whitespace set. Unicode `White_Space` (the regex crate's `\s`)
/// differs from it at U+0085 and U+FEFF.
const NOT_SPACE_OR_AT: &str = r"[^@\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

/// `local@domain.tld` shape: no whitespace and no extra `@` in any part.
///
/// Deliberately loose. The domain part backtracks, so `a@b.c.d` passes too.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    let part = NOT_SPACE_OR_AT;
    Regex::new(&format!(r"^{part}+@{part}+\.{part}+$")).expect("email pattern compiles")
});

/// Raw contact payload as it arrives on the wire.
///
/// Every field is optional here so that absent fields are reported by
/// validation (`missing_fields`) instead of by the JSON extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl ContactRequest {
    /// Convenience constructor for the common all-fields case.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            subject: subject.map(str::to_string),
            message: Some(message.into()),
        }
    }
}

/// Why a submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `name`, `email`, or `message` is empty or absent
    #[error("Name, email, and message are required")]
    MissingFields,
    /// `email` does not have the `local@domain.tld` shape
    #[error("Please provide a valid email address")]
    InvalidEmail,
}

impl ValidationError {
    /// Machine-readable reason code.
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::MissingFields => "missing_fields",
            ValidationError::InvalidEmail => "invalid_email",
        }
    }
}

/// An email address that passed the shape check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(s: String) -> Result<Self, ValidationError> {
        if EMAIL_SHAPE.is_match(&s) {
            Ok(Self(s))
        } else {
            Err(ValidationError::InvalidEmail)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated contact submission. Transient: logged and handed to a sink,
/// never stored by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: EmailAddress,
    pub subject: Option<String>,
    pub message: String,
}

impl ContactSubmission {
    /// Validate a raw request.
    ///
    /// Required fields are checked before the email shape, so a request that
    /// is missing `message` and has a bad email reports `MissingFields`.
    pub fn parse(request: ContactRequest) -> Result<Self, ValidationError> {
        let ContactRequest {
            name,
            email,
            subject,
            message,
        } = request;

        let (name, email, message) = match (non_empty(name), non_empty(email), non_empty(message))
        {
            (Some(name), Some(email), Some(message)) => (name, email, message),
            _ => return Err(ValidationError::MissingFields),
        };

        let email = EmailAddress::parse(email)?;

        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}
