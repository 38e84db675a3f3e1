//! Login-form field rules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page runs these on blur to drive inline advisory messages. They
//! never gate submission; the form only requires both fields to be non-empty.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Minimum password length, in characters, before the length warning clears.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Local part, a single `@`, and a domain with at least one interior dot.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Rejection produced by [`validate_email`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("must be a well-formed email address")]
    Malformed,
}

/// Check that `value` looks like `local@domain.tld`.
///
/// # Errors
///
/// Returns [`EmailError::Malformed`] for any other shape, including the empty
/// string and values with surrounding whitespace.
pub fn validate_email(value: &str) -> Result<(), EmailError> {
    if EMAIL_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(EmailError::Malformed)
    }
}

/// A single advisory password-strength finding.
///
/// Variant order is the display priority used by the login form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordWarning {
    TooShort,
    MissingUppercase,
    MissingDigit,
}

impl PasswordWarning {
    /// User-facing text for this warning.
    pub fn message(self) -> &'static str {
        match self {
            Self::TooShort => "must be at least 8 characters",
            Self::MissingUppercase => "must contain at least one uppercase letter",
            Self::MissingDigit => "must contain at least one digit",
        }
    }
}

impl fmt::Display for PasswordWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Evaluate every strength rule independently and collect the failures.
///
/// The result is ordered length, uppercase, digit. An empty vector means the
/// password satisfies all rules.
pub fn validate_password_strength(value: &str) -> Vec<PasswordWarning> {
    let mut warnings = Vec::with_capacity(3);
    if value.chars().count() < MIN_PASSWORD_LEN {
        warnings.push(PasswordWarning::TooShort);
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        warnings.push(PasswordWarning::MissingUppercase);
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        warnings.push(PasswordWarning::MissingDigit);
    }
    warnings
}
