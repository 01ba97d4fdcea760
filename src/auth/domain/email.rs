//! Validated email address type.

use super::AuthDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized, structurally valid email address.
///
/// Addresses are trimmed and lowercased on parse so that member lists and
/// notification recipients compare consistently regardless of how the
/// address was typed into a form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses and normalizes an email address.
    ///
    /// This is the client-side structural check performed before any remote
    /// call is attempted; the hosted provider remains the authority on
    /// whether the address belongs to an account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError::InvalidEmail`] when the value is empty,
    /// contains whitespace, or does not have the `local@domain.tld` shape.
    pub fn parse(value: &str) -> Result<Self, AuthDomainError> {
        let normalized = value.trim().to_ascii_lowercase();
        if normalized.is_empty() || normalized.chars().any(char::is_whitespace) {
            return Err(AuthDomainError::InvalidEmail(value.to_owned()));
        }
        let Some((local, domain)) = normalized.split_once('@') else {
            return Err(AuthDomainError::InvalidEmail(value.to_owned()));
        };
        if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.contains('@') {
            return Err(AuthDomainError::InvalidEmail(value.to_owned()));
        }
        Ok(Self(normalized))
    }

    /// Returns the normalized address.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = AuthDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
