//! Authenticated user snapshot as reported by the hosted provider.

use super::{AuthDomainError, EmailAddress};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Federated sign-in providers the application offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FederatedProvider {
    /// Google sign-in.
    Google,
    /// GitHub sign-in.
    Github,
}

impl FederatedProvider {
    /// Returns the canonical provider identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Github => "github",
        }
    }
}

/// Snapshot of the currently signed-in user.
///
/// The provider owns the session; this type only mirrors what the
/// current-user change notification delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    uid: String,
    email: EmailAddress,
    display_name: String,
    avatar_url: String,
}

impl AuthUser {
    /// Creates a user snapshot, deriving the avatar URL from the email.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError::EmptyDisplayName`] when the display name
    /// is empty after trimming.
    pub fn new(
        uid: impl Into<String>,
        email: EmailAddress,
        display_name: impl Into<String>,
    ) -> Result<Self, AuthDomainError> {
        let display_name = display_name.into().trim().to_owned();
        if display_name.is_empty() {
            return Err(AuthDomainError::EmptyDisplayName);
        }
        let avatar_url = avatar_url_for(&email);
        Ok(Self {
            uid: uid.into(),
            email,
            display_name,
            avatar_url,
        })
    }

    /// Returns the provider-assigned user identifier.
    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Returns the account email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the derived avatar URL.
    #[must_use]
    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }
}

/// Derives a Gravatar-style avatar URL from the normalized address.
fn avatar_url_for(email: &EmailAddress) -> String {
    let digest = Sha256::digest(email.as_str().as_bytes());
    let hex: String = digest.iter().map(|byte| format!("{byte:02x}")).collect();
    format!("https://www.gravatar.com/avatar/{hex}?d=identicon")
}
