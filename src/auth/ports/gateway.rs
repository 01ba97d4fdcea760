//! Gateway port for the hosted authentication provider.

use crate::auth::domain::{AuthUser, EmailAddress, FederatedProvider};
use crate::store::Subscription;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for authentication gateway operations.
pub type AuthGatewayResult<T> = Result<T, AuthGatewayError>;

/// Callback invoked whenever the provider's current user changes.
///
/// `None` is delivered on sign-out.
pub type CurrentUserObserver = Arc<dyn Fn(Option<&AuthUser>) + Send + Sync>;

/// Authentication provider contract.
///
/// Credential storage and session validation live entirely on the provider
/// side; implementations of this trait only relay its operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Signs in with an email address and password.
    ///
    /// # Errors
    ///
    /// Returns the provider's rejection, already narrowed to
    /// [`AuthGatewayError`] codes.
    async fn sign_in_with_password(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> AuthGatewayResult<AuthUser>;

    /// Signs in through a federated identity provider.
    ///
    /// # Errors
    ///
    /// Returns the provider's rejection, already narrowed to
    /// [`AuthGatewayError`] codes.
    async fn sign_in_with_provider(
        &self,
        provider: FederatedProvider,
    ) -> AuthGatewayResult<AuthUser>;

    /// Signs the current user out.
    ///
    /// # Errors
    ///
    /// Returns [`AuthGatewayError::Network`] when the provider is
    /// unreachable.
    async fn sign_out(&self) -> AuthGatewayResult<()>;

    /// Requests a password-reset email for the given address.
    ///
    /// # Errors
    ///
    /// Returns [`AuthGatewayError::UserNotFound`] when no account exists
    /// for the address.
    async fn request_password_reset(&self, email: &EmailAddress) -> AuthGatewayResult<()>;

    /// Subscribes to current-user change notifications.
    ///
    /// The observer receives the current value immediately and again after
    /// every sign-in or sign-out, until the handle is cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`AuthGatewayError::Network`] when the subscription cannot
    /// be established.
    fn watch_current_user(
        &self,
        observer: CurrentUserObserver,
    ) -> AuthGatewayResult<Subscription>;
}

/// Known provider error codes, plus a catch-all for unmapped ones.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthGatewayError {
    /// The email/password pair was rejected.
    #[error("invalid credential")]
    InvalidCredential,

    /// No account exists for the given email address.
    #[error("user not found")]
    UserNotFound,

    /// The account has been disabled by an administrator.
    #[error("user disabled")]
    UserDisabled,

    /// The provider throttled the request.
    #[error("too many requests")]
    TooManyRequests,

    /// The provider could not be reached.
    #[error("network failure: {0}")]
    Network(String),

    /// An error code this application does not map.
    #[error("unmapped provider error: {0}")]
    Unknown(String),
}

impl AuthGatewayError {
    /// Returns the user-facing message for this error code.
    ///
    /// Unmapped and transport errors share a generic fallback message.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCredential => "Incorrect email or password.",
            Self::UserNotFound => "No account exists for that email address.",
            Self::UserDisabled => "This account has been disabled.",
            Self::TooManyRequests => "Too many attempts. Please try again later.",
            Self::Network(_) | Self::Unknown(_) => "Something went wrong. Please try again.",
        }
    }
}
