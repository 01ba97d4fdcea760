//! Sign-in/sign-out orchestration with client-side form validation.

use crate::auth::domain::{AuthUser, EmailAddress, FederatedProvider};
use crate::auth::ports::{AuthGateway, AuthGatewayError, CurrentUserObserver};
use crate::store::Subscription;
use std::sync::Arc;
use thiserror::Error;

/// Field-level validation failures checked before any remote call.
///
/// These surface as inline form errors; the gateway is never contacted
/// when one of them fires.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormValidationError {
    /// The email field was left empty.
    #[error("email is required")]
    EmptyEmail,

    /// The email field does not hold a structurally valid address.
    #[error("enter a valid email address")]
    MalformedEmail,

    /// The password field was left empty.
    #[error("password is required")]
    EmptyPassword,
}

impl FormValidationError {
    /// Returns the form field the error should be rendered beside.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyEmail | Self::MalformedEmail => "email",
            Self::EmptyPassword => "password",
        }
    }
}

/// Errors surfaced by session operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Client-side validation rejected the form input.
    #[error(transparent)]
    Validation(#[from] FormValidationError),

    /// The provider rejected the operation.
    #[error(transparent)]
    Gateway(#[from] AuthGatewayError),
}

impl SessionError {
    /// Returns the user-facing message for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(validation) => validation.to_string(),
            Self::Gateway(gateway) => gateway.user_message().to_owned(),
        }
    }
}

/// Session orchestration over the authentication gateway.
#[derive(Clone)]
pub struct SessionService<G>
where
    G: AuthGateway,
{
    gateway: Arc<G>,
}

impl<G> SessionService<G>
where
    G: AuthGateway,
{
    /// Creates a new session service.
    #[must_use]
    pub const fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Signs in with raw form input.
    ///
    /// Validates the email and password fields first; the gateway is only
    /// contacted when both pass.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Validation`] for rejected form input and
    /// [`SessionError::Gateway`] for provider rejections.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, SessionError> {
        let address = validate_email_field(email)?;
        if password.is_empty() {
            return Err(FormValidationError::EmptyPassword.into());
        }
        let user = self
            .gateway
            .sign_in_with_password(&address, password)
            .await?;
        Ok(user)
    }

    /// Signs in through a federated identity provider.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Gateway`] for provider rejections.
    pub async fn sign_in_with(&self, provider: FederatedProvider) -> Result<AuthUser, SessionError> {
        let user = self.gateway.sign_in_with_provider(provider).await?;
        Ok(user)
    }

    /// Signs the current user out.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Gateway`] when the provider is unreachable.
    pub async fn sign_out(&self) -> Result<(), SessionError> {
        self.gateway.sign_out().await?;
        Ok(())
    }

    /// Requests a password-reset email for raw form input.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Validation`] for rejected form input and
    /// [`SessionError::Gateway`] for provider rejections.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), SessionError> {
        let address = validate_email_field(email)?;
        self.gateway.request_password_reset(&address).await?;
        Ok(())
    }

    /// Subscribes to current-user change notifications.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Gateway`] when the subscription cannot be
    /// established.
    pub fn watch_current_user(
        &self,
        observer: CurrentUserObserver,
    ) -> Result<Subscription, SessionError> {
        let subscription = self.gateway.watch_current_user(observer)?;
        Ok(subscription)
    }
}

/// Maps raw email form input to a validated address.
fn validate_email_field(email: &str) -> Result<EmailAddress, FormValidationError> {
    if email.trim().is_empty() {
        return Err(FormValidationError::EmptyEmail);
    }
    EmailAddress::parse(email).map_err(|_| FormValidationError::MalformedEmail)
}
