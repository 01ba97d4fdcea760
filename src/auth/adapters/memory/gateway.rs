//! In-memory authentication gateway for tests and local development.

use crate::auth::domain::{AuthUser, EmailAddress, FederatedProvider};
use crate::auth::ports::{AuthGateway, AuthGatewayError, AuthGatewayResult, CurrentUserObserver};
use crate::store::Subscription;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{Arc, RwLock, RwLockWriteGuard, Weak};

struct Account {
    password: String,
    user: AuthUser,
    disabled: bool,
}

#[derive(Default)]
struct GatewayState {
    accounts: HashMap<EmailAddress, Account>,
    provider_accounts: HashMap<FederatedProvider, AuthUser>,
    current: Option<AuthUser>,
    observers: BTreeMap<u64, CurrentUserObserver>,
    next_observer: u64,
}

/// Fake of the hosted authentication provider.
///
/// Holds a registered credential map and relays current-user changes to
/// observers, matching the provider's observable behaviour: sign-in and
/// sign-out each push a fresh current-user notification.
#[derive(Clone, Default)]
pub struct InMemoryAuthGateway {
    state: Arc<RwLock<GatewayState>>,
}

impl InMemoryAuthGateway {
    /// Creates a gateway with no registered accounts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn write_state(&self) -> AuthGatewayResult<RwLockWriteGuard<'_, GatewayState>> {
        self.state
            .write()
            .map_err(|_| AuthGatewayError::Unknown("gateway state inaccessible".to_owned()))
    }

    /// Registers a password account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthGatewayError::Unknown`] when the gateway state is
    /// inaccessible.
    pub fn register_account(
        &self,
        password: impl Into<String>,
        user: AuthUser,
    ) -> AuthGatewayResult<()> {
        let mut state = self.write_state()?;
        state.accounts.insert(
            user.email().clone(),
            Account {
                password: password.into(),
                user,
                disabled: false,
            },
        );
        Ok(())
    }

    /// Registers a federated account returned by the given provider.
    ///
    /// # Errors
    ///
    /// Returns [`AuthGatewayError::Unknown`] when the gateway state is
    /// inaccessible.
    pub fn register_provider_account(
        &self,
        provider: FederatedProvider,
        user: AuthUser,
    ) -> AuthGatewayResult<()> {
        let mut state = self.write_state()?;
        state.provider_accounts.insert(provider, user);
        Ok(())
    }

    /// Marks an account as disabled.
    ///
    /// # Errors
    ///
    /// Returns [`AuthGatewayError::UserNotFound`] when no account exists
    /// for the address.
    pub fn disable_account(&self, email: &EmailAddress) -> AuthGatewayResult<()> {
        let mut state = self.write_state()?;
        let account = state
            .accounts
            .get_mut(email)
            .ok_or(AuthGatewayError::UserNotFound)?;
        account.disabled = true;
        Ok(())
    }

    /// Replaces the current user and notifies observers outside the lock.
    fn set_current(&self, user: Option<AuthUser>) -> AuthGatewayResult<()> {
        let observers: Vec<CurrentUserObserver> = {
            let mut state = self.write_state()?;
            state.current = user.clone();
            state.observers.values().map(Arc::clone).collect()
        };
        for observer in observers {
            observer(user.as_ref());
        }
        Ok(())
    }
}

#[async_trait]
impl AuthGateway for InMemoryAuthGateway {
    async fn sign_in_with_password(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> AuthGatewayResult<AuthUser> {
        let user = {
            let state = self
                .state
                .read()
                .map_err(|_| AuthGatewayError::Unknown("gateway state inaccessible".to_owned()))?;
            let account = state
                .accounts
                .get(email)
                .ok_or(AuthGatewayError::UserNotFound)?;
            if account.disabled {
                return Err(AuthGatewayError::UserDisabled);
            }
            if account.password != password {
                return Err(AuthGatewayError::InvalidCredential);
            }
            account.user.clone()
        };
        self.set_current(Some(user.clone()))?;
        Ok(user)
    }

    async fn sign_in_with_provider(
        &self,
        provider: FederatedProvider,
    ) -> AuthGatewayResult<AuthUser> {
        let user = {
            let state = self
                .state
                .read()
                .map_err(|_| AuthGatewayError::Unknown("gateway state inaccessible".to_owned()))?;
            state
                .provider_accounts
                .get(&provider)
                .cloned()
                .ok_or(AuthGatewayError::UserNotFound)?
        };
        self.set_current(Some(user.clone()))?;
        Ok(user)
    }

    async fn sign_out(&self) -> AuthGatewayResult<()> {
        self.set_current(None)
    }

    async fn request_password_reset(&self, email: &EmailAddress) -> AuthGatewayResult<()> {
        let state = self
            .state
            .read()
            .map_err(|_| AuthGatewayError::Unknown("gateway state inaccessible".to_owned()))?;
        if state.accounts.contains_key(email) {
            Ok(())
        } else {
            Err(AuthGatewayError::UserNotFound)
        }
    }

    fn watch_current_user(
        &self,
        observer: CurrentUserObserver,
    ) -> AuthGatewayResult<Subscription> {
        let (observer_id, current) = {
            let mut state = self.write_state()?;
            let observer_id = state.next_observer;
            state.next_observer += 1;
            state.observers.insert(observer_id, Arc::clone(&observer));
            (observer_id, state.current.clone())
        };
        observer(current.as_ref());

        let weak: Weak<RwLock<GatewayState>> = Arc::downgrade(&self.state);
        Ok(Subscription::new(move || {
            if let Some(state) = weak.upgrade()
                && let Ok(mut state) = state.write()
            {
                state.observers.remove(&observer_id);
            }
        }))
    }
}

impl fmt::Debug for InMemoryAuthGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryAuthGateway").finish_non_exhaustive()
    }
}
