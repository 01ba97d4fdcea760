//! Domain model for authenticated identities.

mod email;
mod error;
mod user;

pub use email::EmailAddress;
pub use error::AuthDomainError;
pub use user::{AuthUser, FederatedProvider};
