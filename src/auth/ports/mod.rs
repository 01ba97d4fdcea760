//! Port contracts for the hosted authentication provider.

pub mod gateway;

pub use gateway::{AuthGateway, AuthGatewayError, AuthGatewayResult, CurrentUserObserver};
