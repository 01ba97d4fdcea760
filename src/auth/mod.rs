//! Authentication gateway consumption and session tracking.
//!
//! The hosted authentication provider owns credential storage, session
//! validation, and token issuance; this context only consumes it. The
//! gateway port mirrors the provider's operations (credential sign-in,
//! federated sign-in, sign-out, password reset, current-user change
//! notification), the domain holds validated identity types, and the
//! session service performs client-side form validation and maps provider
//! error codes to user-facing messages before anything reaches a view.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
