//! Notification records and template-driven dispatch.
//!
//! Notifications are written when a membership edit adds someone to a
//! project and when a comment or feedback lands on a task. Message text is
//! rendered from templates at dispatch time; the stored record carries
//! only the finished string. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
