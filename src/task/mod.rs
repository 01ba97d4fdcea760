//! Task lifecycle management and append-only comments.
//!
//! Tasks live in a sub-collection under their parent project and move
//! across the kanban columns through single-field status updates. Each
//! task carries an append-only comment thread; a comment may attach
//! structured feedback (difficulty rating plus improvement notes). The
//! module follows hexagonal architecture:
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
