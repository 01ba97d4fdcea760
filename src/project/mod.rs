//! Project lifecycle, membership, and archive management.
//!
//! A project is the top-level unit of work: it carries a status and
//! priority mirrored on the kanban dashboard, an owner and member list
//! that scope task assignment, an optional schedule, and an archived flag
//! used for soft deletion. Hard deletion cascades to the project's tasks.
//! The module follows hexagonal architecture:
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
