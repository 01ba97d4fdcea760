//! Schema-less document collections with live-query subscriptions.
//!
//! The hosted document database is an external collaborator; this module
//! reproduces its observable contract for the rest of the crate: documents
//! are untyped JSON objects keyed by UUID, writes are last-writer-wins at
//! field granularity, and a live query re-delivers the full, filtered,
//! ordered result set to its observer after every change. Typed contexts
//! decode raw documents into domain entities at their adapter boundary.

mod document;
mod error;
mod live;
mod memory;

pub use document::{Document, Identified};
pub use error::{DecodeError, StoreError, StoreResult};
pub use live::{Observer, Subscription};
pub use memory::{MemoryCollection, Query, SortDirection};

#[cfg(test)]
mod tests;
