//! Adapter implementations for project ports.

pub mod document;
pub mod memory;
