//! Adapter implementations for authentication ports.

pub mod memory;
