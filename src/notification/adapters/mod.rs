//! Adapter implementations of the notification ports.

pub mod document;
pub mod memory;
