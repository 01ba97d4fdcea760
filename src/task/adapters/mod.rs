//! Adapter implementations of the task and comment ports.

pub mod document;
pub mod memory;
