//! Step definitions for the dashboard statistics scenarios.

pub mod world;

mod given;
mod then;
mod when;
