//! Step definitions for the live query teardown scenarios.

pub mod world;

mod given;
mod then;
mod when;
