//! Step definitions for the archived projects scenarios.

pub mod world;

mod given;
mod then;
mod when;
