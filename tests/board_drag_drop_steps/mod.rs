//! Step definitions for the board drag-drop scenarios.

pub mod world;

mod given;
mod then;
mod when;
