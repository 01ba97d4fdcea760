//! Unit tests for the application layer.
