//! Unit tests for the board interaction core.
