//! Unit tests for the document store core.
