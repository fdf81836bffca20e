//! Medium Tests
//!
//! Tests for the in-memory and file-backed media.

mod file_tests;
mod memory_tests;
