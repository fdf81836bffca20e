//! Console Tests
//!
//! Drive whole sessions through in-memory readers and writers.
