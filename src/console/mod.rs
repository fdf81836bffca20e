//! Console Module
//!
//! Line-oriented front end for the key store.
//!
//! ## Flow
//! - Print the prompt
//! - Read one line, apply backspace editing
//! - Parse, execute, print the response
//! - Stop cleanly at EOF

mod session;

pub use session::{edit_line, Session};
