//! Protocol Module
//!
//! The line-oriented command grammar spoken by the console.
//!
//! ## Commands
//! ```text
//! READ key            -> "value" | empty
//! WRITE key value     -> done | already exists | no space left
//!                        | invalid key | invalid value
//! FORGET key          -> done | not found
//! PRINT               -> ADDRESS  HEX_BYTES  |ASCII| lines, then ...
//! CLEAR               -> done
//! ```
//!
//! With the `Reject` corruption policy, any command whose scan reaches a
//! damaged record answers `corrupted at 0xADDR` instead.
//!
//! Arguments are separated by spaces and may be double-quoted.

mod command;
mod parser;
mod response;

pub use command::{Command, CommandType};
pub use parser::{parse_command, tokenize};
pub use response::Response;
