//! Response definitions
//!
//! Represents the text printed back for each command.

use std::fmt;
use std::io::{self, Write};

use crate::dump::TERMINATOR;

/// A response to print on the console
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// READ hit: the stored value, printed quoted
    Value(Vec<u8>),

    /// READ miss
    Empty,

    /// Successful WRITE, FORGET or CLEAR
    Done,

    AlreadyExists,
    NoSpaceLeft,
    InvalidKey,
    InvalidValue,
    NotFound,

    /// A scan hit damaged data and the store rejects it
    Corrupted { addr: usize },

    /// PRINT output, one entry per line, without the terminator
    Dump(Vec<String>),
}

impl Response {
    /// Write the response, value bytes untouched, one `\n` per line
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        match self {
            Response::Value(value) => {
                writer.write_all(b"\"")?;
                writer.write_all(value)?;
                writer.write_all(b"\"\n")
            }
            Response::Dump(lines) => {
                for line in lines {
                    writeln!(writer, "{}", line)?;
                }
                writeln!(writer, "{}", TERMINATOR)
            }
            other => writeln!(writer, "{}", other),
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Value(value) => write!(f, "\"{}\"", String::from_utf8_lossy(value)),
            Response::Empty => f.write_str("empty"),
            Response::Done => f.write_str("done"),
            Response::AlreadyExists => f.write_str("already exists"),
            Response::NoSpaceLeft => f.write_str("no space left"),
            Response::InvalidKey => f.write_str("invalid key"),
            Response::InvalidValue => f.write_str("invalid value"),
            Response::NotFound => f.write_str("not found"),
            Response::Corrupted { addr } => write!(f, "corrupted at 0x{:04x}", addr),
            Response::Dump(lines) => {
                for line in lines {
                    writeln!(f, "{}", line)?;
                }
                f.write_str(TERMINATOR)
            }
        }
    }
}
