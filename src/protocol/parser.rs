//! Command line parser
//!
//! ## Grammar
//! ```text
//! line     := WORD (SEP token)*
//! token    := '"' any-but-quote* '"'?  |  any-but-SEP+
//! SEP      := (' ' | '\t')+
//! ```
//!
//! A quoted token may hold separators and ends at the next quote (or the
//! end of the line). Missing arguments parse as empty strings so that
//! validation reports them; extra arguments are ignored.

use super::{Command, CommandType};
use crate::error::{Result, StoreError};

fn is_separator(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

/// Split a line into tokens, honouring double quotes
pub fn tokenize(line: &[u8]) -> Vec<Vec<u8>> {
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < line.len() {
        if is_separator(line[i]) {
            i += 1;
            continue;
        }

        if line[i] == b'"' {
            let start = i + 1;
            let end = line[start..]
                .iter()
                .position(|&b| b == b'"')
                .map_or(line.len(), |p| start + p);
            tokens.push(line[start..end].to_vec());
            // skip the closing quote
            i = end + 1;
        } else {
            let start = i;
            while i < line.len() && !is_separator(line[i]) {
                i += 1;
            }
            tokens.push(line[start..i].to_vec());
        }
    }

    tokens
}

/// Parse one console line.
///
/// Returns `Ok(None)` for a blank line and `StoreError::Protocol` for an
/// unknown command word.
pub fn parse_command(line: &[u8]) -> Result<Option<Command>> {
    let mut tokens = tokenize(line).into_iter();

    let Some(word) = tokens.next() else {
        return Ok(None);
    };

    let command_type = CommandType::from_word(&word).ok_or_else(|| {
        StoreError::Protocol(format!(
            "unknown command: {}",
            String::from_utf8_lossy(&word)
        ))
    })?;

    let mut arg = || tokens.next().unwrap_or_default();

    let command = match command_type {
        CommandType::Read => Command::Read { key: arg() },
        CommandType::Write => {
            let key = arg();
            let value = arg();
            Command::Write { key, value }
        }
        CommandType::Forget => Command::Forget { key: arg() },
        CommandType::Print => Command::Print,
        CommandType::Clear => Command::Clear,
    };

    Ok(Some(command))
}
