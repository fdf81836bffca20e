//! Command definitions
//!
//! Represents commands typed at the console.

/// Command words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Read,
    Write,
    Forget,
    Print,
    Clear,
}

impl CommandType {
    /// Match a command word (case-sensitive)
    pub fn from_word(word: &[u8]) -> Option<Self> {
        match word {
            b"READ" => Some(CommandType::Read),
            b"WRITE" => Some(CommandType::Write),
            b"FORGET" => Some(CommandType::Forget),
            b"PRINT" => Some(CommandType::Print),
            b"CLEAR" => Some(CommandType::Clear),
            _ => None,
        }
    }

    pub fn word(self) -> &'static str {
        match self {
            CommandType::Read => "READ",
            CommandType::Write => "WRITE",
            CommandType::Forget => "FORGET",
            CommandType::Print => "PRINT",
            CommandType::Clear => "CLEAR",
        }
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look up the value stored under a key
    Read { key: Vec<u8> },

    /// Store a new key/value pair
    Write { key: Vec<u8>, value: Vec<u8> },

    /// Tombstone a key
    Forget { key: Vec<u8> },

    /// Hex dump of the used region
    Print,

    /// Erase the whole medium
    Clear,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Read { .. } => CommandType::Read,
            Command::Write { .. } => CommandType::Write,
            Command::Forget { .. } => CommandType::Forget,
            Command::Print => CommandType::Print,
            Command::Clear => CommandType::Clear,
        }
    }
}
