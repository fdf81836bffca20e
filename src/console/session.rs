//! Console session
//!
//! Drives a key store from a line-oriented reader/writer pair.

use std::io::{BufRead, Write};

use crate::error::{Result, StoreError};
use crate::medium::Medium;
use crate::protocol::parse_command;
use crate::store::KeyStore;

/// Backspace and DEL both erase the previous byte
const BACKSPACE: u8 = 0x08;
const DELETE: u8 = 0x7F;

/// Apply terminal editing to a raw line.
///
/// Drops `\r`/`\n`, applies backspaces, and keeps at most `max_len` bytes;
/// bytes typed past the limit are ignored.
pub fn edit_line(raw: &[u8], max_len: usize) -> Vec<u8> {
    let mut line = Vec::with_capacity(raw.len().min(max_len));
    for &byte in raw {
        match byte {
            b'\r' | b'\n' => {}
            BACKSPACE | DELETE => {
                line.pop();
            }
            _ if line.len() < max_len => line.push(byte),
            _ => {}
        }
    }
    line
}

/// A console attached to one store
pub struct Session<'s, M: Medium, R: BufRead, W: Write> {
    store: &'s mut KeyStore<M>,
    reader: R,
    writer: W,
    commands_run: u64,
}

impl<'s, M: Medium, R: BufRead, W: Write> Session<'s, M, R, W> {
    pub fn new(store: &'s mut KeyStore<M>, reader: R, writer: W) -> Self {
        Self {
            store,
            reader,
            writer,
            commands_run: 0,
        }
    }

    /// Run until the reader reaches EOF
    ///
    /// Returns the number of commands executed.
    pub fn run(&mut self) -> Result<u64> {
        tracing::debug!("Console session started");

        let mut raw = Vec::new();
        loop {
            self.prompt()?;

            raw.clear();
            if self.reader.read_until(b'\n', &mut raw)? == 0 {
                tracing::debug!("Console input closed after {} commands", self.commands_run);
                return Ok(self.commands_run);
            }

            let line = edit_line(&raw, self.store.config().max_line_len);
            self.handle_line(&line)?;
        }
    }

    /// Parse and execute one edited line, printing its response
    pub fn handle_line(&mut self, line: &[u8]) -> Result<()> {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(()),
            Err(StoreError::Protocol(msg)) => {
                tracing::debug!("Ignoring line: {}", msg);
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let response = self.store.execute(command)?;
        self.commands_run += 1;
        tracing::trace!("Response: {}", response);

        response.write_to(&mut self.writer)?;
        self.writer.flush()?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        let prompt = &self.store.config().prompt;
        if !prompt.is_empty() {
            self.writer.write_all(prompt.as_bytes())?;
            self.writer.flush()?;
        }
        Ok(())
    }

    /// Hand back the writer (for inspecting captured output)
    pub fn into_writer(self) -> W {
        self.writer
    }
}
