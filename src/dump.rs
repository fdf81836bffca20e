//! Hex dump rendering
//!
//! Renders medium contents sixteen bytes per line:
//!
//! ```text
//! 00000000  7f01 6101 31ff ffff ffff ffff ffff ffff |..a.1...........|
//! ```
//!
//! Address in eight lowercase hex digits, two spaces, bytes in pairs
//! each followed by a space, then the printable-ASCII column.

use crate::error::Result;
use crate::medium::Medium;

/// Bytes per rendered line
pub const LINE_WIDTH: usize = 16;

/// Line closing every dump
pub const TERMINATOR: &str = "...";

/// Round `len` up to a whole number of lines
pub fn line_boundary(len: usize) -> usize {
    len.div_ceil(LINE_WIDTH) * LINE_WIDTH
}

/// Render the first `len` bytes of the medium (clamped to its capacity)
pub fn hexdump<M: Medium + ?Sized>(medium: &M, len: usize) -> Result<Vec<String>> {
    let len = len.min(medium.capacity());
    let bytes = medium.read_range(0, len)?;
    Ok(bytes
        .chunks(LINE_WIDTH)
        .enumerate()
        .map(|(i, chunk)| format_line(i * LINE_WIDTH, chunk))
        .collect())
}

/// Render one line starting at `addr`
pub fn format_line(addr: usize, chunk: &[u8]) -> String {
    let mut line = format!("{:08x}  ", addr);

    for i in 0..LINE_WIDTH {
        match chunk.get(i) {
            Some(byte) => line.push_str(&format!("{:02x}", byte)),
            None => line.push_str("  "),
        }
        if i % 2 == 1 {
            line.push(' ');
        }
    }

    line.push('|');
    line.extend(chunk.iter().map(|&b| printable(b)));
    line.push('|');
    line
}

fn printable(byte: u8) -> char {
    if (0x20..=0x7E).contains(&byte) {
        byte as char
    } else {
        '.'
    }
}
