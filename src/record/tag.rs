//! Record tag byte

/// State byte leading every record slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RecordTag {
    /// Logically deleted record
    Tombstone = 0x00,

    /// Live key/value pair
    Active = 0x7F,

    /// Erased medium: nothing was ever written here
    Blank = 0xFF,
}

impl RecordTag {
    /// On-media byte for this tag
    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for RecordTag {
    /// The unrecognised byte
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            0x00 => Ok(RecordTag::Tombstone),
            0x7F => Ok(RecordTag::Active),
            0xFF => Ok(RecordTag::Blank),
            other => Err(other),
        }
    }
}
