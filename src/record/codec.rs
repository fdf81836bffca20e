//! Record codec
//!
//! Translates between `(tag, key, value)` and the on-media byte layout.

use bytes::{BufMut, Bytes, BytesMut};

use super::scanner::Corruption;
use super::tag::RecordTag;
use crate::config::MAX_FIELD_LEN;
use crate::error::{Result, StoreError};
use crate::medium::Medium;

/// Fixed bytes per record: tag + key length + value length
pub const HEADER_LEN: usize = 3;

/// Total bytes a record occupies on the medium
pub fn record_span(key_len: usize, value_len: usize) -> usize {
    HEADER_LEN + key_len + value_len
}

/// Header fields of a record found by the scanner.
///
/// Only the tag and both length bytes have been read; the payload is
/// still on the medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    /// Address of the tag byte
    pub addr: usize,

    /// `Active` or `Tombstone`
    pub tag: RecordTag,

    pub key_len: u8,
    pub value_len: u8,
}

impl RecordHeader {
    pub fn span(&self) -> usize {
        record_span(self.key_len as usize, self.value_len as usize)
    }

    pub fn key_addr(&self) -> usize {
        self.addr + 2
    }

    pub fn value_len_addr(&self) -> usize {
        self.key_addr() + self.key_len as usize
    }

    pub fn value_addr(&self) -> usize {
        self.value_len_addr() + 1
    }

    /// First address past this record
    pub fn end(&self) -> usize {
        self.addr + self.span()
    }

    pub fn is_active(&self) -> bool {
        self.tag == RecordTag::Active
    }
}

/// A fully materialised record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub tag: RecordTag,
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

impl Record {
    /// Create a live record
    pub fn active(key: &[u8], value: &[u8]) -> Self {
        Self {
            tag: RecordTag::Active,
            key: key.to_vec(),
            value: value.to_vec(),
        }
    }

    pub fn span(&self) -> usize {
        record_span(self.key.len(), self.value.len())
    }

    /// Encode to on-media bytes.
    ///
    /// Fails when a field is too long for its one-byte length.
    pub fn encode(&self) -> Result<Bytes> {
        if self.key.len() > MAX_FIELD_LEN {
            return Err(StoreError::InvalidKey { len: self.key.len() });
        }
        if self.value.len() > MAX_FIELD_LEN {
            return Err(StoreError::InvalidValue { len: self.value.len() });
        }

        let mut buf = BytesMut::with_capacity(self.span());
        buf.put_u8(self.tag.as_byte());
        buf.put_u8(self.key.len() as u8);
        buf.put_slice(&self.key);
        buf.put_u8(self.value.len() as u8);
        buf.put_slice(&self.value);
        Ok(buf.freeze())
    }

    /// Decode a record from the start of `data`.
    ///
    /// Errors report addresses relative to the start of `data`.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let truncated = |span| StoreError::Corrupted {
            addr: 0,
            cause: Corruption::Overrun { span },
        };

        let tag = match data.first().copied().map(RecordTag::try_from) {
            None => return Err(truncated(HEADER_LEN)),
            Some(Ok(tag)) => tag,
            Some(Err(byte)) => {
                return Err(StoreError::Corrupted {
                    addr: 0,
                    cause: Corruption::UnknownTag(byte),
                })
            }
        };

        let key_len = *data.get(1).ok_or_else(|| truncated(HEADER_LEN))? as usize;
        let value_len = *data
            .get(2 + key_len)
            .ok_or_else(|| truncated(record_span(key_len, 0)))? as usize;
        let span = record_span(key_len, value_len);
        if data.len() < span {
            return Err(truncated(span));
        }

        Ok(Self {
            tag,
            key: data[2..2 + key_len].to_vec(),
            value: data[3 + key_len..span].to_vec(),
        })
    }

    /// Read the record described by `header` from the medium
    pub fn read<M: Medium + ?Sized>(medium: &M, header: &RecordHeader) -> Result<Self> {
        let raw = medium.read_range(header.addr, header.span())?;
        Self::decode(&raw).map_err(|e| match e {
            StoreError::Corrupted { addr, cause } => StoreError::Corrupted {
                addr: header.addr + addr,
                cause,
            },
            other => other,
        })
    }
}
