//! Record definitions
//!
//! One record is one secret: a key, a last-modified timestamp, and a value.
//! Keys and values are arbitrary byte strings. On disk a record is one line
//! of three quoted, percent-encoded fields:
//!
//! ```text
//! <quote(encode(key))> <quote(timestamp)> <quote(encode(value))>\n
//! ```
//!
//! A blank or whitespace-only line is the end-of-stream sentinel: it carries
//! no record and terminates parsing of the store.

use crate::codec::{decode, encode, quote, split_fields};
use crate::error::{Result, StashError};

/// A single secret entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Lookup key, unique within a well-formed store
    pub key: Vec<u8>,

    /// Last-modified time, seconds since the Unix epoch
    pub timestamp: u64,

    /// Stored value
    pub value: Vec<u8>,
}

impl Record {
    pub fn new(key: impl Into<Vec<u8>>, timestamp: u64, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            timestamp,
            value: value.into(),
        }
    }

    /// Serialize to one store line, including the trailing newline
    pub fn to_line(&self) -> String {
        let mut line = String::new();
        line.push_str(&quote(&encode(&self.key)));
        line.push(' ');
        line.push_str(&quote(&self.timestamp.to_string()));
        line.push(' ');
        line.push_str(&quote(&encode(&self.value)));
        line.push('\n');
        line
    }

    /// Parse one store line
    ///
    /// Returns `Ok(None)` for the sentinel (empty/whitespace-only line).
    /// Any other shape than exactly three decodable fields is corruption.
    pub fn parse_line(line: &str) -> Result<Option<Self>> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let fields = split_fields(line)?;

        if fields.is_empty() {
            return Ok(None);
        }
        if fields.len() != 3 {
            return Err(StashError::Decode(format!(
                "expected 3 fields, found {} in line {:?}",
                fields.len(),
                line
            )));
        }

        let key = decode(&fields[0])?;
        let timestamp = fields[1].parse::<u64>().map_err(|_| {
            StashError::Decode(format!("invalid timestamp {:?} in line {:?}", fields[1], line))
        })?;
        let value = decode(&fields[2])?;

        Ok(Some(Self {
            key,
            timestamp,
            value,
        }))
    }
}
