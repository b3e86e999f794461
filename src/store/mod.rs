//! Store Module
//!
//! The mutation pipeline over the flat store file.
//!
//! ## Responsibilities
//! - Compose reader → filter/insert → writer for the mutating operations
//! - Serve the read-only operations (get, list, dump)
//! - Stamp records with their last-modified time on every set
//!
//! Every operation is single-shot: read the whole store, optionally transform
//! the record sequence, and for mutations rewrite the whole file. No state
//! survives between operations.

pub mod query;
pub mod reader;
pub mod writer;

use std::fs;
use std::io::ErrorKind;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::Config;
use crate::error::Result;
use crate::record::Record;

pub use query::{exclude, find, sort_by_key};
pub use reader::read_all;
pub use writer::write_all;

/// Handle over one store file, configured once per invocation
pub struct Store {
    config: Config,
}

impl Store {
    /// Create a store handle for the configured path
    ///
    /// The file itself is opened lazily per operation; a missing file shows
    /// up as an empty store on first read.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Upsert a key
    ///
    /// Steps:
    /// 1. Read all records
    /// 2. Drop any record with this key
    /// 3. Append a fresh record stamped "now"
    /// 4. Rewrite the store
    ///
    /// The replacement lands at the end of the file regardless of where the
    /// old record was. `list` re-sorts, so only `dump` can tell.
    pub fn set(&self, key: &[u8], value: &[u8]) -> Result<()> {
        let records = read_all(&self.config.store_path)?;
        let mut records = exclude(records, key);
        records.push(Record::new(key, unix_now(), value));
        write_all(&self.config.store_path, &records)?;

        tracing::debug!(key_len = key.len(), value_len = value.len(), "set");
        Ok(())
    }

    /// Look up a key
    ///
    /// `Ok(None)` for an absent key; an error only if the store itself is
    /// unreadable or corrupt.
    pub fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        let records = read_all(&self.config.store_path)?;
        Ok(find(&records, key).map(|r| r.value.clone()))
    }

    /// Remove a key
    ///
    /// Removing an absent key succeeds; the store is rewritten either way.
    pub fn del(&self, key: &[u8]) -> Result<()> {
        let records = read_all(&self.config.store_path)?;
        let records = exclude(records, key);
        write_all(&self.config.store_path, &records)?;

        tracing::debug!(key_len = key.len(), "del");
        Ok(())
    }

    /// All (key, last-modified) pairs, sorted by key bytes
    pub fn list(&self) -> Result<Vec<(Vec<u8>, u64)>> {
        let mut records = read_all(&self.config.store_path)?;
        sort_by_key(&mut records);
        Ok(records
            .into_iter()
            .map(|r| (r.key, r.timestamp))
            .collect())
    }

    /// The store file's raw text, verbatim
    ///
    /// A missing file behaves as an empty store, with the same creation side
    /// effect as a read.
    pub fn dump(&self) -> Result<String> {
        match fs::read_to_string(&self.config.store_path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                read_all(&self.config.store_path)?;
                Ok(String::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Seconds since the Unix epoch
///
/// A clock before the epoch would need deliberate effort; clamp to zero
/// rather than fail the write.
fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
