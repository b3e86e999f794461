//! Store Reader
//!
//! Loads the whole store file into a record sequence.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::error::Result;
use crate::record::Record;

/// Read every record from the store file, in file order
///
/// A missing file counts as zero records and is created empty so later
/// operations have a stable target. A sentinel line (blank/whitespace-only)
/// stops the scan; everything after it is treated as absent. Any malformed
/// line fails the whole read.
pub fn read_all(path: &Path) -> Result<Vec<Record>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "store file missing, creating empty");
            create_empty(path)?;
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let reader = BufReader::new(file);
    let mut records = Vec::new();

    for line in reader.lines() {
        let line = line?;
        match Record::parse_line(&line)? {
            Some(record) => records.push(record),
            None => break, // sentinel: remainder of the file is absent
        }
    }

    tracing::debug!(path = %path.display(), count = records.len(), "store read");
    Ok(records)
}

/// Create the store file empty, without clobbering a concurrent creation
fn create_empty(path: &Path) -> Result<()> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(e.into()),
    }
}
