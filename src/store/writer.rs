//! Store Writer
//!
//! Rewrites the store file as a whole. There is no in-place patching: every
//! mutation serializes the full record sequence and replaces the file.
//!
//! The replacement goes through a sibling temp file and an atomic rename, so
//! a crash mid-write leaves either the old store or the new one, never a
//! truncated mix. The resulting bytes are identical to a direct write.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::record::Record;

/// Replace the store file contents with the given records, in order
pub fn write_all(path: &Path, records: &[Record]) -> Result<()> {
    let tmp_path = tmp_path(path);

    {
        let file = File::create(&tmp_path)?;
        let mut writer = BufWriter::new(file);
        for record in records {
            writer.write_all(record.to_line().as_bytes())?;
        }
        writer.flush()?;
        writer.get_ref().sync_all()?;
    }

    // Rename is atomic on the same filesystem; the temp file is a sibling.
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    tracing::debug!(path = %path.display(), count = records.len(), "store written");
    Ok(())
}

/// Sibling temp path for the rewrite
fn tmp_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(".tmp");
    PathBuf::from(os)
}
