//! Query/Filter engine
//!
//! Pure transforms over an in-memory record sequence. The reader owns the
//! end-of-stream sentinel, so these see only live records.

use crate::record::Record;

/// First record in sequence order whose key equals `key`
///
/// Scanning stops at the first match; in a well-formed store keys are unique
/// anyway.
pub fn find<'a>(records: &'a [Record], key: &[u8]) -> Option<&'a Record> {
    records.iter().find(|r| r.key == key)
}

/// Every record whose key differs from `key`, relative order preserved
pub fn exclude(records: Vec<Record>, key: &[u8]) -> Vec<Record> {
    records.into_iter().filter(|r| r.key != key).collect()
}

/// Stable sort by key bytes, lexicographic
pub fn sort_by_key(records: &mut [Record]) {
    records.sort_by(|a, b| a.key.cmp(&b.key));
}
