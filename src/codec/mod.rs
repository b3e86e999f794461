//! Two-layer text-safety codec for store fields
//!
//! A store line carries three whitespace-delimited fields. Two independent
//! transforms make arbitrary bytes safe in that position:
//!
//! 1. **Percent layer** (`percent`): maps any byte string to a token with no
//!    spaces, newlines, quotes, or backslashes. Reversible byte-for-byte.
//! 2. **Quote layer** (`quote`): shell-style quoting of one token so the
//!    assembled line splits back into the same fields, even for an empty
//!    token, and stays safe to eyeball or copy-paste in a terminal.
//!
//! The layers are independently testable; the record format composes them.

pub mod percent;
pub mod quote;

pub use percent::{decode, encode};
pub use quote::{quote, split_fields};
