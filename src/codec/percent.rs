//! Percent-encoding layer
//!
//! Byte-by-byte transform between an arbitrary byte string and a token made
//! only of unreserved characters and `%XX` escapes. Encoding-agnostic: raw
//! binary round-trips the same as valid UTF-8.
//!
//! ## Token alphabet
//! - Unreserved bytes pass through: `A-Z a-z 0-9 . ~ _ -` (RFC 3986 style)
//! - Every other byte becomes `%` + two uppercase hex digits
//!
//! Decoding additionally maps `+` to a space. Our own encoder never emits a
//! literal `+`, so the rule only matters for foreign or hand-written tokens;
//! it is kept for compatibility with standard percent-encoded input.

use crate::error::{Result, StashError};

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// True for bytes stored without escaping
#[inline]
fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'~' | b'_' | b'-')
}

/// Encode a byte string as a percent-encoded token
///
/// The output contains no space, newline, quote, backslash, or `+`, so it is
/// safe as one whitespace-delimited field.
pub fn encode(bytes: &[u8]) -> String {
    let mut token = String::with_capacity(bytes.len());
    for &b in bytes {
        if is_unreserved(b) {
            token.push(b as char);
        } else {
            token.push('%');
            token.push(HEX_UPPER[(b >> 4) as usize] as char);
            token.push(HEX_UPPER[(b & 0x0F) as usize] as char);
        }
    }
    token
}

/// Decode a percent-encoded token back to raw bytes
///
/// Accepts upper- or lowercase hex in escapes. A `%` not followed by two hex
/// digits is corruption, not something to guess around.
pub fn decode(token: &str) -> Result<Vec<u8>> {
    let input = token.as_bytes();
    let mut bytes = Vec::with_capacity(input.len());
    let mut i = 0;

    while i < input.len() {
        match input[i] {
            b'%' => {
                if input.len() - i < 3 {
                    return Err(StashError::Decode(format!(
                        "truncated percent escape at byte {} in token {:?}",
                        i, token
                    )));
                }
                let hi = hex_value(input[i + 1]);
                let lo = hex_value(input[i + 2]);
                match (hi, lo) {
                    (Some(hi), Some(lo)) => bytes.push((hi << 4) | lo),
                    _ => {
                        return Err(StashError::Decode(format!(
                            "invalid percent escape at byte {} in token {:?}",
                            i, token
                        )))
                    }
                }
                i += 3;
            }
            b'+' => {
                bytes.push(b' ');
                i += 1;
            }
            b => {
                bytes.push(b);
                i += 1;
            }
        }
    }

    Ok(bytes)
}

/// Hex digit value, or None for a non-hex byte
#[inline]
fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'A'..=b'F' => Some(b - b'A' + 10),
        b'a'..=b'f' => Some(b - b'a' + 10),
        _ => None,
    }
}
