//! Shell-quoting layer
//!
//! Makes one token safe as a whitespace-delimited field of a store line, and
//! splits such a line back into its fields. The rules follow POSIX shell
//! word-splitting so a store line pasted into a terminal means what it says,
//! but quoting and splitting are implemented here in full — no shell is ever
//! invoked on store content.
//!
//! ## Quoting
//! - A non-empty token of quote-safe characters is written bare
//! - The empty token is written `''` (it must stay visible as a field)
//! - Anything else is wrapped in single quotes, embedded `'` spelled `'\''`
//!
//! ## Splitting
//! - Fields separated by runs of unquoted spaces/tabs
//! - Single quotes: everything literal until the closing quote
//! - Double quotes: literal except `\"` and `\\`
//! - Unquoted backslash escapes the next character
//! - `''` produces an empty field, distinct from no field at all

use crate::error::{Result, StashError};

/// True for characters that need no quoting when a token is written bare
#[inline]
fn is_quote_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '~' | '_' | '-' | '%' | '+' | '/' | ':' | '=' | '@' | ',')
}

/// Quote one token for use as a whitespace-delimited field
pub fn quote(token: &str) -> String {
    if token.is_empty() {
        return "''".to_string();
    }
    if token.chars().all(is_quote_safe) {
        return token.to_string();
    }

    // Single-quote wrapping; an embedded quote closes, escapes, reopens.
    let mut quoted = String::with_capacity(token.len() + 2);
    quoted.push('\'');
    for c in token.chars() {
        if c == '\'' {
            quoted.push_str("'\\''");
        } else {
            quoted.push(c);
        }
    }
    quoted.push('\'');
    quoted
}

/// Splitter state: outside any field, or inside one under a quoting mode
enum State {
    Between,
    Bare,
    Single,
    Double,
}

/// Split a line into fields, honoring quotes and removing one quoting layer
///
/// Returns one `String` per field. A line of nothing but whitespace yields an
/// empty vector. Unterminated quotes and a trailing bare backslash are
/// corruption.
pub fn split_fields(line: &str) -> Result<Vec<String>> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut state = State::Between;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match state {
            State::Between => match c {
                ' ' | '\t' => {}
                '\'' => state = State::Single,
                '"' => state = State::Double,
                '\\' => {
                    let escaped = chars.next().ok_or_else(|| {
                        StashError::Decode(format!("trailing backslash in line {:?}", line))
                    })?;
                    current.push(escaped);
                    state = State::Bare;
                }
                _ => {
                    current.push(c);
                    state = State::Bare;
                }
            },
            State::Bare => match c {
                ' ' | '\t' => {
                    fields.push(std::mem::take(&mut current));
                    state = State::Between;
                }
                '\'' => state = State::Single,
                '"' => state = State::Double,
                '\\' => {
                    let escaped = chars.next().ok_or_else(|| {
                        StashError::Decode(format!("trailing backslash in line {:?}", line))
                    })?;
                    current.push(escaped);
                }
                _ => current.push(c),
            },
            State::Single => match c {
                '\'' => state = State::Bare,
                _ => current.push(c),
            },
            State::Double => match c {
                '"' => state = State::Bare,
                '\\' => match chars.next() {
                    Some(e @ ('"' | '\\')) => current.push(e),
                    Some(other) => {
                        current.push('\\');
                        current.push(other);
                    }
                    None => {
                        return Err(StashError::Decode(format!(
                            "unterminated double quote in line {:?}",
                            line
                        )))
                    }
                },
                _ => current.push(c),
            },
        }
    }

    match state {
        State::Between => {}
        State::Bare => fields.push(current),
        State::Single | State::Double => {
            return Err(StashError::Decode(format!(
                "unterminated quote in line {:?}",
                line
            )))
        }
    }

    Ok(fields)
}
