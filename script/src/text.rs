//! Statement text utilities.
//!
//! Helpers for building statements that embed user-supplied values. String
//! literals in the query language are single-quoted; [`escape`] prevents a
//! value from breaking out of its literal.

use crate::split::SEPARATOR;

/// Escape a string for inclusion in a single-quoted statement literal.
///
/// Every single quote is prefixed with a backslash. Using this over raw
/// interpolation prevents injections when the value ends up inside a
/// string attribute.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '\'' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escape a string and surround it with single quotes.
pub fn quote(value: &str) -> String {
    format!("'{}'", escape(value))
}

/// Append the statement separator when the statement lacks one.
pub fn ensure_terminated(statement: &str) -> String {
    let mut out = statement.to_string();
    if !out.ends_with(SEPARATOR) {
        out.push(SEPARATOR);
    }
    out
}
