//! Script splitting.
//!
//! A script is one raw input string holding any number of statements, each
//! terminated by [`SEPARATOR`]. Line breaks are insignificant to the
//! statement grammar and are removed before splitting, so CR, LF and CRLF
//! inputs all split identically.

/// The statement separator character.
pub const SEPARATOR: char = ';';

/// Remove all line-break characters from a raw script.
pub fn normalize_line_endings(raw: &str) -> String {
    raw.chars().filter(|&c| c != '\r' && c != '\n').collect()
}

/// Partition a raw script into individually executable statement strings.
///
/// The script as a whole gets a trailing separator if its final statement
/// lacks one; every returned statement is explicitly re-terminated with the
/// separator. Fragments that are empty after trimming are dropped. The
/// returned sequence preserves statement order, so submitting each element
/// in turn reproduces the original script with no statement lost or
/// duplicated.
///
/// An empty or whitespace-only script yields an empty vector: nothing to
/// execute, not an error.
pub fn split_script(raw: &str) -> Vec<String> {
    let mut flat = normalize_line_endings(raw);
    if !flat.ends_with(SEPARATOR) {
        flat.push(SEPARATOR);
    }

    let mut statements = Vec::new();
    for fragment in flat.split(SEPARATOR) {
        if fragment.trim().is_empty() {
            continue;
        }
        let mut statement = fragment.to_string();
        statement.push(SEPARATOR);
        statements.push(statement);
    }
    statements
}
