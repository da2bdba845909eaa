//! Reads a whole capability database into a list of records.

use std::io::BufRead;

use tracing::debug;

use super::record::{parse_line, CapabilityRecord};
use super::CapabilityError;

/// Parses every `key_` line from `reader`.
///
/// Parsing stops at the first bad line; the records read so far are dropped.
///
/// # Errors
///
/// Returns the first [`CapabilityError`] encountered, including
/// [`CapabilityError::Io`] if reading fails.  An input without any `key_`
/// line is not an error here; [`crate::CodeTableBuilder::build`] reports it.
///
/// # Examples
///
/// ```rust
/// use termkeys_core::parse_capabilities;
///
/// let caps = "# keys\nkey_up kcuu1 str ku KEY_UP 0403 ----- up-arrow key\n";
/// let records = parse_capabilities(caps.as_bytes()).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].symbolic_name, "key_up");
/// ```
pub fn parse_capabilities<R: BufRead>(reader: R) -> Result<Vec<CapabilityRecord>, CapabilityError> {
    let mut records = Vec::new();
    let mut lines_read = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        lines_read += 1;
        if let Some(record) = parse_line(idx + 1, &line)? {
            records.push(record);
        }
    }

    debug!(
        lines = lines_read,
        records = records.len(),
        "parsed capability input"
    );
    Ok(records)
}
