//! Capability database parsing.
//!
//! The input is a terminfo-style capability list (the ncurses `Caps` file is
//! the canonical example).  Only lines describing keys (`key_*`) are of
//! interest; everything else is skipped.
//!
//! # Line format
//!
//! ```text
//! key_down    kcud1   str   kd   KEY_DOWN   0402   -----   down-arrow key
//! ^name       ^field  ^str  ^attr ^macro    ^code  ^flags  ^description
//! ```
//!
//! The code column is either `-` (no fixed code) or an octal literal with a
//! leading zero, at most [`MAX_KEY_CODE`].

pub mod reader;
pub mod record;

pub use reader::parse_capabilities;
pub use record::{parse_line, CapabilityRecord, CodeAssignment, MAX_KEY_CODE};

use thiserror::Error;

/// Errors that can occur while reading a capability database.
///
/// Every variant is fatal for the run: no partial record list or table is
/// ever produced.
#[derive(Debug, Error)]
pub enum CapabilityError {
    /// A `key_` line does not match the positional schema.
    #[error("line {line_no}: failed to parse line {line:?}")]
    SchemaMismatch { line_no: usize, line: String },

    /// The code column is neither `-` nor an octal literal in
    /// `[0, MAX_KEY_CODE]`.
    #[error("line {line_no}: failed to parse octal code {code:?} (expected `-` or 00..=0177777)")]
    MalformedCode { line_no: usize, code: String },

    /// The input contained no `key_` records at all.
    #[error("no key_ records found in capability input")]
    EmptyTable,

    /// The underlying reader failed.
    #[error("I/O error reading capability input: {0}")]
    Io(#[from] std::io::Error),
}
