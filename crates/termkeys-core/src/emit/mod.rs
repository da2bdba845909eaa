//! Serialises a [`CodeTable`] into static data for a target language.
//!
//! Every emitter writes the same contract: a zero-indexed sequence of
//! `max_code + 1` entries, each one of
//!
//! | Slot                   | Emitted as                      |
//! |------------------------|---------------------------------|
//! | [`Slot::Named`]        | the symbolic name, `"key_up"`   |
//! | [`Slot::Printable`]    | the character, `"A"`, `"\\"`    |
//! | [`Slot::Control`]      | a hex escape, `"\x1b"`          |
//! | [`Slot::Absent`]       | the language's null value       |
//!
//! plus the value of `max_code`.  Emitters only build strings; writing them to
//! disk is the caller's job.

pub mod c;
pub mod json;
pub mod rust;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::table::{CodeTable, Slot};

pub use c::CEmitter;
pub use json::JsonEmitter;
pub use rust::RustEmitter;

/// Column at which description comments start.
pub const DEFAULT_COMMENT_WIDTH: usize = 30;

/// First line of every generated file (after the language's comment marker).
pub const BANNER: &str = "AUTOGENERATED by termkeys-gen, do not edit by hand!";

/// Errors that can occur while emitting a table.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to serialize table to JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output language selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmitFormat {
    #[default]
    Rust,
    C,
    Json,
}

impl EmitFormat {
    /// Returns the emitter for this format.
    pub fn emitter(self) -> Box<dyn TableEmitter> {
        match self {
            Self::Rust => Box::new(RustEmitter),
            Self::C => Box::new(CEmitter),
            Self::Json => Box::new(JsonEmitter),
        }
    }
}

impl fmt::Display for EmitFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rust => "rust",
            Self::C => "c",
            Self::Json => "json",
        })
    }
}

impl FromStr for EmitFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rust" | "rs" => Ok(Self::Rust),
            "c" => Ok(Self::C),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format {other:?} (expected rust, c or json)")),
        }
    }
}

/// Settings shared by all emitters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Base name of the generated files without extension, e.g. `keycode`.
    /// Used for `#include` lines and include guards.
    pub module_name: String,
    /// Column at which description comments start.
    pub comment_width: usize,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            module_name: "keycode".to_string(),
            comment_width: DEFAULT_COMMENT_WIDTH,
        }
    }
}

/// One output file produced by an emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File extension without the dot (`rs`, `h`, `c`, `json`).
    pub extension: &'static str,
    pub contents: String,
}

/// Serialises a [`CodeTable`] into one or more source files.
pub trait TableEmitter {
    /// # Errors
    ///
    /// Returns [`EmitError`] if the table cannot be serialised.
    fn emit(&self, table: &CodeTable, options: &EmitOptions) -> Result<Vec<GeneratedFile>, EmitError>;
}

/// Formats one array entry, appending the slot's description as a `//`
/// comment aligned to `comment_width`.
pub(crate) fn entry_line(entry: &str, slot: &Slot, comment_width: usize) -> String {
    let comment = slot.description().map(comment_text).unwrap_or_default();
    if comment.is_empty() {
        return entry.to_string();
    }
    let pad = comment_width.saturating_sub(entry.chars().count()).max(1);
    format!("{entry}{:pad$}// {comment}", "")
}

/// Description text that is safe inside a single-line `//` comment.
///
/// A C preprocessor joins a line ending in `\` with the next one, which
/// would swallow the following array entry.  Control characters become
/// spaces and trailing backslashes are dropped.
fn comment_text(description: &str) -> String {
    let one_line: String = description
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    one_line
        .trim_end_matches(|c: char| c == '\\' || c.is_whitespace())
        .to_string()
}
