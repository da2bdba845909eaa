//! # termkeys-core
//!
//! Shared library for termkeys containing the capability-file parser, the
//! dense key code table builder, the runtime [`KeyCode`] type and the table
//! emitters used by the `termkeys-gen` tool.
//!
//! It has zero dependencies on terminal APIs or the file system; callers hand
//! it lines of text and get back plain data.
//!
//! # Architecture overview (for beginners)
//!
//! A terminal reports special keys (arrows, function keys, keypad keys) as
//! integer codes such as `0402` (octal) for "down arrow".  The mapping from
//! those integers to names lives in a capability database: a text file with
//! one line per capability.  This crate turns that file into an array that an
//! application can index directly with the code it just read.
//!
//! - **`capability`** – Parses one line of the database into a
//!   [`CapabilityRecord`].
//!
//! - **`table`** – Sorts the records, resolves codes that appear more than
//!   once, and builds the dense [`CodeTable`] covering every code from 0 to the
//!   highest assigned code.
//!
//! - **`keycode`** – The [`KeyCode`] value handed to an event handler: name,
//!   byte value, raw code.
//!
//! - **`registry`** – The single process-wide slot where an application
//!   installs its table once at start-up.
//!
//! - **`emit`** – Serialises a [`CodeTable`] into Rust, C or JSON source text.

pub mod capability;
pub mod emit;
pub mod keycode;
pub mod registry;
pub mod table;

// Re-export the most-used types at the crate root so callers can write
// `termkeys_core::CodeTable` instead of `termkeys_core::table::code_table::CodeTable`.
pub use capability::{
    parse_capabilities, parse_line, CapabilityError, CapabilityRecord, CodeAssignment, MAX_KEY_CODE,
};
pub use emit::{EmitFormat, EmitOptions, GeneratedFile, TableEmitter};
pub use keycode::KeyCode;
pub use registry::RegistryError;
pub use table::{CodeTable, CodeTableBuilder, Slot};
