//! The runtime view of one key event.
//!
//! A [`KeyCode`] is created for a single code read from the terminal, queried
//! by the event handler, and dropped when the handler returns.  It borrows its
//! name from the [`crate::CodeTable`] it was looked up in, so it can never
//! outlive that table and owns no heap memory of its own.
//!
//! # Byte range vs. ASCII
//!
//! [`KeyCode::is_ascii`] answers "does this code fit in one byte"
//! (`code <= 0xFF`), not "is this 7-bit ASCII".  The name follows the
//! capability model the codes come from.
//!
//! # Signedness of the byte value
//!
//! [`KeyCode::as_byte`] always returns the low eight bits as an unsigned
//! `u8` (0–255).  Codes above 0xFF are masked, so `0x141` and `0x41` give the
//! same byte.

use std::fmt;

/// One translated key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode<'a> {
    code: i32,
    short_name: Option<&'a str>,
}

impl<'a> KeyCode<'a> {
    /// A key code with no name attached.
    pub fn new(code: i32) -> Self {
        Self {
            code,
            short_name: None,
        }
    }

    /// A key code carrying its table name.
    pub fn with_name(code: i32, short_name: &'a str) -> Self {
        Self {
            code,
            short_name: Some(short_name),
        }
    }

    /// The attached name, or `""` when none was attached.
    ///
    /// Use [`KeyCode::short_name`] to tell the two apart.
    pub fn name(&self) -> &'a str {
        self.short_name.unwrap_or("")
    }

    pub fn short_name(&self) -> Option<&'a str> {
        self.short_name
    }

    /// `true` when the code fits in a single byte (`code <= 0xFF`).
    pub fn is_ascii(&self) -> bool {
        self.code <= 0xFF
    }

    /// Low eight bits of the code, always interpreted as unsigned.
    pub fn as_byte(&self) -> u8 {
        (self.code & 0xFF) as u8
    }

    /// The raw code, unchanged.
    pub fn code(&self) -> i32 {
        self.code
    }
}

impl fmt::Display for KeyCode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.short_name {
            Some(name) => f.write_str(name),
            None => write!(f, "<code {:#o}>", self.code),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
