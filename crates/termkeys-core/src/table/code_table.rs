//! The built lookup table and its slot type.
//!
//! # How this table works
//!
//! `CodeTable` holds a `Vec<Slot>` whose index is the key code.  Position
//! 0o403 (259) holds `Slot::Named { name: "key_up", .. }` because the database
//! binds `key_up` to octal 0403.  Codes below 128 without a name hold the byte
//! itself so the caller can render it as a character; codes from 128 up
//! without a name are [`Slot::Absent`].
//!
//! Indexing is an O(1) lookup.  Every key read from the terminal goes through
//! this table, so no hashing or searching happens on that path.

use std::slice;

use crate::keycode::KeyCode;

/// One entry of a [`CodeTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// A code bound to a capability in the database.
    Named { name: String, description: String },
    /// A printable ASCII byte (space through `~`).
    Printable(u8),
    /// A non-printable byte below 128, rendered as a hex escape.
    Control(u8),
    /// A code of 128 or more with no capability bound to it.
    Absent,
}

impl Slot {
    /// Classifies a code below 128 that has no capability name.
    ///
    /// Returns [`Slot::Absent`] for codes of 128 and above.
    pub fn for_unnamed(code: u32) -> Self {
        match u8::try_from(code) {
            Ok(byte) if byte.is_ascii_graphic() || byte == b' ' => Self::Printable(byte),
            Ok(byte) if byte.is_ascii() => Self::Control(byte),
            _ => Self::Absent,
        }
    }

    /// Name attached to a [`KeyCode`] built from this slot.
    ///
    /// Named slots yield the capability name; byte slots yield the one-byte
    /// string of that byte.  The NUL byte reads back as the empty name, the
    /// same as the C string `"\x00"` does.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named { name, .. } => Some(name.as_str()),
            Self::Control(0) => Some(""),
            // Both variants only ever hold bytes below 0x80, which are valid UTF-8.
            Self::Printable(byte) | Self::Control(byte) => {
                std::str::from_utf8(slice::from_ref(byte)).ok()
            }
            Self::Absent => None,
        }
    }

    /// Description of a named slot.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Named { description, .. } => Some(description.as_str()),
            _ => None,
        }
    }

    /// Body of a double-quoted string literal for this slot.
    ///
    /// Backslash and double quote are escaped; control bytes become `\xNN`.
    /// The form is valid in both Rust and C string literals.
    pub fn escaped(&self) -> Option<String> {
        match self {
            Self::Named { name, .. } => Some(name.clone()),
            Self::Printable(b'\\') => Some("\\\\".to_string()),
            Self::Printable(b'"') => Some("\\\"".to_string()),
            Self::Printable(byte) => Some(char::from(*byte).to_string()),
            Self::Control(byte) => Some(format!("\\x{byte:02x}")),
            Self::Absent => None,
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named { .. })
    }
}

/// Dense key code → [`Slot`] table covering `[0, max_code]`.
///
/// Built once by [`crate::CodeTableBuilder`] and never mutated afterwards, so
/// a shared reference can be read from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    slots: Vec<Slot>,
}

impl CodeTable {
    /// Wraps a slot vector.  `slots` must not be empty.
    pub(crate) fn from_slots(slots: Vec<Slot>) -> Self {
        debug_assert!(!slots.is_empty(), "a code table always has slot 0");
        Self { slots }
    }

    /// Highest code covered by the table.
    pub fn max_code(&self) -> u32 {
        (self.slots.len() - 1) as u32
    }

    /// Number of slots, always `max_code() + 1`.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`; a built table covers at least code 0.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns the slot for `code`, or `None` past [`CodeTable::max_code`].
    pub fn slot(&self, code: u32) -> Option<&Slot> {
        self.slots.get(code as usize)
    }

    /// Iterates `(code, slot)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Slot)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(code, slot)| (code as u32, slot))
    }

    /// Number of slots bound to a capability name.
    pub fn named_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_named()).count()
    }

    /// Translates a raw key code into a [`KeyCode`].
    ///
    /// # Panics
    ///
    /// Panics if `code` is negative or greater than [`CodeTable::max_code`].
    /// Callers only pass codes the table was built to cover; anything else is
    /// a bug in the caller.
    pub fn lookup(&self, code: i32) -> KeyCode<'_> {
        match self.get(code) {
            Some(keycode) => keycode,
            None => panic!(
                "key code {code} outside table range [0, {}]",
                self.max_code()
            ),
        }
    }

    /// Non-panicking form of [`CodeTable::lookup`].
    pub fn get(&self, code: i32) -> Option<KeyCode<'_>> {
        let offset = usize::try_from(code).ok()?;
        let slot = self.slots.get(offset)?;
        Some(match slot.name() {
            Some(name) => KeyCode::with_name(code, name),
            None => KeyCode::new(code),
        })
    }
}

impl<'a> IntoIterator for &'a CodeTable {
    type Item = &'a Slot;
    type IntoIter = slice::Iter<'a, Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
