//! Process-wide key code table.
//!
//! An application builds its [`CodeTable`] once during start-up, hands it to
//! [`install`], and from then on any thread may translate codes with
//! [`lookup`].  Installation is a one-time barrier: the table cannot be
//! replaced or torn down while the process runs, so readers never need a lock.
//!
//! ```text
//! main()
//!  └─ CodeTableBuilder::build()   -- single-threaded
//!  └─ registry::install(table)    -- exactly once
//!  └─ spawn event handlers        -- registry::lookup(code) from any thread
//! ```

use std::sync::OnceLock;

use thiserror::Error;
use tracing::info;

use crate::keycode::KeyCode;
use crate::table::CodeTable;

static TABLE: OnceLock<CodeTable> = OnceLock::new();

/// Errors from table installation.
#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    /// [`install`] was already called successfully.
    #[error("a key code table is already installed (max code {max_code})")]
    AlreadyInstalled { max_code: u32 },
}

/// Installs `table` as the process-wide table.
///
/// # Errors
///
/// Returns [`RegistryError::AlreadyInstalled`] if a table is already in place;
/// the existing table is kept.
pub fn install(table: CodeTable) -> Result<&'static CodeTable, RegistryError> {
    let max_code = table.max_code();
    let mut fresh = false;
    let installed = TABLE.get_or_init(|| {
        fresh = true;
        table
    });
    if !fresh {
        return Err(RegistryError::AlreadyInstalled {
            max_code: installed.max_code(),
        });
    }
    info!(max_code, "key code table installed");
    Ok(installed)
}

/// The installed table, if any.
pub fn installed() -> Option<&'static CodeTable> {
    TABLE.get()
}

/// Translates `code` with the installed table.
///
/// # Panics
///
/// Panics if no table is installed, or if `code` is outside the installed
/// table's range (see [`CodeTable::lookup`]).
pub fn lookup(code: i32) -> KeyCode<'static> {
    match TABLE.get() {
        Some(table) => table.lookup(code),
        None => panic!("key code lookup before a table was installed"),
    }
}

/// Non-panicking form of [`lookup`].
pub fn try_lookup(code: i32) -> Option<KeyCode<'static>> {
    TABLE.get()?.get(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{CapabilityRecord, CodeAssignment};
    use crate::table::CodeTableBuilder;

    fn table_with(name: &str, code: u32) -> CodeTable {
        let builder: CodeTableBuilder = [CapabilityRecord {
            symbolic_name: name.to_string(),
            macro_name: name.to_uppercase(),
            code: CodeAssignment::Code(code),
            description: String::new(),
        }]
        .into_iter()
        .collect();
        builder.build().unwrap()
    }

    // The registry is process-global, so every assertion about it lives in
    // this one test to keep the ordering deterministic.
    #[test]
    fn test_install_once_then_lookup_from_threads() {
        // Arrange
        let first = table_with("key_up", 0o403);

        // Act
        let installed_table = install(first).expect("first install succeeds");
        let second = install(table_with("key_down", 0o402));

        // Assert
        assert_eq!(installed_table.max_code(), 0o403);
        assert_eq!(
            second,
            Err(RegistryError::AlreadyInstalled { max_code: 0o403 })
        );
        assert!(installed().is_some());
        assert_eq!(lookup(0o403).name(), "key_up");
        assert_eq!(lookup(0o402).short_name(), None);
        assert!(try_lookup(0o404).is_none());

        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| lookup(0o403).name()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "key_up");
        }
    }
}
