//! Builds a dense [`CodeTable`] from parsed capability records.
//!
//! # Ordering and collisions
//!
//! Records are stable-sorted with [`CapabilityRecord::table_order`]: nonzero
//! codes ascending, then unassigned and code-0 records by name.  The sorted records are
//! written into a code → record map one after another, so when two records
//! share a code the one that sorts later wins.  With equal codes the sort
//! keeps input order, which makes the later line in the database the winner.
//!
//! # Code 0
//!
//! Slot 0 is never named.  It is classified like any other byte below 128
//! even if a record explicitly binds octal `00`.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::code_table::{CodeTable, Slot};
use crate::capability::{CapabilityError, CapabilityRecord, CodeAssignment};

/// Collects capability records and builds a [`CodeTable`].
///
/// # Examples
///
/// ```rust
/// use termkeys_core::{parse_capabilities, CodeTableBuilder};
///
/// let caps = "key_up kcuu1 str ku KEY_UP 0403 ----- up-arrow key\n\
///             key_down kcud1 str kd KEY_DOWN 0402 ----- down-arrow key\n";
/// let builder: CodeTableBuilder = parse_capabilities(caps.as_bytes()).unwrap().into_iter().collect();
/// let table = builder.build().unwrap();
///
/// assert_eq!(table.max_code(), 259);
/// assert_eq!(table.lookup(259).name(), "key_up");
/// assert_eq!(table.lookup(65).name(), "A");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeTableBuilder {
    records: Vec<CapabilityRecord>,
}

impl CodeTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: CapabilityRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in table order (see the module docs).
    pub fn sorted_records(&self) -> Vec<&CapabilityRecord> {
        let mut sorted: Vec<&CapabilityRecord> = self.records.iter().collect();
        // `sort_by` is stable; equal codes keep their input order.
        sorted.sort_by(|a, b| a.table_order(b));
        sorted
    }

    /// Builds the dense table.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityError::EmptyTable`] if no records were added.
    pub fn build(&self) -> Result<CodeTable, CapabilityError> {
        if self.records.is_empty() {
            return Err(CapabilityError::EmptyTable);
        }

        let sorted = self.sorted_records();
        let max_code = sorted
            .iter()
            .filter_map(|record| record.code.code())
            .max()
            .unwrap_or(0);

        let mut by_code: BTreeMap<u32, &CapabilityRecord> = BTreeMap::new();
        for &record in &sorted {
            match record.code {
                CodeAssignment::Code(0) => {
                    warn!(
                        name = %record.symbolic_name,
                        "capability bound to code 0; slot 0 is never named"
                    );
                }
                CodeAssignment::Code(code) => {
                    if let Some(previous) = by_code.insert(code, record) {
                        debug!(
                            code,
                            replaced = %previous.symbolic_name,
                            winner = %record.symbolic_name,
                            "key code collision"
                        );
                    }
                }
                CodeAssignment::Unassigned => {}
            }
        }

        let slots: Vec<Slot> = (0..=max_code)
            .map(|code| match by_code.get(&code) {
                Some(record) => Slot::Named {
                    name: record.symbolic_name.clone(),
                    description: record.description.clone(),
                },
                None => Slot::for_unnamed(code),
            })
            .collect();

        debug!(
            records = self.records.len(),
            named = by_code.len(),
            max_code,
            "built key code table"
        );
        Ok(CodeTable::from_slots(slots))
    }
}

impl FromIterator<CapabilityRecord> for CodeTableBuilder {
    fn from_iter<I: IntoIterator<Item = CapabilityRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Extend<CapabilityRecord> for CodeTableBuilder {
    fn extend<I: IntoIterator<Item = CapabilityRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
