//! JSON emitter, for hosts that load the table at start-up instead of
//! compiling it in.
//!
//! ```json
//! {
//!   "max_code": 259,
//!   "codes": ["\u0000", "\u0001", ..., "A", ..., null, ..., "key_up"]
//! }
//! ```
//!
//! Control bytes are stored as the byte itself; JSON escapes them as
//! `\u00NN`.  Descriptions are carried in a separate `descriptions` object
//! keyed by code.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{EmitError, EmitOptions, GeneratedFile, TableEmitter};
use crate::table::CodeTable;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEmitter;

#[derive(Serialize)]
struct JsonTable<'a> {
    generator: &'static str,
    max_code: u32,
    codes: Vec<Option<&'a str>>,
    descriptions: BTreeMap<u32, &'a str>,
}

impl TableEmitter for JsonEmitter {
    fn emit(&self, table: &CodeTable, _options: &EmitOptions) -> Result<Vec<GeneratedFile>, EmitError> {
        let doc = JsonTable {
            generator: super::BANNER,
            max_code: table.max_code(),
            codes: table.slots().iter().map(|slot| slot.name()).collect(),
            descriptions: table
                .iter()
                .filter_map(|(code, slot)| slot.description().map(|d| (code, d)))
                .collect(),
        };
        let mut contents = serde_json::to_string_pretty(&doc)?;
        contents.push('\n');
        Ok(vec![GeneratedFile {
            extension: "json",
            contents,
        }])
    }
}
