//! Rust source emitter.
//!
//! Produces a single module meant to be pulled into a crate with
//! `include!(concat!(env!("OUT_DIR"), "/keycode.rs"))` or checked in as a
//! normal source file.

use super::{entry_line, EmitError, EmitOptions, GeneratedFile, TableEmitter, BANNER};
use crate::table::CodeTable;

/// Emits `<module>.rs` with `MAX_CODE`, `KEYCODE_NAMES` and `keycode_name`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustEmitter;

impl TableEmitter for RustEmitter {
    fn emit(&self, table: &CodeTable, options: &EmitOptions) -> Result<Vec<GeneratedFile>, EmitError> {
        let mut out = String::new();
        let len = table.len();

        out.push_str(&format!("// {BANNER}\n"));
        out.push('\n');
        out.push_str("/// Highest key code covered by [`KEYCODE_NAMES`].\n");
        out.push_str(&format!("pub const MAX_CODE: usize = {};\n", table.max_code()));
        out.push('\n');
        out.push_str("/// Key code to name table; `None` where a code has no name.\n");
        out.push_str(&format!("pub static KEYCODE_NAMES: [Option<&str>; {len}] = [\n"));
        for slot in table {
            let entry = match slot.escaped() {
                Some(text) => format!("    Some(\"{text}\"),"),
                None => "    None,".to_string(),
            };
            out.push_str(&entry_line(&entry, slot, options.comment_width));
            out.push('\n');
        }
        out.push_str("];\n\n");
        out.push_str(
            "/// Returns the name for `code`, or `None` if it has none or is past [`MAX_CODE`].\n\
             pub fn keycode_name(code: usize) -> Option<&'static str> {\n    \
             KEYCODE_NAMES.get(code).copied().flatten()\n\
             }\n",
        );

        Ok(vec![GeneratedFile {
            extension: "rs",
            contents: out,
        }])
    }
}
