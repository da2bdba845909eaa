//! C header/source emitter.
//!
//! Produces `<module>.h` declaring the table and an accessor, and
//! `<module>.c` defining them.  The accessor asserts the code is in range,
//! matching the contract of [`crate::CodeTable::lookup`].

use super::{entry_line, EmitError, EmitOptions, GeneratedFile, TableEmitter, BANNER};
use crate::table::CodeTable;

#[derive(Debug, Clone, Copy, Default)]
pub struct CEmitter;

/// `keycode` → `KEYCODE_H_`; anything outside `[A-Za-z0-9]` becomes `_`.
fn include_guard(module_name: &str) -> String {
    let stem: String = module_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect();
    format!("{stem}_H_")
}

impl TableEmitter for CEmitter {
    fn emit(&self, table: &CodeTable, options: &EmitOptions) -> Result<Vec<GeneratedFile>, EmitError> {
        let guard = include_guard(&options.module_name);
        let max_code = table.max_code();

        let mut header = String::new();
        header.push_str(&format!("/* {BANNER} */\n"));
        header.push('\n');
        header.push_str(&format!("#ifndef {guard}\n"));
        header.push_str(&format!("#define {guard}\n"));
        header.push('\n');
        header.push_str(&format!("#define KEYCODE_MAX_CODE {max_code}\n"));
        header.push('\n');
        header.push_str("extern const char *const keycode_arr[KEYCODE_MAX_CODE + 1];\n");
        header.push('\n');
        header.push_str("/* Name for code; code must be in [0, KEYCODE_MAX_CODE]. */\n");
        header.push_str("const char *keycode_name(int code);\n");
        header.push('\n');
        header.push_str(&format!("#endif  /* {guard} */\n"));

        let mut source = String::new();
        source.push_str(&format!("/* {BANNER} */\n"));
        source.push('\n');
        source.push_str(&format!("#include \"{}.h\"\n", options.module_name));
        source.push('\n');
        source.push_str("#include <assert.h>\n");
        source.push_str("#include <stddef.h>\n");
        source.push('\n');
        source.push_str("const char *const keycode_arr[KEYCODE_MAX_CODE + 1] = {\n");
        for slot in table {
            let entry = match slot.escaped() {
                Some(text) => format!("  \"{text}\","),
                None => "  NULL,".to_string(),
            };
            source.push_str(&entry_line(&entry, slot, options.comment_width));
            source.push('\n');
        }
        source.push_str("};\n\n");
        source.push_str(
            "const char *keycode_name(int code) {\n  \
             assert(code >= 0 && code <= KEYCODE_MAX_CODE);\n  \
             return keycode_arr[code];\n\
             }\n",
        );

        Ok(vec![
            GeneratedFile {
                extension: "h",
                contents: header,
            },
            GeneratedFile {
                extension: "c",
                contents: source,
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{CapabilityRecord, CodeAssignment};
    use crate::table::CodeTableBuilder;

    fn up_table() -> CodeTable {
        let mut builder = CodeTableBuilder::new();
        builder.push(CapabilityRecord {
            symbolic_name: "key_up".to_string(),
            macro_name: "KEY_UP".to_string(),
            code: CodeAssignment::Code(0o403),
            description: "up-arrow key".to_string(),
        });
        builder.build().unwrap()
    }

    #[test]
    fn test_c_source_description_cannot_splice_next_entry() {
        // Arrange
        let mut builder = CodeTableBuilder::new();
        builder.push(CapabilityRecord {
            symbolic_name: "key_a".to_string(),
            macro_name: "KEY_A".to_string(),
            code: CodeAssignment::Code(0o401),
            description: "ends with \\".to_string(),
        });
        builder.push(CapabilityRecord {
            symbolic_name: "key_b".to_string(),
            macro_name: "KEY_B".to_string(),
            code: CodeAssignment::Code(0o402),
            description: "next key".to_string(),
        });
        let table = builder.build().unwrap();

        // Act
        let files = CEmitter.emit(&table, &EmitOptions::default()).unwrap();

        // Assert
        let source = &files[1].contents;
        assert!(
            source.lines().all(|line| !line.ends_with('\\')),
            "no line may end in a continuation backslash"
        );
        let a_line = source.lines().find(|line| line.contains("\"key_a\"")).unwrap();
        assert!(a_line.ends_with("// ends with"));
        let entries = source
            .lines()
            .skip_while(|line| !line.starts_with("const char *const keycode_arr"))
            .skip(1)
            .take_while(|line| *line != "};")
            .count();
        assert_eq!(entries, table.len());
    }

    #[test]
    fn test_include_guard_is_sanitised() {
        assert_eq!(include_guard("keycode"), "KEYCODE_H_");
        assert_eq!(include_guard("key-codes.v2"), "KEY_CODES_V2_H_");
    }

    #[test]
    fn test_c_emitter_writes_header_and_source() {
        // Act
        let files = CEmitter.emit(&up_table(), &EmitOptions::default()).unwrap();

        // Assert
        let extensions: Vec<&str> = files.iter().map(|f| f.extension).collect();
        assert_eq!(extensions, ["h", "c"]);
        let header = &files[0].contents;
        assert!(header.contains("#ifndef KEYCODE_H_"));
        assert!(header.contains("#define KEYCODE_MAX_CODE 259"));
        let source = &files[1].contents;
        assert!(source.contains("#include \"keycode.h\""));
        assert!(source.contains("assert(code >= 0 && code <= KEYCODE_MAX_CODE);"));
    }

    #[test]
    fn test_c_source_uses_null_for_absent_and_hex_for_control() {
        let files = CEmitter.emit(&up_table(), &EmitOptions::default()).unwrap();
        let source = &files[1].contents;

        assert!(source.contains("\n  \"\\x1b\",\n"));
        assert!(source.contains("\n  NULL,\n"));
        let up_line = source
            .lines()
            .find(|line| line.contains("\"key_up\""))
            .unwrap();
        assert_eq!(up_line.find("//"), Some(30));
    }
}
