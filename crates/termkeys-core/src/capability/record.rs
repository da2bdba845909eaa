//! A single parsed `key_` capability line.

use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::CapabilityError;

/// Prefix that marks a line as a key capability.
const KEY_PREFIX: &str = "key_";

/// Largest code a capability may be bound to (octal `0177777`).
///
/// The table is dense up to its highest code, so this also caps its length.
/// Terminal key codes stay far below it; ncurses tops out at `0777`.
pub const MAX_KEY_CODE: u32 = 0xFFFF;

/// Positional schema for a key capability line.
///
/// The code column is captured loosely (`\S+`) so that a bad code is reported
/// as [`CapabilityError::MalformedCode`] rather than a schema mismatch.
fn line_regex() -> &'static Regex {
    static LINE_REGEX: OnceLock<Regex> = OnceLock::new();
    LINE_REGEX.get_or_init(|| {
        Regex::new(
            r"^(key_[a-z0-9_]+)\s+\S+\s+str\s+\S+\s+([_A-Z()0-9]+)\s+(\S+)\s+\S+\s+(.*)$",
        )
        .expect("Invalid capability line regex")
    })
}

fn octal_regex() -> &'static Regex {
    static OCTAL_REGEX: OnceLock<Regex> = OnceLock::new();
    OCTAL_REGEX.get_or_init(|| Regex::new(r"^0[0-9]+$").expect("Invalid octal regex"))
}

/// The numeric code a capability is bound to.
///
/// Entries written as `-` in the database have no fixed code.  Keeping that
/// state separate from `Code(0)` means a real zero can never be mistaken for
/// "unassigned".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeAssignment {
    /// The database lists `-` for this capability.
    Unassigned,
    /// A code parsed from an octal literal.
    Code(u32),
}

impl CodeAssignment {
    /// Parses the code column of a capability line.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityError::MalformedCode`] unless `text` is `-` or an
    /// octal literal with a leading zero (`0402`) no greater than
    /// [`MAX_KEY_CODE`].
    pub fn parse(line_no: usize, text: &str) -> Result<Self, CapabilityError> {
        if text == "-" {
            return Ok(Self::Unassigned);
        }
        let malformed = || CapabilityError::MalformedCode {
            line_no,
            code: text.to_string(),
        };
        if !octal_regex().is_match(text) {
            return Err(malformed());
        }
        // `0[0-9]+` still admits the digits 8 and 9.
        match u32::from_str_radix(text, 8) {
            Ok(code) if code <= MAX_KEY_CODE => Ok(Self::Code(code)),
            _ => Err(malformed()),
        }
    }

    /// Returns the assigned code, or `None` for [`CodeAssignment::Unassigned`].
    pub fn code(self) -> Option<u32> {
        match self {
            Self::Code(code) => Some(code),
            Self::Unassigned => None,
        }
    }
}

impl fmt::Display for CodeAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unassigned => f.write_str("-"),
            Self::Code(code) => write!(f, "0{code:o}"),
        }
    }
}

/// One key capability from the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityRecord {
    /// Stable identifier, e.g. `key_up`.
    pub symbolic_name: String,
    /// C macro name from the database, e.g. `KEY_UP`.
    pub macro_name: String,
    /// Numeric code or [`CodeAssignment::Unassigned`].
    pub code: CodeAssignment,
    /// Free-text description, e.g. `up-arrow key`.
    pub description: String,
}

impl CapabilityRecord {
    /// Ordering used when building the table.
    ///
    /// Nonzero codes come first in numeric order; unassigned records follow,
    /// ordered by name.  An explicit code 0 never names a slot, so it sorts
    /// in the unassigned group.  Records sharing a code compare equal so a
    /// stable sort keeps their input order.
    pub fn table_order(&self, other: &Self) -> Ordering {
        match (self.sort_code(), other.sort_code()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.symbolic_name.cmp(&other.symbolic_name),
        }
    }

    fn sort_code(&self) -> Option<u32> {
        self.code.code().filter(|&code| code != 0)
    }
}

/// Parses one line of a capability database.
///
/// `line_no` is 1-based and only used in error reports.
///
/// Returns `Ok(None)` for lines that do not start with `key_`.
///
/// # Errors
///
/// - [`CapabilityError::SchemaMismatch`] if a `key_` line does not have the
///   expected columns.
/// - [`CapabilityError::MalformedCode`] if the code column is not `-` or an
///   octal literal.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<CapabilityRecord>, CapabilityError> {
    if !line.starts_with(KEY_PREFIX) {
        return Ok(None);
    }
    let line = line.trim_end_matches(['\r', '\n']);

    let caps = line_regex()
        .captures(line)
        .ok_or_else(|| CapabilityError::SchemaMismatch {
            line_no,
            line: line.to_string(),
        })?;

    let code = CodeAssignment::parse(line_no, &caps[3])?;

    Ok(Some(CapabilityRecord {
        symbolic_name: caps[1].to_string(),
        macro_name: caps[2].to_string(),
        code,
        description: caps[4].trim_end().to_string(),
    }))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, code: CodeAssignment) -> CapabilityRecord {
        CapabilityRecord {
            symbolic_name: name.to_string(),
            macro_name: name.to_uppercase(),
            code,
            description: String::new(),
        }
    }

    #[test]
    fn test_parse_line_extracts_all_fields() {
        // Arrange
        let line = "key_up      KEY_UP    str  @  KEY_UP()  0403  -   up-arrow key";

        // Act
        let rec = parse_line(1, line).unwrap().expect("key_ line must yield a record");

        // Assert
        assert_eq!(rec.symbolic_name, "key_up");
        assert_eq!(rec.macro_name, "KEY_UP()");
        assert_eq!(rec.code, CodeAssignment::Code(0o403));
        assert_eq!(rec.description, "up-arrow key");
    }

    #[test]
    fn test_parse_line_accepts_ncurses_tab_separated_layout() {
        let line = "key_down\t\t\tkcud1\tstr\tkd\tKEY_DOWN\t0402\t------\tdown-arrow key";
        let rec = parse_line(7, line).unwrap().unwrap();
        assert_eq!(rec.symbolic_name, "key_down");
        assert_eq!(rec.macro_name, "KEY_DOWN");
        assert_eq!(rec.code.code(), Some(258));
    }

    #[test]
    fn test_parse_line_skips_non_key_lines() {
        for line in [
            "",
            "# comment line",
            "auto_left_margin bw bool am - - YB-G- cub1 wraps",
            "  key_up indented does not count",
        ] {
            assert!(parse_line(1, line).unwrap().is_none(), "{line:?} must be skipped");
        }
    }

    #[test]
    fn test_parse_line_dash_code_is_unassigned() {
        let line = "key_command kcmd str @8 KEY_COMMAND - ----- command key";
        let rec = parse_line(1, line).unwrap().unwrap();
        assert_eq!(rec.code, CodeAssignment::Unassigned);
        assert_eq!(rec.code.code(), None);
    }

    #[test]
    fn test_parse_line_strips_trailing_newline_and_whitespace() {
        let line = "key_home khome str kh KEY_HOME 0406 ----- home key  \r\n";
        let rec = parse_line(1, line).unwrap().unwrap();
        assert_eq!(rec.description, "home key");
    }

    #[test]
    fn test_parse_line_schema_mismatch_reports_line() {
        // Missing the literal `str` column.
        let line = "key_up KEY_UP bool @ KEY_UP() 0403 - up-arrow key";

        let err = parse_line(12, line).unwrap_err();

        match err {
            CapabilityError::SchemaMismatch { line_no, line: text } => {
                assert_eq!(line_no, 12);
                assert_eq!(text, line);
            }
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_line_lowercase_macro_is_schema_mismatch() {
        let line = "key_up KEY_UP str @ key_up 0403 - up-arrow key";
        assert!(matches!(
            parse_line(1, line),
            Err(CapabilityError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn test_parse_line_non_numeric_code_is_malformed() {
        let line = "key_up KEY_UP str @ KEY_UP() abc - up-arrow key";
        match parse_line(3, line).unwrap_err() {
            CapabilityError::MalformedCode { line_no, code } => {
                assert_eq!(line_no, 3);
                assert_eq!(code, "abc");
            }
            other => panic!("expected MalformedCode, got {other:?}"),
        }
    }

    #[test]
    fn test_code_parse_rejects_non_octal_forms() {
        for text in ["403", "0", "-1", "089", "0x1F", "04o3"] {
            assert!(
                matches!(
                    CodeAssignment::parse(1, text),
                    Err(CapabilityError::MalformedCode { .. })
                ),
                "{text:?} must be rejected"
            );
        }
    }

    #[test]
    fn test_code_parse_rejects_codes_past_max() {
        for text in ["0200000", "020000000000", "077777777777"] {
            match CodeAssignment::parse(4, text) {
                Err(CapabilityError::MalformedCode { line_no, code }) => {
                    assert_eq!(line_no, 4);
                    assert_eq!(code, text);
                }
                other => panic!("{text:?} must be rejected, got {other:?}"),
            }
        }
        assert_eq!(
            CodeAssignment::parse(4, "0177777").unwrap(),
            CodeAssignment::Code(MAX_KEY_CODE)
        );
    }

    #[test]
    fn test_code_parse_accepts_octal_literals() {
        assert_eq!(CodeAssignment::parse(1, "0403").unwrap(), CodeAssignment::Code(259));
        assert_eq!(CodeAssignment::parse(1, "00").unwrap(), CodeAssignment::Code(0));
        assert_eq!(CodeAssignment::parse(1, "0777").unwrap(), CodeAssignment::Code(511));
    }

    #[test]
    fn test_code_assignment_display_matches_database_form() {
        assert_eq!(CodeAssignment::Code(0o402).to_string(), "0402");
        assert_eq!(CodeAssignment::Unassigned.to_string(), "-");
    }

    #[test]
    fn test_table_order_puts_unassigned_after_any_code() {
        let assigned = record("key_z", CodeAssignment::Code(0o777));
        let unassigned = record("key_a", CodeAssignment::Unassigned);
        assert_eq!(assigned.table_order(&unassigned), Ordering::Less);
        assert_eq!(unassigned.table_order(&assigned), Ordering::Greater);
    }

    #[test]
    fn test_table_order_unassigned_sorted_by_name() {
        let a = record("key_alpha", CodeAssignment::Unassigned);
        let b = record("key_beta", CodeAssignment::Unassigned);
        assert_eq!(a.table_order(&b), Ordering::Less);
    }

    #[test]
    fn test_table_order_code_zero_sorts_with_unassigned_by_name() {
        let zero = record("key_b", CodeAssignment::Code(0));
        let before = record("key_a", CodeAssignment::Unassigned);
        let after = record("key_c", CodeAssignment::Unassigned);
        let one = record("key_z", CodeAssignment::Code(1));

        assert_eq!(one.table_order(&zero), Ordering::Less);
        assert_eq!(zero.table_order(&one), Ordering::Greater);
        assert_eq!(before.table_order(&zero), Ordering::Less);
        assert_eq!(zero.table_order(&after), Ordering::Less);
    }

    #[test]
    fn test_table_order_equal_codes_compare_equal() {
        let a = record("key_first", CodeAssignment::Code(5));
        let b = record("key_second", CodeAssignment::Code(5));
        assert_eq!(a.table_order(&b), Ordering::Equal);
    }
}
