//! Compact ISO 8601 timestamps used in file names.

use chrono::NaiveDateTime;

/// `YYYYMMDDTHHMMSSZ`, as used in fields 4, `END-` and `C-`.
pub const COMPACT_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Strip `-` and `:` from an attribute timestamp.
///
/// `2020-01-02T03:04:05Z` becomes `20200102T030405Z`. No validation is done;
/// the result is only ever compared to a file name field.
pub fn compact(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, '-' | ':')).collect()
}

/// Parse a compact timestamp, rejecting impossible calendar dates.
pub fn parse_compact(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, COMPACT_FORMAT).ok()
}
