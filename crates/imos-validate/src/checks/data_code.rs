//! Field 3 check: data code letters.

use std::sync::LazyLock;

use imos_model::CheckResult;
use regex::Regex;

use crate::file_name::FileNameTokens;
use crate::rule::FileNameRule;

/// Letters permitted in the data code field.
pub const DATA_CODE_ALPHABET: &str = "ABCEFGIKMOPRSTUVWZ";

static DATA_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ABCEFGIKMOPRSTUVWZ]+$").expect("Invalid data code regex"));

/// Whether `value` is a non-empty run of data code letters.
pub fn is_data_code(value: &str) -> bool {
    DATA_CODE_REGEX.is_match(value)
}

/// A missing field 3 fails.
pub fn check(tokens: &FileNameTokens) -> Vec<CheckResult> {
    let passed = tokens.field(3).is_some_and(is_data_code);
    vec![FileNameRule::Field3.result(passed)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regex_matches_alphabet() {
        assert!(is_data_code(DATA_CODE_ALPHABET));
        assert!(is_data_code("TZ"));
        assert!(is_data_code("A"));
    }

    #[test]
    fn rejects_other_characters() {
        assert!(!is_data_code(""));
        assert!(!is_data_code("ABCX"));
        assert!(!is_data_code("abc"));
        assert!(!is_data_code("TZ "));
        assert!(!is_data_code("D"));
        assert!(!is_data_code("T\nZ"));
    }
}
