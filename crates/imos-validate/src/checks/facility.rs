//! Field 2 check: facility / sub-facility code.

use imos_model::CheckResult;
use imos_standards::ReferenceTables;

use crate::file_name::FileNameTokens;
use crate::rule::FileNameRule;

/// A missing field 2 fails.
pub fn check(tokens: &FileNameTokens, tables: &ReferenceTables) -> Vec<CheckResult> {
    let passed = tokens
        .field(2)
        .is_some_and(|code| tables.is_facility_code(code));
    vec![FileNameRule::Field2.result(passed)]
}
