#![allow(dead_code)]

use imos_model::{AttributeMap, CheckResult, names};
use imos_standards::ReferenceTables;

pub const VALID_NAME: &str = "IMOS_ANMN-NRS_TZ_20200102T030405Z_NRSMAI_FV01";

pub fn tables() -> ReferenceTables {
    ReferenceTables::from_codes(
        ["ANMN-NRS", "ABOS-SOTS", "SOOP-XBT"],
        ["NRSMAI", "NRSKAI", "SAM8SG"],
    )
}

/// Attributes consistent with [`VALID_NAME`].
pub fn consistent_metadata() -> AttributeMap {
    AttributeMap::new()
        .with(names::TIME_COVERAGE_START, "2020-01-02T03:04:05Z")
        .with(names::PLATFORM_CODE, "NRSMAI")
        .with(names::FILE_VERSION, "Level 1 - Quality Controlled Data")
}

/// `VALID_NAME` with extra trailing fields and a `.nc` extension.
pub fn with_trailing(trailing: &[&str]) -> String {
    let mut name = VALID_NAME.to_string();
    for field in trailing {
        name.push('_');
        name.push_str(field);
    }
    format!("/data/{name}.nc")
}

pub fn verdicts(results: &[CheckResult]) -> Vec<bool> {
    results.iter().map(|r| r.passed).collect()
}

pub fn named<'a>(results: &'a [CheckResult], check_name: &str) -> Vec<&'a CheckResult> {
    results
        .iter()
        .filter(|r| r.name.name == check_name)
        .collect()
}

pub fn render(results: &[CheckResult]) -> String {
    results
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
