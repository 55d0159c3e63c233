//! Field 5 checks: platform / site code.
//!
//! Two results, both named `check_file_name_field5`:
//! - the field is a known platform code
//! - the field equals `platform_code` or `site_code`, when either is declared

use imos_model::{CheckResult, MetadataAttributes, names};
use imos_standards::ReferenceTables;

use crate::file_name::FileNameTokens;
use crate::rule::FileNameRule;

const IDENTITY_ATTRIBUTES: [&str; 2] = [names::PLATFORM_CODE, names::SITE_CODE];

/// Unlike fields 1 to 4, a missing field 5 is not applicable and reports
/// nothing. The attribute check runs only when at least one attribute is
/// non-empty; field 5 is then compared with every declared value.
pub fn check<M>(
    tokens: &FileNameTokens,
    metadata: &M,
    tables: &ReferenceTables,
) -> Vec<CheckResult>
where
    M: MetadataAttributes + ?Sized,
{
    let Some(field) = tokens.field(5) else {
        return Vec::new();
    };

    let known = tables.is_platform_code(field);
    let mut results = vec![FileNameRule::Field5PlatformCode.result(known)];

    let declared: Vec<&str> = IDENTITY_ATTRIBUTES
        .iter()
        .filter_map(|name| metadata.attribute(name))
        .collect();
    if declared.iter().any(|value| !value.is_empty()) {
        results.push(FileNameRule::Field5Attribute.result(declared.contains(&field)));
    }

    results
}
