//! Field 4 check: start date against `time_coverage_start`.

use imos_model::{CheckResult, MetadataAttributes, names};

use crate::file_name::FileNameTokens;
use crate::rule::FileNameRule;
use crate::timestamp;

/// Files that do not declare `time_coverage_start` get no result at all.
/// When the attribute is present, a missing field 4 fails.
pub fn check<M>(tokens: &FileNameTokens, metadata: &M) -> Vec<CheckResult>
where
    M: MetadataAttributes + ?Sized,
{
    let Some(start) = metadata.attribute(names::TIME_COVERAGE_START) else {
        return Vec::new();
    };
    let expected = timestamp::compact(start);
    let passed = tokens.field(4).is_some_and(|field| field == expected);
    vec![FileNameRule::Field4.result(passed)]
}
