//! Field count check: 6 to 10 `_`-separated fields.

use std::ops::RangeInclusive;

use imos_model::CheckResult;

use crate::file_name::FileNameTokens;
use crate::rule::FileNameRule;

pub const FIELD_COUNT_RANGE: RangeInclusive<usize> = 6..=10;

pub fn check(tokens: &FileNameTokens) -> Vec<CheckResult> {
    vec![FileNameRule::FieldCount.result(FIELD_COUNT_RANGE.contains(&tokens.field_count()))]
}
