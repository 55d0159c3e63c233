//! Field 1 check: the literal `IMOS` prefix.

use imos_model::CheckResult;

use crate::file_name::FileNameTokens;
use crate::rule::FileNameRule;

pub const PROJECT_PREFIX: &str = "IMOS";

pub fn check(tokens: &FileNameTokens) -> Vec<CheckResult> {
    vec![FileNameRule::Field1.result(tokens.field(1) == Some(PROJECT_PREFIX))]
}
