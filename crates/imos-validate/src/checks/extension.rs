//! Extension check: the file must be a `.nc` file.

use imos_model::CheckResult;

use crate::file_name::FileNameTokens;
use crate::rule::FileNameRule;

const NETCDF_EXTENSION: &str = "nc";

pub fn check(tokens: &FileNameTokens) -> Vec<CheckResult> {
    vec![FileNameRule::ExtensionName.result(tokens.extension == NETCDF_EXTENSION)]
}
