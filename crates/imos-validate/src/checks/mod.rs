//! File name check modules.
//!
//! Each module evaluates one rule against the cached tokens. Rules that are
//! not applicable return an empty vector instead of a passing result.
//!
//! Applicability is uneven across rules. The extension and field count
//! checks always report. Fields 1 to 3 fail when their field is missing,
//! and so does field 4 once `time_coverage_start` is declared. Missing
//! fields 5 and 6 and an absent trailing group report nothing. Field 4 and
//! the attribute cross-checks of fields 5 and 6 are also silent when the
//! dataset does not declare the attribute.

pub mod data_code;
pub mod extension;
pub mod facility;
pub mod field_count;
pub mod file_version;
pub mod platform;
pub mod prefix;
pub mod start_date;
pub mod trailing;

use imos_model::{CheckResult, MetadataAttributes};
use imos_standards::ReferenceTables;

use crate::file_name::FileNameTokens;

/// Run all file name checks in report order.
pub fn run_all<M>(
    tokens: &FileNameTokens,
    metadata: &M,
    tables: &ReferenceTables,
) -> Vec<CheckResult>
where
    M: MetadataAttributes + ?Sized,
{
    let mut results = Vec::new();

    // 1. Extension and overall shape
    results.extend(extension::check(tokens));
    results.extend(field_count::check(tokens));

    // 2. Fixed-position fields
    results.extend(prefix::check(tokens));
    results.extend(facility::check(tokens, tables));
    results.extend(data_code::check(tokens));
    results.extend(start_date::check(tokens, metadata));
    results.extend(platform::check(tokens, metadata, tables));
    results.extend(file_version::check(tokens, metadata));

    // 3. Optional trailing qualifiers
    results.extend(trailing::check(tokens));

    results
}
