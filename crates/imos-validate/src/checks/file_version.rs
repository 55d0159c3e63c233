//! Field 6 check: file version against `file_version`.
//!
//! `FV0X` must agree with a `file_version` attribute of the form `Level X`
//! (anything after the second space-separated token is ignored).

use imos_model::{CheckResult, MetadataAttributes, names};

use crate::file_name::FileNameTokens;
use crate::rule::FileNameRule;

/// Accepted file version tokens.
pub const FILE_VERSIONS: [&str; 3] = ["FV00", "FV01", "FV02"];

/// A missing field 6 reports nothing. A valid token with no `file_version`
/// attribute also reports nothing: the file makes no processing level claim
/// to be consistent with. An invalid token fails regardless.
pub fn check<M>(tokens: &FileNameTokens, metadata: &M) -> Vec<CheckResult>
where
    M: MetadataAttributes + ?Sized,
{
    let Some(field) = tokens.field(6) else {
        return Vec::new();
    };
    if !FILE_VERSIONS.contains(&field) {
        return vec![FileNameRule::Field6.result(false)];
    }
    let Some(file_version) = metadata.attribute(names::FILE_VERSION) else {
        return Vec::new();
    };

    vec![FileNameRule::Field6.result(level_matches(field, file_version))]
}

/// `field` is one of [`FILE_VERSIONS`], so its level digit is the last byte.
fn level_matches(field: &str, file_version: &str) -> bool {
    let level = &field[3..];
    file_version.split(' ').nth(1) == Some(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_digit_comparison() {
        assert!(level_matches("FV01", "Level 1"));
        assert!(level_matches("FV00", "Level 0 - Raw data"));
        assert!(!level_matches("FV01", "Level 2"));
        assert!(!level_matches("FV01", "Level1"));
        assert!(!level_matches("FV01", "Level  1"));
        assert!(!level_matches("FV02", ""));
    }
}
