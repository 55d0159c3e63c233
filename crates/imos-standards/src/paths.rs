//! Standards directory path resolution.

use std::path::PathBuf;

use crate::table::TableKind;

/// Environment variable for overriding the standards directory.
pub const STANDARDS_ENV_VAR: &str = "IMOS_STANDARDS_DIR";

/// Get the standards root directory.
///
/// Resolution order:
/// 1. `IMOS_STANDARDS_DIR` environment variable
/// 2. `standards/` directory relative to workspace root
pub fn standards_root() -> PathBuf {
    if let Ok(root) = std::env::var(STANDARDS_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../standards")
}

/// Path of a reference table under the given standards root.
pub fn table_path(root: &std::path::Path, kind: TableKind) -> PathBuf {
    root.join("imos").join(kind.file_name())
}
