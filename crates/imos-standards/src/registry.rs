//! Reference tables bundle.

use std::path::PathBuf;

use crate::error::{Result, StandardsError};
use crate::loader::load_table;
use crate::paths::{standards_root, table_path};
use crate::table::{CodeTable, TableKind};

/// Where to load the reference tables from.
#[derive(Debug, Clone)]
pub struct StandardsConfig {
    pub root: PathBuf,
}

impl Default for StandardsConfig {
    fn default() -> Self {
        Self {
            root: standards_root(),
        }
    }
}

impl StandardsConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn table_path(&self, kind: TableKind) -> PathBuf {
        table_path(&self.root, kind)
    }
}

/// Facility and platform code tables.
///
/// Loaded once and never mutated; share it by reference (or behind an `Arc`)
/// across concurrent check runs.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    facility: CodeTable,
    platform: CodeTable,
}

impl ReferenceTables {
    pub fn new(facility: CodeTable, platform: CodeTable) -> Self {
        debug_assert_eq!(facility.kind(), TableKind::Facility);
        debug_assert_eq!(platform.kind(), TableKind::Platform);
        Self { facility, platform }
    }

    /// Build both tables from in-memory code lists.
    pub fn from_codes<F, P, S, T>(facility: F, platform: P) -> Self
    where
        F: IntoIterator<Item = S>,
        P: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self::new(
            CodeTable::from_codes(TableKind::Facility, facility),
            CodeTable::from_codes(TableKind::Platform, platform),
        )
    }

    /// Load both tables from the configured standards directory.
    pub fn load(config: &StandardsConfig) -> Result<Self> {
        if !config.root.is_dir() {
            return Err(StandardsError::DirectoryNotFound {
                path: config.root.clone(),
            });
        }
        let facility = load_table(&config.table_path(TableKind::Facility), TableKind::Facility)?;
        let platform = load_table(&config.table_path(TableKind::Platform), TableKind::Platform)?;
        tracing::info!(
            root = %config.root.display(),
            facility_codes = facility.len(),
            platform_codes = platform.len(),
            "Loaded IMOS reference tables"
        );
        Ok(Self::new(facility, platform))
    }

    /// Load both tables from the default standards directory.
    pub fn load_default() -> Result<Self> {
        Self::load(&StandardsConfig::default())
    }

    pub fn facility(&self) -> &CodeTable {
        &self.facility
    }

    pub fn platform(&self) -> &CodeTable {
        &self.platform
    }

    pub fn table(&self, kind: TableKind) -> &CodeTable {
        match kind {
            TableKind::Facility => &self.facility,
            TableKind::Platform => &self.platform,
        }
    }

    pub fn is_facility_code(&self, code: &str) -> bool {
        self.facility.contains(code)
    }

    pub fn is_platform_code(&self, code: &str) -> bool {
        self.platform.contains(code)
    }
}
