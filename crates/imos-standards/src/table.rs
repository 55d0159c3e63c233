//! Code tables.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Which reference table a [`CodeTable`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableKind {
    /// Facility and sub-facility codes (file name field 2).
    Facility,
    /// Platform and site codes (file name field 5).
    Platform,
}

impl TableKind {
    /// File name of the table inside `standards/imos/`.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Facility => "facility_code.yml",
            Self::Platform => "platform_code.yml",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Facility => "facility code",
            Self::Platform => "platform code",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An immutable set of valid codes.
///
/// Lookups are exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    kind: TableKind,
    codes: BTreeSet<String>,
    source: Option<String>,
}

impl CodeTable {
    /// Build a table from an in-memory list of codes.
    pub fn from_codes<I, S>(kind: TableKind, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            codes: codes.into_iter().map(Into::into).collect(),
            source: None,
        }
    }

    pub(crate) fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    /// Where the table was loaded from, if it came from a file.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Codes in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }
}
