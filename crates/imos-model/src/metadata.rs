//! Dataset-level attribute access.
//!
//! The file name checks only ever read global attributes by name. Hosts wrap
//! whatever holds the opened dataset in [`MetadataAttributes`]; tests and
//! simple callers can use [`AttributeMap`].

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Global attribute names consulted by the file name checks.
pub mod names {
    pub const TIME_COVERAGE_START: &str = "time_coverage_start";
    pub const TIME_COVERAGE_END: &str = "time_coverage_end";
    pub const PLATFORM_CODE: &str = "platform_code";
    pub const SITE_CODE: &str = "site_code";
    pub const FILE_VERSION: &str = "file_version";
    pub const DATE_CREATED: &str = "date_created";
}

/// Read-only view over a dataset's global attributes.
///
/// A missing attribute is `None`, never an error.
pub trait MetadataAttributes {
    fn attribute(&self, name: &str) -> Option<&str>;
}

impl<T: MetadataAttributes + ?Sized> MetadataAttributes for &T {
    fn attribute(&self, name: &str) -> Option<&str> {
        (**self).attribute(name)
    }
}

impl MetadataAttributes for BTreeMap<String, String> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl MetadataAttributes for HashMap<String, String> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// In-memory attribute source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeMap {
    attributes: BTreeMap<String, String>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl MetadataAttributes for AttributeMap {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            attributes: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
