pub mod conformance;
pub mod metadata;

pub use conformance::{CheckResult, RuleName, Severity};
pub use metadata::{AttributeMap, MetadataAttributes, names};
