use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity attached to a check result.
///
/// Every file name rule reports at `High`; the lower levels exist for hosts
/// that mix these results with other checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// Two-part rule identifier, e.g. `("file_name", "check_file_name_field4")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleName {
    pub category: String,
    pub name: String,
}

impl RuleName {
    pub fn new(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.category, self.name)
    }
}

/// Outcome of evaluating one rule against one file.
///
/// `reasons` is only populated for failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub severity: Severity,
    pub passed: bool,
    pub name: RuleName,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<String>,
}

impl CheckResult {
    pub fn pass(severity: Severity, name: RuleName) -> Self {
        Self {
            severity,
            passed: true,
            name,
            reasons: Vec::new(),
        }
    }

    pub fn fail(severity: Severity, name: RuleName, reason: impl Into<String>) -> Self {
        Self {
            severity,
            passed: false,
            name,
            reasons: vec![reason.into()],
        }
    }

    pub fn is_pass(&self) -> bool {
        self.passed
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed {
            write!(f, "{}: PASS", self.name)
        } else {
            write!(f, "{}: FAIL ({})", self.name, self.reasons.join("; "))
        }
    }
}
