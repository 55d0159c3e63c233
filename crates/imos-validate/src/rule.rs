//! File name rule catalogue.
//!
//! Each rule carries the identifier and failure text reported by the
//! compliance checker.

use imos_model::{CheckResult, RuleName, Severity};

/// Category shared by every file name rule.
pub const CATEGORY: &str = "file_name";

/// One reportable file name rule.
///
/// Field 5 reports two results under the same name, so it has two variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileNameRule {
    ExtensionName,
    FieldCount,
    Field1,
    Field2,
    Field3,
    Field4,
    Field5PlatformCode,
    Field5Attribute,
    Field6,
    TrailingFields,
}

impl FileNameRule {
    /// All rules in evaluation order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::ExtensionName,
            Self::FieldCount,
            Self::Field1,
            Self::Field2,
            Self::Field3,
            Self::Field4,
            Self::Field5PlatformCode,
            Self::Field5Attribute,
            Self::Field6,
            Self::TrailingFields,
        ]
    }

    /// Second half of the rule name.
    pub const fn check_name(&self) -> &'static str {
        match self {
            Self::ExtensionName => "check_extension_name",
            Self::FieldCount => "check_file_name",
            Self::Field1 => "check_file_name_field1",
            Self::Field2 => "check_file_name_field2",
            Self::Field3 => "check_file_name_field3",
            Self::Field4 => "check_file_name_field4",
            Self::Field5PlatformCode | Self::Field5Attribute => "check_file_name_field5",
            Self::Field6 => "check_file_name_field6",
            Self::TrailingFields => "check_file_name_field7_to_field10",
        }
    }

    /// Failure explanation.
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::ExtensionName => "File extension name is not equal to nc",
            Self::FieldCount => "File name doesn't contain 6 to 10 fields, separated by '_'",
            Self::Field1 => "File name field1 is not 'IMOS'",
            Self::Field2 => "File name field2 is not valid facility, sub facility code",
            Self::Field3 => "File name field3 is not made up of characters 'ABCEFGIKMOPRSTUVWZ'",
            Self::Field4 => "File name field4 doesn't match time_coverage_start attribute",
            Self::Field5PlatformCode => "File name field5 is not valid platform code",
            Self::Field5Attribute => {
                "File name field5 doesn't match platform_code or site_code attribute"
            }
            Self::Field6 => "File name field6 is not one of FV00, FV01, FV02",
            Self::TrailingFields => "Some of values from field 7 to field 10 are not correct",
        }
    }

    pub const fn severity(&self) -> Severity {
        Severity::High
    }

    pub fn rule_name(&self) -> RuleName {
        RuleName::new(CATEGORY, self.check_name())
    }

    /// Build the result record for a verdict.
    pub fn result(&self, passed: bool) -> CheckResult {
        if passed {
            CheckResult::pass(self.severity(), self.rule_name())
        } else {
            CheckResult::fail(self.severity(), self.rule_name(), self.reason())
        }
    }
}
