//! Fields 7 to 10: optional trailing qualifiers.
//!
//! Every trailing field must be claimed by exactly one category, and each
//! category can be claimed at most once per file name. Categories are tried
//! in priority order and the first one that is still free and matches wins:
//!
//! 1. `END-YYYYMMDDTHHMMSSZ` end of time coverage
//! 2. `C-YYYYMMDDTHHMMSSZ` creation date
//! 3. `PART<digits>` part index
//! 4. any non-empty, non-numeric product qualifier
//!
//! A field whose preferred category is taken falls through to the later
//! ones, so a second `END-...` marker can still be claimed as the product
//! qualifier if that slot is free.

use std::sync::LazyLock;

use imos_model::CheckResult;
use regex::Regex;

use crate::file_name::FileNameTokens;
use crate::rule::FileNameRule;
use crate::timestamp;

static PART_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^PART[0-9]+").expect("Invalid part regex"));

/// Trailing field category, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrailingCategory {
    EndCoverage,
    Creation,
    Part,
    ProductQualifier,
}

impl TrailingCategory {
    pub const PRIORITY: [Self; 4] = [
        Self::EndCoverage,
        Self::Creation,
        Self::Part,
        Self::ProductQualifier,
    ];

    const fn slot(self) -> usize {
        match self {
            Self::EndCoverage => 0,
            Self::Creation => 1,
            Self::Part => 2,
            Self::ProductQualifier => 3,
        }
    }

    /// Whether `field` has this category's shape.
    pub fn matches(self, field: &str) -> bool {
        match self {
            Self::EndCoverage => field
                .strip_prefix("END-")
                .and_then(timestamp::parse_compact)
                .is_some(),
            Self::Creation => field
                .strip_prefix("C-")
                .and_then(timestamp::parse_compact)
                .is_some(),
            Self::Part => PART_REGEX.is_match(field),
            Self::ProductQualifier => {
                !field.is_empty() && !field.chars().all(|c| c.is_ascii_digit())
            }
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EndCoverage => "end coverage date",
            Self::Creation => "creation date",
            Self::Part => "part index",
            Self::ProductQualifier => "product qualifier",
        }
    }
}

/// Which categories have been claimed so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorySlots {
    used: [bool; 4],
}

impl CategorySlots {
    pub fn is_used(&self, category: TrailingCategory) -> bool {
        self.used[category.slot()]
    }

    /// Claim the first free category that `field` matches.
    pub fn claim(&mut self, field: &str) -> Option<TrailingCategory> {
        let category = TrailingCategory::PRIORITY
            .into_iter()
            .find(|category| !self.is_used(*category) && category.matches(field))?;
        self.used[category.slot()] = true;
        Some(category)
    }
}

/// Category assignment for each trailing field, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub assignments: Vec<Option<TrailingCategory>>,
}

impl Classification {
    pub fn classified_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.is_some()).count()
    }

    /// True when there is at least one field and every field was claimed.
    pub fn is_complete(&self) -> bool {
        !self.assignments.is_empty() && self.classified_count() == self.assignments.len()
    }
}

/// Greedy single pass over the fields; an unclaimed field does not stop
/// the pass.
pub fn classify<S: AsRef<str>>(fields: &[S]) -> Classification {
    let mut slots = CategorySlots::default();
    let assignments = fields
        .iter()
        .map(|field| {
            let field = field.as_ref();
            let claimed = slots.claim(field);
            tracing::trace!(
                field,
                category = claimed.map_or("unclassified", TrailingCategory::label),
                "Classified trailing field"
            );
            claimed
        })
        .collect();
    Classification { assignments }
}

/// No result when the name has no trailing fields.
pub fn check(tokens: &FileNameTokens) -> Vec<CheckResult> {
    let trailing = tokens.trailing_fields();
    if trailing.is_empty() {
        return Vec::new();
    }
    let classification = classify(trailing);
    vec![FileNameRule::TrailingFields.result(classification.is_complete())]
}

#[cfg(test)]
mod tests {
    use super::TrailingCategory::{Creation, EndCoverage, Part, ProductQualifier};
    use super::*;

    #[test]
    fn category_shapes() {
        assert!(EndCoverage.matches("END-20200102T030405Z"));
        assert!(!EndCoverage.matches("END-20201302T030405Z"));
        assert!(!EndCoverage.matches("END-"));
        assert!(Creation.matches("C-20200102T030405Z"));
        assert!(!Creation.matches("C-2020"));
        assert!(Part.matches("PART1"));
        assert!(Part.matches("PART12b"));
        assert!(!Part.matches("PART"));
        assert!(!Part.matches("xPART1"));
        assert!(ProductQualifier.matches("daily-averaged"));
        assert!(ProductQualifier.matches("1a"));
        assert!(!ProductQualifier.matches("123"));
        assert!(!ProductQualifier.matches(""));
    }

    #[test]
    fn one_field_per_category() {
        let classification = classify(&[
            "ABC",
            "END-20200102T030405Z",
            "C-20200102T030405Z",
            "PART1",
        ]);
        assert_eq!(
            classification.assignments,
            vec![
                Some(ProductQualifier),
                Some(EndCoverage),
                Some(Creation),
                Some(Part)
            ]
        );
        assert!(classification.is_complete());
    }

    #[test]
    fn taken_category_falls_through() {
        let classification = classify(&["END-20200102T030405Z", "END-20200102T030406Z"]);
        assert_eq!(
            classification.assignments,
            vec![Some(EndCoverage), Some(ProductQualifier)]
        );
    }

    #[test]
    fn unclaimed_field_does_not_stop_the_pass() {
        let classification = classify(&["123", "PART2", "456"]);
        assert_eq!(classification.assignments, vec![None, Some(Part), None]);
        assert_eq!(classification.classified_count(), 1);
        assert!(!classification.is_complete());
    }

    #[test]
    fn empty_field_list_is_not_complete() {
        let classification = classify::<&str>(&[]);
        assert!(classification.assignments.is_empty());
        assert!(!classification.is_complete());
    }

    #[test]
    fn labels_follow_priority_order() {
        let labels: Vec<&str> = TrailingCategory::PRIORITY
            .into_iter()
            .map(TrailingCategory::label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "end coverage date",
                "creation date",
                "part index",
                "product qualifier"
            ]
        );
    }

    #[test]
    fn slots_are_single_use() {
        let mut slots = CategorySlots::default();
        assert_eq!(slots.claim("PART1"), Some(Part));
        assert!(slots.is_used(Part));
        assert_eq!(slots.claim("PART2"), Some(ProductQualifier));
        assert_eq!(slots.claim("PART3"), None);
        assert!(!slots.is_used(EndCoverage));
    }
}
