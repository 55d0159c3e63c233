//! YAML loading for reference tables.
//!
//! A table document is either a sequence of codes or a mapping whose keys
//! are the codes (values are ignored):
//!
//! ```yaml
//! - ANMN-NRS
//! - ABOS-SOTS
//! ```
//!
//! ```yaml
//! ANMN-NRS: National Reference Stations
//! ABOS-SOTS: Southern Ocean Time Series
//! ```

use std::path::Path;

use serde_yaml::Value;

use crate::error::{Result, StandardsError};
use crate::table::{CodeTable, TableKind};

/// Load a reference table from a YAML file.
pub fn load_table(path: &Path, kind: TableKind) -> Result<CodeTable> {
    if !path.is_file() {
        return Err(StandardsError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    let source_name = path.display().to_string();
    let table = parse_table(&content, kind, &source_name)?;

    tracing::debug!(
        file = %source_name,
        kind = %kind,
        codes = table.len(),
        "Loaded reference table"
    );
    Ok(table)
}

/// Parse a reference table from YAML string content.
///
/// `source_name` is only used for error messages and logging.
pub fn parse_table(content: &str, kind: TableKind, source_name: &str) -> Result<CodeTable> {
    let document: Value = serde_yaml::from_str(content).map_err(|e| StandardsError::Yaml {
        source_name: source_name.to_string(),
        source: e,
    })?;

    let entries: Vec<&Value> = match &document {
        Value::Null => {
            tracing::warn!(file = %source_name, kind = %kind, "Reference table is empty");
            Vec::new()
        }
        Value::Sequence(items) => items.iter().collect(),
        Value::Mapping(map) => map.keys().collect(),
        other => {
            return Err(StandardsError::InvalidTable {
                source_name: source_name.to_string(),
                message: format!(
                    "expected a sequence or mapping of codes, found {}",
                    value_kind(other)
                ),
            });
        }
    };

    let mut codes = Vec::with_capacity(entries.len());
    let mut skipped = 0usize;
    for entry in entries {
        match entry {
            Value::String(code) => codes.push(code.clone()),
            other => {
                // Membership is tested against the raw name field, so a
                // numeric or boolean entry can never match anything.
                skipped += 1;
                tracing::warn!(
                    file = %source_name,
                    entry_kind = value_kind(other),
                    "Skipping non-string reference table entry"
                );
            }
        }
    }
    if skipped > 0 {
        tracing::warn!(
            file = %source_name,
            skipped,
            "Reference table contains non-string entries"
        );
    }

    Ok(CodeTable::from_codes(kind, codes).with_source(source_name))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sequence_document() {
        let table = parse_table("- ANMN-NRS\n- ABOS-SOTS\n", TableKind::Facility, "inline")
            .expect("parse sequence");
        assert_eq!(table.len(), 2);
        assert!(table.contains("ABOS-SOTS"));
        assert_eq!(table.source(), Some("inline"));
    }

    #[test]
    fn parses_mapping_keys() {
        let content = "NRSMAI: Maria Island\nNRSKAI:\n  name: Kangaroo Island\n";
        let table = parse_table(content, TableKind::Platform, "inline").expect("parse mapping");
        let codes: Vec<&str> = table.iter().collect();
        assert_eq!(codes, vec!["NRSKAI", "NRSMAI"]);
        assert!(!table.contains("Maria Island"));
    }

    #[test]
    fn skips_non_string_entries() {
        let table = parse_table("- SOOP-XBT\n- 42\n- true\n", TableKind::Facility, "inline")
            .expect("parse mixed");
        assert_eq!(table.len(), 1);
        assert!(table.contains("SOOP-XBT"));
        assert!(!table.contains("42"));
    }

    #[test]
    fn null_document_is_empty_table() {
        let table = parse_table("~\n", TableKind::Platform, "inline").expect("parse null");
        assert!(table.is_empty());
    }

    #[test]
    fn scalar_document_is_rejected() {
        let err = parse_table("just-a-code\n", TableKind::Facility, "inline").unwrap_err();
        assert!(matches!(err, StandardsError::InvalidTable { .. }));
        assert!(err.to_string().contains("found string"));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        let err = parse_table("- [unclosed\n", TableKind::Facility, "inline").unwrap_err();
        assert!(matches!(err, StandardsError::Yaml { .. }));
    }
}
