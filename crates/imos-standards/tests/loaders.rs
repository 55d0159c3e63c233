use std::fs;
use std::path::{Path, PathBuf};

use imos_standards::{ReferenceTables, StandardsConfig, StandardsError, TableKind, load_table};

fn shipped_standards() -> StandardsConfig {
    StandardsConfig::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("../../standards"))
}

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "imos-standards-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

#[test]
fn loads_shipped_tables() {
    let tables = ReferenceTables::load(&shipped_standards()).expect("load reference tables");
    assert!(!tables.facility().is_empty());
    assert!(!tables.platform().is_empty());
    assert!(tables.is_facility_code("ANMN-NRS"));
    assert!(tables.is_platform_code("NRSMAI"));
    assert!(
        tables
            .facility()
            .source()
            .is_some_and(|source| source.ends_with("facility_code.yml"))
    );
}

#[test]
fn shipped_lookups_are_case_sensitive() {
    let tables = ReferenceTables::load(&shipped_standards()).expect("load reference tables");
    assert!(tables.is_facility_code("Argo"));
    assert!(!tables.is_facility_code("ARGO"));
    assert!(!tables.is_facility_code("ANMN"));
    assert!(!tables.is_platform_code("nrsmai"));
}

#[test]
fn codes_do_not_leak_between_tables() {
    let tables = ReferenceTables::load(&shipped_standards()).expect("load reference tables");
    assert!(!tables.is_platform_code("ANMN-NRS"));
    assert!(!tables.is_facility_code("NRSMAI"));
    assert_eq!(tables.table(TableKind::Platform), tables.platform());
}

#[test]
fn loads_custom_root() {
    let root = unique_temp_dir("custom");
    write(&root.join("imos/facility_code.yml"), "- XYZ-ONE\n");
    write(&root.join("imos/platform_code.yml"), "SITE1: first site\nSITE2: second site\n");

    let tables = ReferenceTables::load(&StandardsConfig::new(&root)).expect("load custom");
    assert_eq!(tables.facility().len(), 1);
    assert_eq!(tables.platform().len(), 2);
    assert!(tables.is_platform_code("SITE2"));

    fs::remove_dir_all(&root).ok();
}

#[test]
fn missing_root_is_reported() {
    let root = std::env::temp_dir().join("imos-standards-does-not-exist");
    let err = ReferenceTables::load(&StandardsConfig::new(&root)).unwrap_err();
    assert!(matches!(err, StandardsError::DirectoryNotFound { .. }));
}

#[test]
fn missing_table_is_reported() {
    let root = unique_temp_dir("missing-table");
    write(&root.join("imos/facility_code.yml"), "- XYZ-ONE\n");

    let err = ReferenceTables::load(&StandardsConfig::new(&root)).unwrap_err();
    match err {
        StandardsError::FileNotFound { path } => {
            assert!(path.ends_with("imos/platform_code.yml"));
        }
        other => panic!("unexpected error: {other}"),
    }

    fs::remove_dir_all(&root).ok();
}

#[test]
fn load_table_rejects_scalar_document() {
    let root = unique_temp_dir("scalar");
    let path = root.join("facility_code.yml");
    write(&path, "42\n");

    let err = load_table(&path, TableKind::Facility).unwrap_err();
    assert!(matches!(err, StandardsError::InvalidTable { .. }));

    fs::remove_dir_all(&root).ok();
}
