//! Tests for manifest parsing.

use postsift::{load_manifest, ContentError};
use std::fs;

#[test]
fn test_load_valid_manifest() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("manifest.json"),
        r#"{"version": 1, "records": ["b.json", "a.json"]}"#,
    )
    .unwrap();

    let manifest = load_manifest(dir.path()).unwrap();
    assert_eq!(manifest.records, vec!["b.json", "a.json"]);
}

#[test]
fn test_missing_manifest_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_manifest(dir.path()).unwrap_err();
    assert!(matches!(err, ContentError::Io { .. }), "got {:?}", err);
}

#[test]
fn test_invalid_manifest_json() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("manifest.json"), "{not json").unwrap();
    let err = load_manifest(dir.path()).unwrap_err();
    assert!(matches!(err, ContentError::Json { .. }));
    assert!(err.to_string().contains("manifest.json"));
}

#[test]
fn test_unsupported_manifest_version() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("manifest.json"),
        r#"{"version": 2, "records": []}"#,
    )
    .unwrap();
    let err = load_manifest(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        ContentError::UnsupportedVersion { version: 2, expected: 1, .. }
    ));
}
