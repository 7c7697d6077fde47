//! Tests for record loading.

use super::common::{blog_corpus, make_record, write_content_dir, write_manifest};
use postsift::{load_manifest, load_records, load_source, ContentError, InputManifest};
use std::fs;

#[test]
fn test_load_directory_keeps_manifest_order() {
    let corpus = blog_corpus();
    let dir = write_content_dir(&corpus);

    let loaded = load_source(dir.path()).unwrap();
    assert_eq!(loaded, corpus);
}

#[test]
fn test_load_records_with_explicit_manifest() {
    let corpus = blog_corpus();
    let dir = write_content_dir(&corpus);

    let manifest = load_manifest(dir.path()).unwrap();
    let loaded = load_records(dir.path(), &manifest).unwrap();
    assert_eq!(loaded.len(), corpus.len());
}

#[test]
fn test_missing_record_file() {
    let dir = write_content_dir(&blog_corpus());
    fs::remove_file(dir.path().join("about.json")).unwrap();

    let err = load_source(dir.path()).unwrap_err();
    assert!(matches!(err, ContentError::Io { .. }));
    assert!(err.to_string().contains("about.json"), "{}", err);
}

#[test]
fn test_invalid_record_json() {
    let dir = write_content_dir(&blog_corpus());
    fs::write(dir.path().join("about.json"), r#"{"title": "no slug"}"#).unwrap();

    let err = load_source(dir.path()).unwrap_err();
    assert!(matches!(err, ContentError::Json { .. }));
}

#[test]
fn test_duplicate_slugs_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let record = make_record("same", "One", "");
    let json = serde_json::to_string(&record).unwrap();
    fs::write(dir.path().join("one.json"), &json).unwrap();
    fs::write(dir.path().join("two.json"), &json).unwrap();
    write_manifest(
        dir.path(),
        &InputManifest {
            version: 1,
            records: vec!["one.json".to_string(), "two.json".to_string()],
        },
    );

    let err = load_source(dir.path()).unwrap_err();
    match err {
        ContentError::DuplicateSlug { slug, .. } => assert_eq!(slug, "same"),
        other => panic!("expected DuplicateSlug, got {:?}", other),
    }
}

#[test]
fn test_load_single_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("posts.json");
    let corpus = blog_corpus();
    fs::write(&path, serde_json::to_string(&corpus).unwrap()).unwrap();

    assert_eq!(load_source(&path).unwrap(), corpus);
}

#[test]
fn test_unsupported_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("posts.yaml");
    fs::write(&path, "- slug: a").unwrap();

    let err = load_source(&path).unwrap_err();
    assert!(matches!(err, ContentError::UnsupportedSource(_)));
}

#[test]
fn test_empty_manifest_loads_nothing() {
    let dir = write_content_dir(&[]);
    assert!(load_source(dir.path()).unwrap().is_empty());
}

#[cfg(feature = "parallel")]
#[test]
fn test_progress_loader_matches_plain_loader() {
    use indicatif::ProgressBar;
    use postsift::content::load_records_with_progress;

    let corpus = blog_corpus();
    let dir = write_content_dir(&corpus);
    let manifest = load_manifest(dir.path()).unwrap();
    let progress = ProgressBar::hidden();

    let loaded = load_records_with_progress(dir.path(), &manifest, &progress).unwrap();
    assert_eq!(loaded, corpus);
    assert_eq!(progress.position(), corpus.len() as u64);
}

#[cfg(feature = "parallel")]
#[test]
fn test_source_progress_tracks_manifest_length() {
    use indicatif::ProgressBar;
    use postsift::load_source_with_progress;

    let corpus = blog_corpus();
    let dir = write_content_dir(&corpus);
    let progress = ProgressBar::hidden();

    let loaded = load_source_with_progress(dir.path(), &progress).unwrap();
    assert_eq!(loaded, corpus);
    assert_eq!(progress.length(), Some(corpus.len() as u64));
    assert_eq!(progress.position(), corpus.len() as u64);
}

#[cfg(feature = "parallel")]
#[test]
fn test_source_progress_on_json_array_file() {
    use indicatif::ProgressBar;
    use postsift::load_source_with_progress;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("posts.json");
    let corpus = blog_corpus();
    fs::write(&path, serde_json::to_string(&corpus).unwrap()).unwrap();
    let progress = ProgressBar::hidden();

    assert_eq!(load_source_with_progress(&path, &progress).unwrap(), corpus);
    assert_eq!(progress.position(), corpus.len() as u64);
}
