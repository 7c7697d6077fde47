//! Inputs at the edges: blank queries, empty corpora, odd records.

use super::common::{blog_corpus, make_record, with_sections};
use postsift::{rank, search, ContentRecord, MatchedField};

#[test]
fn test_blank_queries_return_nothing() {
    let corpus = blog_corpus();
    for query in ["", " ", "\t", "\n  \t "] {
        assert!(search(&corpus, query).is_empty(), "query {:?}", query);
        assert!(rank(&corpus, query).is_empty(), "query {:?}", query);
    }
}

#[test]
fn test_empty_corpus_returns_nothing() {
    assert!(search(&[], "rendering").is_empty());
}

#[test]
fn test_no_match_returns_nothing() {
    assert!(search(&blog_corpus(), "zzzzzz").is_empty());
}

#[test]
fn test_padded_query_misses_phrase_bonus() {
    let record = make_record("a", "Render Farm Basics", "");
    let padded = search(std::slice::from_ref(&record), " render farm ");
    let plain = search(std::slice::from_ref(&record), "render farm");
    // two title terms only; the padded phrase is not in the title
    assert_eq!(padded[0].score, 20);
    assert_eq!(plain[0].score, 40);
}

#[test]
fn test_query_is_case_insensitive() {
    let corpus = blog_corpus();
    assert_eq!(search(&corpus, "GPU"), search(&corpus, "gpu"));
}

#[test]
fn test_unicode_case_folding() {
    let record = make_record("fr", "Éclairage global", "");
    let results = search(&[record], "ÉCLAIRAGE");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].score, 30);
}

#[test]
fn test_punctuation_is_matched_literally() {
    let record = make_record("cpp", "Writing a C++ path tracer", "");
    let results = search(&[record], "c++");
    assert_eq!(results[0].score, 30);
}

#[test]
fn test_missing_required_fields_score_zero_there() {
    let json = r#"[
        {"slug": "no-title", "description": "volumetric clouds"},
        {"slug": "no-description", "title": "Volumetric clouds"},
        {"slug": "nothing"}
    ]"#;
    let records: Vec<ContentRecord> = serde_json::from_str(json).unwrap();

    let results = search(&records, "volumetric");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].slug(), "no-description");
    assert_eq!(results[0].score, 30);
    assert_eq!(results[1].slug(), "no-title");
    assert_eq!(results[1].score, 5);
}

#[test]
fn test_absent_and_empty_sections_are_equivalent() {
    let absent = make_record("a", "", "denoise");
    let empty = with_sections(make_record("a", "", "denoise"), &[]);
    let hollow = with_sections(make_record("a", "", "denoise"), &[(None, None)]);

    let scores: Vec<u32> = [absent, empty, hollow]
        .iter()
        .map(|record| search(std::slice::from_ref(record), "denoise")[0].score)
        .collect();
    assert_eq!(scores, vec![5, 5, 5]);
}

#[test]
fn test_duplicate_terms_each_count() {
    let record = make_record("a", "", "ai tooling");
    let results = search(&[record], "ai ai");
    assert_eq!(results[0].score, 10);
    assert_eq!(results[0].matched_fields.len(), 1);
    assert!(results[0].matched(MatchedField::Description));
}
