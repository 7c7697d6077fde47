//! Equal scores resolve the same way every time: input order.

use super::common::{blog_corpus, make_record, slugs};
use postsift::{rank, search};

fn tied_records() -> Vec<postsift::ContentRecord> {
    (0..8)
        .map(|i| make_record(&format!("post-{}", i), "", "notes on caustics"))
        .collect()
}

#[test]
fn test_ties_keep_input_order() {
    let records = tied_records();
    let results = search(&records, "caustics");

    let expected: Vec<String> = (0..8).map(|i| format!("post-{}", i)).collect();
    assert_eq!(slugs(&results), expected);
}

#[test]
fn test_reversed_input_reverses_ties() {
    let mut records = tied_records();
    records.reverse();
    let results = search(&records, "caustics");

    let expected: Vec<String> = (0..8).rev().map(|i| format!("post-{}", i)).collect();
    assert_eq!(slugs(&results), expected);
}

#[test]
fn test_repeated_searches_are_identical() {
    let corpus = blog_corpus();
    for query in ["rendering", "cloud rendering", "ai", "news"] {
        let first = search(&corpus, query);
        for _ in 0..5 {
            assert_eq!(search(&corpus, query), first, "query {:?}", query);
        }
    }
}

#[test]
fn test_rank_and_search_agree() {
    let corpus = blog_corpus();
    let hits = rank(&corpus, "cloud rendering");
    let results = search(&corpus, "cloud rendering");

    assert_eq!(hits.len(), results.len());
    for (hit, result) in hits.iter().zip(&results) {
        assert_eq!(corpus[hit.index].slug, result.slug());
        assert_eq!(hit.score, result.score);
        assert_eq!(hit.matched_fields, result.matched_fields);
    }
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_search_matches_sequential() {
    use postsift::{search_parallel, search_with_weights, ScoringWeights};

    let mut corpus = blog_corpus();
    corpus.extend(tied_records());
    let weights = ScoringWeights::default();
    for query in ["rendering", "cloud rendering", "caustics", ""] {
        assert_eq!(
            search_parallel(&corpus, query, &weights),
            search_with_weights(&corpus, query, &weights),
            "query {:?}",
            query
        );
    }
}
