//! Ranking rules: field weights, accumulation and caps.

use super::common::{make_record, slugs, with_sections, with_tags};
use postsift::{search, MatchedField};

#[test]
fn test_title_match_outranks_description_match() {
    let records = vec![
        make_record("described", "Release notes", "Notes on the shader compiler"),
        make_record("titled", "Shader compiler internals", "Release notes"),
    ];

    let results = search(&records, "compiler");

    assert_eq!(slugs(&results), vec!["titled", "described"]);
    assert!(results[0].score > results[1].score);
    assert_eq!(results[1].score, 5);
}

#[test]
fn test_title_term_without_phrase_bonus_scores_10() {
    let records = vec![
        make_record("description-only", "Unrelated", "about lighting"),
        make_record("title-only", "Lighting rigs", "unrelated"),
    ];

    // "lighting rigs" is in the title, but the two-word query "rigs studio" is not
    let results = search(&records, "rigs studio");

    assert_eq!(slugs(&results), vec!["title-only"]);
    assert_eq!(results[0].score, 10);
}

#[test]
fn test_terms_accumulate_within_a_field() {
    let record = make_record("a", "", "volumetric fog and volumetric clouds");

    let one = search(std::slice::from_ref(&record), "fog");
    let two = search(std::slice::from_ref(&record), "fog clouds");

    assert_eq!(one[0].score, 5);
    assert_eq!(two[0].score, 10);
}

#[test]
fn test_tag_matching_two_terms_contributes_14() {
    let record = with_tags(make_record("a", "", ""), &["cloud-rendering"]);

    let results = search(&[record], "cloud rendering");

    assert_eq!(results[0].score, 14);
    assert!(results[0].matched(MatchedField::Tags));
}

#[test]
fn test_multiple_tags_accumulate() {
    let record = with_tags(make_record("a", "", ""), &["gpu", "GPU-compute", "cpu"]);

    let results = search(&[record], "gpu");

    assert_eq!(results[0].score, 14);
}

#[test]
fn test_content_contribution_is_capped_at_10() {
    let body = "raytrace ".repeat(50);
    let sections: Vec<(Option<&str>, Option<&str>)> =
        (0..50).map(|_| (None, Some(body.as_str()))).collect();
    let record = with_sections(make_record("long", "", ""), &sections);

    let results = search(&[record], "raytrace");

    assert_eq!(results[0].score, 10);
    assert!(results[0].matched(MatchedField::Content));
}

#[test]
fn test_content_below_cap_counts_each_hit() {
    let record = with_sections(
        make_record("a", "", ""),
        &[
            (Some("Lights"), Some("area lights and spot lights")),
            (Some("Cameras"), Some("lights off")),
        ],
    );

    // s1 title, s1 body, s2 body: one hit each regardless of repeats inside a field
    let results = search(&[record], "lights");

    assert_eq!(results[0].score, 3);
}

#[test]
fn test_heavy_content_does_not_beat_one_title_hit_plus_bonus() {
    let body = "houdini ".repeat(100);
    let records = vec![
        with_sections(
            make_record("body-heavy", "", ""),
            &[(Some("houdini"), Some(body.as_str())); 20],
        ),
        make_record("titled", "Houdini", ""),
    ];

    let results = search(&records, "houdini");

    assert_eq!(slugs(&results), vec!["titled", "body-heavy"]);
    assert_eq!(results[0].score, 30);
    assert_eq!(results[1].score, 10);
}
