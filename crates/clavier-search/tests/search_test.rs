//! End-to-end checks of both proximity searches over one shared index.

use clavier_core::{AudioFormat, Track};
use clavier_index::TrackIndex;
use clavier_search::{fuzzy, lexical};
use std::path::PathBuf;

fn track(title: &str) -> Track {
    Track::new(
        title,
        PathBuf::from(format!("/music/{title}.mp3")),
        AudioFormat::Mp3,
    )
}

fn sample_index() -> TrackIndex {
    [
        "Dancing Queen",
        "Lonely",
        "Moonlight Sonata",
        "My Favorite Song",
        "The Wall",
        "Waterloo",
        "An Ending",
    ]
    .into_iter()
    .map(track)
    .collect()
}

#[test]
fn lexical_and_fuzzy_disagree_on_purpose() {
    let index = sample_index();

    // Lexically, "lonly" lands between "Lonely" and "Moonlight Sonata".
    let by_order = lexical::nearest(&index, "lonly", 2);
    assert_eq!(by_order[0].title, "Lonely");
    assert_eq!(by_order[1].title, "Moonlight Sonata");

    // Fuzzily, "Lonely" wins outright at edit distance 1.
    let by_score = fuzzy::nearest(&index, "lonly", 1);
    assert_eq!(by_score[0].title, "Lonely");
}

#[test]
fn lexical_walk_stops_where_the_comparator_says() {
    let index = sample_index();
    let results = lexical::nearest(&index, "lonly", 20);

    // The predecessor walk dies at "An Ending": its raw title contains
    // "an ", which flips the comparison onto the raw-string path where
    // nothing sorts below it. "Dancing Queen" stays unreachable from
    // this query even though the index holds it.
    let titles: Vec<&str> = results.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Lonely",
            "Moonlight Sonata",
            "An Ending",
            "My Favorite Song",
            "The Wall",
            "Waterloo",
        ]
    );
    assert!(!titles.contains(&"Dancing Queen"));
}

#[test]
fn fuzzy_exact_word_beats_near_misses() {
    let index = sample_index();
    // "song" appears as a word of "My Favorite Song": score 0.
    let results = fuzzy::nearest(&index, "song", 1);
    assert_eq!(results[0].title, "My Favorite Song");
}

#[test]
fn fuzzy_scores_ignore_tree_order() {
    let index = sample_index();
    let results = fuzzy::nearest(&index, "waterlo", 2);
    // The best match sorts last lexicographically; scoring ignores that.
    assert_eq!(results[0].title, "Waterloo");
}

#[test]
fn article_titles_are_reachable_through_both_searches() {
    let index = sample_index();

    // Normalized lookup files "The Wall" under "wall", just before
    // "walls", so it comes back as the predecessor.
    let by_order = lexical::nearest(&index, "walls", 1);
    assert_eq!(by_order[0].title, "The Wall");

    let by_score = fuzzy::nearest(&index, "wall", 1);
    assert_eq!(by_score[0].title, "The Wall");
}

#[test]
fn searches_tolerate_placeholder_titles() {
    let mut index = sample_index();
    index.insert(track("N/A"));

    let by_score = fuzzy::nearest(&index, "n/a", 1);
    assert_eq!(by_score[0].title, "N/A");

    let by_order = lexical::nearest(&index, "n/a", 2);
    assert_eq!(by_order.len(), 2);
}

#[test]
fn empty_index_yields_empty_results_everywhere() {
    let index = TrackIndex::new();
    assert!(lexical::nearest(&index, "anything", 5).is_empty());
    assert!(fuzzy::nearest(&index, "anything", 5).is_empty());
}
