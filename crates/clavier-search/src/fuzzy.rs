//! Word-level fuzzy matching.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use clavier_core::Track;
use clavier_index::normalize::normalize;
use clavier_index::TrackIndex;

/// A track paired with its similarity score for the selection heap. Ties
/// break on normalized title, so equal scores come back in a stable
/// order.
#[derive(Debug)]
struct Scored<'a> {
    score: usize,
    key: String,
    track: &'a Track,
}

impl PartialEq for Scored<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score && self.key == other.key
    }
}

impl Eq for Scored<'_> {}

impl PartialOrd for Scored<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scored<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| self.key.cmp(&other.key))
    }
}

/// Collect up to `k` tracks with the lowest similarity score against
/// `query`, ascending (0 = best).
///
/// Every indexed track is scored in one in-order pass, then the k
/// smallest are drawn from a min-heap. A query that splits into no words
/// yields an empty list without scanning, as does `k == 0`.
#[must_use]
pub fn nearest<'a>(index: &'a TrackIndex, query: &str, k: usize) -> Vec<&'a Track> {
    if k == 0 || query.split_whitespace().next().is_none() {
        return Vec::new();
    }

    let mut heap: BinaryHeap<Reverse<Scored<'a>>> = index
        .iter()
        .map(|track| {
            Reverse(Scored {
                score: similarity_score(query, &track.title),
                key: normalize(&track.title),
                track,
            })
        })
        .collect();

    let mut results = Vec::with_capacity(k.min(heap.len()));
    while results.len() < k {
        let Some(Reverse(scored)) = heap.pop() else {
            break;
        };
        results.push(scored.track);
    }
    results
}

/// Score a title against a query. 0 is a perfect match, larger is more
/// distant.
///
/// Equal full strings, or any equal (query word, title word) pair, score
/// 0 immediately. For every other word pair the candidates are the
/// word-level edit distance and, when the title word contains the query
/// word as a substring, half the length surplus; the minimum candidate
/// across all pairs wins. A substring hit therefore never outranks a
/// closer edit distance.
#[must_use]
pub fn similarity_score(query: &str, title: &str) -> usize {
    let query_lowered = query.to_lowercase();
    let query_trimmed = query_lowered.trim();
    let title_lowered = title.to_lowercase();
    let title_trimmed = title_lowered.trim();

    if query_trimmed == title_trimmed {
        return 0;
    }

    let mut best = usize::MAX;
    for query_word in query_trimmed.split_whitespace() {
        for title_word in title_trimmed.split_whitespace() {
            if title_word == query_word {
                return 0;
            }
            if title_word.contains(query_word) {
                let surplus =
                    (title_word.chars().count() - query_word.chars().count()) / 2;
                best = best.min(surplus);
            }
            best = best.min(levenshtein(title_word, query_word));
        }
    }

    best
}

/// Classic Levenshtein distance over characters, computed with two
/// rolling rows instead of the full table.
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, &ac) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1)
                .min(curr[j] + 1)
                .min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}
