//! Title normalization and the two orderings derived from it.
//!
//! Sorting ignores case and one leading English article ("the", "a",
//! "an"): "The Wall" files under "wall". Queries are compared against
//! titles with a separate rule; see [`compare_query`].

use std::cmp::Ordering;

/// Leading articles stripped during normalization. Each token carries its
/// trailing space, so "Theory" keeps its prefix.
const ARTICLES: [&str; 3] = ["the ", "a ", "an "];

/// Produce the sort key for a title: lower-cased, trimmed, with at most
/// one leading article removed.
#[must_use]
pub fn normalize(title: &str) -> String {
    let lowered = title.to_lowercase();
    let trimmed = lowered.trim();
    for article in ARTICLES {
        if let Some(rest) = trimmed.strip_prefix(article) {
            return rest.to_string();
        }
    }
    trimmed.to_string()
}

/// Compare two titles by their normalized forms.
///
/// This is the ordering the tree inserts and deletes under.
#[must_use]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    normalize(a).cmp(&normalize(b))
}

/// Compare a raw query string against an indexed title.
///
/// When the lower-cased query contains an article token anywhere in the
/// string, the comparison is raw lower-cased query against lower-cased,
/// trimmed title. Otherwise both sides are normalized. Exact lookup and
/// the proximity descents all use this ordering.
///
/// The substring test (rather than a prefix test) and the unnormalized
/// query side are intentional: ordering near article-bearing titles
/// depends on this exact behavior.
#[must_use]
pub fn compare_query(query: &str, title: &str) -> Ordering {
    let lowered = query.to_lowercase();
    if ARTICLES.iter().any(|article| lowered.contains(article)) {
        let title_lowered = title.to_lowercase();
        return lowered.as_str().cmp(title_lowered.trim());
    }
    normalize(query).cmp(&normalize(title))
}
