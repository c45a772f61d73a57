//! Lexicographic neighborhood search.

use clavier_core::Track;
use clavier_index::TrackIndex;

/// Collect up to `k` tracks lexicographically closest to `query`.
///
/// A single descent finds the tightest predecessor/successor pair
/// bracketing the query; the walk then alternates outward, predecessor
/// step before successor step in each round, each step a fresh descent
/// keyed by the current end's raw title. Results appear in interleaving
/// order, not in monotonic distance order. A track whose title matches
/// the query exactly is excluded.
///
/// Each step costs O(log n), the whole call O(k log n). An empty index
/// or `k == 0` yields an empty list.
#[must_use]
pub fn nearest<'a>(index: &'a TrackIndex, query: &str, k: usize) -> Vec<&'a Track> {
    let mut results = Vec::new();
    if k == 0 || index.is_empty() {
        return results;
    }

    let (mut predecessor, mut successor) = index.bracket(query);

    if let Some(found) = predecessor {
        results.push(found);
    }
    if results.len() < k {
        if let Some(found) = successor {
            results.push(found);
        }
    }

    while results.len() < k && (predecessor.is_some() || successor.is_some()) {
        if let Some(current) = predecessor {
            predecessor = index.predecessor(&current.title);
            if let Some(found) = predecessor {
                results.push(found);
            }
        }
        if results.len() >= k {
            break;
        }
        if let Some(current) = successor {
            successor = index.successor(&current.title);
            if let Some(found) = successor {
                results.push(found);
            }
        }
    }

    results
}
