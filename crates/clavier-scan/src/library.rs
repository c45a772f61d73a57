//! The library repository: title index plus title-to-path lookup.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use clavier_core::Track;
use clavier_index::normalize::normalize;
use clavier_index::{Iter, TrackIndex};

use crate::error::ScanResult;
use crate::scan;

/// All tracks known to one running instance, indexed by normalized
/// title.
///
/// Owns the title index and a normalized-title-to-path table. Pass it by
/// reference to whichever component needs lookups; there is no shared
/// global state. Not synchronized: a single owner performs all mutation,
/// and readers must not overlap a mutating call.
#[derive(Debug, Default)]
pub struct Library {
    index: TrackIndex,
    paths: HashMap<String, PathBuf>,
}

impl Library {
    /// Create an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `dir` and index every audio file found.
    ///
    /// Returns the number of tracks actually inserted; duplicates by
    /// normalized title are dropped.
    pub fn load_directory(&mut self, dir: &Path) -> ScanResult<usize> {
        let mut inserted = 0;
        for track in scan::scan_directory(dir)? {
            if self.insert(track) {
                inserted += 1;
            }
        }
        log::info!("Indexed {} tracks from {}", inserted, dir.display());
        Ok(inserted)
    }

    /// Insert one track. Returns `false`, keeping the existing entry,
    /// when its normalized title is already taken.
    pub fn insert(&mut self, track: Track) -> bool {
        let key = normalize(&track.title);
        let path = track.file_path.clone();
        if self.index.insert(track) {
            self.paths.insert(key, path);
            true
        } else {
            false
        }
    }

    /// Remove the track filed under `title`'s normalized form, if any.
    pub fn remove(&mut self, title: &str) -> Option<Track> {
        let removed = self.index.remove(title)?;
        self.paths.remove(&normalize(title));
        Some(removed)
    }

    /// Exact title lookup.
    #[must_use]
    pub fn get(&self, query: &str) -> Option<&Track> {
        self.index.get(query)
    }

    /// File path for a title, through the lookup table.
    #[must_use]
    pub fn path_of(&self, title: &str) -> Option<&Path> {
        self.paths.get(&normalize(title)).map(PathBuf::as_path)
    }

    /// Up to `k` lexicographic neighbors of `query`.
    #[must_use]
    pub fn nearest_by_order(&self, query: &str, k: usize) -> Vec<&Track> {
        clavier_search::lexical::nearest(&self.index, query, k)
    }

    /// Up to `k` fuzzy matches for `query`, best first.
    #[must_use]
    pub fn nearest_by_fuzzy(&self, query: &str, k: usize) -> Vec<&Track> {
        clavier_search::fuzzy::nearest(&self.index, query, k)
    }

    /// The underlying title index.
    #[must_use]
    pub fn index(&self) -> &TrackIndex {
        &self.index
    }

    /// Tracks in normalized-title order.
    #[must_use]
    pub fn tracks(&self) -> Iter<'_> {
        self.index.iter()
    }

    /// Number of indexed tracks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the library holds no tracks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
