//! Directory scanning and tag extraction.

use chrono::{DateTime, Utc};
use lofty::file::{AudioFile, TaggedFileExt};
use lofty::tag::Accessor;
use std::path::Path;
use walkdir::WalkDir;

use clavier_core::{AudioFormat, Track, PLACEHOLDER_TITLE};

use crate::error::ScanResult;

/// Tags extracted from an audio file.
#[derive(Debug, Default)]
struct TagData {
    title: Option<String>,
    artist: Option<String>,
    album: Option<String>,
    duration_secs: Option<f64>,
}

/// Whether a path looks like an audio file this scanner handles.
#[must_use]
pub fn is_audio_file(path: &Path) -> bool {
    if let Some(ext) = path.extension() {
        matches!(
            ext.to_string_lossy().to_lowercase().as_ref(),
            "flac" | "mp3" | "ogg" | "oga" | "wav" | "m4a" | "aac"
        )
    } else {
        false
    }
}

fn extract_tags(path: &Path) -> ScanResult<TagData> {
    let tagged_file = lofty::read_from_path(path)?;

    let tag = tagged_file
        .primary_tag()
        .or_else(|| tagged_file.first_tag());

    let properties = tagged_file.properties();

    let mut tag_data = TagData {
        duration_secs: Some(properties.duration().as_secs_f64()),
        ..Default::default()
    };

    if let Some(tag) = tag {
        tag_data.title = tag.title().map(|s| s.to_string());
        tag_data.artist = tag.artist().map(|s| s.to_string());
        tag_data.album = tag.album().map(|s| s.to_string());
    }

    Ok(tag_data)
}

/// Build a [`Track`] from a single audio file.
///
/// A tag-read failure is logged and degrades to placeholder metadata;
/// only filesystem errors propagate.
pub fn scan_track(path: &Path) -> ScanResult<Track> {
    let format = path
        .extension()
        .map(|ext| AudioFormat::from_extension(&ext.to_string_lossy()))
        .unwrap_or(AudioFormat::Other);

    let metadata = std::fs::metadata(path)?;
    let file_size = metadata.len();
    let file_mtime: DateTime<Utc> = metadata.modified()?.into();

    let tags = match extract_tags(path) {
        Ok(tags) => tags,
        Err(e) => {
            log::warn!("Failed to read tags from {}: {}", path.display(), e);
            TagData::default()
        }
    };

    let title = tags
        .title
        .unwrap_or_else(|| PLACEHOLDER_TITLE.to_string());

    let mut track = Track::new(title, path.to_path_buf(), format)
        .with_file_size(file_size)
        .with_file_mtime(file_mtime);
    if let Some(artist) = tags.artist {
        track = track.with_artist(artist);
    }
    if let Some(album) = tags.album {
        track = track.with_album(album);
    }
    if let Some(duration) = tags.duration_secs {
        track = track.with_duration_secs(duration);
    }

    Ok(track)
}

/// Walk `dir` and build a track for every audio file found.
pub fn scan_directory(dir: &Path) -> ScanResult<Vec<Track>> {
    let mut tracks = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !path.is_file() || !is_audio_file(path) {
            continue;
        }

        log::debug!("Scanning: {}", path.display());
        tracks.push(scan_track(path)?);
    }

    Ok(tracks)
}
