use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::model::ids::TrackId;

/// Title recorded when a file carries no readable title tag.
///
/// Placeholder-titled tracks are indexed like any other track.
pub const PLACEHOLDER_TITLE: &str = "N/A";

/// The format of an audio file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioFormat {
    Flac,
    Mp3,
    Ogg,
    Wav,
    Aac,
    Other,
}

impl AudioFormat {
    /// Detect format from a file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "flac" => Self::Flac,
            "mp3" => Self::Mp3,
            "ogg" | "oga" => Self::Ogg,
            "wav" => Self::Wav,
            "aac" | "m4a" => Self::Aac,
            _ => Self::Other,
        }
    }
}

/// A single audio file known to the library.
///
/// The `title` is the sort and search key; the `file_path` is the stable
/// identity. Everything else is payload the index carries but never
/// inspects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,

    /// Track title as read from embedded tags, or [`PLACEHOLDER_TITLE`].
    pub title: String,

    /// Artist as read from embedded tags.
    pub artist: Option<String>,

    /// Album as read from embedded tags.
    pub album: Option<String>,

    /// Absolute path to the audio file.
    pub file_path: PathBuf,

    /// Audio format.
    pub format: AudioFormat,

    /// File size in bytes.
    pub file_size: u64,

    /// File modification time.
    pub file_mtime: DateTime<Utc>,

    /// Duration in seconds as read from file properties.
    pub duration_secs: Option<f64>,

    pub created_at: DateTime<Utc>,
}

impl Track {
    #[must_use]
    pub fn new(title: impl Into<String>, file_path: PathBuf, format: AudioFormat) -> Self {
        let now = Utc::now();
        Self {
            id: TrackId::new(),
            title: title.into(),
            artist: None,
            album: None,
            file_path,
            format,
            file_size: 0,
            file_mtime: now,
            duration_secs: None,
            created_at: now,
        }
    }

    #[must_use]
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    #[must_use]
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    #[must_use]
    pub fn with_file_size(mut self, size: u64) -> Self {
        self.file_size = size;
        self
    }

    #[must_use]
    pub fn with_file_mtime(mut self, mtime: DateTime<Utc>) -> Self {
        self.file_mtime = mtime;
        self
    }

    #[must_use]
    pub fn with_duration_secs(mut self, secs: f64) -> Self {
        self.duration_secs = Some(secs);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_audio_format_from_extension() {
        assert_eq!(AudioFormat::from_extension("flac"), AudioFormat::Flac);
        assert_eq!(AudioFormat::from_extension("FLAC"), AudioFormat::Flac);
        assert_eq!(AudioFormat::from_extension("mp3"), AudioFormat::Mp3);
        assert_eq!(AudioFormat::from_extension("oga"), AudioFormat::Ogg);
        assert_eq!(AudioFormat::from_extension("wav"), AudioFormat::Wav);
        assert_eq!(AudioFormat::from_extension("m4a"), AudioFormat::Aac);
        assert_eq!(AudioFormat::from_extension("xyz"), AudioFormat::Other);
    }

    #[test]
    fn test_track_new() {
        let path = Path::new("/music/test.flac").to_path_buf();
        let track = Track::new("Prelude", path.clone(), AudioFormat::Flac);

        assert_eq!(track.title, "Prelude");
        assert_eq!(track.file_path, path);
        assert_eq!(track.format, AudioFormat::Flac);
        assert_eq!(track.file_size, 0);
        assert!(track.artist.is_none());
    }

    #[test]
    fn test_track_builders() {
        let track = Track::new("Prelude", PathBuf::from("/music/test.mp3"), AudioFormat::Mp3)
            .with_artist("Someone")
            .with_album("Somewhere")
            .with_file_size(2048)
            .with_duration_secs(183.5);

        assert_eq!(track.artist.as_deref(), Some("Someone"));
        assert_eq!(track.album.as_deref(), Some("Somewhere"));
        assert_eq!(track.file_size, 2048);
        assert_eq!(track.duration_secs, Some(183.5));
    }
}
