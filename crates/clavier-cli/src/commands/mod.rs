pub mod closest;
pub mod config;
pub mod nearest;
pub mod scan;
pub mod search;

pub use closest::run_closest;
pub use nearest::run_nearest;
pub use scan::run_scan;
pub use search::run_search;

use anyhow::{Context, Result};
use clavier_core::Track;
use clavier_scan::{Config, Library};

/// Scan the configured music directory into a fresh library.
pub(crate) fn load_library(config: &Config) -> Result<Library> {
    let mut library = Library::new();
    library
        .load_directory(&config.music_dir)
        .with_context(|| format!("Failed to scan {}", config.music_dir.display()))?;
    Ok(library)
}

/// One line of human-readable output for a track.
pub(crate) fn display_line(track: &Track) -> String {
    match &track.artist {
        Some(artist) => format!("{} ({})", track.title, artist),
        None => track.title.clone(),
    }
}

/// Print a result list as text lines or a JSON array.
pub(crate) fn print_tracks(tracks: &[&Track], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&tracks)?);
    } else if tracks.is_empty() {
        println!("No matches");
    } else {
        for track in tracks {
            println!("  {}", display_line(track));
        }
    }
    Ok(())
}
