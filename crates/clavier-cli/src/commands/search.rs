use anyhow::Result;
use clavier_scan::Config;

use super::{display_line, load_library};

pub fn run_search(config: &Config, title: &str, json: bool) -> Result<()> {
    let library = load_library(config)?;

    match library.get(title) {
        Some(track) => {
            if json {
                println!("{}", serde_json::to_string_pretty(track)?);
            } else {
                println!("Found {}", display_line(track));
                if let Some(path) = library.path_of(&track.title) {
                    println!("  {}", path.display());
                }
            }
        }
        None => {
            if json {
                println!("null");
            } else {
                println!("No track found for \"{title}\"");
            }
        }
    }
    Ok(())
}
