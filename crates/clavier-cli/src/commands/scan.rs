use anyhow::Result;
use clavier_scan::Config;

use super::{display_line, load_library};

pub fn run_scan(config: &Config, json: bool) -> Result<()> {
    let library = load_library(config)?;

    if json {
        let tracks: Vec<_> = library.tracks().collect();
        println!("{}", serde_json::to_string_pretty(&tracks)?);
        return Ok(());
    }

    for track in library.tracks() {
        println!("  {}", display_line(track));
    }
    println!(
        "\n{} tracks indexed from {}",
        library.len(),
        config.music_dir.display()
    );
    Ok(())
}
