use anyhow::Result;
use clavier_scan::Config;

use super::{load_library, print_tracks};

pub fn run_nearest(config: &Config, query: &str, k: usize, json: bool) -> Result<()> {
    let library = load_library(config)?;
    let results = library.nearest_by_order(query, k);

    log::info!(
        "{} of {} tracks around \"{}\"",
        results.len(),
        library.len(),
        query
    );
    print_tracks(&results, json)
}
