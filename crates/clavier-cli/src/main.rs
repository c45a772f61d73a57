use anyhow::Result;
use clap::Parser;
use clavier_scan::Config;
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "clavier", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Music directory to index (default: the configured music_dir)
    #[arg(long, global = true)]
    music_dir: Option<PathBuf>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// List the indexed library in title order
    ///
    /// Recursively walks the music directory, reads each audio file's
    /// embedded tags (title, artist, album, duration), and prints the
    /// resulting library sorted by normalized title: case-insensitive,
    /// with a leading "The", "A", or "An" ignored.
    ///
    /// Files whose tags cannot be read are indexed under the "N/A"
    /// placeholder title rather than skipped.
    ///
    /// Supported formats: FLAC, MP3, OGG, WAV, M4A/AAC
    Scan,
    /// Look up one track by exact title
    ///
    /// Title matching is case-insensitive and article-insensitive, so
    /// "wall" finds "The Wall". A miss prints a message and exits
    /// cleanly; it is not an error.
    Search {
        /// Title to look up
        title: String,
    },
    /// Find the titles alphabetically closest to a query
    ///
    /// Locates where the query would sit in the title order and walks
    /// outward from that point, alternating between the next-smaller and
    /// next-larger title until k results are collected. A track titled
    /// exactly like the query is excluded; this answers "what sits
    /// around this title", not "does it exist".
    Nearest {
        /// Query string to bracket
        query: String,

        /// Number of results (default: the configured result_limit)
        #[arg(short)]
        k: Option<usize>,
    },
    /// Find the best fuzzy matches for a query
    ///
    /// Scores every indexed title against the query by word-level edit
    /// distance (0 = perfect match) and prints the k best, ascending.
    /// A query word equal to any title word is a perfect match; shared
    /// substrings and near-miss spellings rank close behind.
    Closest {
        /// Query string to match
        query: String,

        /// Number of results (default: the configured result_limit)
        #[arg(short)]
        k: Option<usize>,
    },
    /// Show or manage configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Create the config file with defaults if missing
    Init,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
}

fn load_config(music_dir: Option<PathBuf>) -> Result<Config> {
    match music_dir {
        Some(dir) => Config::load_with_music_dir(dir),
        None => Config::load(),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan => {
            let config = load_config(cli.music_dir)?;
            commands::run_scan(&config, cli.json)
        }
        Commands::Search { title } => {
            let config = load_config(cli.music_dir)?;
            commands::run_search(&config, &title, cli.json)
        }
        Commands::Nearest { query, k } => {
            let config = load_config(cli.music_dir)?;
            let k = k.unwrap_or(config.result_limit);
            commands::run_nearest(&config, &query, k, cli.json)
        }
        Commands::Closest { query, k } => {
            let config = load_config(cli.music_dir)?;
            let k = k.unwrap_or(config.result_limit);
            commands::run_closest(&config, &query, k, cli.json)
        }
        Commands::Config { action } => match action {
            Some(ConfigAction::Init) => commands::config::init_config(),
            Some(ConfigAction::Path) => commands::config::show_path(),
            Some(ConfigAction::Example) => commands::config::show_example(),
            None => commands::config::show_config(),
        },
    }
}
