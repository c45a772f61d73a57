use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for clavier.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (CLV_* prefix)
/// 3. Config file (~/.config/clavier/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory scanned for audio files.
    ///
    /// Can be set via:
    /// - CLI: --music-dir /path/to/music
    /// - ENV: CLV_MUSIC_DIR
    /// - Config: music_dir = "/path/to/music"
    /// - Default: the platform music directory, falling back to "."
    #[serde(default = "default_music_dir")]
    pub music_dir: PathBuf,

    /// Default number of results for the proximity searches.
    ///
    /// Can be set via:
    /// - CLI: -k on the search subcommands
    /// - ENV: CLV_RESULT_LIMIT
    /// - Config: result_limit = 10
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            music_dir: default_music_dir(),
            result_limit: default_result_limit(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/clavier/config.toml
    /// Reads environment variables with CLV_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        // If config file exists, load it
        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        // Set up environment variable scanning with CLV_ prefix
        let env_opts = env::Options::with_top_level("clv");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration with the music directory overridden.
    ///
    /// This is used when the --music-dir CLI flag is provided.
    pub fn load_with_music_dir(music_dir: PathBuf) -> Result<Self> {
        let mut config = Self::load()?;
        config.music_dir = music_dir;
        Ok(config)
    }
}

/// Get the default music directory.
///
/// Returns the platform music directory (e.g. ~/Music), or "." when the
/// platform does not define one.
fn default_music_dir() -> PathBuf {
    dirs::audio_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn default_result_limit() -> usize {
    5
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/clavier/config.toml
/// - macOS: ~/Library/Application Support/clavier/config.toml
/// - Windows: %APPDATA%\clavier\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("clavier")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Clavier Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (CLV_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Directory scanned for audio files
#
# Can also be set via:
# - CLI: clavier --music-dir /path/to/music scan
# - Environment: CLV_MUSIC_DIR=/path/to/music
#
# Default: the platform music directory
#music_dir = "/path/to/music"

# Default number of results for the nearest/closest searches
#
# Can also be set via:
# - CLI: clavier nearest "query" -k 10
# - Environment: CLV_RESULT_LIMIT=10
#result_limit = 5
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    // Create parent directory
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    // Write default config
    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.music_dir.as_os_str().is_empty());
        assert_eq!(config.result_limit, 5);
    }

    #[test]
    fn test_config_load() {
        // Should not fail even if config file doesn't exist
        let result = Config::load();
        assert!(result.is_ok());
    }

    #[test]
    fn test_config_with_custom_music_dir() {
        let custom_dir = PathBuf::from("/tmp/music");
        let config = Config::load_with_music_dir(custom_dir.clone());
        assert!(config.is_ok());
        assert_eq!(config.unwrap().music_dir, custom_dir);
    }
}
