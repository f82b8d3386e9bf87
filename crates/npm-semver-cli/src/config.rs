use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up from the working directory upward
pub const CONFIG_FILE: &str = "npm-semver.toml";

/// The npm-semver configuration file structure (npm-semver.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default log filter when RUST_LOG is unset (e.g. "warn", "debug")
    pub log_level: Option<String>,

    /// Output settings
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Emit JSON instead of plain text
    pub json: bool,

    /// Sort in descending order by default
    pub reverse: bool,
}

impl Config {
    /// Load configuration from npm-semver.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<(PathBuf, Self)>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE);

            if config_path.is_file() {
                let content = std::fs::read_to_string(&config_path)
                    .with_context(|| format!("Failed to read {}", config_path.display()))?;
                let config: Config = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", config_path.display()))?;
                return Ok(Some((config_path, config)));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }
}
