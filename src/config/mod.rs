//! Configuration module
//!
//! Handles loading and saving of the optional ~/.tagc.toml file and
//! resolving the effective settings for one invocation.

mod types;

#[allow(unused_imports)]
pub use types::{home_dir, ColorChoice, Config, Display, OutputFormat, CONFIG_FILE_NAME};

use crate::error::{Result, TagcError};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the configuration file
pub fn default_path() -> PathBuf {
    home_dir().join(CONFIG_FILE_NAME)
}

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        TagcError::Config(format!(
            "Cannot read config from '{}': {}. Run 'tagc config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Load configuration, falling back to defaults when the file does not exist
pub fn load_or_default(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    load(path)
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| TagcError::Config(format!("Failed to serialize config: {}", e)))?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}

/// Effective settings for one invocation, resolved once and never mutated
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub store_file: PathBuf,
    pub format: OutputFormat,
    pub color: ColorChoice,
}

/// Command-line overrides, highest precedence
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub store_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub color: Option<ColorChoice>,
}

impl Settings {
    /// Flags win over the config file, the config file over defaults
    pub fn resolve(config: Config, overrides: Overrides) -> Self {
        Self {
            store_file: overrides.store_file.unwrap_or(config.store_file),
            format: overrides.format.unwrap_or(config.display.format),
            color: overrides.color.unwrap_or(config.display.color),
        }
    }
}
