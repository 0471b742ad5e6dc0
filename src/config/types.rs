use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name of the command store inside the home directory
pub const STORE_FILE_NAME: &str = ".tagc.commands.txt";

/// File name of the configuration inside the home directory
pub const CONFIG_FILE_NAME: &str = ".tagc.toml";

/// Tagc configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the JSON file holding the bookmarked commands
    pub store_file: PathBuf,

    /// Display settings
    pub display: Display,
}

/// How search results are printed
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Display {
    /// Output format for search results
    pub format: OutputFormat,

    /// When to colorize Markdown output
    pub color: ColorChoice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented JSON, suited for scripts
    #[default]
    Json,
    /// Score tiers as Markdown, suited for reading
    Markdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_file: home_dir().join(STORE_FILE_NAME),
            display: Display::default(),
        }
    }
}

/// Home directory from `HOME`, then `USERPROFILE`, else the working directory
pub fn home_dir() -> PathBuf {
    ["HOME", "USERPROFILE"]
        .iter()
        .filter_map(|var| std::env::var_os(var))
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}
