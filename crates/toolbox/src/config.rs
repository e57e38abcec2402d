//! Configuration for the toolbox commands.
//!
//! Settings are read from `~/.config/devtoolbox/config.toml` when present, or
//! from the file given with `--config`. Command line flags win over the file.

use anyhow::{Context, Result};
use clap::ValueEnum;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use text_diff::ComparisonOptions;

/// How `devtoolbox diff` prints its result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Side by side with a marker column
    #[default]
    Split,
    /// One interleaved stream with both line numbers
    Unified,
    /// Clipboard export format
    Plain,
    /// Counts only
    Stats,
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub diff: DiffConfig,
}

/// The `[diff]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    #[serde(flatten)]
    pub comparison: ComparisonOptions,

    pub view: ViewMode,

    /// Colour terminal output
    pub color: bool,

    /// Largest left × right line product compared without `--force`
    pub max_cells: u64,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            comparison: ComparisonOptions::default(),
            view: ViewMode::default(),
            color: true,
            max_cells: 25_000_000,
        }
    }
}

impl Config {
    /// Load the explicit file, or the default file if it exists.
    ///
    /// A missing default file yields the built-in defaults; a missing explicit
    /// file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let path = Self::config_path();
        info!("Config path: {:?}", path);

        if path.exists() {
            Self::from_file(&path)
        } else {
            info!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        info!("Loading config from {:?}", path);

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Default location: `~/.config/devtoolbox/config.toml`
    pub fn config_path() -> PathBuf {
        match dirs::home_dir() {
            Some(home_dir) => home_dir
                .join(".config")
                .join("devtoolbox")
                .join("config.toml"),
            None => PathBuf::from("config.toml"),
        }
    }
}
