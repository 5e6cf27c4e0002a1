//! Session configuration
//!
//! Settings come from an optional JSON file and are then overridden by
//! command-line flags. Every field has a default, so a partial file is fine.

use crate::error::{Error, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How results are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `N: p1, p2, ...` lines
    #[default]
    Text,
    /// One JSON object per pattern
    Json,
}

/// When to colorize text output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn choice(self) -> termcolor::ColorChoice {
        match self {
            ColorMode::Auto => termcolor::ColorChoice::Auto,
            ColorMode::Always => termcolor::ColorChoice::Always,
            ColorMode::Never => termcolor::ColorChoice::Never,
        }
    }
}

/// Configuration for a query session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Report positions counting from 1 (default: true)
    pub one_based: bool,
    /// Print per-pattern query time (default: false)
    pub timing: bool,
    pub format: OutputFormat,
    pub color: ColorMode,
    /// Show a progress bar while building large texts (default: true)
    pub progress: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            one_based: true,
            timing: false,
            format: OutputFormat::Text,
            color: ColorMode::Auto,
            progress: true,
        }
    }
}

impl SessionConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_slice(&data).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
