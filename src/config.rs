//! Configuration management for folioterm.
//!
//! Loads site content (profile, projects, skills, experience, blog posts) from
//! a TOML file. Every section is optional and a missing file yields the
//! built-in defaults.

use crate::content::SiteContent;
use crate::error::{Result, TerminalError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Main configuration structure for folioterm.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Content rendered by the terminal commands.
    #[serde(flatten)]
    pub content: SiteContent,
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folioterm")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| TerminalError::config(format!("Failed to read config file: {e}")))?;

        let config = Self::parse_toml(&content, path)?;
        info!(
            projects = config.content.projects.len(),
            posts = config.content.blog.len(),
            "Loaded config from {}",
            path.display()
        );
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            TerminalError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }
}
