//! Command-line argument parsing for folioterm.

use crate::config::Config;
use crate::content::WeatherReport;
use crate::error::{Result, TerminalError};
use crate::session::Theme;
use clap::Parser;
use std::path::{Path, PathBuf};

/// How command output is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Rendered text, one block per output.
    #[default]
    Text,
    /// One JSON object per output, one per line.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {s}. Expected: text or json")),
        }
    }
}

/// A portfolio site's fake terminal, on a real one.
#[derive(Parser, Debug)]
#[command(name = "folioterm")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Content file path
    #[arg(long, value_name = "PATH", env = "FOLIOTERM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Run a command line and exit (repeatable, runs in order)
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    pub commands: Vec<String>,

    /// Output format: text or json
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub output: String,

    /// Viewport width in CSS pixels, used for layout decisions
    #[arg(long, value_name = "PX", default_value_t = 1280)]
    pub width: u32,

    /// Lay out output as on a phone
    #[arg(long)]
    pub mobile: bool,

    /// Weather report (JSON) used by the weather command
    #[arg(long, value_name = "PATH")]
    pub weather: Option<PathBuf>,

    /// Starting theme: dark or light
    #[arg(long, value_name = "THEME", default_value = "dark")]
    pub theme: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses `--config` (or `FOLIOTERM_CONFIG`) if provided, otherwise the
    /// default path.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Parses the output format from the --output argument.
    pub fn parse_output_format(&self) -> std::result::Result<OutputFormat, String> {
        self.output.parse()
    }

    /// Parses the starting theme from the --theme argument.
    pub fn parse_theme(&self) -> std::result::Result<Theme, String> {
        self.theme.parse()
    }

    /// Loads the weather report named by --weather, if any.
    pub fn load_weather(&self) -> Result<Option<WeatherReport>> {
        self.weather.as_deref().map(load_weather_report).transpose()
    }

    /// Validates arguments that clap cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        self.parse_output_format().map_err(TerminalError::config)?;
        self.parse_theme().map_err(TerminalError::config)?;
        Ok(())
    }
}

fn load_weather_report(path: &Path) -> Result<WeatherReport> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        TerminalError::config(format!(
            "Invalid weather report in {}:\n  {}",
            path.display(),
            e
        ))
    })
}
