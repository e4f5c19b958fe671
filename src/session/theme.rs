//! Theme selection and `theme` command parsing.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Colour scheme of the terminal widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Returns the opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Lowercase name as used in the `theme` command.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Capitalized name for display.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!("Unknown theme: {other}. Expected: dark or light")),
        }
    }
}

/// What a `theme` command asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeCommand {
    /// Bare `theme`: switch to the other theme.
    Toggle,
    /// `theme dark` / `theme light`.
    Set(Theme),
}

impl ThemeCommand {
    /// Resolves the command against the active theme.
    pub fn apply(self, current: Theme) -> Theme {
        match self {
            Self::Toggle => current.toggled(),
            Self::Set(theme) => theme,
        }
    }
}

/// Parses a full `theme ...` input line.
///
/// Returns `None` for an unrecognized argument (or a line that is not a theme
/// command at all); callers treat that as a no-op.
pub fn normalize_theme_command(input: &str) -> Option<ThemeCommand> {
    let text = input.trim().to_lowercase();
    if text == "theme" {
        return Some(ThemeCommand::Toggle);
    }
    let arg = text.strip_prefix("theme ")?.trim();
    match arg {
        "dark" => Some(ThemeCommand::Set(Theme::Dark)),
        "light" => Some(ThemeCommand::Set(Theme::Light)),
        _ => None,
    }
}
