//! Transport-agnostic command output types.
//!
//! These types describe command results independently of how they are shown.
//! The binary prints them as text or JSON; a browser front end can map
//! `OutputStyle` onto its CSS classes and act on `ControlAction`s itself.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::session::{get_output_a11y_attrs, Theme};

/// Visual style of a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// Regular command output.
    #[default]
    Output,
    /// Hints and status lines.
    Info,
}

impl OutputStyle {
    /// CSS class used to render this style.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Output => "output-text",
            Self::Info => "info-text",
        }
    }
}

/// Output from a command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommandOutput {
    /// A block of text.
    Text { text: String, style: OutputStyle },

    /// Error message.
    Error { message: String },

    /// Something the caller has to do.
    Control { action: ControlAction },
}

/// Side effects that only the caller can perform.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ControlAction {
    /// Clear the screen.
    Clear,

    /// Switch to the given theme.
    SetTheme { theme: Theme },

    /// Open a URL in a new tab.
    OpenUrl { url: String },

    /// Look up weather and render it; `None` means the visitor's location.
    FetchWeather { location: Option<String> },

    /// Start a game.
    StartGame { name: String },

    /// Show a QR code for a URL.
    ShowQr { url: String },

    /// Close the terminal.
    Exit,
}

impl CommandOutput {
    /// Creates a regular text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            style: OutputStyle::Output,
        }
    }

    /// Creates an info line.
    pub fn info(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            style: OutputStyle::Info,
        }
    }

    /// Creates an error message.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Wraps a control action.
    pub fn control(action: ControlAction) -> Self {
        Self::Control { action }
    }

    /// Creates an open-url control action.
    pub fn open_url(url: impl Into<String>) -> Self {
        Self::control(ControlAction::OpenUrl { url: url.into() })
    }

    /// Creates an exit control action.
    pub fn exit() -> Self {
        Self::control(ControlAction::Exit)
    }

    /// Returns the text of a text block.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Returns true for error output.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// CSS class for this output, if it renders as text.
    pub fn class_name(&self) -> Option<&'static str> {
        match self {
            Self::Text { style, .. } => Some(style.class_name()),
            Self::Error { .. } => Some(crate::session::display::ERROR_CLASS),
            Self::Control { .. } => None,
        }
    }

    /// Accessibility attributes for the rendered element.
    pub fn a11y_attrs(&self) -> BTreeMap<&'static str, &'static str> {
        self.class_name()
            .map(get_output_a11y_attrs)
            .unwrap_or_default()
    }
}
