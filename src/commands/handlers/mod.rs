//! Command handlers.
//!
//! Each handler is a pure function that takes a command context and returns
//! an output. Side effects are described with `ControlAction`s and left to the
//! caller.

pub mod content;
pub mod links;
pub mod session;
pub mod system;

use chrono::{DateTime, FixedOffset};

use super::definitions::CommandRegistry;
use crate::content::{SiteContent, Stats, WeatherReport};
use crate::session::Theme;

/// Context provided to command handlers.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext<'a> {
    /// Recognized commands.
    pub registry: &'a CommandRegistry,
    /// Profile, projects, skills and posts.
    pub content: &'a SiteContent,
    /// Commands entered this session, oldest first.
    pub history: &'a [String],
    /// Active theme.
    pub theme: Theme,
    /// Milliseconds since the session started.
    pub uptime_ms: u64,
    /// Wall clock for `date`.
    pub now: DateTime<FixedOffset>,
    /// Whether the visitor is on a phone.
    pub is_mobile: bool,
    /// Viewport width in CSS pixels.
    pub window_width: u32,
    /// Weather already fetched for this request, if any.
    pub weather: Option<&'a WeatherReport>,
    /// Usage statistics for `stats`.
    pub stats: &'a Stats,
    /// Site version shown by `neofetch`.
    pub version: &'a str,
}
