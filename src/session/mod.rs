//! Session-side helpers: history navigation, theme parsing and display
//! utilities, plus the `Session` a driver keeps between lines.

pub mod display;
pub mod history;
pub mod state;
pub mod theme;

pub use display::{
    celsius_to_fahrenheit, format_uptime, get_output_a11y_attrs,
    should_use_compact_weather_layout,
};
pub use history::{handle_history_navigation, HistoryNavigation, HistoryState, Key};
pub use state::Session;
pub use theme::{normalize_theme_command, Theme, ThemeCommand};
