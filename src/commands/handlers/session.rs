//! Session command handlers (history, stats, theme).

use super::CommandContext;
use crate::commands::output::{CommandOutput, ControlAction};
use crate::format::{build_stats_output, format_history_output};
use crate::session::ThemeCommand;

/// Handle `history`.
pub fn handle_history(ctx: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::text(format_history_output(ctx.history))
}

/// Handle `stats`.
pub fn handle_stats(ctx: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::text(build_stats_output(ctx.stats))
}

/// Handle `theme [dark|light]`. An unrecognized argument leaves the theme
/// alone and prints usage.
pub fn handle_theme(ctx: &CommandContext<'_>, command: Option<ThemeCommand>) -> CommandOutput {
    match command {
        Some(command) => CommandOutput::control(ControlAction::SetTheme {
            theme: command.apply(ctx.theme),
        }),
        None => CommandOutput::info(format!(
            "Usage: theme [dark|light]\nCurrent theme: {}",
            ctx.theme
        )),
    }
}
