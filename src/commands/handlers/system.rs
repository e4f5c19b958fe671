//! System command handlers (help, ls, man, date, echo, weather and friends).

use super::CommandContext;
use crate::commands::output::{CommandOutput, ControlAction};
use crate::format::text::pad_end;
use crate::format::{build_weather_output, format_man_page};
use crate::session::{format_uptime, should_use_compact_weather_layout};

const LS_COLUMN_WIDTH: usize = 12;
const LS_COLUMNS: usize = 4;
const LS_COLUMNS_MOBILE: usize = 2;

/// Handle `help`.
pub fn handle_help(ctx: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::text(ctx.registry.help_text())
}

/// Handle `ls`: command names laid out row by row.
pub fn handle_ls(ctx: &CommandContext<'_>) -> CommandOutput {
    let columns = if ctx.is_mobile {
        LS_COLUMNS_MOBILE
    } else {
        LS_COLUMNS
    };
    let rows = ctx
        .registry
        .names()
        .chunks(columns)
        .map(|row| {
            row.iter()
                .map(|name| pad_end(name, LS_COLUMN_WIDTH))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>();
    CommandOutput::text(rows.join("\n"))
}

/// Handle `man [command]`.
pub fn handle_man(ctx: &CommandContext<'_>, command: Option<&str>) -> CommandOutput {
    let Some(command) = command else {
        return CommandOutput::error("What manual page do you want?\nUsage: man <command>");
    };
    let entry = ctx.registry.man_entry(command);
    match format_man_page(command, entry.as_ref(), &ctx.content.profile.site) {
        Some(page) => CommandOutput::text(page),
        None => CommandOutput::error(format!("No manual entry for {command}")),
    }
}

/// Handle `date`.
pub fn handle_date(ctx: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::text(ctx.now.format("%a %b %-d %Y %H:%M:%S %:z").to_string())
}

/// Handle `echo`.
pub fn handle_echo(text: &str) -> CommandOutput {
    if text.is_empty() {
        CommandOutput::info("Usage: echo [text]")
    } else {
        CommandOutput::text(text)
    }
}

/// Handle `whoami`.
pub fn handle_whoami(ctx: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::text(&ctx.content.profile.user)
}

/// Handle `uptime`.
pub fn handle_uptime(ctx: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::text(format!("up {}", format_uptime(ctx.uptime_ms)))
}

/// Handle `weather [location]`: render the supplied report when it covers
/// the requested location, otherwise ask the caller to fetch one.
///
/// Locations compare case-insensitively; no location accepts any report.
pub fn handle_weather(ctx: &CommandContext<'_>, location: Option<&str>) -> CommandOutput {
    let report = ctx.weather.filter(|report| {
        location.map_or(true, |wanted| {
            wanted.trim().eq_ignore_ascii_case(report.location.trim())
        })
    });
    match report {
        Some(report) => CommandOutput::text(build_weather_output(
            report,
            should_use_compact_weather_layout(ctx.is_mobile, ctx.window_width),
        )),
        None => CommandOutput::control(ControlAction::FetchWeather {
            location: location.map(String::from),
        }),
    }
}

/// Handle `snake`.
pub fn handle_snake() -> CommandOutput {
    CommandOutput::control(ControlAction::StartGame {
        name: "snake".to_string(),
    })
}

/// Handle `sudo`. The attempted command is echoed back, never run.
pub fn handle_sudo(ctx: &CommandContext<'_>, args: &str) -> CommandOutput {
    let user = &ctx.content.profile.user;
    let denied =
        format!("Permission denied: {user} is not in the sudoers file. This incident will be reported.");
    if args.is_empty() {
        return CommandOutput::error(denied);
    }
    CommandOutput::error(format!("sudo: {args}\n{denied}"))
}

/// Handle `cd`.
pub fn handle_cd(target: Option<&str>) -> CommandOutput {
    let target = target.unwrap_or("~");
    CommandOutput::error(format!(
        "cd: {target}: there is no filesystem here. Type 'ls' to see what you can run."
    ))
}

/// Handle `clear`.
pub fn handle_clear() -> CommandOutput {
    CommandOutput::control(ControlAction::Clear)
}

/// Handle `close` or `exit`.
pub fn handle_exit() -> CommandOutput {
    CommandOutput::exit()
}

/// Handle `grep` with nothing piped into it.
pub fn handle_grep_without_input() -> CommandOutput {
    CommandOutput::error("grep: no input\nUsage: <command> | grep <pattern>")
}

/// Handle an unknown command, suggesting completions when there are any.
pub fn handle_unknown(ctx: &CommandContext<'_>, command: &str) -> CommandOutput {
    let mut message = format!("Command not found: {command}. Type 'help' for available commands.");
    let suggestions = ctx.registry.autocomplete(command);
    if !suggestions.is_empty() {
        message.push_str(&format!("\nDid you mean: {}?", suggestions.join(", ")));
    }
    CommandOutput::error(message)
}
