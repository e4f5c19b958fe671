//! Executes a whole input line.
//!
//! The first pipeline segment produces output; every later segment must be a
//! `grep` that narrows the previous text down line by line.

use tracing::debug;

use super::handlers::{content, links, session, system, CommandContext};
use super::output::CommandOutput;
use super::pipeline::parse_pipeline;
use super::router::{Command, CommandRouter};
use crate::format::grep_filter;

/// Runs input lines against a command context.
pub struct Interpreter;

impl Interpreter {
    /// Executes one input line. Returns no outputs for an empty line.
    pub fn execute(line: &str, ctx: &CommandContext<'_>) -> Vec<CommandOutput> {
        let segments = parse_pipeline(line);
        let Some((first, rest)) = segments.split_first() else {
            return Vec::new();
        };

        let command = CommandRouter::parse(first, ctx.registry);
        debug!(?command, piped = rest.len(), "Dispatching command");
        let Some(mut output) = Self::dispatch(&command, ctx) else {
            return Vec::new();
        };

        for segment in rest {
            output = match CommandRouter::parse(segment, ctx.registry) {
                Command::Grep(Some(pattern)) => match Self::grep(output, &pattern) {
                    Ok(filtered) => filtered,
                    Err(err) => return vec![err],
                },
                Command::Grep(None) => {
                    return vec![CommandOutput::error("Usage: <command> | grep <pattern>")]
                }
                _ => {
                    return vec![CommandOutput::error(format!(
                        "Only grep can read piped output: {segment}"
                    ))]
                }
            };
        }

        vec![output]
    }

    /// Filters a text output. Errors pass through untouched.
    fn grep(output: CommandOutput, pattern: &str) -> Result<CommandOutput, CommandOutput> {
        match output {
            CommandOutput::Text { text, style } => {
                let matches = grep_filter(&text, pattern);
                if matches.is_empty() {
                    return Err(CommandOutput::info(format!("No matches for '{pattern}'.")));
                }
                Ok(CommandOutput::Text {
                    text: matches.join("\n"),
                    style,
                })
            }
            CommandOutput::Error { .. } => Err(output),
            CommandOutput::Control { .. } => Err(CommandOutput::error(
                "grep: this command produces no text to filter",
            )),
        }
    }

    /// Runs a single parsed command.
    pub fn dispatch(command: &Command, ctx: &CommandContext<'_>) -> Option<CommandOutput> {
        let output = match command {
            Command::Empty => return None,
            Command::Banner => content::handle_banner(ctx),
            Command::Blog(slug) => content::handle_blog(ctx, slug.as_deref()),
            Command::Contact => content::handle_contact(ctx),
            Command::Experience => content::handle_experience(ctx),
            Command::Neofetch => content::handle_neofetch(ctx),
            Command::OpenProject(name) => content::handle_open_project(ctx, name),
            Command::Projects(name) => content::handle_projects(ctx, name.as_deref()),
            Command::Skills => content::handle_skills(ctx),
            Command::Curl(url) => links::handle_curl(url.as_deref()),
            Command::Email => links::handle_email(ctx),
            Command::Github => links::handle_github(ctx),
            Command::Qr => links::handle_qr(ctx),
            Command::Repo => links::handle_repo(ctx),
            Command::Resume => links::handle_resume(ctx),
            Command::History => session::handle_history(ctx),
            Command::Stats => session::handle_stats(ctx),
            Command::Theme(theme) => session::handle_theme(ctx, *theme),
            Command::Cd(target) => system::handle_cd(target.as_deref()),
            Command::Clear => system::handle_clear(),
            Command::Date => system::handle_date(ctx),
            Command::Echo(text) => system::handle_echo(text),
            Command::Exit => system::handle_exit(),
            Command::Grep(_) => system::handle_grep_without_input(),
            Command::Help => system::handle_help(ctx),
            Command::Ls => system::handle_ls(ctx),
            Command::Man(name) => system::handle_man(ctx, name.as_deref()),
            Command::Snake => system::handle_snake(),
            Command::Sudo(args) => system::handle_sudo(ctx, args),
            Command::Uptime => system::handle_uptime(ctx),
            Command::Weather(location) => system::handle_weather(ctx, location.as_deref()),
            Command::Whoami => system::handle_whoami(ctx),
            Command::Unknown(name) => system::handle_unknown(ctx, name),
        };
        Some(output)
    }
}
