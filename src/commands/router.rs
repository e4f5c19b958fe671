//! Command parsing and routing.
//!
//! Turns one pipeline segment into a structured command that can be
//! dispatched to a handler. Only names known to the registry are routed.

use tracing::debug;

use super::definitions::CommandRegistry;
use super::pipeline::split_args;
use crate::session::{normalize_theme_command, ThemeCommand};

/// Parsed command from one pipeline segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the welcome banner.
    Banner,
    /// List posts, or read the post with this slug.
    Blog(Option<String>),
    /// Clear the screen.
    Clear,
    /// Show contact details.
    Contact,
    /// Open a configured project by name (`converter`).
    OpenProject(String),
    /// Open a URL.
    Curl(Option<String>),
    /// Show a QR code for the site.
    Qr,
    /// Print the current date.
    Date,
    /// Print the arguments.
    Echo(String),
    /// Compose an email.
    Email,
    /// Show the experience timeline.
    Experience,
    /// Open the GitHub profile.
    Github,
    /// Filter the previous segment's output.
    Grep(Option<String>),
    /// Show help.
    Help,
    /// Show session history.
    History,
    /// List command names.
    Ls,
    /// Show a manual page.
    Man(Option<String>),
    /// Show site info.
    Neofetch,
    /// List projects, or open the named one.
    Projects(Option<String>),
    /// Open the source repository.
    Repo,
    /// Open the resume.
    Resume,
    /// Show skills.
    Skills,
    /// Start snake.
    Snake,
    /// Show usage statistics.
    Stats,
    /// Change theme. `None` for an unrecognized argument.
    Theme(Option<ThemeCommand>),
    /// Show session uptime.
    Uptime,
    /// Show weather, optionally for a location.
    Weather(Option<String>),
    /// Print the current user.
    Whoami,
    /// `sudo` with whatever followed it.
    Sudo(String),
    /// `cd` with an optional target.
    Cd(Option<String>),
    /// Close the terminal.
    Exit,
    /// Nothing typed.
    Empty,
    /// Name not in the registry.
    Unknown(String),
}

/// Command router for parsing user input.
pub struct CommandRouter;

impl CommandRouter {
    /// Parses one pipeline segment into a Command.
    pub fn parse(segment: &str, registry: &CommandRegistry) -> Command {
        let segment = segment.trim();
        let mut words = split_args(segment).into_iter();
        let Some(first) = words.next() else {
            return Command::Empty;
        };
        let name = first.to_lowercase();
        let args: Vec<String> = words.collect();

        if !registry.contains(&name) {
            debug!(command = %name, "Unknown command");
            return Command::Unknown(name);
        }

        let joined = || {
            let rest = args.join(" ");
            (!rest.is_empty()).then_some(rest)
        };
        let first_arg = || args.first().cloned();

        match name.as_str() {
            "banner" => Command::Banner,
            "blog" => Command::Blog(first_arg()),
            "clear" => Command::Clear,
            "contact" => Command::Contact,
            "converter" => Command::OpenProject("converter".to_string()),
            "curl" => Command::Curl(first_arg()),
            "qr" => Command::Qr,
            "date" => Command::Date,
            "echo" => Command::Echo(args.join(" ")),
            "email" => Command::Email,
            "experience" => Command::Experience,
            "github" => Command::Github,
            "grep" => Command::Grep(joined()),
            "help" => Command::Help,
            "history" => Command::History,
            "ls" => Command::Ls,
            "man" => Command::Man(first_arg()),
            "neofetch" => Command::Neofetch,
            "projects" => Command::Projects(joined()),
            "repo" => Command::Repo,
            "resume" => Command::Resume,
            "skills" => Command::Skills,
            "snake" => Command::Snake,
            "stats" => Command::Stats,
            "theme" => Command::Theme(normalize_theme_command(segment)),
            "uptime" => Command::Uptime,
            "weather" => Command::Weather(joined()),
            "whoami" => Command::Whoami,
            "sudo" => Command::Sudo(args.join(" ")),
            "cd" => Command::Cd(first_arg()),
            "close" | "exit" => Command::Exit,
            // Registered but without a handler of its own.
            _ => Command::Unknown(name.clone()),
        }
    }
}
