//! folioterm - a portfolio site's fake terminal, on a real one.

use std::io::{self, BufRead, IsTerminal, Write};

use chrono::Local;
use folioterm::cli::{Cli, OutputFormat};
use folioterm::commands::{
    CommandContext, CommandOutput, CommandRegistry, ControlAction, Interpreter,
};
use folioterm::config::Config;
use folioterm::content::WeatherReport;
use folioterm::error::{Result, TerminalError};
use folioterm::format::build_banner_output;
use folioterm::logging::init_stderr_logging;
use folioterm::session::Session;
use tracing::{error, info, warn};

/// Printed for `clear` so a pager or wrapper can wipe the screen.
const FORM_FEED: &str = "\x0c";

fn main() {
    let cli = Cli::parse_args();
    init_stderr_logging(cli.verbose);

    if let Err(e) = run(cli) {
        error!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    cli.validate()?;
    let format = cli.parse_output_format().map_err(TerminalError::config)?;
    let theme = cli.parse_theme().map_err(TerminalError::config)?;

    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;
    let weather = cli.load_weather()?;

    let mut terminal = Terminal {
        registry: CommandRegistry::builtin(),
        config,
        weather,
        session: Session::new(theme),
        format,
        is_mobile: cli.mobile,
        window_width: cli.width,
    };
    let mut out = io::stdout().lock();

    if !cli.commands.is_empty() {
        for line in &cli.commands {
            if !terminal.run_line(line, &mut out)? {
                break;
            }
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        writeln!(out, "{}", build_banner_output(&terminal.config.content.profile))?;
    }

    let mut input = stdin.lock();
    loop {
        if interactive {
            write!(out, "{}:~$ ", terminal.config.content.profile.prompt_identity())?;
            out.flush()?;
        }

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if !terminal.run_line(line.trim_end_matches(['\r', '\n']), &mut out)? {
            break;
        }
    }

    Ok(())
}

/// Everything one terminal session needs between lines.
struct Terminal {
    registry: CommandRegistry,
    config: Config,
    weather: Option<WeatherReport>,
    session: Session,
    format: OutputFormat,
    is_mobile: bool,
    window_width: u32,
}

impl Terminal {
    /// Runs one line and writes its output. Returns false once the session
    /// is closed.
    fn run_line(&mut self, line: &str, out: &mut impl Write) -> Result<bool> {
        self.session.record(line, &self.registry);
        let stats = self.session.stats();

        let outputs = {
            let ctx = CommandContext {
                registry: &self.registry,
                content: &self.config.content,
                history: self.session.history(),
                theme: self.session.theme(),
                uptime_ms: self.session.uptime_ms(),
                now: Local::now().fixed_offset(),
                is_mobile: self.is_mobile,
                window_width: self.window_width,
                weather: self.weather.as_ref(),
                stats: &stats,
                version: env!("CARGO_PKG_VERSION"),
            };
            Interpreter::execute(line, &ctx)
        };

        for output in &outputs {
            match self.format {
                OutputFormat::Text => write_text(output, out)?,
                OutputFormat::Json => {
                    let json = serde_json::to_string(output)
                        .map_err(|e| TerminalError::internal(format!("Failed to encode output: {e}")))?;
                    writeln!(out, "{json}")?;
                }
            }
            if let CommandOutput::Control { action } = output {
                self.session.apply(action);
            }
        }
        out.flush()?;

        Ok(!self.session.is_closed())
    }
}

/// Writes an output the way the browser would show it, as far as a plain
/// terminal can.
fn write_text(output: &CommandOutput, out: &mut impl Write) -> io::Result<()> {
    match output {
        CommandOutput::Text { text, .. } => writeln!(out, "{text}"),
        CommandOutput::Error { message } => writeln!(out, "{message}"),
        CommandOutput::Control { action } => match action {
            ControlAction::Clear => write!(out, "{FORM_FEED}"),
            ControlAction::SetTheme { theme } => {
                writeln!(out, "Theme set to {}.", theme.display_name())
            }
            ControlAction::OpenUrl { url } => writeln!(out, "Opening {url}"),
            ControlAction::ShowQr { url } => writeln!(out, "Scan to visit: {url}"),
            ControlAction::FetchWeather { location } => {
                warn!(?location, "Weather requested without a report");
                writeln!(
                    out,
                    "Weather is unavailable here. Pass --weather <file> with a report."
                )
            }
            ControlAction::StartGame { name } => {
                writeln!(out, "{name} needs the browser version of this terminal.")
            }
            ControlAction::Exit => Ok(()),
        },
    }
}
