//! Per-visitor session state kept by whoever drives the interpreter.

use std::collections::BTreeMap;
use std::time::Instant;

use tracing::debug;

use super::display::format_uptime;
use super::history::HistoryState;
use super::theme::Theme;
use crate::commands::{parse_pipeline, split_args, CommandRegistry, ControlAction};
use crate::content::{CommandCount, Stats};

const TOP_COMMANDS: usize = 5;

/// History, theme, usage counters and start time of one terminal session.
#[derive(Debug, Clone)]
pub struct Session {
    history: HistoryState,
    theme: Theme,
    started: Instant,
    counts: BTreeMap<String, u64>,
    commands_run: u64,
    closed: bool,
}

impl Session {
    /// Starts a session with the given theme.
    pub fn new(theme: Theme) -> Self {
        Self {
            history: HistoryState::new(),
            theme,
            started: Instant::now(),
            counts: BTreeMap::new(),
            commands_run: 0,
            closed: false,
        }
    }

    /// Records an entered line: adds it to history and counts the command
    /// it starts with when that command is registered.
    pub fn record(&mut self, line: &str, registry: &CommandRegistry) {
        self.history = self.history.commit(line);

        let Some(name) = parse_pipeline(line)
            .first()
            .and_then(|segment| split_args(segment).into_iter().next())
            .map(|word| word.to_lowercase())
        else {
            return;
        };
        if registry.contains(&name) {
            self.commands_run += 1;
            *self.counts.entry(name).or_default() += 1;
        }
    }

    /// Applies a control action to the session state.
    pub fn apply(&mut self, action: &ControlAction) {
        match action {
            ControlAction::SetTheme { theme } => {
                debug!(%theme, "Theme changed");
                self.theme = *theme;
            }
            ControlAction::Exit => self.closed = true,
            _ => {}
        }
    }

    /// Entered lines, oldest first.
    pub fn history(&self) -> &[String] {
        self.history.entries()
    }

    /// Active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Milliseconds since the session started.
    pub fn uptime_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// True once `exit` or `close` has run.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Usage statistics for `stats`. A single process is a single session.
    pub fn stats(&self) -> Stats {
        let mut top: Vec<(&String, &u64)> = self.counts.iter().collect();
        top.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        Stats {
            session_commands: Some(self.commands_run),
            uptime: Some(format_uptime(self.uptime_ms())),
            total_commands: Some(self.commands_run),
            sessions: Some(1),
            first_visit: None,
            top_commands: top
                .into_iter()
                .take(TOP_COMMANDS)
                .map(|(name, count)| CommandCount {
                    name: name.clone(),
                    count: *count,
                })
                .collect(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
