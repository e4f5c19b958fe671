//! `stats` report.

use super::text::pad_end;
use crate::content::Stats;

/// Renders session, all-time and (when present) top-command sections.
///
/// Missing or zero counters show placeholders: `0`, `0s`, one session and a
/// first visit of `today`.
pub fn build_stats_output(stats: &Stats) -> String {
    let session_commands = stats.session_commands.unwrap_or(0);
    let uptime = non_empty(stats.uptime.as_deref()).unwrap_or("0s");
    let total_commands = stats.total_commands.unwrap_or(0);
    let sessions = stats.sessions.filter(|&n| n > 0).unwrap_or(1);
    let first_visit = non_empty(stats.first_visit.as_deref()).unwrap_or("today");

    let mut lines = vec![
        "── Session Stats ─────────────────────────".to_string(),
        format!("  Commands this session:  {session_commands}"),
        format!("  Session uptime:        {uptime}"),
        String::new(),
        "── All-Time Stats ────────────────────────".to_string(),
        format!("  Total commands:        {total_commands}"),
        format!("  Sessions:              {sessions}"),
        format!("  First visit:           {first_visit}"),
    ];

    if !stats.top_commands.is_empty() {
        lines.push(String::new());
        lines.push("── Top Commands ──────────────────────────".to_string());
        for command in &stats.top_commands {
            lines.push(format!(
                "  {} {} times",
                pad_end(&command.name, 16),
                command.count
            ));
        }
    }

    lines.join("\n")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
