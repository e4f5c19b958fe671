//! `history` listing.

use super::text::pad_start;

/// Sentence shown when nothing has been run yet.
pub const NO_HISTORY: &str = "No commands in history.";

/// Numbers each entry with its 1-based index right-aligned to four columns.
pub fn format_history_output<S: AsRef<str>>(history: &[S]) -> String {
    if history.is_empty() {
        return NO_HISTORY.to_string();
    }
    history
        .iter()
        .enumerate()
        .map(|(i, cmd)| format!("  {}  {}", pad_start(&(i + 1).to_string(), 4), cmd.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}
