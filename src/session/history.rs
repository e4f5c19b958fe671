//! Command history and arrow-key navigation.
//!
//! The cursor ranges over `0..=history.len()`. `history.len()` is the fresh,
//! uncommitted line; moving down from the newest entry restores whatever the
//! user had typed there. Transitions are pure: callers keep the state and
//! apply the returned value.

use serde::Serialize;

const MAX_HISTORY_SIZE: usize = 100;

/// A navigation key as reported by the input widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Other,
}

impl From<&str> for Key {
    /// Maps DOM `KeyboardEvent.key` names.
    fn from(name: &str) -> Self {
        match name {
            "ArrowUp" => Self::Up,
            "ArrowDown" => Self::Down,
            _ => Self::Other,
        }
    }
}

/// Result of a navigation step: the new cursor and the text to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryNavigation {
    pub index: usize,
    pub value: String,
}

/// Computes the next cursor position for an arrow key, or `None` when the
/// key does not move the cursor.
pub fn handle_history_navigation<S: AsRef<str>>(
    key: Key,
    history: &[S],
    current_index: usize,
    current_buffer: &str,
) -> Option<HistoryNavigation> {
    let len = history.len();
    match key {
        Key::Up => {
            if current_index == 0 || current_index > len {
                return None;
            }
            let index = current_index - 1;
            Some(HistoryNavigation {
                index,
                value: history[index].as_ref().to_string(),
            })
        }
        Key::Down => {
            if current_index >= len {
                return None;
            }
            if current_index + 1 < len {
                let index = current_index + 1;
                Some(HistoryNavigation {
                    index,
                    value: history[index].as_ref().to_string(),
                })
            } else {
                Some(HistoryNavigation {
                    index: len,
                    value: current_buffer.to_string(),
                })
            }
        }
        Key::Other => None,
    }
}

/// Session history plus the navigation cursor, as an immutable value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryState {
    /// Committed entries, oldest first.
    pub history: Vec<String>,
    /// Cursor position; `history.len()` is the fresh line.
    pub current_index: usize,
    /// Text typed on the fresh line before navigating away.
    pub current_buffer: String,
}

impl HistoryState {
    /// Creates an empty history positioned on the fresh line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state after committing `line`.
    ///
    /// Empty lines and consecutive duplicates are not recorded. The oldest
    /// entry is dropped past the size cap. The cursor returns to the fresh
    /// line either way.
    pub fn commit(&self, line: &str) -> Self {
        let entry = line.trim();
        let mut history = self.history.clone();

        if !entry.is_empty() && history.last().map(String::as_str) != Some(entry) {
            history.push(entry.to_string());
            if history.len() > MAX_HISTORY_SIZE {
                history.remove(0);
            }
        }

        Self {
            current_index: history.len(),
            history,
            current_buffer: String::new(),
        }
    }

    /// Returns the state with a new in-progress buffer on the fresh line.
    pub fn edit(&self, buffer: &str) -> Self {
        Self {
            current_buffer: buffer.to_string(),
            ..self.clone()
        }
    }

    /// Returns the state after pressing `key`, or `None` if nothing moves.
    ///
    /// Leaving the fresh line keeps its buffer so a later step down can
    /// restore it.
    pub fn navigate(&self, key: Key) -> Option<(Self, String)> {
        let step = handle_history_navigation(
            key,
            &self.history,
            self.current_index,
            &self.current_buffer,
        )?;
        let next = Self {
            history: self.history.clone(),
            current_index: step.index,
            current_buffer: self.current_buffer.clone(),
        };
        Some((next, step.value))
    }

    /// Returns true when the cursor is on the fresh line.
    pub fn at_fresh_line(&self) -> bool {
        self.current_index >= self.history.len()
    }

    /// Returns the committed entries (oldest first).
    pub fn entries(&self) -> &[String] {
        &self.history
    }
}
