//! `experience` timeline.

use crate::content::ExperienceEntry;

/// Sentence shown when no experience is configured.
pub const NO_EXPERIENCE: &str = "No experience data available.";

/// Renders entries as a tree: `├─` branches with a `│` continuation column,
/// the last entry closing with `└─`.
pub fn build_experience_output(entries: &[ExperienceEntry]) -> String {
    if entries.is_empty() {
        return NO_EXPERIENCE.to_string();
    }

    let last = entries.len() - 1;
    let mut lines = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        let (prefix, cont) = if i == last { ('└', ' ') } else { ('├', '│') };

        lines.push(format!("{prefix}─ {}", entry.title));
        lines.push(format!("{cont}  {}  ·  {}", entry.org, entry.period));
        if let Some(description) = entry.description.as_deref().filter(|d| !d.is_empty()) {
            lines.push(format!("{cont}  {description}"));
        }
        if !entry.tags.is_empty() {
            lines.push(format!("{cont}  [{}]", entry.tags.join("] [")));
        }
        if i < last {
            lines.push("│".to_string());
        }
    }
    lines.join("\n")
}
