//! `skills` bar charts.

use super::text::{pad_end, rule};
use crate::content::SkillCategory;

/// Sentence shown when no skills are configured.
pub const NO_SKILLS: &str = "No skills data available.";

const BAR_WIDTH: u32 = 20;
const HEADER_WIDTH: usize = 40;
const NAME_WIDTH: usize = 16;

/// Renders each category as a titled rule followed by one bar per skill.
pub fn build_skills_output(categories: &[SkillCategory]) -> String {
    if categories.is_empty() {
        return NO_SKILLS.to_string();
    }

    let mut lines = Vec::new();
    for category in categories {
        let fill = HEADER_WIDTH.saturating_sub(category.name.chars().count());
        lines.push(format!("── {} {}", category.name, rule(fill)));
        for skill in &category.skills {
            lines.push(format!(
                "  {} {} {}%",
                pad_end(&skill.name, NAME_WIDTH),
                skill_bar(skill.level),
                skill.level
            ));
        }
        lines.push(String::new());
    }
    lines.join("\n").trim_end().to_string()
}

/// A 20-cell bar, `round(level / 100 * 20)` cells filled. Levels above 100
/// draw a full bar.
fn skill_bar(level: u8) -> String {
    let level = u32::from(level).min(100);
    let filled = (level * BAR_WIDTH + 50) / 100;
    let empty = BAR_WIDTH - filled;
    format!(
        "{}{}",
        "█".repeat(filled as usize),
        "░".repeat(empty as usize)
    )
}
