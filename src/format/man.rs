//! `man` pages in the classic section layout.

use crate::content::ManPageEntry;

const TITLE_WIDTH: usize = 60;
const BODY_INDENT: &str = "       ";

/// Renders a manual page for `command`, or `None` without an entry.
///
/// The title bar reads `NAME(1)  <site>  NAME(1)`. EXAMPLES and NOTES only
/// appear when the entry has them.
pub fn format_man_page(command: &str, entry: Option<&ManPageEntry>, site: &str) -> Option<String> {
    let entry = entry?;
    let header = format!("{}(1)", command.to_uppercase());
    let gap_width = TITLE_WIDTH
        .saturating_sub(header.chars().count() * 2 + site.chars().count())
        .max(1);
    let gap = " ".repeat(gap_width);

    let mut page = format!("{header}{gap}{site}{gap}{header}\n\n");
    page.push_str(&section("NAME", &format!("{command} - {}", entry.desc)));
    page.push_str(&section("SYNOPSIS", &entry.usage));
    page.push_str(&section("DESCRIPTION", &entry.desc));

    if !entry.examples.is_empty() {
        page.push_str("EXAMPLES\n");
        for example in &entry.examples {
            page.push_str(&format!("{BODY_INDENT}{example}\n"));
        }
        page.push('\n');
    }

    if let Some(notes) = entry.notes.as_deref().filter(|n| !n.is_empty()) {
        page.push_str(&section("NOTES", notes));
    }

    page.push_str(&format!("SEE ALSO\n{BODY_INDENT}help(1), man(1)"));
    Some(page)
}

fn section(title: &str, body: &str) -> String {
    format!("{title}\n{BODY_INDENT}{body}\n\n")
}
