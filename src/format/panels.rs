//! Fixed-layout panels: `contact`, `neofetch` and the welcome `banner`.

use super::text::{box_bottom, box_divider, box_row, box_top, center, pad_end, rule, side_by_side};
use crate::content::Profile;

const PANEL_WIDTH: usize = 40;
const CONTACT_LABEL_WIDTH: usize = 10;
const NEOFETCH_ART_WIDTH: usize = 17;
const NEOFETCH_RULE_WIDTH: usize = 21;

const NEOFETCH_ART: [&str; 5] = [
    "  ┌─────────┐",
    "  │ >_      │",
    "  │         │",
    "  │         │",
    "  └─────────┘",
];

/// Boxed contact card built from the profile.
pub fn build_contact_output(profile: &Profile) -> String {
    let rows = [
        ("Email", profile.email.as_str()),
        ("GitHub", profile.github.as_str()),
        ("LinkedIn", profile.linkedin.as_str()),
        ("Website", profile.website.as_str()),
    ];

    let mut lines = vec![
        box_top(PANEL_WIDTH),
        box_row(&center("CONTACT INFORMATION", PANEL_WIDTH), PANEL_WIDTH),
        box_divider(PANEL_WIDTH),
    ];
    lines.extend(rows.iter().map(|(label, value)| {
        box_row(
            &format!("  {}{value}", pad_end(label, CONTACT_LABEL_WIDTH)),
            PANEL_WIDTH,
        )
    }));
    lines.push(box_bottom(PANEL_WIDTH));
    lines.join("\n")
}

/// System-info panel: terminal art on the left, site details on the right.
pub fn build_neofetch_output(
    profile: &Profile,
    version: &str,
    theme: &str,
    command_count: usize,
    uptime: &str,
) -> String {
    let info = [
        profile.prompt_identity(),
        rule(NEOFETCH_RULE_WIDTH),
        format!("Site:     {} v{version}", profile.site),
        format!("Engine:   {}", profile.engine),
        format!("Shell:    {}", profile.shell),
        format!("Theme:    {theme}"),
        format!("Uptime:   {uptime}"),
        format!("Commands: {command_count} available"),
        format!("Font:     {}", profile.font),
    ];
    side_by_side(&NEOFETCH_ART, &info, NEOFETCH_ART_WIDTH)
}

/// Welcome banner shown on start-up and by `banner`.
pub fn build_banner_output(profile: &Profile) -> String {
    [
        box_top(PANEL_WIDTH),
        box_row("", PANEL_WIDTH),
        box_row(&center(&profile.site, PANEL_WIDTH), PANEL_WIDTH),
        box_row(
            &center("Type 'help' to see all commands.", PANEL_WIDTH),
            PANEL_WIDTH,
        ),
        box_row("", PANEL_WIDTH),
        box_bottom(PANEL_WIDTH),
    ]
    .join("\n")
}
