//! Content file loading feeding the command core.

use super::common::SAMPLE_CONFIG;
use chrono::{FixedOffset, TimeZone};
use folioterm::commands::{CommandContext, CommandOutput, CommandRegistry, Interpreter};
use folioterm::config::Config;
use folioterm::content::Stats;
use folioterm::session::Theme;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn load_sample() -> Config {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, SAMPLE_CONFIG).unwrap();
    Config::load_from_file(&path).unwrap()
}

fn run(config: &Config, line: &str) -> Vec<CommandOutput> {
    let registry = CommandRegistry::builtin();
    let stats = Stats::default();
    let ctx = CommandContext {
        registry: &registry,
        content: &config.content,
        history: &[],
        theme: Theme::Dark,
        uptime_ms: 0,
        now: FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
            .unwrap(),
        is_mobile: false,
        window_width: 1024,
        weather: None,
        stats: &stats,
        version: "0.0.0",
    };
    Interpreter::execute(line, &ctx)
}

fn text(config: &Config, line: &str) -> String {
    let outputs = run(config, line);
    assert_eq!(outputs.len(), 1);
    outputs[0].as_text().expect("text output").to_string()
}

#[test]
fn test_sample_config_loads_every_section() {
    let config = load_sample();
    let content = &config.content;

    assert_eq!(content.profile.user, "ada");
    // Unset profile fields keep their defaults.
    assert_eq!(content.profile.font, "JetBrains Mono");
    assert_eq!(content.projects.len(), 1);
    assert_eq!(content.skills[0].skills[0].level, 90);
    assert_eq!(content.experience[0].tags, vec!["math", "notes"]);
    assert_eq!(content.blog[0].slug, "notes");
}

#[test]
fn test_experience_from_config() {
    let config = load_sample();
    assert_eq!(
        text(&config, "experience"),
        "└─ Engineer\n   Analytical Co  ·  1842 - 1843\n   [math] [notes]"
    );
}

#[test]
fn test_skills_from_config() {
    let config = load_sample();
    let output = text(&config, "skills");
    assert!(output.starts_with("── Languages ─"));
    assert!(output.contains("Rust"));
    assert!(output.ends_with("90%"));
}

#[test]
fn test_man_page_uses_configured_site() {
    let config = load_sample();
    let output = text(&config, "man whoami");
    assert!(output.lines().next().unwrap().contains("ada.dev"));
}

#[test]
fn test_neofetch_uses_profile_identity() {
    let config = load_sample();
    let output = text(&config, "neofetch | grep @");
    assert!(output.ends_with("ada@ada.dev"));
}

#[test]
fn test_date_respects_clock_offset() {
    let config = load_sample();
    assert_eq!(text(&config, "date"), "Wed Jan 1 2025 00:00:00 +01:00");
}
