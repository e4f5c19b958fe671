//! Public API behaviour of the parser, registry and session helpers.

use folioterm::commands::{autocomplete_command, parse_pipeline, CommandRegistry};
use folioterm::format::{build_projects_list_output, find_project_by_command, format_man_page, grep_filter};
use folioterm::session::{
    celsius_to_fahrenheit, format_uptime, handle_history_navigation, normalize_theme_command,
    HistoryState, Key, Theme, ThemeCommand,
};

#[test]
fn test_pipeline_edge_cases() {
    assert_eq!(parse_pipeline(None::<&str>), vec![""]);
    assert_eq!(parse_pipeline(""), vec![""]);
    assert!(parse_pipeline("   ").is_empty());
    assert_eq!(parse_pipeline("help |"), vec!["help"]);
    assert_eq!(parse_pipeline("a || b"), vec!["a", "b"]);
    assert_eq!(
        parse_pipeline("echo \"x | y\" | grep x"),
        vec!["echo \"x | y\"", "grep x"]
    );
}

#[test]
fn test_autocomplete_against_registry_names() {
    let registry = CommandRegistry::builtin();
    let names = registry.names();

    assert_eq!(autocomplete_command("con", names), vec!["contact", "converter"]);
    assert_eq!(autocomplete_command("h", names), vec!["help", "history"]);
    assert_eq!(autocomplete_command("HIS", names), vec!["history"]);
    assert!(autocomplete_command("", names).is_empty());
    assert!(autocomplete_command("zzz", names).is_empty());
}

#[test]
fn test_autocomplete_lowercases_input_only() {
    let mixed = ["Help", "help"];
    assert_eq!(autocomplete_command("HE", &mixed), vec!["help"]);
}

#[test]
fn test_history_walk_up_and_back_down() {
    let state = HistoryState::new()
        .commit("ls")
        .commit("help")
        .edit("wea");

    let (state, shown) = state.navigate(Key::Up).unwrap();
    assert_eq!(shown, "help");
    let (state, shown) = state.navigate(Key::Up).unwrap();
    assert_eq!(shown, "ls");
    assert!(state.navigate(Key::Up).is_none());

    let (state, shown) = state.navigate(Key::Down).unwrap();
    assert_eq!(shown, "help");
    let (state, shown) = state.navigate(Key::Down).unwrap();
    assert_eq!(shown, "wea");
    assert!(state.at_fresh_line());
    assert!(state.navigate(Key::Down).is_none());
}

#[test]
fn test_history_navigation_from_dom_keys() {
    let history = ["a", "b"];
    let step = handle_history_navigation(Key::from("ArrowUp"), &history, 2, "").unwrap();
    assert_eq!((step.index, step.value.as_str()), (1, "b"));
    assert!(handle_history_navigation(Key::from("Enter"), &history, 2, "").is_none());
}

#[test]
fn test_theme_commands() {
    assert_eq!(normalize_theme_command("theme"), Some(ThemeCommand::Toggle));
    assert_eq!(
        normalize_theme_command("Theme Dark"),
        Some(ThemeCommand::Set(Theme::Dark))
    );
    assert_eq!(normalize_theme_command("theme sepia"), None);
    assert_eq!(ThemeCommand::Toggle.apply(Theme::Light), Theme::Dark);
}

#[test]
fn test_display_helpers() {
    assert_eq!(celsius_to_fahrenheit(0.0), 32);
    assert_eq!(celsius_to_fahrenheit(20.0), 68);
    assert_eq!(format_uptime(0), "0 secs");
    assert_eq!(format_uptime(60_000), "1 min, 0 secs");
    assert_eq!(format_uptime(90_061_000), "1 day, 1 hour, 1 min, 1 sec");
}

#[test]
fn test_project_helpers() {
    assert_eq!(build_projects_list_output(&[]), "No projects are configured yet.");
    assert!(find_project_by_command("converter", None).is_none());
}

#[test]
fn test_grep_and_man_sentinels() {
    assert!(grep_filter("", "x").is_empty());
    assert_eq!(grep_filter("Alpha\nbeta", "ALPHA"), vec!["Alpha"]);
    assert_eq!(format_man_page("echo", None, "site"), None);

    let registry = CommandRegistry::builtin();
    let entry = registry.man_entry("theme").unwrap();
    let page = format_man_page("theme", Some(&entry), "site").unwrap();
    assert!(page.contains("EXAMPLES"));
    assert!(page.contains("NOTES"));

    let entry = registry.man_entry("ls").unwrap();
    let page = format_man_page("ls", Some(&entry), "site").unwrap();
    assert!(!page.contains("EXAMPLES"));
    assert!(!page.contains("NOTES"));
    assert!(page.ends_with("SEE ALSO\n       help(1), man(1)"));
}
