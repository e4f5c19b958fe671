//! Tests that run the folioterm binary.

use super::common::{run, run_with_stdin, SAMPLE_CONFIG};
use std::fs;
use tempfile::TempDir;

/// A temp dir plus the path of a content file inside it that does not exist.
fn missing_config() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");
    (dir, path)
}

fn sample_config() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, SAMPLE_CONFIG).unwrap();
    (dir, path)
}

#[test]
fn test_single_command() {
    let (_dir, config) = missing_config();
    let (code, stdout, _) = run(&config, &["-c", "whoami"]);

    assert_eq!(code, 0);
    assert_eq!(stdout, "guest\n");
}

#[test]
fn test_pipeline_through_grep() {
    let (_dir, config) = missing_config();
    let (code, stdout, _) = run(&config, &["-c", "help | grep theme"]);

    assert_eq!(code, 0);
    assert_eq!(stdout, "  theme        - Toggle or set the colour theme.\n");
}

#[test]
fn test_exit_stops_remaining_commands() {
    let (_dir, config) = missing_config();
    let (code, stdout, _) = run(
        &config,
        &["-c", "echo one", "-c", "exit", "-c", "echo two"],
    );

    assert_eq!(code, 0);
    assert_eq!(stdout, "one\n");
}

#[test]
fn test_theme_state_carries_between_lines() {
    let (_dir, config) = missing_config();
    let (_, stdout, _) = run(&config, &["-c", "theme", "-c", "theme", "-c", "theme light"]);

    assert_eq!(
        stdout,
        "Theme set to Light.\nTheme set to Dark.\nTheme set to Light.\n"
    );
}

#[test]
fn test_starting_theme_flag() {
    let (_dir, config) = missing_config();
    let (_, stdout, _) = run(&config, &["--theme", "light", "-c", "theme"]);
    assert_eq!(stdout, "Theme set to Dark.\n");
}

#[test]
fn test_stats_counts_this_session() {
    let (_dir, config) = missing_config();
    let (_, stdout, _) = run(&config, &["-c", "help", "-c", "ls", "-c", "stats"]);

    assert!(stdout.contains("  Commands this session:  3"));
    assert!(stdout.contains("── Top Commands"));
}

#[test]
fn test_clear_prints_form_feed() {
    let (_dir, config) = missing_config();
    let (_, stdout, _) = run(&config, &["-c", "clear"]);
    assert_eq!(stdout, "\x0c");
}

#[test]
fn test_json_output() {
    let (_dir, config) = missing_config();
    let (code, stdout, _) = run(
        &config,
        &["--output", "json", "-c", "echo hi", "-c", "github"],
    );

    assert_eq!(code, 0);
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(
        lines[0],
        serde_json::json!({"kind": "text", "text": "hi", "style": "output"})
    );
    assert_eq!(lines[1]["action"]["type"], "open_url");
    assert_eq!(lines[1]["action"]["url"], "https://github.com/JJALANGTRY");
}

#[test]
fn test_unknown_command_is_not_fatal() {
    let (_dir, config) = missing_config();
    let (code, stdout, _) = run(&config, &["-c", "sn"]);

    assert_eq!(code, 0);
    assert!(stdout.starts_with("Command not found: sn."));
    assert!(stdout.contains("Did you mean: snake?"));
}

#[test]
fn test_content_file_is_used() {
    let (_dir, config) = sample_config();

    let (_, stdout, _) = run(&config, &["-c", "whoami"]);
    assert_eq!(stdout, "ada\n");

    let (_, stdout, _) = run(&config, &["-c", "projects"]);
    assert!(stdout.contains("1. engine - https://engine.example.com (Analytical engine emulator)"));

    let (_, stdout, _) = run(&config, &["-c", "projects engine"]);
    assert_eq!(stdout, "Opening https://engine.example.com\n");

    let (_, stdout, _) = run(&config, &["-c", "repo"]);
    assert_eq!(stdout, "Opening https://github.com/ada/site\n");

    let (_, stdout, _) = run(&config, &["-c", "blog notes"]);
    assert!(stdout.contains("The engine weaves algebraic patterns."));
}

#[test]
fn test_invalid_content_file_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[profile\nuser = ").unwrap();

    let (code, stdout, stderr) = run(&config, &["-c", "whoami"]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Configuration Error"));
}

#[test]
fn test_invalid_output_format_fails() {
    let (_dir, config) = missing_config();
    let (code, _, stderr) = run(&config, &["--output", "yaml", "-c", "help"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Invalid output format"));
}

#[test]
fn test_weather_without_report() {
    let (_dir, config) = missing_config();
    let (code, stdout, _) = run(&config, &["-c", "weather"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Pass --weather <file>"));
}

#[test]
fn test_weather_with_report() {
    let (dir, config) = missing_config();
    let report = dir.path().join("weather.json");
    fs::write(
        &report,
        r#"{"location":"Oslo","temperature_c":-3.0,"feels_like_c":-8.0,"condition":"Light snow","humidity":90,"wind_kph":14.0}"#,
    )
    .unwrap();
    let report = report.to_str().unwrap();

    let (_, stdout, _) = run(&config, &["--weather", report, "--mobile", "-c", "weather"]);
    assert_eq!(
        stdout,
        "Weather in Oslo\n  -3°C / 27°F  Light snow\n  Feels like -8°C / 18°F\n  Humidity 90%  Wind 14 km/h\n"
    );

    let (_, stdout, _) = run(&config, &["--weather", report, "-c", "weather"]);
    assert!(stdout.contains("Temperature: -3°C / 27°F"));
    assert!(stdout.contains("  *  *  *"));
}

#[test]
fn test_reads_lines_from_stdin() {
    let (_dir, config) = missing_config();
    let (code, stdout, _) = run_with_stdin(
        &config,
        &[],
        "echo hi\n\nhistory\nexit\necho after\n",
    );

    assert_eq!(code, 0);
    assert_eq!(stdout, "hi\n     1  echo hi\n     2  history\n");
}

#[test]
fn test_stdin_handles_crlf_and_eof() {
    let (_dir, config) = missing_config();
    let (code, stdout, _) = run_with_stdin(&config, &[], "echo a\r\necho b");

    assert_eq!(code, 0);
    assert_eq!(stdout, "a\nb\n");
}
