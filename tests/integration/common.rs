//! Common test utilities.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Returns a command for the folioterm binary built by `cargo test`.
///
/// Points the content file at `config` so a user's own config never leaks
/// into the results.
pub fn folioterm(config: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_folioterm"));
    cmd.env("FOLIOTERM_CONFIG", config).env_remove("RUST_LOG");
    cmd
}

/// Runs folioterm with the given arguments.
pub fn run(config: &Path, args: &[&str]) -> (i32, String, String) {
    let output = folioterm(config)
        .args(args)
        .output()
        .expect("Failed to execute folioterm");

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

/// Runs folioterm reading lines from `input` on stdin.
pub fn run_with_stdin(config: &Path, args: &[&str], input: &str) -> (i32, String, String) {
    let mut child = folioterm(config)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn folioterm");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for folioterm");
    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

/// A content file with a custom profile, one project and one post.
pub const SAMPLE_CONFIG: &str = r#"
[profile]
user = "ada"
host = "ada.dev"
site = "ada.dev"
email = "ada@example.com"
repo_url = "github.com/ada/site"

[[projects]]
name = "engine"
url = "https://engine.example.com"
description = "Analytical engine emulator"

[[skills]]
name = "Languages"

[[skills.skills]]
name = "Rust"
level = 90

[[experience]]
title = "Engineer"
org = "Analytical Co"
period = "1842 - 1843"
tags = ["math", "notes"]

[[blog]]
slug = "notes"
title = "Notes on the Engine"
date = "1843-09-01"
summary = "Translator's notes"
content = "The engine weaves algebraic patterns."
"#;
