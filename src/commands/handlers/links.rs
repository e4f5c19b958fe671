//! Link command handlers (email, github, repo, resume, curl, qr).

use super::CommandContext;
use crate::commands::output::{CommandOutput, ControlAction};
use crate::content::with_scheme;

/// Handle `email`.
pub fn handle_email(ctx: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::open_url(format!("mailto:{}", ctx.content.profile.email))
}

/// Handle `github`.
pub fn handle_github(ctx: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::open_url(ctx.content.profile.github_url())
}

/// Handle `repo`.
pub fn handle_repo(ctx: &CommandContext<'_>) -> CommandOutput {
    match ctx.content.profile.repo_url.as_deref() {
        Some(url) if !url.is_empty() => CommandOutput::open_url(with_scheme(url)),
        _ => CommandOutput::error("No repository link is configured."),
    }
}

/// Handle `resume`.
pub fn handle_resume(ctx: &CommandContext<'_>) -> CommandOutput {
    match ctx.content.profile.resume_url.as_deref() {
        Some(url) if !url.is_empty() => CommandOutput::open_url(with_scheme(url)),
        _ => CommandOutput::error("No resume link is configured."),
    }
}

/// Handle `curl <url>`.
pub fn handle_curl(url: Option<&str>) -> CommandOutput {
    match url {
        Some(url) => CommandOutput::open_url(with_scheme(url)),
        None => CommandOutput::error("curl: no URL specified\nUsage: curl <url>"),
    }
}

/// Handle `qr`.
pub fn handle_qr(ctx: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::control(ControlAction::ShowQr {
        url: ctx.content.profile.website_url(),
    })
}
