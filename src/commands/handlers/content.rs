//! Content command handlers (projects, skills, experience, blog, panels).

use super::CommandContext;
use crate::commands::output::CommandOutput;
use crate::format::{
    build_banner_output, build_blog_list_output, build_blog_post_output, build_contact_output,
    build_experience_output, build_neofetch_output, build_projects_list_output,
    build_skills_output, find_project_by_command,
};
use crate::session::format_uptime;

/// Handle `projects [name]`.
pub fn handle_projects(ctx: &CommandContext<'_>, name: Option<&str>) -> CommandOutput {
    match name {
        None => CommandOutput::text(build_projects_list_output(&ctx.content.projects)),
        Some(name) => handle_open_project(ctx, name),
    }
}

/// Handle a project opened by name, either `projects <name>` or a project
/// command such as `converter`.
pub fn handle_open_project(ctx: &CommandContext<'_>, name: &str) -> CommandOutput {
    match find_project_by_command(name, Some(ctx.content.projects.as_slice())) {
        Some(project) if !project.url.is_empty() => CommandOutput::open_url(&project.url),
        Some(project) => CommandOutput::error(format!("Project '{}' has no link yet.", project.name)),
        None => CommandOutput::error(format!(
            "Project not found: {name}. Type 'projects' to see available projects."
        )),
    }
}

/// Handle `skills`.
pub fn handle_skills(ctx: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::text(build_skills_output(&ctx.content.skills))
}

/// Handle `experience`.
pub fn handle_experience(ctx: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::text(build_experience_output(&ctx.content.experience))
}

/// Handle `blog [slug]`.
pub fn handle_blog(ctx: &CommandContext<'_>, slug: Option<&str>) -> CommandOutput {
    let Some(slug) = slug else {
        return CommandOutput::text(build_blog_list_output(&ctx.content.blog));
    };
    match build_blog_post_output(ctx.content.find_post(slug)) {
        Some(post) => CommandOutput::text(post),
        None => CommandOutput::error(format!(
            "Post not found: {slug}. Type 'blog' to list posts."
        )),
    }
}

/// Handle `contact`.
pub fn handle_contact(ctx: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::text(build_contact_output(&ctx.content.profile))
}

/// Handle `banner`.
pub fn handle_banner(ctx: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::text(build_banner_output(&ctx.content.profile))
}

/// Handle `neofetch`.
pub fn handle_neofetch(ctx: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::text(build_neofetch_output(
        &ctx.content.profile,
        ctx.version,
        ctx.theme.display_name(),
        ctx.registry.len(),
        &format_uptime(ctx.uptime_ms),
    ))
}
