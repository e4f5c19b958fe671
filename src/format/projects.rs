//! `projects` listing and project lookup by command name.

use crate::content::Project;

/// Sentence shown when no projects are configured.
pub const NO_PROJECTS: &str = "No projects are configured yet.";

/// Builds the numbered project list.
pub fn build_projects_list_output(projects: &[Project]) -> String {
    if projects.is_empty() {
        return NO_PROJECTS.to_string();
    }

    let lines = projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let description = match project.description.as_deref() {
                Some(d) if !d.is_empty() => format!(" ({d})"),
                _ => String::new(),
            };
            format!("{}. {} - {}{}", i + 1, project.name, project.url, description)
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("Available projects:\n{lines}")
}

/// Finds the project whose name equals `command`, ignoring case and
/// surrounding whitespace.
///
/// An empty command, a missing list, or entries without a name never match.
pub fn find_project_by_command<'a>(
    command: &str,
    projects: Option<&'a [Project]>,
) -> Option<&'a Project> {
    let normalized = command.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }
    projects?
        .iter()
        .find(|p| !p.name.is_empty() && p.name.to_lowercase() == normalized)
}
