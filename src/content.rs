//! Site content consumed by the command formatters.
//!
//! Everything here is plain data handed to the core by a content loader. The
//! core only reads it to build display strings.

use serde::{Deserialize, Serialize};

/// A linkable project shown by `projects`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Display name, also usable as a command (`converter`).
    #[serde(default)]
    pub name: String,
    /// Project URL.
    #[serde(default)]
    pub url: String,
    /// Optional one-line description.
    #[serde(default)]
    pub description: Option<String>,
}

/// A named group of skills.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// A single skill with a proficiency level from 0 to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

/// One position in the experience timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub org: String,
    pub period: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A blog post, addressable by slug.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
}

/// Usage counter for a single command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandCount {
    pub name: String,
    pub count: u64,
}

/// Aggregate visitor statistics. Absent fields fall back to placeholders
/// when rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub session_commands: Option<u64>,
    #[serde(default)]
    pub uptime: Option<String>,
    #[serde(default)]
    pub total_commands: Option<u64>,
    #[serde(default)]
    pub sessions: Option<u64>,
    #[serde(default)]
    pub first_visit: Option<String>,
    #[serde(default)]
    pub top_commands: Vec<CommandCount>,
}

/// Manual page data for one command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManPageEntry {
    pub desc: String,
    pub usage: String,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Current conditions for `weather`, already fetched by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: String,
    pub temperature_c: f64,
    #[serde(default)]
    pub feels_like_c: Option<f64>,
    pub condition: String,
    pub humidity: u8,
    pub wind_kph: f64,
}

/// Owner details used by `contact`, `neofetch`, `banner` and the link
/// commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Prompt user name.
    pub user: String,
    /// Prompt host name.
    pub host: String,
    /// Site name shown in man page headers and neofetch.
    pub site: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub website: String,
    pub engine: String,
    pub shell: String,
    pub font: String,
    pub resume_url: Option<String>,
    pub repo_url: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            user: "guest".to_string(),
            host: "jjalangtry.com".to_string(),
            site: "jakoblangtry.com".to_string(),
            email: "jjalangtry@gmail.com".to_string(),
            github: "github.com/JJALANGTRY".to_string(),
            linkedin: "linkedin.com/in/jjalangtry".to_string(),
            website: "jakoblangtry.com".to_string(),
            engine: "Astro".to_string(),
            shell: "terminal.js".to_string(),
            font: "JetBrains Mono".to_string(),
            resume_url: None,
            repo_url: None,
        }
    }
}

impl Profile {
    /// Returns `user@host` as shown in the prompt.
    pub fn prompt_identity(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }

    /// Returns the GitHub profile as a browsable URL.
    pub fn github_url(&self) -> String {
        with_scheme(&self.github)
    }

    /// Returns the website as a browsable URL.
    pub fn website_url(&self) -> String {
        with_scheme(&self.website)
    }
}

/// Prefixes `https://` unless the address already has an http(s) scheme.
pub fn with_scheme(address: &str) -> String {
    if address.starts_with("http://") || address.starts_with("https://") {
        address.to_string()
    } else {
        format!("https://{address}")
    }
}

/// All content the formatters draw from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub experience: Vec<ExperienceEntry>,
    pub blog: Vec<BlogPost>,
}

impl SiteContent {
    /// Finds a blog post by slug (case-insensitive).
    pub fn find_post(&self, slug: &str) -> Option<&BlogPost> {
        let slug = slug.trim().to_lowercase();
        self.blog.iter().find(|p| p.slug.to_lowercase() == slug)
    }
}
