//! Pure output builders.
//!
//! Each formatter turns content into terminal text and never fails: missing
//! data yields a fixed sentence or `None`.

pub mod blog;
pub mod experience;
pub mod grep;
pub mod history;
pub mod man;
pub mod panels;
pub mod projects;
pub mod skills;
pub mod stats;
pub mod text;
pub mod weather;

pub use blog::{build_blog_list_output, build_blog_post_output};
pub use experience::build_experience_output;
pub use grep::{grep_filter, GrepSource};
pub use history::format_history_output;
pub use man::format_man_page;
pub use panels::{build_banner_output, build_contact_output, build_neofetch_output};
pub use projects::{build_projects_list_output, find_project_by_command};
pub use skills::build_skills_output;
pub use stats::build_stats_output;
pub use weather::build_weather_output;
