//! `blog` post index and single-post view.

use super::text::{box_bottom, box_row, box_top, pad_end};
use crate::content::BlogPost;

/// Sentence shown when there are no posts.
pub const NO_POSTS: &str = "No blog posts yet.";

const INDENT: usize = 12;
const POST_BOX_WIDTH: usize = 60;

/// Lists every post with its date, summary and the command to open it.
pub fn build_blog_list_output(posts: &[BlogPost]) -> String {
    if posts.is_empty() {
        return NO_POSTS.to_string();
    }

    let indent = pad_end("", INDENT);
    let mut lines = vec!["Available posts:\n".to_string()];
    for post in posts {
        lines.push(format!("  {}  {}", post.date, post.title));
        lines.push(format!("  {indent}{}", post.summary));
        lines.push(format!("  {indent}→ blog {}\n", post.slug));
    }
    lines.push("Read a post with: blog [slug]".to_string());
    lines.join("\n")
}

/// Renders a post: a boxed title and date, a blank line, then the body as-is.
pub fn build_blog_post_output(post: Option<&BlogPost>) -> Option<String> {
    let post = post?;
    let header = [
        box_top(POST_BOX_WIDTH),
        box_row(&format!(" {}", post.title), POST_BOX_WIDTH),
        box_row(&format!(" {}", post.date), POST_BOX_WIDTH),
        box_bottom(POST_BOX_WIDTH),
    ]
    .join("\n");
    Some(format!("{header}\n\n{}", post.content))
}
