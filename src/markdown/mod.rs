//! Markdown text transforms applied to rule fragments.
//!
//! Only the two leading constructs a fragment can carry are understood:
//! a `---` delimited frontmatter block and a `## ` section header. Everything
//! else is passed through untouched.

pub mod frontmatter;
pub mod header;
pub mod sections;

pub use frontmatter::strip_frontmatter;
pub use header::strip_header;

/// Strip frontmatter and the embedded section header, then trim.
///
/// This is the full per-fragment body transform used by the bundler.
pub fn fragment_body(content: &str) -> String {
    let content = content.trim();
    let content = strip_frontmatter(content);
    let content = strip_header(&content);
    content.trim().to_string()
}
