//! Render fragment files with their platform frontmatter.

use crate::markdown::sections::trim_blank_lines;

/// Trimmed lines joined with a trailing newline
pub fn plain(lines: &[&str]) -> String {
    let lines = trim_blank_lines(lines);
    if lines.is_empty() {
        return String::new();
    }
    format!("{}\n", lines.join("\n"))
}

fn with_frontmatter(frontmatter: &str, lines: &[&str]) -> String {
    format!("---\n{frontmatter}\n---\n{}", plain(lines))
}

/// Quote a value as a single-quoted YAML scalar
fn single_quoted(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Always-applied Cursor rule for the general block
pub fn general_rule(lines: &[&str]) -> String {
    with_frontmatter("description:\nalwaysApply: true", lines)
}

/// Cursor rule attached to a glob
pub fn cursor_rule(glob: &str, lines: &[&str]) -> String {
    with_frontmatter(
        &format!("description:\nglobs: {glob}\nalwaysApply: false"),
        lines,
    )
}

/// Copilot instruction file attached to a glob
pub fn copilot_instruction(glob: &str, lines: &[&str]) -> String {
    with_frontmatter(&format!("applyTo: \"{glob}\""), lines)
}

/// Manually applied Cursor rule; frontmatter only when there is a description
pub fn cursor_prompt(description: &str, lines: &[&str]) -> String {
    if description.is_empty() {
        return plain(lines);
    }
    with_frontmatter(&format!("description: {description}"), lines)
}

/// Copilot agent prompt
pub fn github_prompt(description: &str, lines: &[&str]) -> String {
    with_frontmatter(
        &format!("mode: 'agent'\ndescription: {}", single_quoted(description)),
        lines,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::frontmatter::{read_meta, strip_frontmatter};

    #[test]
    fn test_plain_trims() {
        assert_eq!(plain(&["", "a", "", "b", ""]), "a\n\nb\n");
        assert_eq!(plain(&["", " "]), "");
    }

    #[test]
    fn test_cursor_prompt_without_description() {
        assert_eq!(cursor_prompt("", &["## Review", "Go."]), "## Review\nGo.\n");
    }

    #[test]
    fn test_github_prompt_escapes_quotes() {
        let rendered = github_prompt("Don't guess", &["## Review"]);
        let meta = read_meta(&rendered).unwrap();
        assert_eq!(meta.description.as_deref(), Some("Don't guess"));
        assert!(rendered.starts_with("---\nmode: 'agent'\n"));
        assert_eq!(strip_frontmatter(&rendered), "## Review");
    }

    #[test]
    fn test_copilot_instruction_frontmatter_parses() {
        let rendered = copilot_instruction("**/*.rs", &["## Code Style", "Use rustfmt."]);
        let meta = read_meta(&rendered).unwrap();
        assert_eq!(meta.apply_to.as_deref(), Some("**/*.rs"));
    }
}
