//! Leading `---` frontmatter blocks on rule fragments.

use serde::Deserialize;

const DELIMITER: &str = "---";

/// Frontmatter keys written by Cursor rules and Copilot instruction files
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentMeta {
    pub description: Option<String>,
    pub always_apply: Option<bool>,
    pub apply_to: Option<String>,
}

/// Block contents and the remaining lines, if the text opens with a closed block.
fn split(text: &str) -> Option<(String, String)> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.first().map(|l| l.trim()) != Some(DELIMITER) {
        return None;
    }
    let end = lines[1..].iter().position(|l| l.trim() == DELIMITER)? + 1;
    Some((lines[1..end].join("\n"), lines[end + 1..].join("\n")))
}

/// Remove a leading `---` delimited block and the blank lines after it.
///
/// Text that does not open with `---`, or whose block is never closed, is
/// returned unchanged. The block contents are not inspected.
pub fn strip_frontmatter(text: &str) -> String {
    match split(text) {
        Some((_, rest)) => rest.trim_start_matches('\n').to_string(),
        None => text.to_string(),
    }
}

/// Typed frontmatter of a fragment.
///
/// `None` when there is no closed block or the block is not YAML. Cursor
/// writes `globs` unquoted, which YAML reads as an alias, so a Cursor rule
/// with a glob usually has no readable metadata.
pub fn read_meta(text: &str) -> Option<FragmentMeta> {
    let (block, _) = split(text)?;
    if block.trim().is_empty() {
        return Some(FragmentMeta::default());
    }
    serde_yaml::from_str(&block)
        .inspect_err(|e| tracing::debug!("unreadable frontmatter: {}", e))
        .ok()
}
