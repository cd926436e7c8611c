//! Fragment discovery for a source directory
//!
//! Lists the mode's fragment directory (non-recursive) and separates out the
//! general fragment. A missing or unreadable directory is an error.

use std::path::Path;

use walkdir::WalkDir;

use super::{Fragment, Mode};
use crate::config::catalog::GENERAL_ID;
use crate::error::{self, Result};

/// Fragments found for one mode, general fragment kept apart
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentSet {
    pub general: Option<Fragment>,
    pub others: Vec<Fragment>,
}

fn list_fragments(dir: &Path, mode: Mode) -> Result<Vec<Fragment>> {
    let mut fragments = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| error::fs::dir_read_failed(dir, e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(id) = entry.file_name().to_str().and_then(|n| mode.identifier(n)) else {
            continue;
        };
        tracing::debug!("found fragment '{}' at {}", id, entry.path().display());
        fragments.push(Fragment::new(id, entry.path()));
    }

    Ok(fragments)
}

/// Discover the fragments for `mode` under workspace `root`
pub fn discover(root: &Path, mode: Mode) -> Result<FragmentSet> {
    let dir = mode.source_dir(root);
    let fragments = list_fragments(&dir, mode)?;

    let set = match mode.general_file(root) {
        Some(path) => FragmentSet {
            general: path.is_file().then(|| Fragment::new(GENERAL_ID, path)),
            others: fragments,
        },
        None => {
            let (general, others): (Vec<_>, Vec<_>) =
                fragments.into_iter().partition(|f| f.id == GENERAL_ID);
            FragmentSet {
                general: general.into_iter().next(),
                others,
            }
        }
    };

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RulepackError;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn ids(fragments: &[Fragment]) -> Vec<&str> {
        fragments.iter().map(|f| f.id.as_str()).collect()
    }

    #[test]
    fn test_discover_cursor_separates_general() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), ".cursor/rules/general.mdc", "Hello");
        write(temp.path(), ".cursor/rules/b-topic.mdc", "B");
        write(temp.path(), ".cursor/rules/a-topic.mdc", "A");
        write(temp.path(), ".cursor/rules/readme.md", "ignored");
        write(temp.path(), ".cursor/rules/nested/deep.mdc", "ignored");

        let set = discover(temp.path(), Mode::Cursor).unwrap();
        assert_eq!(set.general.unwrap().id, "general");
        let mut others = ids(&set.others);
        others.sort_unstable();
        assert_eq!(others, vec!["a-topic", "b-topic"]);
    }

    #[test]
    fn test_discover_cursor_without_general() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), ".cursor/rules/testing.mdc", "T");
        let set = discover(temp.path(), Mode::Cursor).unwrap();
        assert!(set.general.is_none());
        assert_eq!(ids(&set.others), vec!["testing"]);
    }

    #[test]
    fn test_discover_github_reads_fixed_general_file() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), ".github/copilot-instructions.md", "Hello");
        write(temp.path(), ".github/instructions/testing.instructions.md", "T");
        write(temp.path(), ".github/instructions/general.instructions.md", "G");

        let set = discover(temp.path(), Mode::Github).unwrap();
        let general = set.general.unwrap();
        assert!(general.path.ends_with(".github/copilot-instructions.md"));
        let mut others = ids(&set.others);
        others.sort_unstable();
        assert_eq!(others, vec!["general", "testing"]);
    }

    #[test]
    fn test_discover_github_without_general_file() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), ".github/instructions/testing.instructions.md", "T");
        let set = discover(temp.path(), Mode::Github).unwrap();
        assert!(set.general.is_none());
    }

    #[test]
    fn test_discover_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let err = discover(temp.path(), Mode::Cursor).unwrap_err();
        assert!(matches!(err, RulepackError::DirectoryReadFailed { .. }));
    }
}
