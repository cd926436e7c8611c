//! Common file system operations with unified error handling

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{self, Result};

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| error::fs::write_failed(parent, &e))?;
    }
    Ok(())
}

/// Write a text file, creating parent directories and overwriting any existing file
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, content).map_err(|e| error::fs::write_failed(path, &e))
}

/// Resolve `path` against `root` unless it is already absolute
pub fn resolve_in(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_text_creates_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".github/prompts/review.prompt.md");
        write_text(&path, "hello").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "hello");
    }

    #[test]
    fn test_write_text_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.md");
        write_text(&path, "first version").unwrap();
        write_text(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "second");
    }

    #[test]
    fn test_resolve_in() {
        let root = Path::new("/repo");
        assert_eq!(resolve_in(root, Path::new("instructions.md")), Path::new("/repo/instructions.md"));
        assert_eq!(resolve_in(root, Path::new("/tmp/out.md")), Path::new("/tmp/out.md"));
    }
}
