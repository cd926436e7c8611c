//! Common test utilities for Rulepack integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A test workspace for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a workspace populated from a fixture under tests/common/fixtures/workspaces
    #[allow(dead_code)]
    pub fn from_fixture(fixture_name: &str) -> Self {
        let workspace = Self::new();
        let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("common")
            .join("fixtures")
            .join("workspaces")
            .join(fixture_name);
        copy_dir_recursive(&fixture_path, &workspace.path).expect("Failed to copy fixture");
        workspace
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write a Cursor rule fragment
    #[allow(dead_code)]
    pub fn write_rule(&self, id: &str, content: &str) {
        self.write_file(&format!(".cursor/rules/{id}.mdc"), content);
    }

    /// Write a Copilot instruction fragment
    #[allow(dead_code)]
    pub fn write_instruction(&self, id: &str, content: &str) {
        self.write_file(&format!(".github/instructions/{id}.instructions.md"), content);
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Recursively copy a directory
fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    if !dst.exists() {
        std::fs::create_dir_all(dst)?;
    }

    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if file_type.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }

    Ok(())
}

/// Positions of `needles` in `haystack`, asserting every one is present
#[allow(dead_code)]
pub fn positions(haystack: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|n| {
            haystack
                .find(n)
                .unwrap_or_else(|| panic!("'{n}' not found in:\n{haystack}"))
        })
        .collect()
}

/// Assert that `values` is strictly increasing
#[allow(dead_code)]
pub fn assert_increasing(values: &[usize]) {
    assert!(
        values.windows(2).all(|w| w[0] < w[1]),
        "expected increasing positions, got {values:?}"
    );
}
