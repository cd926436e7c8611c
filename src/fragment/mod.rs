//! Rule fragments: discovery on disk and canonical ordering
//!
//! A fragment is one markdown file contributing one section to the bundle.
//! Its identifier is the dash-separated lowercase filename stem.

pub mod discovery;
pub mod mode;
pub mod order;

use std::path::{Path, PathBuf};

use crate::error::{self, Result};

pub use discovery::{FragmentSet, discover};
pub use mode::Mode;
pub use order::order_fragments;

/// One source file contributing one section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Identifier derived from the filename (e.g. `code-style`)
    pub id: String,
    /// Absolute or workspace-relative path of the file
    pub path: PathBuf,
}

impl Fragment {
    pub fn new(id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
        }
    }

    /// Read the raw file content
    pub fn read(&self) -> Result<String> {
        read_text(&self.path)
    }
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| error::fs::read_failed(path, &e))
}
