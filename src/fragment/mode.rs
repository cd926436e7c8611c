//! Source directory conventions for each supported platform.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

/// Which rule tree to read fragments from
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Cursor rules: `.cursor/rules/*.mdc`, general fragment `general.mdc`
    Cursor,
    /// Copilot instructions: `.github/instructions/*.instructions.md`,
    /// general fragment `.github/copilot-instructions.md`
    Github,
}

impl Mode {
    /// Directory holding the fragment files
    pub fn source_dir(self, root: &Path) -> PathBuf {
        match self {
            Mode::Cursor => root.join(".cursor").join("rules"),
            Mode::Github => root.join(".github").join("instructions"),
        }
    }

    /// Filename suffix that marks a fragment
    pub fn suffix(self) -> &'static str {
        match self {
            Mode::Cursor => ".mdc",
            Mode::Github => ".instructions.md",
        }
    }

    /// Standalone general file read outside the fragment directory
    pub fn general_file(self, root: &Path) -> Option<PathBuf> {
        match self {
            Mode::Cursor => None,
            Mode::Github => Some(root.join(".github").join("copilot-instructions.md")),
        }
    }

    /// Fragment identifier for a file name, if the name matches this mode
    pub fn identifier(self, file_name: &str) -> Option<String> {
        file_name
            .strip_suffix(self.suffix())
            .filter(|stem| !stem.is_empty())
            .map(str::to_string)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Cursor => write!(f, "cursor"),
            Mode::Github => write!(f, "github"),
        }
    }
}
