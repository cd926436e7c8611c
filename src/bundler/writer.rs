//! Sequential section writer for the bundle output.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{self, Result};

/// Writes `## <title>` sections separated by blank lines
pub struct BundleWriter<W: Write> {
    inner: W,
    path: PathBuf,
}

impl<W: Write> BundleWriter<W> {
    /// Wrap `inner`; `path` is only used in error messages
    pub fn new(inner: W, path: impl AsRef<Path>) -> Self {
        Self {
            inner,
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Write one section; `None` writes the body without a title line
    pub fn write_section(&mut self, title: Option<&str>, body: &str) -> Result<()> {
        let result = match title {
            Some(title) => write!(self.inner, "## {title}\n\n{body}\n\n"),
            None => write!(self.inner, "{body}\n\n"),
        };
        result.map_err(|e| error::fs::write_failed(&self.path, &e))
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner
            .flush()
            .map_err(|e| error::fs::write_failed(&self.path, &e))
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.inner
    }
}
