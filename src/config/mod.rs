//! Section catalog configuration (rulepack.yaml)
//!
//! The catalog is optional. Without a `rulepack.yaml` in the workspace root the
//! built-in default catalog is used.

pub mod catalog;

use std::fs;
use std::path::Path;

use crate::error::{self, Result};

pub use catalog::SectionCatalog;

/// Catalog config filename
pub const CATALOG_FILE: &str = "rulepack.yaml";

/// Load the section catalog from a workspace root
///
/// Returns the default catalog if rulepack.yaml does not exist.
pub fn load_catalog(root: &Path) -> Result<SectionCatalog> {
    let path = root.join(CATALOG_FILE);

    if !path.exists() {
        tracing::debug!("no {} in {}, using default catalog", CATALOG_FILE, root.display());
        return Ok(SectionCatalog::default());
    }

    let content = fs::read_to_string(&path).map_err(|e| error::config::read_failed(&path, &e))?;
    let catalog = SectionCatalog::from_yaml(&path, &content)?;
    tracing::debug!(
        "loaded section order from {}: {}",
        path.display(),
        catalog.names().join(", ")
    );
    Ok(catalog)
}
