//! Section catalog: canonical section order and per-section globs.

use std::path::Path;

use serde::{Deserialize, Serialize};
use wax::Glob;

use crate::common::string_utils::header_to_filename;
use crate::error::{self, Result, RulepackError};

/// Identifier reserved for the untitled general fragment
pub const GENERAL_ID: &str = "general";

/// One known section of the combined instruction document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section name as it appears in the `## ` header
    pub name: String,

    /// Files the section applies to; `None` makes it a manually applied prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applies_to: Option<String>,
}

impl Section {
    pub fn new(name: impl Into<String>, applies_to: Option<&str>) -> Self {
        Self {
            name: name.into(),
            applies_to: applies_to.map(str::to_string),
        }
    }

    /// Fragment identifier (filename form) of this section
    pub fn id(&self) -> String {
        header_to_filename(&self.name)
    }
}

/// Ordered list of known sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCatalog {
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Default for SectionCatalog {
    fn default() -> Self {
        Self {
            sections: vec![
                Section::new("Project Structure", Some("**/*")),
                Section::new("Code Style", Some("**/*")),
                Section::new("Error Handling", Some("**/*")),
                Section::new("Testing", Some("**/tests/**")),
                Section::new("Documentation", Some("**/*.md")),
                Section::new("Git Workflow", None),
                Section::new("Code Review", None),
            ],
        }
    }
}

impl SectionCatalog {
    #[cfg(test)]
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Parse and validate a catalog from YAML read from `path`
    pub fn from_yaml(path: &Path, yaml: &str) -> Result<Self> {
        let catalog: Self =
            serde_yaml::from_str(yaml).map_err(|e| error::config::parse_failed(path, &e))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Section names in canonical order
    pub fn names(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name.as_str()).collect()
    }

    /// Section whose name matches case-insensitively
    pub fn find(&self, name: &str) -> Option<&Section> {
        let name = name.trim().to_lowercase();
        self.sections
            .iter()
            .find(|s| s.name.to_lowercase() == name)
    }

    /// Section whose identifier equals `id`
    pub fn find_by_id(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id() == id)
    }

    /// Check names are present and unique by identifier, and globs parse
    pub fn validate(&self) -> Result<()> {
        let mut seen: Vec<String> = Vec::new();
        for section in &self.sections {
            if section.name.trim().is_empty() {
                return Err(error::config::invalid("section name cannot be empty"));
            }
            let id = section.id();
            if id == GENERAL_ID {
                return Err(error::config::invalid(format!(
                    "section '{}' collides with the general fragment",
                    section.name
                )));
            }
            if seen.contains(&id) {
                return Err(error::config::invalid(format!(
                    "duplicate section '{}'",
                    section.name
                )));
            }
            seen.push(id);

            if let Some(pattern) = &section.applies_to {
                Glob::new(pattern).map_err(|e| RulepackError::InvalidGlob {
                    section: section.name.clone(),
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                })?;
            }
        }
        Ok(())
    }
}
