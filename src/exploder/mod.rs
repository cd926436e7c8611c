//! Split a combined instruction document into rule fragments
//!
//! The general block becomes `.cursor/rules/general.mdc` and
//! `.github/copilot-instructions.md`. Catalog sections with a glob become
//! Cursor rules and Copilot instructions; every other section becomes a
//! prompt for both platforms.

pub mod render;

use std::path::{Path, PathBuf};

use crate::common::fs::write_text;
use crate::common::string_utils::header_to_filename;
use crate::config::SectionCatalog;
use crate::error::{self, Result};
use crate::markdown::header::SECTION_PREFIX;
use crate::markdown::sections;

/// Output locations under a workspace root
#[derive(Debug, Clone)]
pub struct ExplodeTargets {
    pub rules_dir: PathBuf,
    pub instructions_dir: PathBuf,
    pub prompts_dir: PathBuf,
    pub copilot_general: PathBuf,
}

impl ExplodeTargets {
    pub fn new(root: &Path) -> Self {
        let github = root.join(".github");
        Self {
            rules_dir: root.join(".cursor").join("rules"),
            instructions_dir: github.join("instructions"),
            prompts_dir: github.join("prompts"),
            copilot_general: github.join("copilot-instructions.md"),
        }
    }
}

/// What an explode run produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplodeSummary {
    pub general: bool,
    pub rules: Vec<String>,
    pub prompts: Vec<String>,
    pub missing: Vec<String>,
}

/// Replace the first `## ` header line with the catalog casing
fn with_canonical_header<'a>(mut lines: Vec<&'a str>, header: &'a str) -> Vec<&'a str> {
    if let Some(line) = lines.iter_mut().find(|l| l.starts_with(SECTION_PREFIX)) {
        *line = header;
    }
    lines
}

fn write_prompt(targets: &ExplodeTargets, name: &str, lines: &[&str]) -> Result<()> {
    let id = header_to_filename(name);
    let (description, content) = sections::extract_description(lines);
    let content: Vec<&str> = content.iter().map(String::as_str).collect();

    write_text(
        &targets.rules_dir.join(format!("{id}.mdc")),
        &render::cursor_prompt(&description, &content),
    )?;
    write_text(
        &targets.prompts_dir.join(format!("{id}.prompt.md")),
        &render::github_prompt(&description, &content),
    )
}

fn write_rule(targets: &ExplodeTargets, name: &str, glob: &str, lines: &[&str]) -> Result<()> {
    let id = header_to_filename(name);
    write_text(
        &targets.rules_dir.join(format!("{id}.mdc")),
        &render::cursor_rule(glob, lines),
    )?;
    write_text(
        &targets.instructions_dir.join(format!("{id}.instructions.md")),
        &render::copilot_instruction(glob, lines),
    )
}

fn has_text(lines: &[&str]) -> bool {
    lines.iter().any(|l| !l.trim().is_empty())
}

/// Explode `text` into fragment files under `targets`
pub fn explode_text(
    text: &str,
    catalog: &SectionCatalog,
    targets: &ExplodeTargets,
) -> Result<ExplodeSummary> {
    let lines: Vec<&str> = text.lines().collect();
    let mut summary = ExplodeSummary::default();

    for dir in [&targets.rules_dir, &targets.instructions_dir, &targets.prompts_dir] {
        std::fs::create_dir_all(dir).map_err(|e| error::fs::write_failed(dir, &e))?;
    }

    let general = sections::general_block(&lines);
    if has_text(&general) {
        write_text(
            &targets.rules_dir.join("general.mdc"),
            &render::general_rule(&general),
        )?;
        write_text(&targets.copilot_general, &render::plain(&general))?;
        summary.general = true;
    }

    for section in &catalog.sections {
        let found = sections::extract_section(&lines, &section.name).filter(|s| has_text(s));
        let Some(content) = found else {
            tracing::warn!(
                "section '{}' is in the catalog but not in the instructions file",
                section.name
            );
            summary.missing.push(section.name.clone());
            continue;
        };

        let header = format!("{SECTION_PREFIX}{}", section.name);
        let content = with_canonical_header(content, &header);
        match &section.applies_to {
            Some(glob) => {
                write_rule(targets, &section.name, glob, &content)?;
                summary.rules.push(section.name.clone());
            }
            None => {
                write_prompt(targets, &section.name, &content)?;
                summary.prompts.push(section.name.clone());
            }
        }
    }

    for name in sections::section_names(&lines) {
        if catalog.find(&name).is_some() {
            continue;
        }
        if let Some(content) = sections::extract_section(&lines, &name).filter(|s| has_text(s)) {
            tracing::debug!("writing unlisted section '{}' as a prompt", name);
            let header = format!("{SECTION_PREFIX}{name}");
            write_prompt(targets, &name, &with_canonical_header(content, &header))?;
            summary.prompts.push(name);
        }
    }

    Ok(summary)
}

/// Read `input` and explode it into the rule trees under `root`
pub fn explode(root: &Path, input: &Path, catalog: &SectionCatalog) -> Result<ExplodeSummary> {
    let text = std::fs::read_to_string(input).map_err(|e| error::fs::read_failed(input, &e))?;
    explode_text(&text, catalog, &ExplodeTargets::new(root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::catalog::Section;
    use crate::error::RulepackError;
    use tempfile::TempDir;

    const DOC: &str = "\
Be concise.

## code style
Use rustfmt.

## Code Review
Description: Review a pull request

Check tests first.

## Release Notes
Summarize changes. Keep it short.
";

    fn catalog() -> SectionCatalog {
        SectionCatalog::new(vec![
            Section::new("Code Style", Some("**/*.rs")),
            Section::new("Code Review", None),
            Section::new("Testing", Some("**/tests/**")),
        ])
    }

    fn read(root: &Path, rel: &str) -> String {
        std::fs::read_to_string(root.join(rel)).unwrap()
    }

    #[test]
    fn test_explode_writes_all_targets() {
        let temp = TempDir::new().unwrap();
        let summary =
            explode_text(DOC, &catalog(), &ExplodeTargets::new(temp.path())).unwrap();

        assert!(summary.general);
        assert_eq!(summary.rules, vec!["Code Style"]);
        assert_eq!(summary.prompts, vec!["Code Review", "Release Notes"]);
        assert_eq!(summary.missing, vec!["Testing"]);

        assert_eq!(
            read(temp.path(), ".cursor/rules/general.mdc"),
            "---\ndescription:\nalwaysApply: true\n---\nBe concise.\n"
        );
        assert_eq!(read(temp.path(), ".github/copilot-instructions.md"), "Be concise.\n");
        assert_eq!(
            read(temp.path(), ".cursor/rules/code-style.mdc"),
            "---\ndescription:\nglobs: **/*.rs\nalwaysApply: false\n---\n## Code Style\nUse rustfmt.\n"
        );
        assert_eq!(
            read(temp.path(), ".github/instructions/code-style.instructions.md"),
            "---\napplyTo: \"**/*.rs\"\n---\n## Code Style\nUse rustfmt.\n"
        );
    }

    #[test]
    fn test_explode_prompts() {
        let temp = TempDir::new().unwrap();
        explode_text(DOC, &catalog(), &ExplodeTargets::new(temp.path())).unwrap();

        assert_eq!(
            read(temp.path(), ".cursor/rules/code-review.mdc"),
            "---\ndescription: Review a pull request\n---\n## Code Review\n\nCheck tests first.\n"
        );
        assert_eq!(
            read(temp.path(), ".github/prompts/code-review.prompt.md"),
            "---\nmode: 'agent'\ndescription: 'Review a pull request'\n---\n## Code Review\n\nCheck tests first.\n"
        );
        assert_eq!(
            read(temp.path(), ".github/prompts/release-notes.prompt.md"),
            "---\nmode: 'agent'\ndescription: 'Summarize changes.'\n---\n## Release Notes\nSummarize changes. Keep it short.\n"
        );
    }

    #[test]
    fn test_explode_without_general_block() {
        let temp = TempDir::new().unwrap();
        let summary = explode_text(
            "## Code Style\nUse rustfmt.\n",
            &catalog(),
            &ExplodeTargets::new(temp.path()),
        )
        .unwrap();
        assert!(!summary.general);
        assert!(!temp.path().join(".cursor/rules/general.mdc").exists());
    }

    #[test]
    fn test_explode_ignores_bare_header_line() {
        let temp = TempDir::new().unwrap();
        let summary = explode_text(
            "Intro\n\n## \nstray\n\n## Notes\nBody.\n",
            &SectionCatalog::new(vec![]),
            &ExplodeTargets::new(temp.path()),
        )
        .unwrap();
        assert!(summary.general);
        assert_eq!(summary.prompts, vec!["Notes"]);
        assert_eq!(read(temp.path(), ".cursor/rules/general.mdc").lines().last(), Some("Intro"));
        assert_eq!(
            read(temp.path(), ".github/prompts/notes.prompt.md"),
            "---\nmode: 'agent'\ndescription: 'Body.'\n---\n## Notes\nBody.\n"
        );
    }

    #[test]
    fn test_explode_keeps_padded_unlisted_header() {
        let temp = TempDir::new().unwrap();
        let summary = explode_text(
            "##  Release Notes\nShip it.\n",
            &SectionCatalog::new(vec![]),
            &ExplodeTargets::new(temp.path()),
        )
        .unwrap();
        assert_eq!(summary.prompts, vec!["Release Notes"]);
        assert_eq!(
            read(temp.path(), ".cursor/rules/release-notes.mdc"),
            "---\ndescription: Ship it.\n---\n## Release Notes\nShip it.\n"
        );
    }

    #[test]
    fn test_explode_missing_input() {
        let temp = TempDir::new().unwrap();
        let err = explode(temp.path(), &temp.path().join("nope.md"), &catalog()).unwrap_err();
        assert!(matches!(err, RulepackError::FileNotFound { .. }));
    }
}
