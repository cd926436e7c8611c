//! Explode command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::ExplodeArgs;
use crate::commands::helpers::resolve_workspace_path;
use crate::common::fs::resolve_in;
use crate::config;
use crate::error::Result;
use crate::exploder;

/// Run explode command
pub fn run(workspace: Option<PathBuf>, args: ExplodeArgs) -> Result<()> {
    let root = resolve_workspace_path(workspace)?;
    let catalog = config::load_catalog(&root)?;
    let input = resolve_in(&root, &args.input);

    let summary = exploder::explode(&root, &input, &catalog)?;

    let dim = Style::new().dim();
    println!(
        "{} {} rules and {} prompts from {}",
        Style::new().green().bold().apply_to("Exploded"),
        summary.rules.len(),
        summary.prompts.len(),
        args.input.display()
    );
    if !summary.missing.is_empty() {
        println!(
            "  {}",
            dim.apply_to(format!(
                "{} catalog sections not found: {}",
                summary.missing.len(),
                summary.missing.join(", ")
            ))
        );
    }
    Ok(())
}
