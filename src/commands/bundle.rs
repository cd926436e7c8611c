//! Bundle command implementation

use std::path::PathBuf;

use console::Style;

use crate::bundler;
use crate::cli::BundleArgs;
use crate::commands::helpers::resolve_workspace_path;
use crate::common::fs::resolve_in;
use crate::config;
use crate::error::Result;

/// Run bundle command
pub fn run(workspace: Option<PathBuf>, args: BundleArgs) -> Result<()> {
    let root = resolve_workspace_path(workspace)?;
    let catalog = config::load_catalog(&root)?;
    let output = resolve_in(&root, &args.output);

    bundler::bundle(&root, args.mode, &catalog, &output)?;

    println!(
        "{} {} rules into {}",
        Style::new().green().bold().apply_to("Bundled"),
        args.mode,
        args.output.display()
    );
    Ok(())
}
