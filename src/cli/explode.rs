use std::path::PathBuf;

use clap::Parser;

/// Arguments for the explode command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Split instructions.md into Cursor and Copilot files:\n    rulepack explode\n\n\
                  Split a custom file:\n    rulepack explode AGENTS.md")]
pub struct ExplodeArgs {
    /// Combined instructions file, relative to the workspace
    #[arg(default_value = "instructions.md")]
    pub input: PathBuf,
}
