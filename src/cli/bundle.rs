use std::path::PathBuf;

use clap::Parser;

use crate::fragment::Mode;

/// Arguments for the bundle command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Bundle Cursor rules into instructions.md:\n    rulepack bundle cursor\n\n\
                  Bundle Copilot instructions into a custom file:\n    rulepack bundle github AGENTS.md\n\n\
                  Bundle another project's rules:\n    rulepack -w ../other bundle cursor")]
pub struct BundleArgs {
    /// Which rule tree to bundle
    #[arg(value_enum)]
    pub mode: Mode,

    /// Output file, relative to the workspace
    #[arg(default_value = "instructions.md")]
    pub output: PathBuf,
}
