//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - bundle: Bundle command arguments
//! - explode: Explode command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod bundle;
pub mod completions;
pub mod explode;

pub use bundle::BundleArgs;
pub use completions::CompletionsArgs;
pub use explode::ExplodeArgs;

/// Rulepack - rule fragment bundler
///
/// Combine Cursor rules or Copilot instructions into one instruction file, and split it back.
#[derive(Parser, Debug)]
#[command(
    name = "rulepack",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Bundle Cursor and Copilot rule fragments into one instruction file",
    long_about = "Rulepack concatenates rule fragments (.cursor/rules/*.mdc or \
                  .github/instructions/*.instructions.md) into a single markdown document \
                  in canonical section order, and explodes such a document back into fragments.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  rulepack bundle cursor                 \x1b[90m# .cursor/rules -> instructions.md\x1b[0m\n   \
                  rulepack bundle github out.md          \x1b[90m# .github/instructions -> out.md\x1b[0m\n   \
                  rulepack explode                       \x1b[90m# instructions.md -> rule trees\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "RULEPACK_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bundle rule fragments into one instruction file
    Bundle(BundleArgs),

    /// Split an instruction file into rule fragments
    Explode(ExplodeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
