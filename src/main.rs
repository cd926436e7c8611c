//! Rulepack - rule fragment bundler
//!
//! Concatenates Cursor rule fragments or Copilot instruction fragments into one
//! instruction document in canonical section order, and splits such a document
//! back into fragments.

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod bundler;
mod cli;
mod commands;
mod common;
mod config;
mod error;
mod exploder;
mod fragment;
mod markdown;

use cli::{Cli, Commands};

/// Install the stderr log subscriber; `RUST_LOG` wins over `--verbose`
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "rulepack=debug"
    } else {
        "rulepack=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Bundle(args) => commands::bundle::run(cli.workspace, args),
        Commands::Explode(args) => commands::explode::run(cli.workspace, args),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
