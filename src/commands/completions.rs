//! Shell completions command

use std::io::Write;

use clap::CommandFactory;

use crate::cli::CompletionsArgs;
use crate::error::Result;

/// Write completions for the requested shell to `out`
pub fn generate(args: &CompletionsArgs, out: &mut dyn Write) {
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(args.shell, &mut cmd, "rulepack", out);
}

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    generate(&args, &mut std::io::stdout().lock());
    Ok(())
}
