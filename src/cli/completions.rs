use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    rulepack completions bash > ~/.bash_completion.d/rulepack\n\n\
                  Generate zsh completions:\n    rulepack completions zsh > ~/.zfunc/_rulepack\n\n\
                  Generate fish completions:\n    rulepack completions fish > ~/.config/fish/completions/rulepack.fish\n\n\
                  Generate PowerShell completions:\n    rulepack completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
