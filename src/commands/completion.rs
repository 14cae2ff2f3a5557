//! Completion command
//!
//! Generate shell completion scripts

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io;

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
/// Users can save this to their shell's completion directory.
///
/// # Examples
///
/// ```bash
/// # Bash
/// mongodl completion bash > /usr/local/share/bash-completion/completions/mongodl
///
/// # Zsh
/// mongodl completion zsh > /usr/local/share/zsh/site-functions/_mongodl
///
/// # Fish
/// mongodl completion fish > ~/.config/fish/completions/mongodl.fish
/// ```
#[allow(
    clippy::unnecessary_wraps,
    reason = "Result type maintained for consistency with command signature pattern"
)]
pub(crate) fn run(shell: Shell) -> Result<()> {
    let mut cmd = crate::Cli::command();

    generate(shell, &mut cmd, "mongodl", &mut io::stdout());

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests can panic")]
mod tests {
    use super::*;

    #[test]
    fn completion_bash() {
        assert!(run(Shell::Bash).is_ok());
    }

    #[test]
    fn completion_zsh() {
        assert!(run(Shell::Zsh).is_ok());
    }
}
