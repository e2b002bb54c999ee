//! Completions command handler.

use crate::cli::Cli;
use crate::error::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Generate a completion script for `shell`.
pub fn generate_completion_script(shell: Shell) -> String {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    generate(shell, &mut cmd, "projboard", &mut buf);
    String::from_utf8(buf).unwrap_or_default()
}

/// Print a completion script to stdout.
pub fn completions_command(shell: Shell) -> Result<()> {
    let script = generate_completion_script(shell);
    std::io::stdout().write_all(script.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_bash_script_mentions_subcommands() {
        let script = generate_completion_script(Shell::Bash);
        assert!(script.contains("projboard"));
        assert!(script.contains("dashboard"));
        assert!(script.contains("stats"));
    }

    #[test]
    fn test_generate_scripts_for_all_shells() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
            assert!(!generate_completion_script(shell).is_empty());
        }
    }
}
