//! Command-line interface definition.
//!
//! Lives in the library so the completion generator can build the same
//! command tree the binary parses.

use crate::theme::Theme;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "projboard")]
#[command(
    version,
    about = "Terminal dashboard for tracking project progress",
    after_help = "EXAMPLES:
    # Open the interactive dashboard with the built-in sample projects
    projboard

    # Open it in dark mode with your own projects file
    projboard --projects rollout.toml dashboard --theme dark

    # Print all cards, with project 2 expanded
    projboard list --expanded 2

    # Print summary statistics
    projboard stats"
)]
pub struct Cli {
    /// TOML file with [[project]] entries (overrides the config file)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub projects: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive dashboard (default)
    #[command(after_help = "KEYS:
    t            Toggle light/dark theme
    Enter/Space  Show or hide details of the selected project
    Esc          Hide details
    Up/Down      Select a project (also k/j)
    q            Quit")]
    Dashboard {
        /// Theme to start in (overrides the config file)
        #[arg(long, value_enum)]
        theme: Option<Theme>,
    },

    /// Print every project card
    List {
        /// Id of the project whose details are shown
        #[arg(short, long)]
        expanded: Option<u32>,

        /// Status color theme (overrides the config file)
        #[arg(long, value_enum)]
        theme: Option<Theme>,
    },

    /// Print summary statistics
    Stats,

    /// Show the effective configuration
    #[command(after_help = "CONFIG FILE:
    ~/.config/projboard/config.toml

VALID KEYS:
    theme          - Starting theme (\"light\" or \"dark\")
    projects_file  - Projects file loaded when --projects is not given")]
    Config {
        /// Write a commented default config file if none exists
        #[arg(long)]
        init: bool,
    },

    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["projboard"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.projects.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_dashboard_theme() {
        let cli = Cli::try_parse_from(["projboard", "dashboard", "--theme", "dark"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Dashboard {
                theme: Some(Theme::Dark)
            })
        ));
    }

    #[test]
    fn test_parse_list_with_global_projects() {
        let cli = Cli::try_parse_from([
            "projboard",
            "list",
            "--expanded",
            "2",
            "--projects",
            "p.toml",
        ])
        .unwrap();
        assert_eq!(cli.projects, Some(PathBuf::from("p.toml")));
        assert!(matches!(
            cli.command,
            Some(Commands::List {
                expanded: Some(2),
                theme: None
            })
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_theme() {
        assert!(Cli::try_parse_from(["projboard", "dashboard", "--theme", "blue"]).is_err());
    }
}
