//! projboard CLI entry point.
//!
//! Parses command-line arguments, sets up logging and configuration, and
//! dispatches to the appropriate command handler.

use clap::Parser;
use projboard::cli::{Cli, Commands};
use projboard::commands::{
    completions_command, config_command, dashboard_command, list_command, stats_command,
};
use projboard::config::load_config;
use projboard::output::print_error;

fn main() {
    let cli = Cli::parse();

    // Default to warnings only so log lines do not land on the dashboard.
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let result = load_config().and_then(|config| {
        let config = config.with_overrides(None, cli.projects.clone());
        match cli.command {
            None => dashboard_command(&config),
            Some(Commands::Dashboard { theme }) => {
                dashboard_command(&config.with_overrides(theme, None))
            }
            Some(Commands::List { expanded, theme }) => {
                list_command(&config.with_overrides(theme, None), expanded)
            }
            Some(Commands::Stats) => stats_command(&config),
            Some(Commands::Config { init }) => config_command(&config, init),
            Some(Commands::Completions { shell }) => completions_command(shell),
        }
    });

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
