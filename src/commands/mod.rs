//! CLI command handlers for projboard.
//!
//! - [`dashboard`] - Interactive TUI dashboard
//! - [`list`] - Print project cards
//! - [`stats`] - Print summary statistics
//! - [`config`] - Show or initialize configuration
//! - [`completions`] - Shell completion scripts

mod completions;
mod config;
mod dashboard;
mod list;
mod stats;

pub use completions::{completions_command, generate_completion_script};
pub use config::config_command;
pub use dashboard::dashboard_command;
pub use list::list_command;
pub use stats::stats_command;

use crate::config::Config;
use crate::error::Result;
use crate::project::Projects;

/// Load the project collection the configuration points at, or the
/// built-in sample set when it points nowhere.
pub fn load_projects(config: &Config) -> Result<Projects> {
    match &config.projects_file {
        Some(path) => Projects::load(path),
        None => Ok(Projects::sample()),
    }
}
