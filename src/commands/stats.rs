//! Stats command handler.

use super::load_projects;
use crate::config::Config;
use crate::error::Result;
use crate::output::print_stats;
use crate::stats::Stats;

/// Print the summary statistics for the loaded projects.
pub fn stats_command(config: &Config) -> Result<()> {
    let projects = load_projects(config)?;
    print_stats(&Stats::from_projects(projects.as_slice()));
    Ok(())
}
