//! Dashboard command handler.

use super::load_projects;
use crate::config::Config;
use crate::error::Result;
use crate::tui::run_dashboard;
use crate::view_state::ViewState;

/// Launch the interactive dashboard.
///
/// Starts in the configured theme with every card collapsed.
pub fn dashboard_command(config: &Config) -> Result<()> {
    let projects = load_projects(config)?;
    run_dashboard(projects, ViewState::with_theme(config.theme))
}
