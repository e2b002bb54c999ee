//! List command handler.
//!
//! Prints the dashboard as plain text: header, one card per project and the
//! summary statistics.

use super::load_projects;
use crate::config::Config;
use crate::error::Result;
use crate::output::{print_header, print_project_list, print_stats, print_warning};
use crate::project::ProjectId;
use crate::stats::Stats;
use crate::view_state::ViewState;

/// Print every project card, expanding `expanded` if given.
pub fn list_command(config: &Config, expanded: Option<u32>) -> Result<()> {
    let projects = load_projects(config)?;

    let mut view = ViewState::with_theme(config.theme);
    if let Some(id) = expanded.map(ProjectId) {
        if projects.find(id).is_none() {
            print_warning(&format!("No project with id {}", id));
        }
        view.toggle_expansion(id);
    }

    print_header(&projects);
    print_project_list(&projects, &view);
    print_stats(&Stats::from_projects(projects.as_slice()));
    Ok(())
}
