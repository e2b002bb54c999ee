//! Project card display.
//!
//! Prints each project as a text card: name, description, a progress bar
//! colored by status band, the status label, and (for the expanded project)
//! the upcoming and last updates.

use crate::classify::{status_color, status_label};
use crate::project::{Project, Projects};
use crate::view_state::ViewState;

use super::colors::*;
use super::{ansi_fg, card_width};

const BAR_FILLED: &str = "█";
const BAR_EMPTY: &str = "░";

/// Print the page title and subtitle.
pub fn print_header(projects: &Projects) {
    println!("{BOLD}{}{RESET}", projects.title());
    println!("{GRAY}{}{RESET}", projects.subtitle());
    println!();
}

/// Print every project card, followed by a blank line each.
pub fn print_project_list(projects: &Projects, view: &ViewState) {
    if projects.is_empty() {
        println!("{GRAY}No projects to show.{RESET}");
        return;
    }

    let width = card_width();
    for project in projects {
        println!("{}", format_project_card(project, view, width));
        println!();
    }
}

/// Render one card as a multi-line string.
pub fn format_project_card(project: &Project, view: &ViewState, width: usize) -> String {
    let color = ansi_fg(status_color(project.progress, view.theme()));
    let expanded = view.is_expanded(project.id);
    let mut lines = Vec::new();

    lines.push(format!("{GRAY}{}{RESET}", "─".repeat(width)));
    lines.push(format!(
        "{BOLD}{}{RESET} {GRAY}#{}{RESET}",
        project.name, project.id
    ));
    if !project.description.is_empty() {
        lines.push(project.description.clone());
    }

    let bar_width = width.saturating_sub(8).max(10);
    lines.push(format!(
        "{}  {BOLD}{}%{RESET}",
        progress_bar(project.fill_ratio(), bar_width, &color),
        project.progress
    ));
    lines.push(format!(
        "{color}{}{RESET}  {DIM}Updated recently{RESET}",
        status_label(project.progress)
    ));

    if expanded {
        lines.extend(format_details(project));
    }

    lines.join("\n")
}

fn format_details(project: &Project) -> Vec<String> {
    let mut lines = vec![String::new(), format!("{BLUE}Upcoming updates{RESET}")];
    if project.next_updates.is_empty() {
        lines.push(format!("  {GRAY}(none){RESET}"));
    } else {
        lines.extend(project.next_updates.iter().map(|u| format!("  • {}", u)));
    }

    if let Some(last) = &project.last_update {
        lines.push(format!("{BLUE}Last update{RESET}"));
        lines.push(format!("  {}", last));
    }
    lines
}

fn progress_bar(ratio: f64, width: usize, color: &str) -> String {
    let filled = ((ratio * width as f64).round() as usize).min(width);
    format!(
        "{color}{}{RESET}{GRAY}{}{RESET}",
        BAR_FILLED.repeat(filled),
        BAR_EMPTY.repeat(width - filled)
    )
}
