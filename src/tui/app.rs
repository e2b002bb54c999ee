//! Dashboard application state.
//!
//! `DashboardApp` owns the project collection, the [`ViewState`] and a
//! selection cursor. Key events only ever change the view state, the cursor,
//! or the quit flag; the projects are never modified.

use crate::project::{Project, Projects};
use crate::stats::Stats;
use crate::view_state::ViewState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug)]
pub struct DashboardApp {
    projects: Projects,
    stats: Stats,
    view: ViewState,
    selected: usize,
    should_quit: bool,
}

impl DashboardApp {
    pub fn new(projects: Projects, view: ViewState) -> Self {
        let stats = Stats::from_projects(projects.as_slice());
        Self {
            projects,
            stats,
            view,
            selected: 0,
            should_quit: false,
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.view.toggle_theme();
                tracing::debug!(theme = %self.view.theme(), "theme toggled");
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle_selected();
            }
            KeyCode::Esc => {
                self.view.collapse();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max_index = self.projects.len().saturating_sub(1);
                if self.selected < max_index {
                    self.selected += 1;
                }
            }
            _ => {}
        }
    }

    fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_project().map(|p| p.id) {
            self.view.toggle_expansion(id);
            tracing::debug!(%id, expanded = self.view.is_expanded(id), "card toggled");
        }
    }

    pub fn projects(&self) -> &Projects {
        &self.projects
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.projects.get(self.selected)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
