//! Session-scoped UI state: the active theme and the expanded card.

use crate::project::ProjectId;
use crate::theme::Theme;

/// Theme plus at most one expanded project.
///
/// Owned by the dashboard and passed by reference to rendering. Both toggles
/// are total: any id may be expanded, including one that matches no project,
/// in which case no panel is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    theme: Theme,
    expanded: Option<ProjectId>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a specific theme and nothing expanded.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            expanded: None,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn expanded(&self) -> Option<ProjectId> {
        self.expanded
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Collapse `id` if it is the expanded card, otherwise expand it
    /// (collapsing whatever was expanded before).
    pub fn toggle_expansion(&mut self, id: ProjectId) {
        self.expanded = if self.expanded == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    pub fn is_expanded(&self, id: ProjectId) -> bool {
        self.expanded == Some(id)
    }
}
