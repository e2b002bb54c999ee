//! Project records and the collection the dashboard displays.
//!
//! The collection is built once at startup, either from the built-in sample
//! set or from a TOML file, and never changes afterwards.

use crate::error::{BoardError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

const DEFAULT_TITLE: &str = "IT - New DC";
const DEFAULT_SUBTITLE: &str = "Track the progress of the new distribution center rollout";

/// Identifier of a project, unique within a [`Projects`] collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    /// Completion percentage. Nominally 0-100 but not clamped.
    pub progress: i32,
    /// Upcoming update notes, empty entries removed.
    pub next_updates: Vec<String>,
    pub last_update: Option<String>,
}

impl Project {
    pub fn new(id: u32, name: &str, description: &str, progress: i32) -> Self {
        Self {
            id: ProjectId(id),
            name: name.to_string(),
            description: description.to_string(),
            progress,
            next_updates: Vec::new(),
            last_update: None,
        }
    }

    /// Set the upcoming update notes. Empty notes are dropped.
    pub fn with_next_updates<I, S>(mut self, updates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.next_updates = updates
            .into_iter()
            .map(Into::into)
            .filter(|u| !u.is_empty())
            .collect();
        self
    }

    /// Set the last update note. An empty note means there is none.
    pub fn with_last_update(mut self, update: &str) -> Self {
        self.last_update = if update.is_empty() {
            None
        } else {
            Some(update.to_string())
        };
        self
    }

    /// Gauge fill ratio in `0.0..=1.0`. Out-of-range progress is clamped here
    /// only; classification always sees the raw value.
    pub fn fill_ratio(&self) -> f64 {
        f64::from(self.progress.clamp(0, 100)) / 100.0
    }
}

/// On-disk shape of a project entry.
#[derive(Debug, Deserialize)]
struct ProjectRecord {
    id: u32,
    name: String,
    #[serde(default)]
    description: String,
    progress: i32,
    #[serde(default)]
    next_updates: Vec<String>,
    #[serde(default)]
    last_update: Option<String>,
}

impl From<ProjectRecord> for Project {
    fn from(record: ProjectRecord) -> Self {
        let project = Project::new(record.id, &record.name, &record.description, record.progress)
            .with_next_updates(record.next_updates);
        match record.last_update {
            Some(last) => project.with_last_update(&last),
            None => project,
        }
    }
}

/// On-disk shape of a projects file.
#[derive(Debug, Deserialize)]
struct ProjectsFile {
    title: Option<String>,
    subtitle: Option<String>,
    #[serde(default, rename = "project")]
    projects: Vec<ProjectRecord>,
}

/// The ordered, immutable project collection plus page headings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projects {
    title: String,
    subtitle: String,
    items: Vec<Project>,
}

impl Projects {
    pub fn new(title: &str, subtitle: &str, items: Vec<Project>) -> Self {
        let projects = Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            items,
        };
        projects.warn_on_anomalies();
        projects
    }

    /// The built-in sample collection.
    pub fn sample() -> Self {
        let upcoming = ["Next update.", "Next update.", "Next update.", "Next update."];
        Self::new(
            DEFAULT_TITLE,
            DEFAULT_SUBTITLE,
            vec![
                Project::new(1, "Title", "Description", 100)
                    .with_next_updates(upcoming)
                    .with_last_update("Last update."),
                Project::new(2, "Title", "Description", 51).with_next_updates(upcoming),
                Project::new(3, "Title", "Description", 100).with_next_updates([""]),
                Project::new(4, "Title", "Description", 30).with_next_updates([""]),
            ],
        )
    }

    /// Parse a projects file from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ProjectsFile =
            toml::from_str(content).map_err(|e| BoardError::InvalidProjects(e.to_string()))?;

        Ok(Self::new(
            file.title.as_deref().unwrap_or(DEFAULT_TITLE),
            file.subtitle.as_deref().unwrap_or(DEFAULT_SUBTITLE),
            file.projects.into_iter().map(Project::from).collect(),
        ))
    }

    /// Load a projects file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BoardError::ProjectsNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let projects = Self::from_toml_str(&content).map_err(|e| match e {
            BoardError::InvalidProjects(msg) => {
                BoardError::InvalidProjects(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;
        tracing::debug!(
            path = %path.display(),
            count = projects.len(),
            "loaded projects file"
        );
        Ok(projects)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn as_slice(&self) -> &[Project] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Project> {
        self.items.get(index)
    }

    pub fn find(&self, id: ProjectId) -> Option<&Project> {
        self.items.iter().find(|p| p.id == id)
    }

    /// Ids that appear more than once, in first-repeat order.
    pub fn duplicate_ids(&self) -> Vec<ProjectId> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        self.items
            .iter()
            .filter(|p| !seen.insert(p.id) && reported.insert(p.id))
            .map(|p| p.id)
            .collect()
    }

    fn warn_on_anomalies(&self) {
        for id in self.duplicate_ids() {
            tracing::warn!(%id, "duplicate project id; expanding it affects every match");
        }
        for p in self.items.iter().filter(|p| !(0..=100).contains(&p.progress)) {
            tracing::warn!(id = %p.id, progress = p.progress, "progress outside 0-100");
        }
    }
}

impl<'a> IntoIterator for &'a Projects {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_with_next_updates_drops_only_empty_entries() {
        let p = Project::new(1, "a", "b", 10).with_next_updates(["", "one", "  ", "two"]);
        assert_eq!(
            p.next_updates,
            vec!["one".to_string(), "  ".to_string(), "two".to_string()]
        );
    }

    #[test]
    fn test_with_last_update_empty_is_none() {
        let p = Project::new(1, "a", "b", 10).with_last_update("");
        assert!(p.last_update.is_none());
        let p = Project::new(1, "a", "b", 10).with_last_update(" ");
        assert_eq!(p.last_update.as_deref(), Some(" "));
        let p = Project::new(1, "a", "b", 10).with_last_update("shipped");
        assert_eq!(p.last_update.as_deref(), Some("shipped"));
    }

    #[test]
    fn test_fill_ratio_clamps() {
        assert_eq!(Project::new(1, "a", "b", 50).fill_ratio(), 0.5);
        assert_eq!(Project::new(1, "a", "b", -20).fill_ratio(), 0.0);
        assert_eq!(Project::new(1, "a", "b", 140).fill_ratio(), 1.0);
    }

    #[test]
    fn test_sample_matches_reference_data() {
        let projects = Projects::sample();
        assert_eq!(projects.len(), 4);
        let progress: Vec<i32> = projects.iter().map(|p| p.progress).collect();
        assert_eq!(progress, vec![100, 51, 100, 30]);
        assert!(projects.duplicate_ids().is_empty());

        let third = projects.find(ProjectId(3)).unwrap();
        assert!(third.next_updates.is_empty());
        assert!(third.last_update.is_none());

        let first = projects.find(ProjectId(1)).unwrap();
        assert_eq!(first.next_updates.len(), 4);
        assert_eq!(first.last_update.as_deref(), Some("Last update."));
    }

    #[test]
    fn test_from_toml_str_parses_projects() {
        let toml = r#"
title = "Rollout"

[[project]]
id = 7
name = "Network"
description = "Switches"
progress = 80
next_updates = ["Vendor sign-off", ""]
last_update = ""

[[project]]
id = 8
name = "WMS"
progress = 20
"#;
        let projects = Projects::from_toml_str(toml).unwrap();
        assert_eq!(projects.title(), "Rollout");
        assert_eq!(projects.subtitle(), DEFAULT_SUBTITLE);
        assert_eq!(projects.len(), 2);

        let network = projects.get(0).unwrap();
        assert_eq!(network.id, ProjectId(7));
        assert_eq!(network.next_updates, vec!["Vendor sign-off".to_string()]);
        assert!(network.last_update.is_none());

        let wms = projects.get(1).unwrap();
        assert_eq!(wms.description, "");
        assert!(wms.next_updates.is_empty());
    }

    #[test]
    fn test_from_toml_str_empty_file_is_empty_collection() {
        let projects = Projects::from_toml_str("").unwrap();
        assert!(projects.is_empty());
        assert_eq!(projects.title(), DEFAULT_TITLE);
    }

    #[test]
    fn test_from_toml_str_invalid() {
        let err = Projects::from_toml_str("[[project]]\nid = \"x\"").unwrap_err();
        assert!(matches!(err, BoardError::InvalidProjects(_)));
    }

    #[test]
    fn test_out_of_range_progress_is_kept() {
        let toml = "[[project]]\nid = 1\nname = \"a\"\nprogress = 150\n";
        let projects = Projects::from_toml_str(toml).unwrap();
        assert_eq!(projects.get(0).unwrap().progress, 150);
    }

    #[test]
    fn test_duplicate_ids_reported_once() {
        let projects = Projects::new(
            "t",
            "s",
            vec![
                Project::new(1, "a", "", 0),
                Project::new(2, "b", "", 0),
                Project::new(1, "c", "", 0),
                Project::new(1, "d", "", 0),
            ],
        );
        assert_eq!(projects.duplicate_ids(), vec![ProjectId(1)]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Projects::load(Path::new("/nonexistent/projects.toml")).unwrap_err();
        assert!(matches!(err, BoardError::ProjectsNotFound(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[[project]]\nid = 1\nname = \"a\"\nprogress = 40").unwrap();
        let projects = Projects::load(file.path()).unwrap();
        assert_eq!(projects.len(), 1);
    }

    #[test]
    fn test_load_invalid_file_names_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not = [valid").unwrap();
        let err = Projects::load(file.path()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains(&file.path().display().to_string()));
    }
}
