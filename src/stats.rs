//! Aggregate statistics over the project collection.

use crate::project::Project;

/// Progress at or above which a project counts as nearly complete.
pub const NEAR_COMPLETE_THRESHOLD: i32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    /// Mean progress rounded half-up, `None` for an empty collection.
    pub average_progress: Option<i64>,
    pub near_complete: usize,
}

impl Stats {
    pub fn from_projects(projects: &[Project]) -> Self {
        let total = projects.len();
        let sum: i64 = projects.iter().map(|p| i64::from(p.progress)).sum();

        Self {
            total,
            average_progress: rounded_mean(sum, total),
            near_complete: projects
                .iter()
                .filter(|p| p.progress >= NEAR_COMPLETE_THRESHOLD)
                .count(),
        }
    }

    /// Average formatted as a percentage, or "-" when there is nothing to average.
    pub fn average_display(&self) -> String {
        match self.average_progress {
            Some(avg) => format!("{}%", avg),
            None => "-".to_string(),
        }
    }
}

/// `round(sum / count)` with halves rounded toward positive infinity.
fn rounded_mean(sum: i64, count: usize) -> Option<i64> {
    if count == 0 {
        return None;
    }
    let count = count as i64;
    Some((2 * sum + count).div_euclid(2 * count))
}
