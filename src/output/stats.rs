//! Summary statistics display.

use crate::stats::Stats;

use super::colors::*;

/// Format the three summary statistics, one per line.
pub fn format_stats(stats: &Stats) -> String {
    [
        format!("{BOLD}{:>6}{RESET}  {GRAY}Total projects{RESET}", stats.total),
        format!(
            "{BOLD}{:>6}{RESET}  {GRAY}Average progress{RESET}",
            stats.average_display()
        ),
        format!(
            "{BOLD}{:>6}{RESET}  {GRAY}Nearly complete{RESET}",
            stats.near_complete
        ),
    ]
    .join("\n")
}

/// Print the summary statistics.
pub fn print_stats(stats: &Stats) {
    println!("{}", format_stats(stats));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stats() {
        let stats = Stats {
            total: 3,
            average_progress: Some(60),
            near_complete: 1,
        };
        let text = format_stats(&stats);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains('3') && lines[0].contains("Total projects"));
        assert!(lines[1].contains("60%") && lines[1].contains("Average progress"));
        assert!(lines[2].contains('1') && lines[2].contains("Nearly complete"));
    }

    #[test]
    fn test_format_stats_empty() {
        let stats = Stats::from_projects(&[]);
        assert!(format_stats(&stats).contains('-'));
    }
}
