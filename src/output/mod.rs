//! Terminal output formatting for projboard.
//!
//! Plain (non-interactive) rendering of the dashboard for the `list`,
//! `stats` and `config` commands:
//!
//! - [`cards`] - Project cards with status and optional detail section
//! - [`stats`] - Summary statistics
//! - [`messages`] - Error, warning, and info messages

pub mod cards;
pub mod messages;
pub mod stats;

use ratatui::style::Color;
use terminal_size::{terminal_size, Width};

/// ANSI color codes for terminal output.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RED: &str = "\x1b[31m";
    pub const GRAY: &str = "\x1b[90m";
}

pub use colors::*;

pub use cards::{format_project_card, print_header, print_project_list};
pub use messages::{print_error, print_info, print_warning};
pub use stats::{format_stats, print_stats};

const DEFAULT_TERMINAL_WIDTH: usize = 80;
const MIN_CARD_WIDTH: usize = 30;
const MAX_CARD_WIDTH: usize = 72;

/// Width used for card rules and progress bars, clamped to a readable range.
pub fn card_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
        .clamp(MIN_CARD_WIDTH, MAX_CARD_WIDTH)
}

/// 24-bit foreground escape for an RGB color; empty for anything else.
pub fn ansi_fg(color: Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("\x1b[38;2;{};{};{}m", r, g, b),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ansi_fg_rgb() {
        assert_eq!(ansi_fg(Color::Rgb(1, 2, 3)), "\x1b[38;2;1;2;3m");
        assert_eq!(ansi_fg(Color::Reset), "");
    }

    #[test]
    fn test_card_width_in_range() {
        let w = card_width();
        assert!((MIN_CARD_WIDTH..=MAX_CARD_WIDTH).contains(&w));
    }
}
