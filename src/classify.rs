//! Progress classification.
//!
//! Maps a progress percentage to one of three [`Band`]s, and from there to a
//! status label and a theme-specific status color. Every integer maps to
//! exactly one band: values below 0 are `Started`, values above 100 are
//! `Completed`.

use crate::theme::Theme;
use ratatui::style::Color;

/// Lower bound (inclusive) of the `InProgress` band.
pub const IN_PROGRESS_THRESHOLD: i32 = 50;

/// Lower bound (inclusive) of the `Completed` band.
pub const COMPLETED_THRESHOLD: i32 = 100;

/// A progress range used for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Band {
    /// progress < 50
    Started,
    /// 50 <= progress < 100
    InProgress,
    /// progress >= 100
    Completed,
}

impl Band {
    pub fn of(progress: i32) -> Self {
        if progress >= COMPLETED_THRESHOLD {
            Band::Completed
        } else if progress >= IN_PROGRESS_THRESHOLD {
            Band::InProgress
        } else {
            Band::Started
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Band::Started => "Started",
            Band::InProgress => "In Progress",
            Band::Completed => "Completed",
        }
    }
}

/// Three status tiers for one theme, weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPalette {
    pub started: Color,
    pub in_progress: Color,
    pub completed: Color,
}

impl StatusPalette {
    pub fn color(&self, band: Band) -> Color {
        match band {
            Band::Started => self.started,
            Band::InProgress => self.in_progress,
            Band::Completed => self.completed,
        }
    }
}

/// Lime, green, emerald.
pub const LIGHT_STATUS: StatusPalette = StatusPalette {
    started: Color::Rgb(0x65, 0xa3, 0x0d),
    in_progress: Color::Rgb(0x16, 0xa3, 0x4a),
    completed: Color::Rgb(0x05, 0x96, 0x69),
};

/// Dracula orange, yellow, green.
pub const DARK_STATUS: StatusPalette = StatusPalette {
    started: Color::Rgb(0xff, 0xb8, 0x6c),
    in_progress: Color::Rgb(0xf1, 0xfa, 0x8c),
    completed: Color::Rgb(0x50, 0xfa, 0x7b),
};

pub fn status_palette(theme: Theme) -> &'static StatusPalette {
    match theme {
        Theme::Light => &LIGHT_STATUS,
        Theme::Dark => &DARK_STATUS,
    }
}

/// Status label for a progress value.
pub fn status_label(progress: i32) -> &'static str {
    Band::of(progress).label()
}

/// Status color for a progress value under the given theme.
pub fn status_color(progress: i32, theme: Theme) -> Color {
    status_palette(theme).color(Band::of(progress))
}
