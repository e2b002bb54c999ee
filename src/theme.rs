//! Light and dark themes.
//!
//! A [`Theme`] selects two independent sets of colors: the status tiers used
//! by [`crate::classify`] and the [`Chrome`] palette used for everything else
//! the dashboard draws (background, text, borders).

use clap::ValueEnum;
use ratatui::style::Color;
use serde::Deserialize;
use std::fmt;

/// The active color theme. Sessions start in [`Theme::Light`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Non-status colors for this theme.
    pub fn chrome(self) -> &'static Chrome {
        match self {
            Theme::Light => &LIGHT_CHROME,
            Theme::Dark => &DARK_CHROME,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Colors for the parts of the dashboard that do not encode status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub background: Color,
    pub surface: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub border: Color,
    pub border_focused: Color,
    pub accent: Color,
    pub gauge_track: Color,
}

/// Light chrome: white cards on a pale gray page.
pub const LIGHT_CHROME: Chrome = Chrome {
    background: Color::Rgb(246, 246, 248),
    surface: Color::Rgb(255, 255, 255),
    text_primary: Color::Rgb(28, 28, 30),
    text_secondary: Color::Rgb(99, 99, 102),
    border: Color::Rgb(209, 213, 219),
    border_focused: Color::Rgb(37, 99, 235),
    accent: Color::Rgb(37, 99, 235),
    gauge_track: Color::Rgb(229, 231, 235),
};

/// Dark chrome, Dracula-based.
pub const DARK_CHROME: Chrome = Chrome {
    background: Color::Rgb(40, 42, 54),
    surface: Color::Rgb(68, 71, 90),
    text_primary: Color::Rgb(248, 248, 242),
    text_secondary: Color::Rgb(189, 147, 249),
    border: Color::Rgb(98, 114, 164),
    border_focused: Color::Rgb(139, 233, 253),
    accent: Color::Rgb(255, 121, 198),
    gauge_track: Color::Rgb(40, 42, 54),
};
