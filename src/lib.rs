pub mod classify;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod project;
pub mod stats;
pub mod theme;
pub mod tui;
pub mod view_state;

pub use classify::{status_color, status_label, Band};
pub use config::Config;
pub use error::{BoardError, Result};
pub use project::{Project, ProjectId, Projects};
pub use stats::Stats;
pub use theme::Theme;
pub use view_state::ViewState;
