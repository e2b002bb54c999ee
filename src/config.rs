use crate::error::{BoardError, Result};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The base config directory name under ~/.config/
const CONFIG_DIR_NAME: &str = "projboard";

const CONFIG_FILENAME: &str = "config.toml";

/// User preferences for the dashboard.
///
/// Every field has a default, so a partial file (or no file at all) is valid.
///
/// # Example
///
/// ```toml
/// # Theme the dashboard starts in: "light" or "dark"
/// theme = "dark"
///
/// # Projects file loaded when --projects is not given
/// projects_file = "/home/me/rollout.toml"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Theme the session starts in.
    #[serde(default)]
    pub theme: Theme,

    /// Projects file to load instead of the built-in sample set.
    #[serde(default)]
    pub projects_file: Option<PathBuf>,
}

impl Config {
    /// Apply command-line overrides on top of the file values.
    pub fn with_overrides(mut self, theme: Option<Theme>, projects_file: Option<PathBuf>) -> Self {
        if let Some(theme) = theme {
            self.theme = theme;
        }
        if projects_file.is_some() {
            self.projects_file = projects_file;
        }
        self
    }
}

/// Get the projboard config directory (`~/.config/projboard`).
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .ok_or_else(|| BoardError::Config("Could not determine config directory".to_string()))
}

/// Get the path to the config file.
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILENAME))
}

/// Load the configuration from the default location.
///
/// A missing file yields the defaults; nothing is written.
pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

/// Load the configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content).map_err(|e| {
        BoardError::Config(format!(
            "Failed to parse config file at {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(config)
}

/// Write a commented config file if none exists yet.
///
/// Returns `true` if a file was created.
pub fn init_config_at(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, generate_config_with_comments(&Config::default())?)?;
    Ok(true)
}

/// A single `projects_file = "..."` line, quoted by the toml serializer.
#[derive(Serialize)]
struct ProjectsFileLine<'a> {
    projects_file: &'a str,
}

/// Generate config file content with explanatory comments.
pub fn generate_config_with_comments(config: &Config) -> Result<String> {
    let projects_line = match &config.projects_file {
        Some(path) => {
            let path = path.to_string_lossy();
            toml::to_string(&ProjectsFileLine {
                projects_file: &path,
            })
            .map_err(|e| BoardError::Config(format!("Failed to write projects_file: {}", e)))?
        }
        None => "# projects_file = \"/path/to/projects.toml\"\n".to_string(),
    };

    Ok(format!(
        r#"# projboard configuration

# Theme the dashboard starts in
# - "light" (default)
# - "dark"
# Press 't' in the dashboard to switch at any time.
theme = "{}"

# Projects file loaded at startup instead of the built-in sample set.
# Overridden by --projects on the command line.
{}"#,
        config.theme, projects_line
    ))
}
