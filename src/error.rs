use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Projects file not found: {0}")]
    ProjectsNotFound(PathBuf),

    #[error("Invalid projects file: {0}")]
    InvalidProjects(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BoardError>;
