//! Error types for the marga CLI

use thiserror::Error;

/// CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Maze error: {0}")]
    Maze(String),

    #[error("Configuration error: {0}")]
    Config(#[from] marga::ConfigLoadError),

    #[error("Search error: {0}")]
    Search(#[from] marga::SearchError),
}

pub type Result<T> = std::result::Result<T, CliError>;
