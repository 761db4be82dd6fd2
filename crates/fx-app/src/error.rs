//! Error types for the fx-app service layer.

use std::path::PathBuf;

/// Application error wrapping the errors of the extraction crates.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Archive(#[from] fx_archive::ArchiveError),

    #[error("Flowsheet document error: {0}")]
    Parse(#[from] fx_xml::ParseError),

    #[error("Flowsheet error: {0}")]
    Graph(#[from] fx_graph::GraphError),

    #[error(transparent)]
    Unit(#[from] fx_units::UnitError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Extraction cancelled")]
    Cancelled,

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for fx-app operations.
pub type AppResult<T> = Result<T, AppError>;
