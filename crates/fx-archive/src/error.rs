//! Archive extraction errors.

use std::path::PathBuf;
use thiserror::Error;

pub type ArchiveResult<T> = Result<T, ArchiveError>;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Model archive not found: {path}")]
    ArchiveNotFound { path: PathBuf },

    #[error("No XML document inside archive: {path}")]
    NoXmlInArchive { path: PathBuf },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unreadable archive {path}: {source}")]
    Zip {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

impl ArchiveError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
