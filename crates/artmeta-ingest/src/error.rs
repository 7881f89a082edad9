use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read source list {path}: {source}")]
    SourceListRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("source list {path} must be a JSON array of file paths")]
    SourceListShape { path: PathBuf },
    #[error("failed to read source {path}: {source}")]
    SourceRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
