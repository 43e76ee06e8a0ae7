//! Error types for the processing pipeline

use nc_core::DenoiseError;
use nc_file::FileError;
use thiserror::Error;

/// Pipeline errors
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Denoise(#[from] DenoiseError),

    #[error(transparent)]
    File(#[from] FileError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("No output path set")]
    NoOutputPath,
}

/// Result type for pipeline operations
pub type EngineResult<T> = Result<T, EngineError>;
