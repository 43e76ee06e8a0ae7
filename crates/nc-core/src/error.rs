//! Error types for the noise canceller engine

use thiserror::Error;

/// Engine error type
///
/// Every failure is detected before any partial result is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DenoiseError {
    /// Malformed or empty decoded buffer
    #[error("Format error: {0}")]
    Format(String),

    /// Input and noise recordings use different sample rates
    #[error("Sample rate mismatch: input={input}Hz, noise={noise}Hz")]
    SampleRateMismatch { input: u32, noise: u32 },

    /// Signal shorter than one analysis window
    #[error("Insufficient length: {length} samples, window needs {window}")]
    InsufficientLength { length: usize, window: usize },

    /// Spectra with different bin counts combined
    #[error("Shape mismatch: expected {expected} bins, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Parameter outside its valid range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// FFT backend rejected a buffer
    #[error("FFT error: {0}")]
    Fft(String),
}

/// Result type alias
pub type DenoiseResult<T> = Result<T, DenoiseError>;
