//! nc-core: Shared types for the noise canceller
//!
//! Foundational types used across all nc-* crates:
//! - `AudioSignal`: canonical mono float signal
//! - `ProcessingParameters` / `DenoiseConfig`: per-run settings
//! - `DenoiseError`: failure taxonomy of the processing engine

mod config;
mod error;
mod params;
mod signal;

pub use config::*;
pub use error::*;
pub use params::*;
pub use signal::*;

/// Largest magnitude of a 16-bit PCM sample, used for output scaling
pub const PCM16_MAX: f32 = 32767.0;
