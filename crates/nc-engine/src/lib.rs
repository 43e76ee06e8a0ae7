//! nc-engine: noise cancelling pipeline
//!
//! Denoises a recording against a reference noise sample:
//!
//! ```text
//! input.wav ─┐                        ┌─ STFT ─┐
//!            ├─ decode ─► normalize ──┤        ├─► subtract ─► ISTFT ─► scale ─► cleaned
//! noise.wav ─┘                        └─ STFT ─► profile ─┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nc_engine::{DenoiseConfig, NoiseCanceller};
//!
//! let canceller = NoiseCanceller::new(DenoiseConfig::default())?;
//! let result = canceller.process_files("speech.wav", "room_tone.wav")?;
//! result.save()?;
//! ```

mod canceller;
mod config;
mod error;
mod output;
mod report;
mod result;

pub use canceller::*;
pub use config::*;
pub use error::*;
pub use output::*;
pub use report::*;
pub use result::*;

pub use nc_core::{AudioSignal, DenoiseConfig, DenoiseError, ProcessingParameters};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
