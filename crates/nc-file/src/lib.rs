//! nc-file: Audio file I/O
//!
//! Minimal WAV contract (via hound):
//! - decode any PCM/float WAV into interleaved `SampleData`
//! - encode a mono 16-bit PCM result

mod error;
mod wav;

pub use error::*;
pub use wav::*;
