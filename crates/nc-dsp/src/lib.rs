//! nc-dsp: Spectral-subtraction denoising primitives
//!
//! Signal flow:
//!
//! ```text
//! decoded samples ─► normalize ─► StftProcessor::analyze ─► Spectrogram
//!                                                             │
//!        noise Spectrogram ─► NoiseProfile ─► SpectralSubtractor
//!                                                             │
//!   OutputScaler ◄─ StftProcessor::synthesize ◄─ DenoisedSpectrogram
//! ```
//!
//! Analysis and synthesis share one `StftProcessor` and one Hann `Window`, so a
//! forward transform followed by the inverse reproduces the input wherever the
//! overlap-add coverage is complete.

pub mod db;
pub mod normalize;
pub mod profile;
pub mod scale;
pub mod spectrogram;
pub mod stft;
pub mod subtract;
pub mod window;

pub use db::{DB_EPSILON, magnitude_to_db, magnitudes_to_db};
pub use normalize::{SampleData, to_mono_signal};
pub use profile::NoiseProfile;
pub use scale::{OutputScaler, ScaledOutput};
pub use spectrogram::Spectrogram;
pub use stft::{StftProcessor, frame_count};
pub use subtract::{DenoisedSpectrogram, SpectralSubtractor};
pub use window::Window;

pub use num_complex::Complex32;
