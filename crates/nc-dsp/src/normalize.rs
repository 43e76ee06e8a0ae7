//! Signal normalizer: decoded container samples → canonical mono float

use nc_core::{AudioSignal, DenoiseError, DenoiseResult};

/// Interleaved decoded samples in their source encoding
#[derive(Debug, Clone, PartialEq)]
pub enum SampleData {
    /// Signed integer PCM, `bits_per_sample` wide (stored in i32)
    Int {
        bits_per_sample: u16,
        samples: Vec<i32>,
    },
    /// Floating point samples, passed through unscaled
    Float(Vec<f32>),
}

impl SampleData {
    /// Number of interleaved samples
    pub fn len(&self) -> usize {
        match self {
            Self::Int { samples, .. } => samples.len(),
            Self::Float(samples) => samples.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Largest positive value of a signed integer `bits` wide
fn int_full_scale(bits: u16) -> DenoiseResult<f64> {
    if !(2..=32).contains(&bits) {
        return Err(DenoiseError::Format(format!(
            "unsupported integer sample width: {} bits",
            bits
        )));
    }
    Ok(((1i64 << (bits - 1)) - 1) as f64)
}

/// Average interleaved channels sample-wise
fn mix_down<T: Copy + Into<f64>>(samples: &[T], channels: usize, scale: f64) -> Vec<f32> {
    let divisor = channels as f64 * scale;
    samples
        .chunks_exact(channels)
        .map(|frame| (frame.iter().map(|&s| s.into()).sum::<f64>() / divisor) as f32)
        .collect()
}

/// Convert a decoded buffer into a mono signal in [-1, 1].
///
/// Multi-channel input is averaged (not summed). Integer input is divided by the
/// type's full-scale value; float input passes through unchanged.
pub fn to_mono_signal(
    sample_rate: u32,
    channels: usize,
    data: &SampleData,
) -> DenoiseResult<AudioSignal> {
    if sample_rate == 0 {
        return Err(DenoiseError::Format("sample rate must be positive".into()));
    }
    if channels == 0 {
        return Err(DenoiseError::Format("channel count must be positive".into()));
    }
    if data.is_empty() {
        return Err(DenoiseError::Format("empty sample buffer".into()));
    }
    if data.len() % channels != 0 {
        return Err(DenoiseError::Format(format!(
            "{} samples do not divide into {} channels",
            data.len(),
            channels
        )));
    }

    let mono = match data {
        SampleData::Int {
            bits_per_sample,
            samples,
        } => mix_down(samples, channels, int_full_scale(*bits_per_sample)?),
        SampleData::Float(samples) => mix_down(samples, channels, 1.0),
    };

    log::debug!(
        "Normalized {} channel(s) to {} mono samples at {} Hz",
        channels,
        mono.len(),
        sample_rate
    );

    AudioSignal::new(sample_rate, mono)
}
