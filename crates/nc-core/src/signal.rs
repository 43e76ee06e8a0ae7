//! Canonical mono signal

use crate::{DenoiseError, DenoiseResult};

/// Mono float signal at a fixed sample rate
///
/// Samples are expected in [-1, 1]. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSignal {
    sample_rate: u32,
    samples: Vec<f32>,
}

impl AudioSignal {
    /// Wrap already-normalized mono samples.
    ///
    /// Fails with `Format` on an empty buffer or a zero sample rate.
    pub fn new(sample_rate: u32, samples: Vec<f32>) -> DenoiseResult<Self> {
        if sample_rate == 0 {
            return Err(DenoiseError::Format("sample rate must be positive".into()));
        }
        if samples.is_empty() {
            return Err(DenoiseError::Format("empty sample buffer".into()));
        }
        Ok(Self {
            sample_rate,
            samples,
        })
    }

    #[inline]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    #[inline]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Peak absolute sample value
    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |acc, s| acc.max(s.abs()))
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_rejects_empty() {
        assert!(matches!(
            AudioSignal::new(16000, Vec::new()),
            Err(DenoiseError::Format(_))
        ));
    }

    #[test]
    fn test_signal_rejects_zero_rate() {
        assert!(matches!(
            AudioSignal::new(0, vec![0.0; 4]),
            Err(DenoiseError::Format(_))
        ));
    }

    #[test]
    fn test_signal_accessors() {
        let signal = AudioSignal::new(8000, vec![0.25, -0.5, 0.1, 0.0]).unwrap();
        assert_eq!(signal.len(), 4);
        assert_eq!(signal.peak(), 0.5);
        assert_eq!(signal.duration(), 4.0 / 8000.0);
    }
}
