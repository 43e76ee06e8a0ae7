//! Magnitude spectral subtraction with a spectral floor
//!
//! `|Y| = max(β·|X|, |X| − α·|N|)`, phase taken unchanged from `X`.

use ndarray::{Array2, Zip};
use num_complex::Complex32;

use nc_core::{DenoiseError, DenoiseResult, ProcessingParameters};

use crate::{NoiseProfile, Spectrogram};

/// Denoised magnitudes paired with the input's phase
///
/// Same shape as the input spectrogram.
#[derive(Debug, Clone, PartialEq)]
pub struct DenoisedSpectrogram {
    frequencies: Vec<f64>,
    times: Vec<f64>,
    magnitude: Array2<f32>,
    phase: Array2<f32>,
}

impl DenoisedSpectrogram {
    #[inline]
    pub fn magnitude(&self) -> &Array2<f32> {
        &self.magnitude
    }

    /// Phase of the original input, per frame and bin
    #[inline]
    pub fn phase(&self) -> &Array2<f32> {
        &self.phase
    }

    #[inline]
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Recombine as `|Y| · e^{i·φ}` for resynthesis
    pub fn to_spectrogram(&self) -> DenoiseResult<Spectrogram> {
        let mut matrix = Array2::<Complex32>::zeros(self.magnitude.dim());
        Zip::from(&mut matrix)
            .and(&self.magnitude)
            .and(&self.phase)
            .for_each(|c, &mag, &phase| *c = Complex32::from_polar(mag, phase));
        Spectrogram::from_parts(self.frequencies.clone(), self.times.clone(), matrix)
    }
}

/// Over-subtraction (α) and floor (β) policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralSubtractor {
    alpha: f32,
    beta: f32,
}

impl SpectralSubtractor {
    pub fn new(params: &ProcessingParameters) -> Self {
        Self {
            alpha: params.alpha(),
            beta: params.beta(),
        }
    }

    /// Output magnitude for one bin
    #[inline]
    pub fn subtract_bin(&self, magnitude: f32, noise: f32) -> f32 {
        (magnitude - self.alpha * noise).max(self.beta * magnitude)
    }

    /// Subtract the profile (broadcast over frames) from every frame of `input`
    pub fn apply(
        &self,
        input: &Spectrogram,
        profile: &NoiseProfile,
    ) -> DenoiseResult<DenoisedSpectrogram> {
        if profile.num_bins() != input.num_bins() {
            return Err(DenoiseError::ShapeMismatch {
                expected: input.num_bins(),
                actual: profile.num_bins(),
            });
        }

        let mut magnitude = input.magnitudes();
        let phase = input.phases();
        let noise = profile.magnitude();

        for mut frame in magnitude.outer_iter_mut() {
            for (mag, &n) in frame.iter_mut().zip(noise) {
                *mag = self.subtract_bin(*mag, n);
            }
        }

        Ok(DenoisedSpectrogram {
            frequencies: input.frequencies().to_vec(),
            times: input.times().to_vec(),
            magnitude,
            phase,
        })
    }
}
