//! Stationary noise profile estimation

use ndarray::ArrayView1;
use num_complex::Complex32;

use crate::Spectrogram;

/// Time-averaged magnitude spectrum of a noise recording
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseProfile {
    /// Mean magnitude per bin
    magnitude: Vec<f32>,
    /// Number of frames averaged
    frame_count: usize,
}

/// Running per-bin magnitude sums
struct ProfileAccumulator {
    sums: Vec<f64>,
    frames: usize,
}

impl ProfileAccumulator {
    fn new(bins: usize) -> Self {
        Self {
            sums: vec![0.0; bins],
            frames: 0,
        }
    }

    fn add_frame(&mut self, spectrum: ArrayView1<'_, Complex32>) {
        for (sum, c) in self.sums.iter_mut().zip(spectrum.iter()) {
            *sum += c.norm() as f64;
        }
        self.frames += 1;
    }

    fn finalize(self) -> NoiseProfile {
        let n = self.frames.max(1) as f64;
        NoiseProfile {
            magnitude: self.sums.iter().map(|&s| (s / n) as f32).collect(),
            frame_count: self.frames,
        }
    }
}

impl NoiseProfile {
    /// Arithmetic mean of `|X|` across all frames, per bin.
    ///
    /// Assumes the noise is stationary over the recording.
    pub fn estimate(noise: &Spectrogram) -> Self {
        let mut acc = ProfileAccumulator::new(noise.num_bins());
        for frame in noise.matrix().outer_iter() {
            acc.add_frame(frame);
        }
        let profile = acc.finalize();

        log::debug!(
            "Noise profile: {} frames, {} bins, mean level {:.3e}",
            profile.frame_count,
            profile.num_bins(),
            profile.mean_level()
        );
        profile
    }

    /// Profile from precomputed per-bin magnitudes
    pub fn from_magnitudes(magnitude: Vec<f32>) -> Self {
        Self {
            magnitude,
            frame_count: 1,
        }
    }

    #[inline]
    pub fn magnitude(&self) -> &[f32] {
        &self.magnitude
    }

    #[inline]
    pub fn num_bins(&self) -> usize {
        self.magnitude.len()
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Mean magnitude over all bins
    pub fn mean_level(&self) -> f32 {
        if self.magnitude.is_empty() {
            return 0.0;
        }
        self.magnitude.iter().sum::<f32>() / self.magnitude.len() as f32
    }
}
