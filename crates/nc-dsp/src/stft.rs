//! Short-time Fourier transform pair
//!
//! Frame `i` covers samples `[i*R, i*R + M)`. Analysis multiplies each frame by
//! the Hann window and keeps the `M/2 + 1` non-negative bins of a real FFT.
//! Synthesis inverse-transforms each frame, applies the same window, and
//! overlap-adds with normalization by the summed squared window.

use std::sync::Arc;

use ndarray::{Array2, ArrayView1};
use num_complex::Complex32;
use realfft::{ComplexToReal, FftError, RealFftPlanner, RealToComplex};

use nc_core::{AudioSignal, DenoiseError, DenoiseResult, ProcessingParameters};

use crate::{Spectrogram, Window};

/// Replaces zero overlap-add coverage to avoid division by zero
const COVERAGE_EPSILON: f32 = 1e-6;

/// Number of full frames in a signal: `floor((len - M) / R) + 1`.
///
/// Fails with `InsufficientLength` when the signal is shorter than one window.
pub fn frame_count(len: usize, window_size: usize, hop_size: usize) -> DenoiseResult<usize> {
    if window_size == 0 || hop_size == 0 {
        return Err(DenoiseError::InvalidParameter(format!(
            "window {} / hop {} must be positive",
            window_size, hop_size
        )));
    }
    if len < window_size {
        return Err(DenoiseError::InsufficientLength {
            length: len,
            window: window_size,
        });
    }
    Ok((len - window_size) / hop_size + 1)
}

fn fft_error(err: FftError) -> DenoiseError {
    DenoiseError::Fft(err.to_string())
}

/// Forward/inverse STFT sharing one window and one FFT plan pair
pub struct StftProcessor {
    /// Window length `M`
    window_size: usize,
    /// Hop `R`
    hop_size: usize,
    /// Analysis and synthesis window
    window: Window,
    /// Forward real FFT
    fft_forward: Arc<dyn RealToComplex<f32>>,
    /// Inverse real FFT
    fft_inverse: Arc<dyn ComplexToReal<f32>>,
}

impl StftProcessor {
    /// Plan transforms for the given (validated) parameters
    pub fn new(params: &ProcessingParameters) -> Self {
        let window_size = params.window_size();
        let mut planner = RealFftPlanner::<f32>::new();

        Self {
            window_size,
            hop_size: params.hop_size(),
            window: Window::hann(window_size),
            fft_forward: planner.plan_fft_forward(window_size),
            fft_inverse: planner.plan_fft_inverse(window_size),
        }
    }

    #[inline]
    pub fn window(&self) -> &Window {
        &self.window
    }

    #[inline]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    #[inline]
    pub fn hop_size(&self) -> usize {
        self.hop_size
    }

    #[inline]
    pub fn num_bins(&self) -> usize {
        self.window_size / 2 + 1
    }

    /// Bin `k` sits at `k * sample_rate / M` Hz
    pub fn frequencies(&self, sample_rate: u32) -> Vec<f64> {
        let resolution = sample_rate as f64 / self.window_size as f64;
        (0..self.num_bins()).map(|k| k as f64 * resolution).collect()
    }

    /// Frame `i` is centered at `(i*R + M/2) / sample_rate` seconds
    pub fn frame_times(&self, num_frames: usize, sample_rate: u32) -> Vec<f64> {
        let half = self.window_size as f64 / 2.0;
        (0..num_frames)
            .map(|i| ((i * self.hop_size) as f64 + half) / sample_rate as f64)
            .collect()
    }

    /// Length of the signal rebuilt from `num_frames` frames
    #[inline]
    pub fn output_len(&self, num_frames: usize) -> usize {
        (num_frames.max(1) - 1) * self.hop_size + self.window_size
    }

    /// Forward transform: windowed frames → complex spectrogram
    pub fn analyze(&self, signal: &AudioSignal) -> DenoiseResult<Spectrogram> {
        let samples = signal.samples();
        let num_frames = frame_count(samples.len(), self.window_size, self.hop_size)?;
        let num_bins = self.num_bins();

        let mut matrix = Array2::<Complex32>::zeros((num_frames, num_bins));
        let mut frame = self.fft_forward.make_input_vec();
        let mut spectrum = self.fft_forward.make_output_vec();
        let mut scratch = self.fft_forward.make_scratch_vec();

        for (i, mut row) in matrix.outer_iter_mut().enumerate() {
            let start = i * self.hop_size;
            let segment = &samples[start..start + self.window_size];

            for ((dst, &x), &w) in frame.iter_mut().zip(segment).zip(self.window.coeffs()) {
                *dst = x * w;
            }

            self.fft_forward
                .process_with_scratch(&mut frame, &mut spectrum, &mut scratch)
                .map_err(fft_error)?;

            row.assign(&ArrayView1::from(spectrum.as_slice()));
        }

        log::debug!(
            "STFT: {} samples -> {} frames x {} bins (M={}, R={})",
            samples.len(),
            num_frames,
            num_bins,
            self.window_size,
            self.hop_size
        );

        Spectrogram::from_parts(
            self.frequencies(signal.sample_rate()),
            self.frame_times(num_frames, signal.sample_rate()),
            matrix,
        )
    }

    /// Per-sample sum of squared window values over every covering frame.
    ///
    /// Returns the normalization vector (zero entries replaced by an epsilon)
    /// and a mask of the positions no frame covers.
    fn overlap_normalization(&self, num_frames: usize) -> (Vec<f32>, Vec<bool>) {
        let mut norm = vec![0.0f32; self.output_len(num_frames)];
        for i in 0..num_frames {
            let start = i * self.hop_size;
            for (acc, &w) in norm[start..start + self.window_size]
                .iter_mut()
                .zip(self.window.coeffs())
            {
                *acc += w * w;
            }
        }

        let uncovered: Vec<bool> = norm.iter().map(|&v| v == 0.0).collect();
        for (v, _) in norm.iter_mut().zip(&uncovered).filter(|(_, empty)| **empty) {
            *v = COVERAGE_EPSILON;
        }
        (norm, uncovered)
    }

    /// Inverse transform: weighted overlap-add of inverse-FFT frames.
    ///
    /// Output length is `(n_frames - 1) * R + M`.
    pub fn synthesize(&self, spectrogram: &Spectrogram) -> DenoiseResult<Vec<f32>> {
        let num_bins = self.num_bins();
        if spectrogram.num_bins() != num_bins {
            return Err(DenoiseError::ShapeMismatch {
                expected: num_bins,
                actual: spectrogram.num_bins(),
            });
        }

        let num_frames = spectrogram.num_frames();
        let (norm, uncovered) = self.overlap_normalization(num_frames);
        let mut output = vec![0.0f32; norm.len()];

        let mut spectrum = self.fft_inverse.make_input_vec();
        let mut frame = self.fft_inverse.make_output_vec();
        let mut scratch = self.fft_inverse.make_scratch_vec();
        // realfft's inverse is unnormalized
        let scale = 1.0 / self.window_size as f32;
        let has_nyquist = self.window_size % 2 == 0;

        for (i, row) in spectrogram.matrix().outer_iter().enumerate() {
            for (dst, src) in spectrum.iter_mut().zip(row.iter()) {
                *dst = *src;
            }
            // A real signal has purely real DC and Nyquist bins
            spectrum[0].im = 0.0;
            if has_nyquist {
                spectrum[num_bins - 1].im = 0.0;
            }

            self.fft_inverse
                .process_with_scratch(&mut spectrum, &mut frame, &mut scratch)
                .map_err(fft_error)?;

            let start = i * self.hop_size;
            let span = start..start + self.window_size;
            for (((out, &x), &w), &n) in output[span.clone()]
                .iter_mut()
                .zip(&frame)
                .zip(self.window.coeffs())
                .zip(&norm[span])
            {
                *out += x * scale * w / n;
            }
        }

        for (out, _) in output.iter_mut().zip(&uncovered).filter(|(_, empty)| **empty) {
            *out = 0.0;
        }

        log::debug!(
            "ISTFT: {} frames -> {} samples",
            num_frames,
            output.len()
        );

        Ok(output)
    }
}
