//! Processing parameters

use serde::Serialize;

use crate::{DenoiseError, DenoiseResult};

/// Parameters for one processing invocation
///
/// The hop is always half the window (50% overlap).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProcessingParameters {
    window_size: usize,
    hop_size: usize,
    alpha: f32,
    beta: f32,
}

impl ProcessingParameters {
    /// Validate and build parameters.
    ///
    /// `window_size` must be at least 2 so the hop is non-zero; `alpha` and `beta`
    /// must be finite and non-negative.
    pub fn new(window_size: usize, alpha: f32, beta: f32) -> DenoiseResult<Self> {
        if window_size < 2 {
            return Err(DenoiseError::InvalidParameter(format!(
                "window size must be at least 2, got {}",
                window_size
            )));
        }
        if !alpha.is_finite() || alpha < 0.0 {
            return Err(DenoiseError::InvalidParameter(format!(
                "alpha must be a non-negative number, got {}",
                alpha
            )));
        }
        if !beta.is_finite() || beta < 0.0 {
            return Err(DenoiseError::InvalidParameter(format!(
                "beta must be a non-negative number, got {}",
                beta
            )));
        }

        Ok(Self {
            window_size,
            hop_size: window_size / 2,
            alpha,
            beta,
        })
    }

    /// Window (and FFT) length `M`
    #[inline]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Hop `R = M / 2`
    #[inline]
    pub fn hop_size(&self) -> usize {
        self.hop_size
    }

    /// Over-subtraction factor
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Spectral floor fraction
    #[inline]
    pub fn beta(&self) -> f32 {
        self.beta
    }

    /// Number of non-negative frequency bins, `M / 2 + 1`
    #[inline]
    pub fn num_bins(&self) -> usize {
        self.window_size / 2 + 1
    }
}

impl Default for ProcessingParameters {
    fn default() -> Self {
        Self {
            window_size: 256,
            hop_size: 128,
            alpha: 1.05,
            beta: 0.001,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ProcessingParameters::default();
        assert_eq!(params.window_size(), 256);
        assert_eq!(params.hop_size(), 128);
        assert_eq!(params.num_bins(), 129);
        assert_eq!(params, ProcessingParameters::new(256, 1.05, 0.001).unwrap());
    }

    #[test]
    fn test_hop_is_half_window() {
        let params = ProcessingParameters::new(1024, 2.0, 0.01).unwrap();
        assert_eq!(params.hop_size(), 512);

        let odd = ProcessingParameters::new(255, 1.0, 0.0).unwrap();
        assert_eq!(odd.hop_size(), 127);
        assert_eq!(odd.num_bins(), 128);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            ProcessingParameters::new(0, 1.0, 0.0),
            Err(DenoiseError::InvalidParameter(_))
        ));
        assert!(matches!(
            ProcessingParameters::new(1, 1.0, 0.0),
            Err(DenoiseError::InvalidParameter(_))
        ));
        assert!(ProcessingParameters::new(256, -0.1, 0.0).is_err());
        assert!(ProcessingParameters::new(256, 1.0, -0.001).is_err());
        assert!(ProcessingParameters::new(256, f32::NAN, 0.0).is_err());
    }

    #[test]
    fn test_zero_alpha_beta_allowed() {
        assert!(ProcessingParameters::new(2, 0.0, 0.0).is_ok());
    }
}
