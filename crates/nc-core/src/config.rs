//! User-facing denoise configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{DenoiseError, DenoiseResult, ProcessingParameters};

/// Default prefix for cleaned output files
pub const DEFAULT_OUTPUT_PREFIX: &str = "cleaned_";

/// Denoise configuration, as entered in a settings form or loaded from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DenoiseConfig {
    /// Window / FFT size `M`
    pub window_size: usize,
    /// Over-subtraction factor
    pub alpha: f32,
    /// Spectral floor fraction
    pub beta: f32,
    /// Output peak as a fraction of full scale (0, 1]
    pub headroom: f32,
    /// File name prefix for the cleaned output
    pub output_prefix: String,
    /// Output directory (None = Downloads, then the input's directory)
    pub output_dir: Option<PathBuf>,
}

impl Default for DenoiseConfig {
    fn default() -> Self {
        Self {
            window_size: 256,
            alpha: 1.05,
            beta: 0.001,
            headroom: 0.95,
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            output_dir: None,
        }
    }
}

impl DenoiseConfig {
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f32) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_headroom(mut self, headroom: f32) -> Self {
        self.headroom = headroom;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Validated processing parameters
    pub fn parameters(&self) -> DenoiseResult<ProcessingParameters> {
        ProcessingParameters::new(self.window_size, self.alpha, self.beta)
    }

    /// Check every field; returns the validated parameters
    pub fn validate(&self) -> DenoiseResult<ProcessingParameters> {
        if !(self.headroom > 0.0 && self.headroom <= 1.0) {
            return Err(DenoiseError::InvalidParameter(format!(
                "headroom must be in (0, 1], got {}",
                self.headroom
            )));
        }
        let params = self.parameters()?;
        log::debug!(
            "Config validated: M={}, R={}, alpha={}, beta={}, headroom={}",
            params.window_size(),
            params.hop_size(),
            params.alpha(),
            params.beta(),
            self.headroom
        );
        Ok(params)
    }

    /// Config that reproduces the given parameters, other fields from `self`
    pub fn with_parameters(&self, params: &ProcessingParameters) -> Self {
        Self {
            window_size: params.window_size(),
            alpha: params.alpha(),
            beta: params.beta(),
            ..self.clone()
        }
    }
}
