//! Spectral-subtraction noise canceller
//!
//! One run: validate rates → STFT input and noise (concurrently) → average the
//! noise magnitudes → subtract with floor → ISTFT → scale. A run either
//! completes or fails; no partial result is returned.

use std::path::Path;

use ndarray::Array2;

use nc_core::{AudioSignal, DenoiseConfig, DenoiseError, DenoiseResult, ProcessingParameters};
use nc_dsp::{
    NoiseProfile, OutputScaler, SpectralSubtractor, StftProcessor, magnitude_to_db,
    magnitudes_to_db,
};
use nc_file::read_wav;

use crate::{EngineResult, ProcessingResult, suggested_output_path};

/// Denoising engine; immutable and reusable across runs
pub struct NoiseCanceller {
    /// Settings the engine was built from
    config: DenoiseConfig,
    /// Validated window/hop/alpha/beta
    params: ProcessingParameters,
    /// Shared analysis/synthesis transform
    stft: StftProcessor,
    subtractor: SpectralSubtractor,
    scaler: OutputScaler,
}

impl NoiseCanceller {
    /// Build an engine, failing with `InvalidParameter` on bad settings
    pub fn new(config: DenoiseConfig) -> DenoiseResult<Self> {
        let params = config.validate()?;
        Ok(Self {
            stft: StftProcessor::new(&params),
            subtractor: SpectralSubtractor::new(&params),
            scaler: OutputScaler::new(config.headroom),
            params,
            config,
        })
    }

    /// Same engine with edited parameters (e.g. values changed after a first run)
    pub fn with_parameters(&self, params: &ProcessingParameters) -> DenoiseResult<Self> {
        Self::new(self.config.with_parameters(params))
    }

    #[inline]
    pub fn parameters(&self) -> &ProcessingParameters {
        &self.params
    }

    #[inline]
    pub fn config(&self) -> &DenoiseConfig {
        &self.config
    }

    /// Denoise `input` against a reference `noise` recording
    pub fn process(
        &self,
        input: &AudioSignal,
        noise: &AudioSignal,
    ) -> DenoiseResult<ProcessingResult> {
        if input.sample_rate() != noise.sample_rate() {
            return Err(DenoiseError::SampleRateMismatch {
                input: input.sample_rate(),
                noise: noise.sample_rate(),
            });
        }

        log::info!(
            "Denoising {:.2}s of audio against {:.2}s of noise (M={}, alpha={}, beta={})",
            input.duration(),
            noise.duration(),
            self.params.window_size(),
            self.params.alpha(),
            self.params.beta()
        );

        let (input_spec, noise_spec) =
            rayon::join(|| self.stft.analyze(input), || self.stft.analyze(noise));
        let input_spec = input_spec?;
        let noise_spec = noise_spec?;

        let profile = NoiseProfile::estimate(&noise_spec);
        let denoised = self.subtractor.apply(&input_spec, &profile)?;
        let reconstructed = self.stft.synthesize(&denoised.to_spectrogram()?)?;
        let scaled = self.scaler.scale(&reconstructed);

        let reference = self.stft.window().db_reference();
        let noise_db = Array2::from_shape_vec(
            (1, profile.num_bins()),
            profile
                .magnitude()
                .iter()
                .map(|&m| magnitude_to_db(m, reference))
                .collect(),
        )
        .map_err(|e| DenoiseError::Format(e.to_string()))?;

        log::info!(
            "Denoised {} frames x {} bins, output gain {:.2}",
            input_spec.num_frames(),
            input_spec.num_bins(),
            scaled.gain
        );

        Ok(ProcessingResult {
            sample_rate: input.sample_rate(),
            original: input.samples().to_vec(),
            cleaned: scaled.samples,
            cleaned_pcm: scaled.pcm,
            noise: noise.samples().to_vec(),
            frequencies: input_spec.frequencies().to_vec(),
            times: input_spec.times().to_vec(),
            original_db: magnitudes_to_db(&input_spec.magnitudes(), reference),
            cleaned_db: magnitudes_to_db(denoised.magnitude(), reference),
            noise_db,
            parameters: self.params,
            output_gain: scaled.gain,
            output_path: None,
        })
    }

    /// Decode two WAV files and denoise; fills in the suggested output path
    pub fn process_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        noise_path: Q,
    ) -> EngineResult<ProcessingResult> {
        let input_path = input_path.as_ref();
        let input = read_wav(input_path)?;
        let noise = read_wav(noise_path.as_ref())?;

        if input.sample_rate != noise.sample_rate {
            return Err(DenoiseError::SampleRateMismatch {
                input: input.sample_rate,
                noise: noise.sample_rate,
            }
            .into());
        }

        let mut result = self.process(&input.to_signal()?, &noise.to_signal()?)?;
        result.output_path = Some(suggested_output_path(
            input_path,
            self.config.output_dir.as_deref(),
            &self.config.output_prefix,
        ));
        Ok(result)
    }
}
