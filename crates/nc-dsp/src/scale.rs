//! Output level scaling for playback and 16-bit encoding

use nc_core::PCM16_MAX;

/// Scaled views of a reconstructed signal
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledOutput {
    /// Float view, peak equal to the headroom fraction
    pub samples: Vec<f32>,
    /// Fixed-point view for file encoding
    pub pcm: Vec<i16>,
    /// Gain applied in the integer domain (1.0 when the input is silent)
    pub gain: f32,
}

/// Peak normalizer to `headroom * 32767`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputScaler {
    headroom: f32,
}

impl Default for OutputScaler {
    fn default() -> Self {
        Self { headroom: 0.95 }
    }
}

impl OutputScaler {
    pub fn new(headroom: f32) -> Self {
        Self { headroom }
    }

    #[inline]
    pub fn headroom(&self) -> f32 {
        self.headroom
    }

    /// Rescale so the peak lands at `headroom * 32767`.
    ///
    /// A silent or empty signal is returned unchanged with an all-zero PCM view.
    pub fn scale(&self, signal: &[f32]) -> ScaledOutput {
        let peak = signal.iter().fold(0.0f32, |acc, s| acc.max(s.abs()));

        if peak == 0.0 {
            log::debug!("Output is silent, skipping scaling");
            return ScaledOutput {
                samples: signal.to_vec(),
                pcm: vec![0; signal.len()],
                gain: 1.0,
            };
        }

        let gain = self.headroom * PCM16_MAX / peak;
        let mut samples = Vec::with_capacity(signal.len());
        let mut pcm = Vec::with_capacity(signal.len());
        for &x in signal {
            let raw = x * gain;
            samples.push(raw / PCM16_MAX);
            pcm.push(raw.clamp(-PCM16_MAX, PCM16_MAX) as i16);
        }

        log::debug!("Output peak {:.4} scaled by {:.2}", peak, gain);

        ScaledOutput { samples, pcm, gain }
    }
}
