//! JSON run summary

use serde::Serialize;

use nc_core::ProcessingParameters;

use crate::{ProcessingResult, Track};

/// Summary of one processing run
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingReport {
    pub sample_rate: u32,
    pub input_duration_s: f64,
    pub noise_duration_s: f64,
    pub cleaned_duration_s: f64,
    pub num_frames: usize,
    pub num_bins: usize,
    pub parameters: ProcessingParameters,
    /// None for a silent track
    pub input_peak_dbfs: Option<f32>,
    pub cleaned_peak_dbfs: Option<f32>,
    pub output_gain: f32,
    pub output_path: Option<String>,
}

fn peak_dbfs(samples: &[f32]) -> Option<f32> {
    let peak = samples.iter().fold(0.0f32, |acc, s| acc.max(s.abs()));
    (peak > 0.0).then(|| 20.0 * peak.log10())
}

impl ProcessingReport {
    pub fn from_result(result: &ProcessingResult) -> Self {
        Self {
            sample_rate: result.sample_rate,
            input_duration_s: result.duration_seconds(Track::Original),
            noise_duration_s: result.duration_seconds(Track::Noise),
            cleaned_duration_s: result.duration_seconds(Track::Cleaned),
            num_frames: result.num_frames(),
            num_bins: result.num_bins(),
            parameters: result.parameters,
            input_peak_dbfs: peak_dbfs(&result.original),
            cleaned_peak_dbfs: peak_dbfs(&result.cleaned),
            output_gain: result.output_gain,
            output_path: result
                .output_path
                .as_ref()
                .map(|p| p.display().to_string()),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
