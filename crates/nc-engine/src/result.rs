//! Processing result bundle handed to playback, plotting and saving

use std::path::{Path, PathBuf};

use ndarray::{Array2, ArrayView1};

use nc_core::ProcessingParameters;
use nc_file::write_wav_i16;

use crate::{EngineError, EngineResult, ProcessingReport};

/// Magnitude in dB, rows are frames and columns are frequency bins
pub type DbMatrix = Array2<f32>;

/// Time-domain track selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    Original,
    Cleaned,
    Noise,
}

/// Per-bin dB values of one analysis frame
#[derive(Debug, Clone)]
pub struct SpectrumSlice<'a> {
    pub original: ArrayView1<'a, f32>,
    pub cleaned: ArrayView1<'a, f32>,
    /// Time-averaged noise profile (constant over time)
    pub noise: ArrayView1<'a, f32>,
}

/// Everything a caller needs after one denoise run
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// Sample rate shared by all tracks
    pub sample_rate: u32,
    /// Normalized mono input
    pub original: Vec<f32>,
    /// Cleaned signal, float view scaled to the configured headroom
    pub cleaned: Vec<f32>,
    /// Cleaned signal, 16-bit view for file encoding
    pub cleaned_pcm: Vec<i16>,
    /// Normalized mono noise reference
    pub noise: Vec<f32>,
    /// Bin frequencies (Hz)
    pub frequencies: Vec<f64>,
    /// Frame center times (seconds)
    pub times: Vec<f64>,
    pub original_db: DbMatrix,
    pub cleaned_db: DbMatrix,
    /// Single row: the noise profile
    pub noise_db: DbMatrix,
    /// Parameters actually used
    pub parameters: ProcessingParameters,
    /// Gain the output scaler applied
    pub output_gain: f32,
    /// Suggested save location, when processed from files
    pub output_path: Option<PathBuf>,
}

impl ProcessingResult {
    #[inline]
    pub fn num_frames(&self) -> usize {
        self.times.len()
    }

    #[inline]
    pub fn num_bins(&self) -> usize {
        self.frequencies.len()
    }

    pub fn track(&self, track: Track) -> &[f32] {
        match track {
            Track::Original => &self.original,
            Track::Cleaned => &self.cleaned,
            Track::Noise => &self.noise,
        }
    }

    /// Track length in seconds
    pub fn duration_seconds(&self, track: Track) -> f64 {
        self.track(track).len() as f64 / self.sample_rate as f64
    }

    /// Sample index for a playback position; positions past the end wrap to 0
    pub fn sample_offset(&self, track: Track, seconds: f64) -> usize {
        let offset = (seconds.max(0.0) * self.sample_rate as f64) as usize;
        if offset >= self.track(track).len() {
            0
        } else {
            offset
        }
    }

    /// First frame centered at or after `seconds`, clamped to the last frame
    pub fn frame_index_at(&self, seconds: f64) -> usize {
        let index = self.times.partition_point(|&t| t < seconds);
        index.min(self.num_frames().saturating_sub(1))
    }

    /// dB spectra at a playback position
    pub fn spectrum_at(&self, seconds: f64) -> SpectrumSlice<'_> {
        let index = self.frame_index_at(seconds);
        SpectrumSlice {
            original: self.original_db.row(index),
            cleaned: self.cleaned_db.row(index),
            noise: self.noise_db.row(0),
        }
    }

    /// Write the 16-bit view to `output_path`
    pub fn save(&self) -> EngineResult<&Path> {
        let path = self.output_path.as_deref().ok_or(EngineError::NoOutputPath)?;
        self.save_to(path)?;
        Ok(path)
    }

    /// Write the 16-bit view as mono PCM WAV
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> EngineResult<()> {
        write_wav_i16(path, self.sample_rate, &self.cleaned_pcm)?;
        Ok(())
    }

    /// Summary for logs and JSON export
    pub fn report(&self) -> ProcessingReport {
        ProcessingReport::from_result(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> ProcessingResult {
        let times = vec![0.5, 1.0, 1.5];
        let original_db = Array2::from_shape_fn((3, 2), |(i, k)| (i * 10 + k) as f32);
        ProcessingResult {
            sample_rate: 4,
            original: vec![0.0; 8],
            cleaned: vec![0.0; 8],
            cleaned_pcm: vec![0; 8],
            noise: vec![0.0; 4],
            frequencies: vec![0.0, 2.0],
            times,
            cleaned_db: original_db.mapv(|v| v - 1.0),
            original_db,
            noise_db: Array2::from_elem((1, 2), -60.0),
            parameters: ProcessingParameters::new(4, 1.0, 0.0).unwrap(),
            output_gain: 1.0,
            output_path: None,
        }
    }

    #[test]
    fn test_frame_index_search() {
        let r = result();
        assert_eq!(r.frame_index_at(0.0), 0);
        assert_eq!(r.frame_index_at(0.5), 0);
        assert_eq!(r.frame_index_at(0.7), 1);
        assert_eq!(r.frame_index_at(1.5), 2);
        assert_eq!(r.frame_index_at(30.0), 2);
    }

    #[test]
    fn test_spectrum_at() {
        let r = result();
        let slice = r.spectrum_at(1.2);
        assert_eq!(slice.original.to_vec(), vec![20.0, 21.0]);
        assert_eq!(slice.cleaned.to_vec(), vec![19.0, 20.0]);
        assert_eq!(slice.noise.to_vec(), vec![-60.0, -60.0]);
    }

    #[test]
    fn test_playback_helpers() {
        let r = result();
        assert_eq!(r.duration_seconds(Track::Original), 2.0);
        assert_eq!(r.duration_seconds(Track::Noise), 1.0);
        assert_eq!(r.sample_offset(Track::Original, 1.25), 5);
        assert_eq!(r.sample_offset(Track::Noise, 1.25), 0);
    }

    #[test]
    fn test_save_without_path() {
        assert!(matches!(result().save(), Err(EngineError::NoOutputPath)));
    }
}
