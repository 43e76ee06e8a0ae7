//! Time-frequency matrix produced by the forward transform

use ndarray::{Array2, ArrayView1};
use num_complex::Complex32;

use nc_core::{DenoiseError, DenoiseResult};

/// Complex spectrogram indexed `[frame, bin]`
///
/// Holds at least one frame. `frequencies` has one entry per bin (Hz) and
/// `times` one entry per frame center (seconds).
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrogram {
    frequencies: Vec<f64>,
    times: Vec<f64>,
    matrix: Array2<Complex32>,
}

impl Spectrogram {
    /// Assemble a spectrogram, checking that the axes match the matrix shape
    pub fn from_parts(
        frequencies: Vec<f64>,
        times: Vec<f64>,
        matrix: Array2<Complex32>,
    ) -> DenoiseResult<Self> {
        let (frames, bins) = matrix.dim();
        if frames == 0 {
            return Err(DenoiseError::Format("spectrogram has no frames".into()));
        }
        if frequencies.len() != bins {
            return Err(DenoiseError::ShapeMismatch {
                expected: bins,
                actual: frequencies.len(),
            });
        }
        if times.len() != frames {
            return Err(DenoiseError::ShapeMismatch {
                expected: frames,
                actual: times.len(),
            });
        }
        Ok(Self {
            frequencies,
            times,
            matrix,
        })
    }

    /// Bin center frequencies in Hz
    #[inline]
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Frame center times in seconds
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    #[inline]
    pub fn matrix(&self) -> &Array2<Complex32> {
        &self.matrix
    }

    #[inline]
    pub fn num_frames(&self) -> usize {
        self.matrix.nrows()
    }

    #[inline]
    pub fn num_bins(&self) -> usize {
        self.matrix.ncols()
    }

    /// Spectrum of one frame
    pub fn frame(&self, index: usize) -> ArrayView1<'_, Complex32> {
        self.matrix.row(index)
    }

    /// `|X|` per frame and bin
    pub fn magnitudes(&self) -> Array2<f32> {
        self.matrix.mapv(|c| c.norm())
    }

    /// `arg(X)` per frame and bin
    pub fn phases(&self) -> Array2<f32> {
        self.matrix.mapv(|c| c.arg())
    }

    pub fn into_matrix(self) -> Array2<Complex32> {
        self.matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_checks_axes() {
        let matrix = Array2::<Complex32>::zeros((3, 5));
        assert!(Spectrogram::from_parts(vec![0.0; 5], vec![0.0; 3], matrix.clone()).is_ok());
        assert!(matches!(
            Spectrogram::from_parts(vec![0.0; 4], vec![0.0; 3], matrix.clone()),
            Err(DenoiseError::ShapeMismatch { expected: 5, actual: 4 })
        ));
        assert!(matches!(
            Spectrogram::from_parts(vec![0.0; 5], vec![0.0; 2], matrix),
            Err(DenoiseError::ShapeMismatch { expected: 3, actual: 2 })
        ));
    }

    #[test]
    fn test_rejects_empty() {
        let matrix = Array2::<Complex32>::zeros((0, 5));
        assert!(matches!(
            Spectrogram::from_parts(vec![0.0; 5], Vec::new(), matrix),
            Err(DenoiseError::Format(_))
        ));
    }

    #[test]
    fn test_magnitude_and_phase() {
        let mut matrix = Array2::<Complex32>::zeros((1, 2));
        matrix[[0, 0]] = Complex32::new(3.0, 4.0);
        matrix[[0, 1]] = Complex32::new(0.0, -2.0);
        let spec = Spectrogram::from_parts(vec![0.0, 1.0], vec![0.5], matrix).unwrap();

        let mags = spec.magnitudes();
        assert_eq!(mags[[0, 0]], 5.0);
        assert_eq!(mags[[0, 1]], 2.0);
        let phases = spec.phases();
        assert_eq!(phases[[0, 1]], -std::f32::consts::FRAC_PI_2);
    }
}
