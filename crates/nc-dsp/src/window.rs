//! Hann analysis/synthesis window

/// Symmetric Hann taper: `0.5 - 0.5 * cos(2πn / (M - 1))`
///
/// The same window is used for analysis and synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    coeffs: Vec<f32>,
}

impl Window {
    /// Build a Hann window of `len` samples
    pub fn hann(len: usize) -> Self {
        let coeffs = match len {
            0 => Vec::new(),
            1 => vec![1.0],
            _ => {
                let denom = (len - 1) as f64;
                (0..len)
                    .map(|n| {
                        let phase = 2.0 * std::f64::consts::PI * n as f64 / denom;
                        (0.5 - 0.5 * phase.cos()) as f32
                    })
                    .collect()
            }
        };
        Self { coeffs }
    }

    #[inline]
    pub fn coeffs(&self) -> &[f32] {
        &self.coeffs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Sum of coefficients
    pub fn sum(&self) -> f32 {
        self.coeffs.iter().sum()
    }

    /// Magnitude that maps to 0 dB: half the coefficient sum (the peak bin of a
    /// full-scale sinusoid). Falls back to 1.0 for a degenerate all-zero window.
    pub fn db_reference(&self) -> f32 {
        let reference = self.sum() / 2.0;
        if reference > 0.0 { reference } else { 1.0 }
    }
}
