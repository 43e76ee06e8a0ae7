//! Magnitude to decibel conversion for visualization

use ndarray::Array2;

/// Offset added before the logarithm so silent bins stay finite
pub const DB_EPSILON: f32 = 1e-9;

/// `20 * log10(magnitude / reference + ε)`
#[inline]
pub fn magnitude_to_db(magnitude: f32, reference: f32) -> f32 {
    20.0 * (magnitude.abs() / reference + DB_EPSILON).log10()
}

/// Element-wise dB conversion of a magnitude matrix
pub fn magnitudes_to_db(magnitudes: &Array2<f32>, reference: f32) -> Array2<f32> {
    magnitudes.mapv(|m| magnitude_to_db(m, reference))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_unity_is_zero_db() {
        assert_abs_diff_eq!(magnitude_to_db(64.0, 64.0), 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(magnitude_to_db(6.4, 64.0), -20.0, epsilon = 1e-4);
    }

    #[test]
    fn test_silence_is_finite() {
        let db = magnitude_to_db(0.0, 1.0);
        assert!(db.is_finite());
        assert_abs_diff_eq!(db, -180.0, epsilon = 1e-3);
    }

    #[test]
    fn test_matrix_conversion() {
        let mags = array![[1.0f32, 10.0], [0.1, 100.0]];
        let db = magnitudes_to_db(&mags, 1.0);
        assert_eq!(db.dim(), (2, 2));
        assert_abs_diff_eq!(db[[0, 1]], 20.0, epsilon = 1e-4);
        assert_abs_diff_eq!(db[[1, 0]], -20.0, epsilon = 1e-4);
    }
}
