//! RELATIVIZED ELECTIVITY E* (Vanderploeg and Scavia 1979)
//!
//! Rescales Chesson's alpha to [-1, 1] around the random-selection value 1/n:
//!   E* = (W - 1/n) / (W + 1/n)

use super::chesson::chessons_alpha;
use crate::error::Result;

/// Calculate relativized electivity E*
///
/// Inherits the zero-availability behavior of [`chessons_alpha`].
pub fn relativized_electivity(available: &[f64], consumed: &[f64]) -> Result<Vec<f64>> {
    let w = chessons_alpha(available, consumed)?;
    let neutral = 1.0 / w.len() as f64;

    Ok(w.iter().map(|&wi| (wi - neutral) / (wi + neutral)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_selection_is_zero() {
        let e = relativized_electivity(&[10.0; 4], &[25.0; 4]).unwrap();
        for v in e {
            assert_relative_eq!(v, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_skewed() {
        // W = [81/82, 1/82], n = 2
        let e = relativized_electivity(&[1.0, 9.0], &[9.0, 1.0]).unwrap();
        let w0 = 81.0 / 82.0;
        let w1 = 1.0 / 82.0;
        assert_relative_eq!(e[0], (w0 - 0.5) / (w0 + 0.5), epsilon = 1e-9);
        assert_relative_eq!(e[1], (w1 - 0.5) / (w1 + 0.5), epsilon = 1e-9);
        assert!(e[0] > 0.0 && e[1] < 0.0);
    }

    #[test]
    fn test_unconsumed_category_is_minus_one() {
        let e = relativized_electivity(&[1.0, 1.0, 1.0], &[0.0, 2.0, 1.0]).unwrap();
        assert_relative_eq!(e[0], -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_availability_propagates() {
        // W = [NaN, 0]: the healthy category reads as total avoidance
        let e = relativized_electivity(&[0.0, 1.0], &[1.0, 1.0]).unwrap();
        assert!(e[0].is_nan());
        assert_relative_eq!(e[1], -1.0, epsilon = 1e-12);

        let e = relativized_electivity(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        assert!(e.iter().all(|v| v.is_nan()));
    }
}
