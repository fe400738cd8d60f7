//! CHESSON'S ALPHA (Chesson 1978)
//!
//! Also published as Vanderploeg and Scavia's selectivity coefficient W.
//! A second normalization over the per-category forage ratio r / p, so the
//! outputs form a distribution over categories and 1/n = random selection.
//!
//! **Zero availability**: a category with p = 0 contributes ∞ (consumed) or
//! NaN (not consumed) to the ratio sum. An ∞ sum turns that category into NaN
//! and collapses every other category to 0; a NaN sum makes every output NaN.
//! This is propagated as-is; screen such categories out before scoring.

use crate::error::Result;
use crate::utils::normalization::total;
use crate::utils::normalize;

/// Calculate Chesson's alpha a = (r/p) / Σ(r/p)
pub fn chessons_alpha(available: &[f64], consumed: &[f64]) -> Result<Vec<f64>> {
    let props = normalize(available, consumed)?;

    let ratios = props.zip_with(|r, p| r / p);
    let ratio_sum = total(&ratios);

    Ok(ratios.iter().map(|&ratio| ratio / ratio_sum).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_alpha_sums_to_one() {
        let a = chessons_alpha(&[5.0, 3.0, 2.0, 10.0], &[1.0, 7.0, 4.0, 2.0]).unwrap();
        assert_relative_eq!(total(&a), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_alpha_skewed() {
        // Ratios [9, 1/9], sum 82/9
        let a = chessons_alpha(&[1.0, 9.0], &[9.0, 1.0]).unwrap();
        assert_relative_eq!(a[0], 81.0 / 82.0, epsilon = 1e-9);
        assert_relative_eq!(a[1], 1.0 / 82.0, epsilon = 1e-9);
    }

    #[test]
    fn test_alpha_random_selection_is_one_over_n() {
        let a = chessons_alpha(&[3.0, 6.0, 1.0], &[30.0, 60.0, 10.0]).unwrap();
        for v in a {
            assert_relative_eq!(v, 1.0 / 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_alpha_zero_availability_contaminates_all_categories() {
        // Known edge case: p = 0 for a consumed category puts ∞ in the sum
        let a = chessons_alpha(&[0.0, 4.0, 6.0], &[2.0, 4.0, 4.0]).unwrap();
        assert!(a[0].is_nan());
        assert_eq!(a[1], 0.0);
        assert_eq!(a[2], 0.0);

        // Neither available nor consumed: 0/0 = NaN in the sum
        let a = chessons_alpha(&[0.0, 4.0, 6.0], &[0.0, 4.0, 4.0]).unwrap();
        assert!(a.iter().all(|v| v.is_nan()));
    }
}
