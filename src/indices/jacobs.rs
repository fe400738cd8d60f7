//! JACOBS INDICES (Jacobs 1974)
//!
//! Both indices correct Ivlev's measures for the dependence on relative
//! abundance of each category.

use crate::error::Result;
use crate::utils::normalize;

/// Calculate Jacobs electivity D = (r - p) / (r + p - 2rp)
///
/// Range [-1, 1]. The denominator is zero only when r = p ∈ {0, 1}.
pub fn jacobs_electivity(available: &[f64], consumed: &[f64]) -> Result<Vec<f64>> {
    let props = normalize(available, consumed)?;
    Ok(props.zip_with(|r, p| (r - p) / (r + p - 2.0 * r * p)))
}

/// Calculate Jacobs modified forage ratio Q = r(1 - p) / (p(1 - r))
///
/// Range [0, ∞), 1 = random selection. Undefined where p = 0 or r = 1.
pub fn jacobs_forage_ratio(available: &[f64], consumed: &[f64]) -> Result<Vec<f64>> {
    let props = normalize(available, consumed)?;
    Ok(props.zip_with(|r, p| (r * (1.0 - p)) / (p * (1.0 - r))))
}
