//! IVLEV INDICES (Ivlev 1961)
//!
//! Forage ratio E' = r / p, range [0, ∞), 1 = random selection.
//! Electivity E = (r - p) / (r + p), range [-1, 1], 0 = random selection.

use crate::error::Result;
use crate::utils::normalize;

/// Calculate Ivlev forage ratio E'
///
/// Categories with zero availability give ∞ (consumed) or NaN (not consumed).
pub fn ivlev_forage_ratio(available: &[f64], consumed: &[f64]) -> Result<Vec<f64>> {
    let props = normalize(available, consumed)?;
    Ok(props.zip_with(|r, p| r / p))
}

/// Calculate Ivlev electivity E
///
/// Undefined (NaN) where a category is neither available nor consumed.
pub fn ivlev_electivity(available: &[f64], consumed: &[f64]) -> Result<Vec<f64>> {
    let props = normalize(available, consumed)?;
    Ok(props.zip_with(|r, p| (r - p) / (r + p)))
}
