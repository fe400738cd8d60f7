//! STRAUSS LINEAR INDEX (Strauss 1979)

use crate::error::Result;
use crate::utils::normalize;

/// Calculate Strauss' linear index L = r - p
///
/// Always defined for non-degenerate inputs, bounded to [-1, 1].
pub fn strauss_linear(available: &[f64], consumed: &[f64]) -> Result<Vec<f64>> {
    let props = normalize(available, consumed)?;
    Ok(props.zip_with(|r, p| r - p))
}
