//! Error types for electivity computation
//!
//! Only input shape is validated. Numerical anomalies (zero sums, zero
//! availability) are not errors: they surface as NaN/∞ in the output.

use thiserror::Error;

/// Errors raised by the normalizer and every index function.
///
/// # Examples
///
/// ```rust
/// use electivity::{strauss_linear, ElectivityError};
///
/// let err = strauss_linear(&[1.0, 2.0], &[1.0]).unwrap_err();
/// assert_eq!(err, ElectivityError::LengthMismatch { available: 2, consumed: 1 });
/// assert!(err.to_string().contains("equal length"));
/// ```
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ElectivityError {
    /// Available and consumed vectors differ in length.
    #[error(
        "Available and consumed must be equal length: got {available} available, {consumed} consumed"
    )]
    LengthMismatch {
        /// Number of available entries supplied
        available: usize,
        /// Number of consumed entries supplied
        consumed: usize,
    },
}

pub type Result<T> = std::result::Result<T, ElectivityError>;

/// Unrecognized electivity index name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown electivity index: '{0}'")]
pub struct ParseIndexError(pub String);
