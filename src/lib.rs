//! Electivity Index Implementation
//!
//! Resource selection (electivity) indices for diet and habitat-use studies.
//! Given, per resource category, the amount available and the amount
//! consumed, each index scores preference or avoidance relative to random
//! selection.
//!
//! - `utils/`: Normalization of raw quantities into proportions
//! - `indices/`: The seven index formulas (Ivlev, Jacobs, Strauss, Chesson,
//!   Vanderploeg and Scavia)
//! - `scorer`: Multi-index reports, single sample or parallel batch
//! - `config`: JSON-loadable index selection
//!
//! Degenerate inputs (zero sums, zero availability) are not errors: they
//! surface as NaN/∞ following IEEE-754 division. The only error is a length
//! mismatch between the two vectors.
//!
//! ```rust
//! use electivity::{ivlev_forage_ratio, strauss_linear};
//!
//! let available = [1.0, 9.0];
//! let consumed = [9.0, 1.0];
//!
//! let l = strauss_linear(&available, &consumed)?;
//! assert!((l[0] - 0.8).abs() < 1e-12);
//!
//! let e = ivlev_forage_ratio(&available, &consumed)?;
//! assert!((e[0] - 9.0).abs() < 1e-9);
//! # Ok::<(), electivity::ElectivityError>(())
//! ```

pub mod config;
pub mod error;
pub mod indices;
pub mod scorer;
pub mod utils;

// Re-export commonly used types
pub use config::AnalysisConfig;
pub use error::{ElectivityError, ParseIndexError, Result};
pub use indices::*;
pub use scorer::{ElectivityReport, ElectivityScorer, IndexScores, Sample};
pub use utils::{normalize, Proportions};
