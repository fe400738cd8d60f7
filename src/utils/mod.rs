//! Utility modules for electivity scoring
//!
//! - Normalization: raw quantities to (r, p) proportions

pub mod normalization;

// Re-export commonly used types
pub use normalization::{normalize, Proportions};
