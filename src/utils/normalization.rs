//! Normalization Utilities
//!
//! Converts raw available/consumed quantities into proportion vectors
//! (r = consumed share, p = available share) that every index is built on.
//!
//! Division follows IEEE-754: an all-zero vector normalizes to NaN entries
//! (0/0) and is passed through rather than rejected.

use serde::Serialize;

use crate::error::{ElectivityError, Result};

/// Normalized proportions for one sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Proportions {
    /// Share of total consumption per category
    pub r: Vec<f64>,
    /// Share of total availability per category
    pub p: Vec<f64>,
}

impl Proportions {
    /// Number of resource categories
    pub fn len(&self) -> usize {
        self.r.len()
    }

    pub fn is_empty(&self) -> bool {
        self.r.is_empty()
    }

    /// Apply `f(r, p)` to each aligned pair, preserving category order
    pub fn zip_with<F>(&self, f: F) -> Vec<f64>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.r.iter().zip(&self.p).map(|(&r, &p)| f(r, p)).collect()
    }
}

/// Normalize available and consumed quantities into (r, p) proportions
///
/// Algorithm:
/// 1. Reject inputs of differing length before any arithmetic
/// 2. r[i] = consumed[i] / sum(consumed)
/// 3. p[i] = available[i] / sum(available)
pub fn normalize(available: &[f64], consumed: &[f64]) -> Result<Proportions> {
    check_lengths(available, consumed)?;

    Ok(Proportions {
        r: proportions_of(consumed, "consumed"),
        p: proportions_of(available, "available"),
    })
}

/// Length precondition, checked before any arithmetic
fn check_lengths(available: &[f64], consumed: &[f64]) -> Result<()> {
    if available.len() != consumed.len() {
        return Err(ElectivityError::LengthMismatch {
            available: available.len(),
            consumed: consumed.len(),
        });
    }
    Ok(())
}

/// Left-to-right sum, so repeated calls are bit-for-bit reproducible
pub(crate) fn total(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, &v| acc + v)
}

fn proportions_of(values: &[f64], label: &str) -> Vec<f64> {
    let sum = total(values);
    if sum == 0.0 && !values.is_empty() {
        tracing::debug!("{} vector sums to zero; proportions will be NaN", label);
    }
    values.iter().map(|&v| v / sum).collect()
}
