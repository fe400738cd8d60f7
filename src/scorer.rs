//! Electivity Scorer - computes a configured set of indices per sample
//!
//! Includes both single-sample and parallel (Rayon) batch scoring.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::indices::{ElectivityIndex, Preference};
use crate::utils::normalization::{normalize, Proportions};

/// One observation: availability and use over the same categories
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Sample {
    pub available: Vec<f64>,
    pub consumed: Vec<f64>,
}

impl Sample {
    pub fn new(available: Vec<f64>, consumed: Vec<f64>) -> Self {
        Self { available, consumed }
    }
}

/// Scores of one index across all categories
#[derive(Debug, Clone, Serialize)]
pub struct IndexScores {
    pub index: ElectivityIndex,
    /// Per-category score, NaN/∞ where the formula is undefined
    pub values: Vec<f64>,
    /// Per-category direction of selection
    pub preferences: Vec<Preference>,
}

/// Electivity report for one sample
#[derive(Debug, Clone, Serialize)]
pub struct ElectivityReport {
    pub n_categories: usize,
    pub proportions: Proportions,
    pub scores: Vec<IndexScores>,
}

impl ElectivityReport {
    /// Scores for `index`, if it was configured
    pub fn get(&self, index: ElectivityIndex) -> Option<&IndexScores> {
        self.scores.iter().find(|s| s.index == index)
    }

    /// Serialize to JSON; non-finite scores become `null`
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Main electivity scorer
#[derive(Debug, Clone, Default)]
pub struct ElectivityScorer {
    config: AnalysisConfig,
}

impl ElectivityScorer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Score one sample with every configured index
    ///
    /// Fails with `LengthMismatch` before any index is computed.
    pub fn score(&self, available: &[f64], consumed: &[f64]) -> Result<ElectivityReport> {
        let proportions = normalize(available, consumed)?;
        let n = proportions.len();

        let scores = self
            .config
            .indices
            .iter()
            .map(|&index| -> Result<IndexScores> {
                let values = index.compute(available, consumed)?;
                let preferences = values
                    .iter()
                    .map(|&v| index.classify(v, n, self.config.neutral_tolerance))
                    .collect();
                Ok(IndexScores { index, values, preferences })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ElectivityReport {
            n_categories: n,
            proportions,
            scores,
        })
    }

    /// Score many samples IN PARALLEL using Rayon
    ///
    /// Results keep input order; a malformed sample fails on its own.
    pub fn score_batch(&self, samples: &[Sample]) -> Vec<Result<ElectivityReport>> {
        tracing::debug!(
            "Scoring {} samples with {} indices",
            samples.len(),
            self.config.indices.len()
        );

        samples
            .par_iter()
            .map(|sample| self.score(&sample.available, &sample.consumed))
            .collect()
    }
}
