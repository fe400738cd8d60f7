//! Analysis configuration
//!
//! Selects which indices a scorer computes and how close to neutral a score
//! must be to count as random selection. Loaded from JSON, e.g.
//!
//! ```json
//! { "indices": ["strauss_linear", "chessons_alpha"], "neutral_tolerance": 0.01 }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use anyhow::{Context, Result};

use crate::indices::ElectivityIndex;

/// Index selection and classification settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Indices to compute, in report order
    #[serde(default = "default_indices")]
    pub indices: Vec<ElectivityIndex>,

    /// Absolute distance from the neutral value still classed as neutral
    #[serde(default = "default_neutral_tolerance")]
    pub neutral_tolerance: f64,
}

fn default_indices() -> Vec<ElectivityIndex> {
    ElectivityIndex::ALL.to_vec()
}

fn default_neutral_tolerance() -> f64 {
    1e-9
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            indices: default_indices(),
            neutral_tolerance: default_neutral_tolerance(),
        }
    }
}

impl AnalysisConfig {
    /// Config computing a single index
    pub fn single(index: ElectivityIndex) -> Self {
        Self {
            indices: vec![index],
            ..Self::default()
        }
    }

    /// Load config from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read analysis config: {:?}", path))?;

        Self::from_json(&contents)
            .with_context(|| format!("Invalid analysis config: {:?}", path))
    }

    /// Parse and validate config from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AnalysisConfig = serde_json::from_str(json)
            .with_context(|| "Failed to parse analysis config JSON")?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.indices.is_empty() {
            anyhow::bail!("Analysis config selects no indices");
        }
        if !(self.neutral_tolerance >= 0.0 && self.neutral_tolerance.is_finite()) {
            anyhow::bail!(
                "neutral_tolerance must be a finite non-negative number, got {}",
                self.neutral_tolerance
            );
        }
        Ok(())
    }
}
