//! Electivity index modules
//!
//! Each index is a free function over (available, consumed) in its own module.
//! [`ElectivityIndex`] names them for configuration, dispatch and reporting.

pub mod chesson;
pub mod ivlev;
pub mod jacobs;
pub mod strauss;
pub mod vanderploeg;

// Re-export index functions
pub use chesson::chessons_alpha;
pub use ivlev::{ivlev_electivity, ivlev_forage_ratio};
pub use jacobs::{jacobs_electivity, jacobs_forage_ratio};
pub use strauss::strauss_linear;
pub use vanderploeg::relativized_electivity;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseIndexError, Result};

/// The seven supported electivity indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElectivityIndex {
    IvlevForageRatio,
    IvlevElectivity,
    JacobsElectivity,
    JacobsForageRatio,
    StraussLinear,
    ChessonsAlpha,
    RelativizedElectivity,
}

/// Direction of selection for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    /// Used more than its availability predicts
    Preferred,
    /// Used less than its availability predicts
    Avoided,
    /// Indistinguishable from random selection
    Neutral,
    /// Score is NaN (or a meaningless infinity)
    Undefined,
}

impl ElectivityIndex {
    pub const ALL: [ElectivityIndex; 7] = [
        ElectivityIndex::IvlevForageRatio,
        ElectivityIndex::IvlevElectivity,
        ElectivityIndex::JacobsElectivity,
        ElectivityIndex::JacobsForageRatio,
        ElectivityIndex::StraussLinear,
        ElectivityIndex::ChessonsAlpha,
        ElectivityIndex::RelativizedElectivity,
    ];

    /// Snake-case key, identical to the serde representation
    pub fn name(self) -> &'static str {
        match self {
            ElectivityIndex::IvlevForageRatio => "ivlev_forage_ratio",
            ElectivityIndex::IvlevElectivity => "ivlev_electivity",
            ElectivityIndex::JacobsElectivity => "jacobs_electivity",
            ElectivityIndex::JacobsForageRatio => "jacobs_forage_ratio",
            ElectivityIndex::StraussLinear => "strauss_linear",
            ElectivityIndex::ChessonsAlpha => "chessons_alpha",
            ElectivityIndex::RelativizedElectivity => "relativized_electivity",
        }
    }

    /// Conventional symbol from the literature
    pub fn symbol(self) -> &'static str {
        match self {
            ElectivityIndex::IvlevForageRatio => "E'",
            ElectivityIndex::IvlevElectivity => "E",
            ElectivityIndex::JacobsElectivity => "D",
            ElectivityIndex::JacobsForageRatio => "Q",
            ElectivityIndex::StraussLinear => "L",
            ElectivityIndex::ChessonsAlpha => "α",
            ElectivityIndex::RelativizedElectivity => "E*",
        }
    }

    pub fn reference(self) -> &'static str {
        match self {
            ElectivityIndex::IvlevForageRatio | ElectivityIndex::IvlevElectivity => "Ivlev 1961",
            ElectivityIndex::JacobsElectivity | ElectivityIndex::JacobsForageRatio => "Jacobs 1974",
            ElectivityIndex::StraussLinear => "Strauss 1979",
            ElectivityIndex::ChessonsAlpha => "Chesson 1978",
            ElectivityIndex::RelativizedElectivity => "Vanderploeg and Scavia 1979",
        }
    }

    /// Compute this index for one sample
    pub fn compute(self, available: &[f64], consumed: &[f64]) -> Result<Vec<f64>> {
        match self {
            ElectivityIndex::IvlevForageRatio => ivlev_forage_ratio(available, consumed),
            ElectivityIndex::IvlevElectivity => ivlev_electivity(available, consumed),
            ElectivityIndex::JacobsElectivity => jacobs_electivity(available, consumed),
            ElectivityIndex::JacobsForageRatio => jacobs_forage_ratio(available, consumed),
            ElectivityIndex::StraussLinear => strauss_linear(available, consumed),
            ElectivityIndex::ChessonsAlpha => chessons_alpha(available, consumed),
            ElectivityIndex::RelativizedElectivity => relativized_electivity(available, consumed),
        }
    }

    /// Score under random (proportional) selection with `n` categories
    ///
    /// Ratio indices center on 1, difference indices on 0, Chesson's alpha on 1/n.
    pub fn neutral_value(self, n: usize) -> f64 {
        match self {
            ElectivityIndex::IvlevForageRatio | ElectivityIndex::JacobsForageRatio => 1.0,
            ElectivityIndex::ChessonsAlpha => 1.0 / n as f64,
            ElectivityIndex::IvlevElectivity
            | ElectivityIndex::JacobsElectivity
            | ElectivityIndex::StraussLinear
            | ElectivityIndex::RelativizedElectivity => 0.0,
        }
    }

    /// Unbounded above: +∞ is a legitimate "consumed but never available" score
    fn is_ratio(self) -> bool {
        matches!(
            self,
            ElectivityIndex::IvlevForageRatio | ElectivityIndex::JacobsForageRatio
        )
    }

    /// Classify one score against the neutral value
    ///
    /// Scores within `tolerance` of neutral are [`Preference::Neutral`].
    pub fn classify(self, value: f64, n: usize, tolerance: f64) -> Preference {
        if value.is_nan() {
            return Preference::Undefined;
        }
        if value.is_infinite() {
            return if value > 0.0 && self.is_ratio() {
                Preference::Preferred
            } else {
                Preference::Undefined
            };
        }

        let diff = value - self.neutral_value(n);
        if diff.abs() <= tolerance {
            Preference::Neutral
        } else if diff > 0.0 {
            Preference::Preferred
        } else {
            Preference::Avoided
        }
    }
}

impl fmt::Display for ElectivityIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElectivityIndex {
    type Err = ParseIndexError;

    /// Accepts the snake-case name (any case) or the literature symbol
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        ElectivityIndex::ALL
            .into_iter()
            .find(|index| {
                index.name().eq_ignore_ascii_case(trimmed) || index.symbol() == trimmed
            })
            .ok_or_else(|| ParseIndexError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_compute_dispatches_to_function() {
        let available = [1.0, 9.0];
        let consumed = [9.0, 1.0];

        assert_eq!(
            ElectivityIndex::StraussLinear.compute(&available, &consumed).unwrap(),
            strauss_linear(&available, &consumed).unwrap()
        );
        assert_eq!(
            ElectivityIndex::ChessonsAlpha.compute(&available, &consumed).unwrap(),
            chessons_alpha(&available, &consumed).unwrap()
        );
    }

    #[test]
    fn test_every_index_rejects_length_mismatch() {
        for index in ElectivityIndex::ALL {
            assert!(index.compute(&[1.0, 2.0], &[1.0]).is_err(), "{}", index);
        }
    }

    #[test]
    fn test_neutral_value_matches_random_selection() {
        // Consumption exactly proportional to availability
        let available = [2.0, 3.0, 5.0];
        let consumed = [20.0, 30.0, 50.0];

        for index in ElectivityIndex::ALL {
            let scores = index.compute(&available, &consumed).unwrap();
            for v in scores {
                assert_relative_eq!(v, index.neutral_value(3), epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_classify() {
        let strauss = ElectivityIndex::StraussLinear;
        assert_eq!(strauss.classify(0.3, 4, 1e-9), Preference::Preferred);
        assert_eq!(strauss.classify(-0.3, 4, 1e-9), Preference::Avoided);
        assert_eq!(strauss.classify(1e-12, 4, 1e-9), Preference::Neutral);
        assert_eq!(strauss.classify(f64::NAN, 4, 1e-9), Preference::Undefined);

        let alpha = ElectivityIndex::ChessonsAlpha;
        assert_eq!(alpha.classify(0.25, 4, 1e-9), Preference::Neutral);
        assert_eq!(alpha.classify(0.2, 4, 1e-9), Preference::Avoided);

        let ratio = ElectivityIndex::IvlevForageRatio;
        assert_eq!(ratio.classify(f64::INFINITY, 2, 1e-9), Preference::Preferred);
        assert_eq!(ratio.classify(0.5, 2, 1e-9), Preference::Avoided);
        assert_eq!(
            ElectivityIndex::IvlevElectivity.classify(f64::INFINITY, 2, 1e-9),
            Preference::Undefined
        );
    }

    #[test]
    fn test_parse_names_and_symbols() {
        for index in ElectivityIndex::ALL {
            assert_eq!(index.name().parse::<ElectivityIndex>().unwrap(), index);
            assert_eq!(index.symbol().parse::<ElectivityIndex>().unwrap(), index);
        }
        assert_eq!(
            "Strauss_Linear".parse::<ElectivityIndex>().unwrap(),
            ElectivityIndex::StraussLinear
        );
        assert_eq!(
            "manly".parse::<ElectivityIndex>().unwrap_err(),
            ParseIndexError("manly".to_string())
        );
    }

    #[test]
    fn test_serde_uses_snake_case_names() {
        for index in ElectivityIndex::ALL {
            let json = serde_json::to_string(&index).unwrap();
            assert_eq!(json, format!("\"{}\"", index.name()));
            let back: ElectivityIndex = serde_json::from_str(&json).unwrap();
            assert_eq!(back, index);
        }
    }
}
