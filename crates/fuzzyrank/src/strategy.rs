//! The closed set of scoring strategies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::distance::Score;
use crate::error::FuzzyError;
use crate::ratio::{partial_ratio, ratio};
use crate::token::{
    token_set_partial_ratio, token_set_ratio, token_sort_partial_ratio, token_sort_ratio,
};
use crate::weighted::WeightedRatio;

/// A scoring strategy applied by the extractor to each `(query, candidate)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Whole-string ratio
    Simple,
    /// Best equal-length window ratio
    Partial,
    /// Ratio after sorting tokens
    TokenSort,
    /// Partial ratio after sorting tokens
    TokenSortPartial,
    /// Token intersection / difference ratio
    TokenSet,
    /// Token set ratio with partial comparisons
    TokenSetPartial,
    /// Length-weighted combination of the others
    #[default]
    Weighted,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Strategy; 7] = [
        Strategy::Simple,
        Strategy::Partial,
        Strategy::TokenSort,
        Strategy::TokenSortPartial,
        Strategy::TokenSet,
        Strategy::TokenSetPartial,
        Strategy::Weighted,
    ];

    /// Score a query against a candidate. `Weighted` uses default weights.
    pub fn apply(self, query: &str, candidate: &str) -> Score {
        self.apply_weighted(&WeightedRatio::default(), query, candidate)
    }

    /// Score a query against a candidate, using `weights` for `Weighted`.
    pub fn apply_weighted(self, weights: &WeightedRatio, query: &str, candidate: &str) -> Score {
        match self {
            Strategy::Simple => ratio(query, candidate),
            Strategy::Partial => partial_ratio(query, candidate),
            Strategy::TokenSort => token_sort_ratio(query, candidate),
            Strategy::TokenSortPartial => token_sort_partial_ratio(query, candidate),
            Strategy::TokenSet => token_set_ratio(query, candidate),
            Strategy::TokenSetPartial => token_set_partial_ratio(query, candidate),
            Strategy::Weighted => weights.score(query, candidate),
        }
    }

    /// Stable snake_case name, as used in config files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Simple => "simple",
            Strategy::Partial => "partial",
            Strategy::TokenSort => "token_sort",
            Strategy::TokenSortPartial => "token_sort_partial",
            Strategy::TokenSet => "token_set",
            Strategy::TokenSetPartial => "token_set_partial",
            Strategy::Weighted => "weighted",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == normalized)
            .ok_or_else(|| FuzzyError::UnknownStrategy(s.to_string()))
    }
}
