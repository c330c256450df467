//! Weighted ratio: picks between whole-string and partial scoring by length.

use serde::{Deserialize, Serialize};

use crate::distance::{to_score, unit_len, Score, MAX_SCORE};
use crate::ratio::{partial_ratio, ratio};
use crate::token::{
    token_set_partial_ratio, token_set_ratio, token_sort_partial_ratio, token_sort_ratio,
};

/// Tunable weights of the weighted ratio.
///
/// With `len_ratio = min(len) / max(len)`:
///
/// - `len_ratio >= comparable_threshold`: the whole-string ratio competes
///   with the token ratios (scaled by `token_scale`) and with the best
///   partial variant blended as `(1 - w) * 100 + w * partial`, where `w` is
///   `comparable_partial_scale`.
/// - otherwise the partial variants dominate, scaled by `partial_scale`,
///   or by `long_partial_scale` once `len_ratio` drops below
///   `long_threshold`. Token-based partial variants additionally get
///   `token_scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightedRatio {
    /// Length ratio at or above which the two strings count as comparable
    pub comparable_threshold: f64,
    /// Blend weight `w` of the partial variants for comparable lengths
    pub comparable_partial_scale: f64,
    /// Weight of every token-based variant
    pub token_scale: f64,
    /// Weight of the partial variants when lengths diverge
    pub partial_scale: f64,
    /// Length ratio below which `long_partial_scale` replaces `partial_scale`
    pub long_threshold: f64,
    /// Weight of the partial variants for very different lengths
    pub long_partial_scale: f64,
}

impl Default for WeightedRatio {
    fn default() -> Self {
        Self {
            comparable_threshold: 0.7,
            comparable_partial_scale: 0.5,
            token_scale: 0.95,
            partial_scale: 0.9,
            long_threshold: 0.125,
            long_partial_scale: 0.6,
        }
    }
}

impl WeightedRatio {
    /// Score two strings with these weights.
    pub fn score(&self, a: &str, b: &str) -> Score {
        let (len_a, len_b) = (unit_len(a), unit_len(b));
        if len_a == 0 || len_b == 0 {
            return if len_a == len_b { MAX_SCORE } else { 0 };
        }

        let base = f64::from(ratio(a, b));
        let len_ratio = len_a.min(len_b) as f64 / len_a.max(len_b) as f64;

        let best = if len_ratio >= self.comparable_threshold {
            let token = f64::from(token_sort_ratio(a, b).max(token_set_ratio(a, b)));
            let partial = f64::from(
                partial_ratio(a, b)
                    .max(token_sort_partial_ratio(a, b))
                    .max(token_set_partial_ratio(a, b)),
            );
            let w = self.comparable_partial_scale;
            base.max(token * self.token_scale)
                .max(f64::from(MAX_SCORE) * (1.0 - w) + partial * w)
        } else {
            let scale = if len_ratio < self.long_threshold {
                self.long_partial_scale
            } else {
                self.partial_scale
            };
            let partial = f64::from(partial_ratio(a, b));
            let token_partial =
                f64::from(token_sort_partial_ratio(a, b).max(token_set_partial_ratio(a, b)));
            base.max(partial * scale)
                .max(token_partial * self.token_scale * scale)
        };

        to_score(best)
    }
}

/// Weighted ratio with the default weights.
///
/// # Example
/// ```
/// use fuzzyrank::weighted_ratio;
///
/// let score = weighted_ratio(
///     "The quick brown fox jimps ofver the small lazy dog",
///     "the quick brown fox jumps over the small lazy dog",
/// );
/// assert!(score > 85);
/// ```
pub fn weighted_ratio(a: &str, b: &str) -> Score {
    WeightedRatio::default().score(a, b)
}
