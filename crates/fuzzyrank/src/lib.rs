//! Fuzzy string scoring and ranking.
//!
//! This crate provides:
//! - Levenshtein edit distance over grapheme clusters
//! - A normalized 0-100 similarity ratio and its partial, token-sort,
//!   token-set and weighted variants
//! - An extractor that scores a query against a collection and returns
//!   unordered, fully sorted, or top-k results
//! - TOML configuration and optional WASM bindings
//!
//! # Example
//!
//! ```
//! use fuzzyrank::{ratio, token_sort_ratio, Extractor, Strategy};
//!
//! assert!(ratio("mysmilarstring", "mysimilarstring") > 90);
//! assert_eq!(token_sort_ratio("order words out of", "words out of order"), 100);
//!
//! let labels = ["apple juice", "orange juice", "apple pie"];
//! let top = Extractor::new().extract_top("appel", &labels, Strategy::Weighted, 2);
//! assert_eq!(top.len(), 2);
//! ```

mod config;
mod distance;
mod error;
mod extract;
mod heap;
mod process;
mod ratio;
mod strategy;
mod token;
mod weighted;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::{MatchConfig, CONFIG_CANDIDATES};
pub use distance::{distance, levenshtein_distance, ratio_units, unit_len, units, Score, MAX_SCORE};
pub use error::{FuzzyError, FuzzyErrorCode, Result};
pub use extract::{ExtractedResult, Extractor, Field};
pub use heap::BoundedHeap;
pub use process::{full_process, Processor};
pub use ratio::{partial_ratio, ratio};
pub use strategy::Strategy;
pub use token::{
    sorted_tokens, token_set_partial_ratio, token_set_ratio, token_sort_partial_ratio,
    token_sort_ratio,
};
pub use weighted::{weighted_ratio, WeightedRatio};
