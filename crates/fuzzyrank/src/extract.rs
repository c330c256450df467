//! Scoring a query against collections of candidates.
//!
//! Every operation makes a single pass over the input, never mutates it,
//! and hands back references into it. The query and each candidate string
//! go through the configured [`Processor`] (lowercase by default) before a
//! [`Strategy`] scores them.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::config::MatchConfig;
use crate::distance::{to_score, Score, MAX_SCORE};
use crate::error::{FuzzyError, Result};
use crate::heap::BoundedHeap;
use crate::process::Processor;
use crate::strategy::Strategy;
use crate::weighted::WeightedRatio;

/// A scored candidate.
///
/// Holds the candidate itself, not the processed string it was scored on.
/// Ordering compares the score first; on equal scores the candidate that
/// came earlier in the input ranks higher. The item itself never takes
/// part in comparisons.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedResult<T> {
    /// The candidate as it appears in the input
    pub item: T,
    /// Similarity score (0-100)
    pub score: Score,
    /// Position in the input collection
    pub index: usize,
}

impl<T> ExtractedResult<T> {
    fn rank_key(&self) -> (Score, std::cmp::Reverse<usize>) {
        (self.score, std::cmp::Reverse(self.index))
    }
}

impl<T> PartialEq for ExtractedResult<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rank_key() == other.rank_key()
    }
}

impl<T> Eq for ExtractedResult<T> {}

impl<T> PartialOrd for ExtractedResult<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for ExtractedResult<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank_key().cmp(&other.rank_key())
    }
}

impl<T: fmt::Display> fmt::Display for ExtractedResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(item: {}, score: {}, index: {})", self.item, self.score, self.index)
    }
}

/// One scored field of a record, for multi-field extraction.
pub struct Field<'f, T> {
    accessor: Box<dyn Fn(&T) -> &str + 'f>,
    cutoff: Score,
}

impl<'f, T> Field<'f, T> {
    /// Score the string returned by `accessor`; the field counts only when
    /// its score is strictly above `cutoff`.
    pub fn new<F>(accessor: F, cutoff: Score) -> Self
    where
        F: Fn(&T) -> &str + 'f,
    {
        Self {
            accessor: Box::new(accessor),
            cutoff,
        }
    }

    /// Cutoff of this field.
    pub fn cutoff(&self) -> Score {
        self.cutoff
    }
}

impl<T> fmt::Debug for Field<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("cutoff", &self.cutoff).finish_non_exhaustive()
    }
}

/// Applies a [`Strategy`] across a collection.
///
/// # Example
/// ```
/// use fuzzyrank::{Extractor, Strategy};
///
/// let teams = ["New York Yankees", "New York Mets", "Boston Red Sox"];
/// let extractor = Extractor::new().with_cutoff(50);
///
/// let best = extractor.extract_one("yankees", &teams, Strategy::Weighted).unwrap();
/// assert_eq!(*best.item, "New York Yankees");
///
/// let top = extractor.extract_top("new york", &teams, Strategy::Partial, 2);
/// assert_eq!(top.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    cutoff: Score,
    processor: Processor,
    weights: WeightedRatio,
}

impl Extractor {
    /// Extractor with cutoff 0, lowercase processing and default weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an extractor from a validated configuration.
    pub fn from_config(config: &MatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            cutoff: config.cutoff,
            processor: config.processor,
            weights: config.weights,
        })
    }

    /// Drop results scoring below `cutoff`.
    pub fn with_cutoff(mut self, cutoff: Score) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Normalize strings with `processor` before scoring.
    pub fn with_processor(mut self, processor: Processor) -> Self {
        self.processor = processor;
        self
    }

    /// Weights used by [`Strategy::Weighted`].
    pub fn with_weights(mut self, weights: WeightedRatio) -> Self {
        self.weights = weights;
        self
    }

    /// Minimum score a result needs.
    pub fn cutoff(&self) -> Score {
        self.cutoff
    }

    /// Processor applied to the query and candidates.
    pub fn processor(&self) -> Processor {
        self.processor
    }

    /// Score every string, keep those at or above the cutoff, in input order.
    pub fn extract_without_order<'a, S: AsRef<str>>(
        &self,
        query: &str,
        items: &'a [S],
        strategy: Strategy,
    ) -> Vec<ExtractedResult<&'a S>> {
        self.extract_without_order_by(query, items, strategy, |item: &S| item.as_ref())
    }

    /// Like [`Extractor::extract_without_order`], scoring `accessor(item)`.
    pub fn extract_without_order_by<'a, T, F>(
        &self,
        query: &str,
        items: &'a [T],
        strategy: Strategy,
        accessor: F,
    ) -> Vec<ExtractedResult<&'a T>>
    where
        F: Fn(&T) -> &str,
    {
        let mut results = Vec::new();
        self.score_each(query, items, strategy, accessor, |result| results.push(result));

        tracing::debug!(
            %strategy,
            candidates = items.len(),
            kept = results.len(),
            cutoff = self.cutoff,
            "extracted without order"
        );
        results
    }

    /// Score records on several fields and average the qualifying sub-scores.
    ///
    /// A field qualifies when its score is strictly above its own cutoff. A
    /// qualifying field whose lowercased raw value contains the lowercased
    /// raw query contributes 100 instead of its score. Records where nothing qualifies
    /// score 0. The averaged score is then held to the extractor's cutoff.
    pub fn extract_without_order_multi_field<'a, T>(
        &self,
        query: &str,
        items: &'a [T],
        strategy: Strategy,
        fields: &[Field<'_, T>],
    ) -> Result<Vec<ExtractedResult<&'a T>>> {
        if fields.is_empty() {
            return Err(FuzzyError::MissingAccessor);
        }

        let query_lower = query.to_lowercase();
        let query = self.processor.apply(query);

        let results: Vec<_> = items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                self.score_fields(&query, &query_lower, index, item, strategy, fields)
            })
            .collect();

        tracing::debug!(
            %strategy,
            candidates = items.len(),
            fields = fields.len(),
            kept = results.len(),
            "extracted multi-field without order"
        );
        Ok(results)
    }

    /// The best-scoring string. Ties go to the earliest candidate.
    ///
    /// # Errors
    /// [`FuzzyError::EmptyCollection`] for empty input and
    /// [`FuzzyError::NoMatch`] when nothing reaches the cutoff.
    pub fn extract_one<'a, S: AsRef<str>>(
        &self,
        query: &str,
        items: &'a [S],
        strategy: Strategy,
    ) -> Result<ExtractedResult<&'a S>> {
        self.extract_one_by(query, items, strategy, |item: &S| item.as_ref())
    }

    /// Like [`Extractor::extract_one`], scoring `accessor(item)`.
    pub fn extract_one_by<'a, T, F>(
        &self,
        query: &str,
        items: &'a [T],
        strategy: Strategy,
        accessor: F,
    ) -> Result<ExtractedResult<&'a T>>
    where
        F: Fn(&T) -> &str,
    {
        if items.is_empty() {
            return Err(FuzzyError::EmptyCollection);
        }
        self.extract_top_by(query, items, strategy, 1, accessor)
            .into_iter()
            .next()
            .ok_or(FuzzyError::NoMatch { cutoff: self.cutoff })
    }

    /// All strings at or above the cutoff, best first. Equal scores keep
    /// input order.
    pub fn extract_sorted<'a, S: AsRef<str>>(
        &self,
        query: &str,
        items: &'a [S],
        strategy: Strategy,
    ) -> Vec<ExtractedResult<&'a S>> {
        self.extract_sorted_by(query, items, strategy, |item: &S| item.as_ref())
    }

    /// Like [`Extractor::extract_sorted`], scoring `accessor(item)`.
    pub fn extract_sorted_by<'a, T, F>(
        &self,
        query: &str,
        items: &'a [T],
        strategy: Strategy,
        accessor: F,
    ) -> Vec<ExtractedResult<&'a T>>
    where
        F: Fn(&T) -> &str,
    {
        let mut results = self.extract_without_order_by(query, items, strategy, accessor);
        sort_desc(&mut results);
        results
    }

    /// Multi-field results, best first.
    pub fn extract_sorted_multi_field<'a, T>(
        &self,
        query: &str,
        items: &'a [T],
        strategy: Strategy,
        fields: &[Field<'_, T>],
    ) -> Result<Vec<ExtractedResult<&'a T>>> {
        let mut results = self.extract_without_order_multi_field(query, items, strategy, fields)?;
        sort_desc(&mut results);
        Ok(results)
    }

    /// The `limit` best strings, best first.
    ///
    /// Equivalent to [`Extractor::extract_sorted`] truncated to `limit`, but
    /// only `limit` results are held at any time.
    pub fn extract_top<'a, S: AsRef<str>>(
        &self,
        query: &str,
        items: &'a [S],
        strategy: Strategy,
        limit: usize,
    ) -> Vec<ExtractedResult<&'a S>> {
        self.extract_top_by(query, items, strategy, limit, |item: &S| item.as_ref())
    }

    /// Like [`Extractor::extract_top`], scoring `accessor(item)`.
    pub fn extract_top_by<'a, T, F>(
        &self,
        query: &str,
        items: &'a [T],
        strategy: Strategy,
        limit: usize,
        accessor: F,
    ) -> Vec<ExtractedResult<&'a T>>
    where
        F: Fn(&T) -> &str,
    {
        let mut heap = BoundedHeap::with_expected(limit, items.len());
        self.score_each(query, items, strategy, accessor, |result| {
            heap.push(result);
        });

        tracing::debug!(
            %strategy,
            candidates = items.len(),
            limit,
            kept = heap.len(),
            "extracted top"
        );
        heap.into_sorted_desc()
    }

    fn score_each<'a, T, F, S>(
        &self,
        query: &str,
        items: &'a [T],
        strategy: Strategy,
        accessor: F,
        mut sink: S,
    ) where
        F: Fn(&T) -> &str,
        S: FnMut(ExtractedResult<&'a T>),
    {
        let query = self.processor.apply(query);

        for (index, item) in items.iter().enumerate() {
            let string = self.processor.apply(accessor(item));
            let score = strategy.apply_weighted(&self.weights, &query, &string);
            tracing::trace!(index, score, "scored candidate");

            if score >= self.cutoff {
                sink(ExtractedResult { item, score, index });
            }
        }
    }

    fn score_fields<'a, T>(
        &self,
        query: &str,
        query_lower: &str,
        index: usize,
        item: &'a T,
        strategy: Strategy,
        fields: &[Field<'_, T>],
    ) -> Option<ExtractedResult<&'a T>> {
        let mut total = 0u32;
        let mut counted = 0u32;

        for field in fields {
            let value = (field.accessor)(item);
            let raw = strategy.apply_weighted(&self.weights, query, &self.processor.apply(value));
            if raw <= field.cutoff {
                continue;
            }

            let sub_score = if value.to_lowercase().contains(query_lower) {
                MAX_SCORE
            } else {
                raw
            };
            total += u32::from(sub_score);
            counted += 1;
        }

        let score = if counted == 0 {
            0
        } else {
            to_score(f64::from(total) / f64::from(counted))
        };
        if score < self.cutoff {
            return None;
        }
        Some(ExtractedResult { item, score, index })
    }
}

fn sort_desc<T>(results: &mut [ExtractedResult<T>]) {
    results.sort_by(|a, b| b.cmp(a));
}
