//! WASM bindings for fuzzy scoring.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{Extractor, Processor, Strategy};

/// Score two strings with the named strategy (e.g. `"token_set"`).
///
/// Both strings are lowercased first, as the extractor does. Unknown
/// strategy names score 0.
#[wasm_bindgen]
pub fn score(strategy: &str, a: &str, b: &str) -> u8 {
    let Ok(strategy) = strategy.parse::<Strategy>() else {
        return 0;
    };
    let processor = Processor::default();
    strategy.apply(&processor.apply(a), &processor.apply(b))
}

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::levenshtein_distance(a, b)
}

/// Rank a JSON array of strings against a query.
///
/// # Arguments
/// * `query` - Search query
/// * `items_json` - JSON array of candidate strings
/// * `strategy` - Strategy name
/// * `limit` - Maximum results to return (0 for all)
/// * `cutoff` - Minimum score
///
/// # Returns
/// JSON array of `{ value, score, index }`, best first
#[wasm_bindgen]
pub fn extract_top_json(
    query: &str,
    items_json: &str,
    strategy: &str,
    limit: usize,
    cutoff: u8,
) -> String {
    #[derive(Serialize)]
    struct Match<'a> {
        value: &'a str,
        score: u8,
        index: usize,
    }

    let Ok(items) = serde_json::from_str::<Vec<String>>(items_json) else {
        return "[]".to_string();
    };
    let Ok(strategy) = strategy.parse::<Strategy>() else {
        return "[]".to_string();
    };

    let extractor = Extractor::new().with_cutoff(cutoff);
    let results = if limit > 0 {
        extractor.extract_top(query, &items, strategy, limit)
    } else {
        extractor.extract_sorted(query, &items, strategy)
    };

    let matches: Vec<Match<'_>> = results
        .iter()
        .map(|r| Match {
            value: r.item.as_str(),
            score: r.score,
            index: r.index,
        })
        .collect();

    serde_json::to_string(&matches).unwrap_or_else(|_| "[]".to_string())
}
