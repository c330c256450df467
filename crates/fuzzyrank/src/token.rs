//! Word-order and word-set insensitive ratios.

use std::collections::BTreeSet;

use crate::distance::{Score, MAX_SCORE};
use crate::ratio::{partial_ratio, ratio};

/// Split on whitespace, drop empty tokens, sort, and rejoin with single spaces.
pub fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Ratio of the two strings after sorting their tokens.
///
/// # Example
/// ```
/// use fuzzyrank::token_sort_ratio;
///
/// assert_eq!(token_sort_ratio("order words out of", "words out of order"), 100);
/// ```
pub fn token_sort_ratio(a: &str, b: &str) -> Score {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Partial ratio of the two strings after sorting their tokens.
pub fn token_sort_partial_ratio(a: &str, b: &str) -> Score {
    partial_ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Ratio built from the shared token core and each side's extra tokens.
///
/// # Example
/// ```
/// use fuzzyrank::token_set_ratio;
///
/// assert_eq!(token_set_ratio("fuzzy was a bear", "fuzzy fuzzy fuzzy bear"), 100);
/// ```
pub fn token_set_ratio(a: &str, b: &str) -> Score {
    TokenSet::new(a, b).score(ratio)
}

/// Token set ratio using partial ratio for each comparison.
pub fn token_set_partial_ratio(a: &str, b: &str) -> Score {
    TokenSet::new(a, b).score(partial_ratio)
}

/// The three comparison strings of a token set match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TokenSet {
    /// Sorted intersection
    pub common: String,
    /// Intersection followed by tokens only in the first string
    pub combined_a: String,
    /// Intersection followed by tokens only in the second string
    pub combined_b: String,
}

impl TokenSet {
    pub(crate) fn new(a: &str, b: &str) -> Self {
        let set_a: BTreeSet<&str> = a.split_whitespace().collect();
        let set_b: BTreeSet<&str> = b.split_whitespace().collect();

        let common = join(set_a.intersection(&set_b));
        let only_a = join(set_a.difference(&set_b));
        let only_b = join(set_b.difference(&set_a));

        Self {
            combined_a: concat(&common, &only_a),
            combined_b: concat(&common, &only_b),
            common,
        }
    }

    pub(crate) fn score(&self, scorer: fn(&str, &str) -> Score) -> Score {
        if self.combined_a.is_empty() || self.combined_b.is_empty() {
            return if self.combined_a == self.combined_b { MAX_SCORE } else { 0 };
        }
        scorer(&self.combined_a, &self.combined_b)
            .max(scorer(&self.common, &self.combined_a))
            .max(scorer(&self.common, &self.combined_b))
    }
}

// BTreeSet iteration is already sorted
fn join<'a, 'b: 'a>(tokens: impl Iterator<Item = &'a &'b str>) -> String {
    tokens.copied().collect::<Vec<_>>().join(" ")
}

fn concat(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (_, true) => head.to_string(),
        (true, false) => tail.to_string(),
        (false, false) => format!("{head} {tail}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_tokens_collapses_whitespace() {
        assert_eq!(sorted_tokens("  words   out of\torder "), "of order out words");
        assert_eq!(sorted_tokens("   "), "");
    }

    #[test]
    fn test_token_sort_word_order() {
        assert_eq!(token_sort_ratio("order words out of", "words out of order"), 100);
        assert_eq!(token_sort_ratio("new york mets", "mets new york"), 100);
    }

    #[test]
    fn test_token_sort_partial() {
        assert_eq!(token_sort_partial_ratio("mets", "new york mets"), 100);
        assert!(token_sort_partial_ratio("york new", "new york mets") > token_sort_ratio("york new", "new york mets"));
    }

    #[test]
    fn test_token_set_parts() {
        let set = TokenSet::new("fuzzy was a bear", "fuzzy fuzzy fuzzy bear");
        assert_eq!(set.common, "bear fuzzy");
        assert_eq!(set.combined_a, "bear fuzzy a was");
        assert_eq!(set.combined_b, "bear fuzzy");
    }

    #[test]
    fn test_token_set_repeated_tokens() {
        assert_eq!(token_set_ratio("fuzzy was a bear", "fuzzy fuzzy fuzzy bear"), 100);
    }

    #[test]
    fn test_token_set_disjoint() {
        let set = TokenSet::new("abc", "xyz");
        assert_eq!(set.common, "");
        assert_eq!(set.combined_a, "abc");
        assert_eq!(set.combined_b, "xyz");
        assert_eq!(token_set_ratio("abc", "xyz"), ratio("abc", "xyz"));
    }

    #[test]
    fn test_token_set_partial() {
        assert_eq!(token_set_partial_ratio("york mets", "the new york mets"), 100);
    }

    #[test]
    fn test_token_set_empty() {
        assert_eq!(token_set_ratio("", ""), 100);
        assert_eq!(token_set_ratio("", "abc"), 0);
        assert_eq!(token_set_partial_ratio("  ", "abc"), 0);
    }
}
