//! Edit distance and the normalized similarity ratio.
//!
//! All scoring in this crate works on extended grapheme clusters, so a
//! combining sequence such as `"e\u{301}"` counts as one unit everywhere:
//! in distances, in lengths, and in partial-ratio windows.

use unicode_segmentation::UnicodeSegmentation;

/// Similarity score in `0..=100`.
pub type Score = u8;

/// Highest possible score; two inputs identical under a strategy.
pub const MAX_SCORE: Score = 100;

/// Split a string into the grapheme clusters used as edit units.
#[inline]
pub fn units(s: &str) -> Vec<&str> {
    s.graphemes(true).collect()
}

/// Number of edit units in a string.
#[inline]
pub fn unit_len(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Calculate Levenshtein edit distance between two unit sequences.
///
/// Insertions, deletions and substitutions all cost 1. Runs in
/// `O(|a| * |b|)` time and keeps a single rolling row sized to the
/// shorter input.
///
/// # Example
/// ```
/// use fuzzyrank::distance;
///
/// assert_eq!(distance(&['k', 'i', 't', 't', 'e', 'n'], &['s', 'i', 't', 't', 'i', 'n', 'g']), 3);
/// ```
pub fn distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    // Keep the row over the shorter sequence
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();

    for (i, lu) in long.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, su) in short.iter().enumerate() {
            let cost = usize::from(lu != su);
            let next = (row[j + 1] + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = row[j + 1];
            row[j + 1] = next;
        }
    }

    row[short.len()]
}

/// Levenshtein distance between two strings, counted in grapheme clusters.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    distance(&units(a), &units(b))
}

/// Normalized similarity of two unit sequences.
///
/// `round(100 * (|a| + |b| - distance) / (|a| + |b|))`, and 100 when both
/// are empty.
pub fn ratio_units<T: PartialEq>(a: &[T], b: &[T]) -> Score {
    let total = a.len() + b.len();
    if total == 0 {
        return MAX_SCORE;
    }
    let dist = distance(a, b);
    to_score(100.0 * (total - dist) as f64 / total as f64)
}

/// Round a raw percentage to the nearest score and clamp it to `0..=100`.
#[inline]
pub(crate) fn to_score(raw: f64) -> Score {
    raw.round().clamp(0.0, f64::from(MAX_SCORE)) as Score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_same() {
        assert_eq!(levenshtein_distance("hello", "hello"), 0);
    }

    #[test]
    fn test_distance_one_edit() {
        assert_eq!(levenshtein_distance("hello", "hallo"), 1);
    }

    #[test]
    fn test_distance_insert_delete() {
        assert_eq!(levenshtein_distance("helo", "hello"), 1);
        assert_eq!(levenshtein_distance("hello", "helo"), 1);
    }

    #[test]
    fn test_distance_empty() {
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", ""), 0);
    }

    #[test]
    fn test_distance_classic() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("sitting", "kitten"), 3);
    }

    #[test]
    fn test_distance_over_tokens() {
        let a = ["new", "york", "mets"];
        let b = ["new", "york", "yankees"];
        assert_eq!(distance(&a, &b), 1);
    }

    #[test]
    fn test_graphemes_are_single_units() {
        // "é" as e + combining acute is one unit
        assert_eq!(unit_len("e\u{301}"), 1);
        assert_eq!(levenshtein_distance("cafe\u{301}", "cafe"), 1);
    }

    #[test]
    fn test_ratio_formula() {
        // (6 - 1) / 6 = 83.33
        assert_eq!(ratio_units(&units("abc"), &units("abd")), 83);
        assert_eq!(ratio_units::<&str>(&[], &[]), 100);
        assert_eq!(ratio_units(&units(""), &units("abc")), 0);
    }

    #[test]
    fn test_to_score_rounds_half_up() {
        assert_eq!(to_score(96.5), 97);
        assert_eq!(to_score(96.49), 96);
        assert_eq!(to_score(130.0), 100);
        assert_eq!(to_score(-3.0), 0);
    }
}
