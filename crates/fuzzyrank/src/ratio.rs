//! Whole-string and best-substring ratios.

use crate::distance::{ratio_units, units, Score, MAX_SCORE};

/// Similarity of two whole strings.
///
/// Symmetric, and 100 for identical inputs (including two empty strings).
///
/// # Example
/// ```
/// use fuzzyrank::ratio;
///
/// assert!(ratio("mysmilarstring", "mysimilarstring") > 90);
/// ```
pub fn ratio(a: &str, b: &str) -> Score {
    ratio_units(&units(a), &units(b))
}

/// Best ratio of the shorter string against every equal-length window of
/// the longer one.
///
/// Returns 100 whenever the shorter string occurs literally inside the
/// longer string.
///
/// # Example
/// ```
/// use fuzzyrank::partial_ratio;
///
/// assert_eq!(partial_ratio("abc", "xxabcxx"), 100);
/// ```
pub fn partial_ratio(a: &str, b: &str) -> Score {
    partial_ratio_units(&units(a), &units(b))
}

pub(crate) fn partial_ratio_units<T: PartialEq>(a: &[T], b: &[T]) -> Score {
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if shorter.is_empty() {
        return if longer.is_empty() { MAX_SCORE } else { 0 };
    }
    if shorter.len() == longer.len() {
        return ratio_units(shorter, longer);
    }

    let mut best = 0;
    for window in longer.windows(shorter.len()) {
        best = best.max(ratio_units(shorter, window));
        if best == MAX_SCORE {
            break;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_identity() {
        assert_eq!(ratio("fuzzy", "fuzzy"), 100);
        assert_eq!(ratio("", ""), 100);
    }

    #[test]
    fn test_ratio_empty_vs_non_empty() {
        assert_eq!(ratio("", "abc"), 0);
        assert_eq!(ratio("abc", ""), 0);
    }

    #[test]
    fn test_ratio_misspelling() {
        assert_eq!(ratio("mysmilarstring", "mysimilarstring"), 97);
        assert!(ratio("mysmilarstring", "myawfullysimilarstirng") < 80);
    }

    #[test]
    fn test_ratio_symmetric() {
        assert_eq!(ratio("kitten", "sitting"), ratio("sitting", "kitten"));
    }

    #[test]
    fn test_partial_ratio_contained() {
        assert_eq!(partial_ratio("abc", "xxabcxx"), 100);
        assert_eq!(partial_ratio("xxabcxx", "abc"), 100);
        assert_eq!(partial_ratio("yankees", "new york yankees"), 100);
    }

    #[test]
    fn test_partial_ratio_prefix_and_suffix() {
        assert_eq!(partial_ratio("new", "new york"), 100);
        assert_eq!(partial_ratio("york", "new york"), 100);
    }

    #[test]
    fn test_partial_ratio_no_overlap() {
        // Every window needs three substitutions: (6 - 3) / 6
        assert_eq!(partial_ratio("abc", "xyzxyz"), 50);
    }

    #[test]
    fn test_partial_ratio_empty() {
        assert_eq!(partial_ratio("", ""), 100);
        assert_eq!(partial_ratio("", "abc"), 0);
    }

    #[test]
    fn test_partial_ratio_beats_ratio_for_containment() {
        let (short, long) = ("similar", "a very similar string");
        assert!(partial_ratio(short, long) > ratio(short, long));
    }
}
