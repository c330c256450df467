//! Property tests for scoring and extraction.

use fuzzyrank::{
    levenshtein_distance, partial_ratio, ratio, token_set_ratio, token_sort_ratio, Extractor,
    Strategy as Scorer,
};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

fn phrase() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 0..6).prop_map(|words| words.join(" "))
}

fn any_scorer() -> impl Strategy<Value = Scorer> {
    prop::sample::select(Scorer::ALL.to_vec())
}

proptest! {
    #[test]
    fn ratio_is_symmetric(a in ".{0,16}", b in ".{0,16}") {
        prop_assert_eq!(ratio(&a, &b), ratio(&b, &a));
    }

    #[test]
    fn ratio_of_self_is_100(s in ".{0,24}") {
        prop_assert_eq!(ratio(&s, &s), 100);
    }

    #[test]
    fn distance_is_bounded_by_longer_length(a in "[a-c]{0,12}", b in "[a-c]{0,12}") {
        let d = levenshtein_distance(&a, &b);
        prop_assert!(d <= a.len().max(b.len()));
        prop_assert!(d >= a.len().abs_diff(b.len()));
    }

    #[test]
    fn partial_ratio_finds_embedded_string(
        prefix in "[a-z]{0,8}",
        needle in "[a-z]{1,8}",
        suffix in "[a-z]{0,8}",
    ) {
        let haystack = format!("{prefix}{needle}{suffix}");
        prop_assert_eq!(partial_ratio(&needle, &haystack), 100);
    }

    #[test]
    fn token_sort_ignores_word_order(words in prop::collection::vec(word(), 1..6)) {
        let forward = words.join(" ");
        let mut reversed = words.clone();
        reversed.reverse();
        prop_assert_eq!(token_sort_ratio(&forward, &reversed.join("  ")), 100);
    }

    #[test]
    fn token_set_ignores_repeats(words in prop::collection::vec(word(), 1..5)) {
        let once = words.join(" ");
        let twice = format!("{once} {once}");
        prop_assert_eq!(token_set_ratio(&once, &twice), 100);
    }

    #[test]
    fn every_strategy_stays_in_range(a in phrase(), b in phrase(), strategy in any_scorer()) {
        let score = strategy.apply(&a, &b);
        prop_assert!(score <= 100);
        prop_assert_eq!(strategy.apply(&a, &a), 100);
    }

    #[test]
    fn cutoff_is_honored(
        query in phrase(),
        items in prop::collection::vec(phrase(), 0..12),
        cutoff in 0u8..=100,
        strategy in any_scorer(),
    ) {
        let extractor = Extractor::new().with_cutoff(cutoff);
        let results = extractor.extract_without_order(&query, &items, strategy);
        prop_assert!(results.iter().all(|r| r.score >= cutoff));

        let expected = items
            .iter()
            .filter(|item| strategy.apply(&query, item) >= cutoff)
            .count();
        prop_assert_eq!(results.len(), expected);
    }

    #[test]
    fn top_k_is_sorted_prefix(
        query in phrase(),
        items in prop::collection::vec(phrase(), 0..16),
        limit in 0usize..20,
        strategy in any_scorer(),
    ) {
        let extractor = Extractor::new();
        let sorted: Vec<(usize, u8)> = extractor
            .extract_sorted(&query, &items, strategy)
            .iter()
            .take(limit)
            .map(|r| (r.index, r.score))
            .collect();
        let top: Vec<(usize, u8)> = extractor
            .extract_top(&query, &items, strategy, limit)
            .iter()
            .map(|r| (r.index, r.score))
            .collect();
        prop_assert_eq!(top, sorted);
    }

    #[test]
    fn extract_one_is_first_sorted(
        query in phrase(),
        items in prop::collection::vec(phrase(), 1..12),
    ) {
        let extractor = Extractor::new();
        let best = extractor.extract_one(&query, &items, Scorer::Weighted).unwrap();
        let sorted = extractor.extract_sorted(&query, &items, Scorer::Weighted);
        prop_assert_eq!(best.index, sorted[0].index);
    }
}
