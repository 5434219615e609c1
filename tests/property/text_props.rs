//! Tokenizer and edit-distance properties.

use proptest::prelude::*;
use wayfinder::{fuzzy_threshold, levenshtein, tokenize, MAX_EDIT_DISTANCE};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn emitted_terms_are_nonempty_and_lowercase(value in ".{0,80}") {
        for term in tokenize(&value) {
            prop_assert!(!term.is_empty());
            prop_assert_eq!(term.clone(), term.to_lowercase());
        }
    }

    #[test]
    fn tokenization_is_idempotent(value in ".{0,80}") {
        for term in tokenize(&value) {
            prop_assert_eq!(tokenize(&term), vec![term.clone()]);
        }
    }

    #[test]
    fn levenshtein_is_a_metric_on_identity_and_symmetry(
        a in "[a-zà-ü]{0,12}",
        b in "[a-zà-ü]{0,12}",
    ) {
        prop_assert_eq!(levenshtein(&a, &a), 0);
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    #[test]
    fn levenshtein_is_bounded_by_the_longer_length(
        a in "[a-z]{0,12}",
        b in "[a-z]{0,12}",
    ) {
        let distance = levenshtein(&a, &b);
        let a_len = a.chars().count();
        let b_len = b.chars().count();

        prop_assert!(distance <= a_len.max(b_len));
        prop_assert!(distance >= a_len.abs_diff(b_len));
    }

    #[test]
    fn single_substitution_is_distance_one(word in "[a-z]{2,12}") {
        let mut chars: Vec<char> = word.chars().collect();
        chars[0] = if chars[0] == 'x' { 'y' } else { 'x' };
        let mutated: String = chars.iter().collect();

        prop_assume!(mutated != word);
        prop_assert_eq!(levenshtein(&word, &mutated), 1);
    }

    #[test]
    fn fuzzy_threshold_is_monotone_and_capped(len in 0usize..200) {
        prop_assert!(fuzzy_threshold(len) <= fuzzy_threshold(len + 1));
        prop_assert!(fuzzy_threshold(len) <= MAX_EDIT_DISTANCE);
    }
}
