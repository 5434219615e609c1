//! Result-list shape properties: floor, cap, ordering, provenance.

use super::common::{boosted_options, default_options, page_doc};
use proptest::prelude::*;
use wayfinder::{SearchEngine, MAX_RESULTS, SCORE_FLOOR};

fn words(count: std::ops::Range<usize>) -> impl Strategy<Value = String> {
    prop::collection::vec(proptest::string::string_regex("[a-z]{2,9}").unwrap(), count)
        .prop_map(|ws| ws.join(" "))
}

fn corpus_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((words(1..4), words(1..10)), 1..20)
}

fn build_boosted(corpus: &[(String, String)], boost: f64) -> SearchEngine {
    let paths: Vec<String> = (0..corpus.len()).map(|i| format!("/doc/{}", i)).collect();
    let path_refs: Vec<&str> = paths.iter().map(String::as_str).collect();

    let mut engine = SearchEngine::new(boosted_options(&path_refs, boost));
    for (path, (title, body)) in paths.iter().zip(corpus) {
        engine.add_document(&page_doc(path, title, body)).unwrap();
    }
    engine
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn floor_cap_and_order_hold_for_any_query(
        corpus in corpus_strategy(),
        query in words(1..3),
    ) {
        let engine = build_boosted(&corpus, 80.0);

        let results = engine.search(&query);
        prop_assert!(results.len() <= MAX_RESULTS);
        for result in &results {
            prop_assert!(result.score > SCORE_FLOOR);
            prop_assert!(result.score.is_finite());
        }
        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn every_result_hydrates_from_the_store(
        corpus in corpus_strategy(),
        query in words(1..3),
    ) {
        let engine = build_boosted(&corpus, 80.0);

        for result in engine.search(&query) {
            let stored = engine.store().get(&result.id);
            prop_assert!(stored.is_some());
            prop_assert_eq!(stored.unwrap(), &result.document);
        }
    }

    #[test]
    fn filter_only_ever_narrows_results(
        corpus in corpus_strategy(),
        query in words(1..3),
    ) {
        let engine = build_boosted(&corpus, 80.0);

        let all = engine.search(&query);
        let narrowed = engine.search_with_filter(&query, |doc| {
            doc.get("path")
                .and_then(|v| v.as_text())
                .is_some_and(|path| !path.ends_with('1'))
        });

        prop_assert!(narrowed.len() <= all.len());
        for result in &narrowed {
            prop_assert!(!result.id.ends_with('1'));
        }
    }

    #[test]
    fn wildcard_preserves_the_stored_subset_in_order(
        corpus in corpus_strategy(),
    ) {
        // Configure every path as an initial result but only store the even
        // ones: the wildcard must return exactly the stored subset, in
        // configured order, all at score 1.0.
        let paths: Vec<String> = (0..corpus.len()).map(|i| format!("/doc/{}", i)).collect();

        let mut options = default_options();
        options.initial_results = paths.clone();
        let mut engine = SearchEngine::new(options);
        for (i, (title, body)) in corpus.iter().enumerate() {
            if i % 2 == 0 {
                engine
                    .add_document(&page_doc(&paths[i], title, body))
                    .unwrap();
            }
        }

        let results = engine.search("*");
        let expected: Vec<&String> = paths.iter().step_by(2).collect();
        prop_assert_eq!(results.len(), expected.len());
        for (result, path) in results.iter().zip(expected) {
            prop_assert_eq!(&result.id, path);
            prop_assert_eq!(result.score, 1.0);
        }
    }
}
