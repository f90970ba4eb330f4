//! Property tests for Z-search, snippets and the fused search.

use crate::oracles::{oracle_find_all, oracle_page_for_position, query_strategy, text_strategy};
use folio::{find_all, search, snippet, z_function, Config, Document, PaginationConfig, RawText};
use proptest::prelude::*;

/// Naive Z-array: longest common prefix of `s` and each suffix.
fn naive_z(s: &[char]) -> Vec<usize> {
    (0..s.len())
        .map(|i| s.iter().zip(&s[i..]).take_while(|(a, b)| a == b).count())
        .collect()
}

proptest! {
    /// Property: the Z-function matches its definition.
    #[test]
    fn prop_z_function_matches_naive(s in "[ab]{0,40}") {
        let chars: Vec<char> = s.chars().collect();
        prop_assert_eq!(z_function(&chars), naive_z(&chars));
    }

    /// Property: Z-search reports exactly the brute-force positions.
    #[test]
    fn prop_find_all_equals_oracle(text in text_strategy(), query in query_strategy()) {
        prop_assert_eq!(find_all(&text, &query), oracle_find_all(&text, &query));
    }

    /// Property: every reported position really matches, case-insensitively.
    #[test]
    fn prop_reported_positions_match(text in text_strategy(), query in query_strategy()) {
        let chars: Vec<char> = text.chars().collect();
        let query_len = query.chars().count();
        for pos in find_all(&text, &query) {
            let window: String = chars[pos..pos + query_len].iter().collect();
            prop_assert_eq!(window.to_lowercase(), query.to_lowercase());
        }
    }

    /// Property: same input, same output.
    #[test]
    fn prop_find_all_idempotent(text in text_strategy(), query in query_strategy()) {
        prop_assert_eq!(find_all(&text, &query), find_all(&text, &query));
    }

    /// Property: a query longer than the text never matches.
    #[test]
    fn prop_longer_query_never_matches(text in "[abc]{0,10}", extra in "[abc]{1,5}") {
        let query = format!("{}{}", text, extra);
        prop_assert!(find_all(&text, &query).is_empty());
        prop_assert!(find_all(&text, "").is_empty());
    }

    /// Property: snippets are clamped to the radius and empty at the edges.
    #[test]
    fn prop_snippet_bounds(
        text in "[a-z ]{0,80}",
        position in 0usize..80,
        match_len in 0usize..6,
        radius in 0usize..30,
    ) {
        let raw = RawText::new(&text);
        let chars = raw.as_chars();
        let s = snippet(chars, position, match_len, radius);

        prop_assert!(s.before.chars().count() <= radius);
        prop_assert!(s.after.chars().count() <= radius);
        if position == 0 {
            prop_assert_eq!(s.before.as_str(), "");
        }
        if position + match_len >= chars.len() {
            prop_assert_eq!(s.after.as_str(), "");
        }
        if position + match_len <= chars.len() {
            let expected: String = chars[position..position + match_len].iter().collect();
            prop_assert_eq!(s.matched, expected);
        }
    }

    /// Property: search end to end. Every position is reported once, on the
    /// page a linear scan would pick, and the total ignores the display cap.
    #[test]
    fn prop_search_end_to_end(
        text in text_strategy(),
        query in query_strategy(),
        target in 5usize..80,
        cap in 1usize..10,
    ) {
        let config = Config {
            pagination: PaginationConfig { target_chars: target, tolerance: target / 5 },
            max_results: Some(cap),
            ..Config::default()
        };
        let doc = Document::load(text.as_str(), &config.pagination);
        let outcome = search(&doc, &query, &config);

        if doc.page_count() == 0 {
            prop_assert!(outcome.hits.is_empty());
            return Ok(());
        }

        let expected = oracle_find_all(&text, &query);
        prop_assert_eq!(outcome.total_matches, expected.len());
        prop_assert_eq!(outcome.hits.len(), expected.len().min(cap));
        prop_assert_eq!(outcome.truncated, expected.len() > cap);

        for (hit, &pos) in outcome.hits.iter().zip(&expected) {
            prop_assert_eq!(hit.position, pos);
            prop_assert_eq!(hit.page_index, oracle_page_for_position(doc.offsets(), pos));
            prop_assert!(hit.page_index < doc.page_count());
        }
    }
}
