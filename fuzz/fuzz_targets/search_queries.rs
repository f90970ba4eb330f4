// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the fused search.
//!
//! Throws arbitrary queries and options at a fixed multi-page text to verify
//! search never panics, every hit lands inside the page it names, and the
//! snippet around it is clamped to the radius.

#![no_main]

use arbitrary::Arbitrary;
use folio::{page_range, search, Config, Document, MatchMode, PaginationConfig};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

const TEXT: &str = "Call me Ishmael.\n\nSome years ago, never mind how long precisely, having \
little or no money in my purse, and nothing particular to interest me on shore, I thought I \
would sail about a little and see the watery part of the world.\r\n\r\nIt is a way I have of \
driving off the spleen. Whenever I find myself growing grim about the mouth! Whenever it is a \
damp, drizzly November in my soul?\n\n\n\nCafé, naïve, ÉCOLE, straße.";

#[derive(Debug, Arbitrary)]
struct Input {
    query: String,
    radius: u8,
    whole_word: bool,
    strip_diacritics: bool,
}

fuzz_target!(|input: Input| {
    static DOC: OnceLock<Document> = OnceLock::new();
    let doc = DOC.get_or_init(|| {
        Document::load(
            TEXT,
            &PaginationConfig {
                target_chars: 60,
                tolerance: 10,
            },
        )
    });

    let config = Config {
        snippet_radius: input.radius as usize,
        max_results: None,
        match_mode: if input.whole_word {
            MatchMode::WholeWord
        } else {
            MatchMode::Substring
        },
        strip_diacritics: input.strip_diacritics,
        ..Config::default()
    };

    let outcome = search(doc, &input.query, &config);
    assert_eq!(outcome.hits.len(), outcome.total_matches);

    for hit in &outcome.hits {
        let range = page_range(doc.offsets(), hit.page_index, doc.text().len())
            .expect("hit names a page that does not exist");
        assert!(range.contains(&hit.position) || hit.position < doc.offsets()[0]);
        assert!(hit.snippet.before.chars().count() <= config.snippet_radius);
        assert!(hit.snippet.after.chars().count() <= config.snippet_radius);
        assert_eq!(hit.snippet.matched.chars().count(), input.query.chars().count());
    }
});
