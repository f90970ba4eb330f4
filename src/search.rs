// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query a loaded document.
//!
//! Fuses the four pieces: Z-search finds every position, the offset index puts
//! each on a page, and the snippet extractor cuts its context. The display cap
//! only trims `hits`; `total_matches` always counts every occurrence.

use std::time::Instant;

use tracing::debug;

use crate::config::{Config, SearchOptions};
use crate::contracts::check_page_lookup;
use crate::document::Document;
use crate::offsets::page_for_position;
use crate::snippet::snippet;
use crate::types::{Match, SearchHit, SearchOutcome};
use crate::zsearch::find_all_with;

/// Every occurrence of `query` in the document, as matches.
pub fn find_matches(document: &Document, query: &str, options: &SearchOptions) -> Vec<Match> {
    let length = query.chars().count();
    find_all_with(document.text(), query, options)
        .into_iter()
        .map(|position| Match { position, length })
        .collect()
}

/// Search a document and resolve each match to a page and snippet.
///
/// An empty query is "no search" and yields an empty outcome, as does a
/// document with no pages (there is nowhere to jump to). In the pageless case
/// `total_matches` is 0 too, whatever the raw text contains.
pub fn search(document: &Document, query: &str, config: &Config) -> SearchOutcome {
    if query.is_empty() || document.page_count() == 0 {
        return SearchOutcome::empty(query);
    }

    let started = Instant::now();
    let matches = find_matches(document, query, &config.search_options());
    let total_matches = matches.len();
    let shown = config
        .max_results
        .map_or(total_matches, |cap| cap.min(total_matches));

    let offsets = document.offsets();
    let chars = document.text().as_chars();
    let hits: Vec<SearchHit> = matches[..shown]
        .iter()
        .map(|m| {
            let page_index = page_for_position(offsets, m.position);
            check_page_lookup(offsets, m.position, page_index);
            SearchHit {
                position: m.position,
                page_index,
                snippet: snippet(chars, m.position, m.length, config.snippet_radius),
            }
        })
        .collect();
    let elapsed = started.elapsed();

    debug!(
        query,
        total_matches,
        shown,
        elapsed_us = elapsed.as_micros() as u64,
        "search complete"
    );

    SearchOutcome {
        query: query.to_string(),
        hits,
        total_matches,
        truncated: shown < total_matches,
        elapsed,
    }
}
