// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for pagination and search.
//!
//! These are debug-mode assertions on the results of every computation:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`)
//! 2. **Early failure detection** while tests run
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function              | Property                                      |
//! |--------------------------------|-----------------------------------------------|
//! | `check_pagination_well_formed` | equal lengths, strictly increasing offsets    |
//! |                                | and each page starts where its offset says    |
//! | `check_matches_sorted`         | ascending, unique, in bounds                  |
//! | `check_page_lookup`            | greatest offset `<= pos`, clamped to page 0   |
//!
//! For a non-panicking structural check use [`crate::Pagination::validate`].

use crate::types::{Pagination, RawText};
use crate::utils::is_trim_char;

// ============================================================================
// PAGINATION CONTRACTS
// ============================================================================

/// Check that a pagination is consistent with the text it came from.
///
/// # Panics (debug builds only)
/// Panics if lengths differ, offsets are not strictly increasing or out of
/// bounds, or a page's first character differs from the character at its offset.
#[inline]
pub fn check_pagination_well_formed(text: &RawText, pagination: &Pagination) {
    debug_assert_eq!(
        pagination.pages.len(),
        pagination.offsets.len(),
        "Contract violation: pages.len() {} != offsets.len() {}",
        pagination.pages.len(),
        pagination.offsets.len()
    );

    let chars = text.as_chars();
    for (i, (page, &offset)) in pagination
        .pages
        .iter()
        .zip(pagination.offsets.iter())
        .enumerate()
    {
        debug_assert_eq!(
            page.index, i,
            "Contract violation: page at position {} has index {}",
            i, page.index
        );

        debug_assert!(
            offset < chars.len(),
            "Contract violation: offsets[{}] = {} >= text length {}",
            i,
            offset,
            chars.len()
        );

        if i > 0 {
            debug_assert!(
                pagination.offsets[i - 1] < offset,
                "Contract violation: offsets not strictly increasing at {} ({} >= {})",
                i,
                pagination.offsets[i - 1],
                offset
            );
        }

        if let Some(&at_offset) = chars.get(offset) {
            debug_assert!(
                !is_trim_char(at_offset),
                "Contract violation: offsets[{}] = {} points at whitespace",
                i,
                offset
            );
            debug_assert_eq!(
                page.content.chars().next(),
                Some(at_offset),
                "Contract violation: page {} does not start at its offset {}",
                i,
                offset
            );
        }
    }
}

// ============================================================================
// SEARCH CONTRACTS
// ============================================================================

/// Check that match positions are strictly ascending and fit in the text.
///
/// # Panics (debug builds only)
/// Panics on a duplicate, a descending pair, or `position + match_len > text_len`.
#[inline]
pub fn check_matches_sorted(positions: &[usize], match_len: usize, text_len: usize) {
    for (i, &position) in positions.iter().enumerate() {
        debug_assert!(
            position + match_len <= text_len,
            "Contract violation: match {} at {} (+{}) runs past text length {}",
            i,
            position,
            match_len,
            text_len
        );
        if i > 0 {
            debug_assert!(
                positions[i - 1] < position,
                "Contract violation: match positions not strictly ascending at {} ({} >= {})",
                i,
                positions[i - 1],
                position
            );
        }
    }
}

/// Check a page lookup result.
///
/// # Panics (debug builds only)
/// Panics if `page` is not the page with the greatest offset `<= pos`
/// (or `0` when `pos` precedes every offset).
#[inline]
pub fn check_page_lookup(offsets: &[usize], pos: usize, page: usize) {
    if offsets.is_empty() {
        return;
    }
    debug_assert!(
        page < offsets.len(),
        "Contract violation: page {} >= page count {}",
        page,
        offsets.len()
    );
    if page > 0 {
        debug_assert!(
            offsets[page] <= pos,
            "Contract violation: position {} precedes page {} offset {}",
            pos,
            page,
            offsets[page]
        );
    }
    if let Some(&next) = offsets.get(page + 1) {
        debug_assert!(
            pos < next,
            "Contract violation: position {} belongs past page {} (next offset {})",
            pos,
            page,
            next
        );
    }
}
