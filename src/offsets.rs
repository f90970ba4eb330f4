// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Position → page lookup over sorted page offsets.

use std::ops::Range;

/// Index of the page containing character position `pos`.
///
/// That is the page with the greatest offset `<= pos`. Positions before the
/// first page (leading whitespace, a byte-order mark) clamp to page 0; the
/// cover pseudo-page is the caller's business and never comes out of here.
///
/// `offsets` must be sorted. With no pages there is nothing to point at and
/// the result is `0`.
///
/// O(log n) via `partition_point`.
pub fn page_for_position(offsets: &[usize], pos: usize) -> usize {
    offsets.partition_point(|&offset| offset <= pos).saturating_sub(1)
}

/// Character range of the source covered by page `index`.
///
/// Runs from the page's offset to the next page's offset (or `text_len` for
/// the last page), so it includes the whitespace trailing the page. Returns
/// `None` for an index past the last page.
pub fn page_range(offsets: &[usize], index: usize, text_len: usize) -> Option<Range<usize>> {
    let start = *offsets.get(index)?;
    let end = offsets.get(index + 1).copied().unwrap_or(text_len);
    Some(start..end.max(start))
}
