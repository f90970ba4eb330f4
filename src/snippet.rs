// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Context windows around matches.

use crate::types::Snippet;

/// Window of up to `radius` chars either side of `text[position..position + match_len]`.
///
/// Everything is clamped to the text: a match at the start has an empty
/// `before`, one at the end an empty `after`, and an out-of-range position
/// yields empty parts rather than a panic. No attempt is made to align the
/// window to word boundaries.
pub fn snippet(text: &[char], position: usize, match_len: usize, radius: usize) -> Snippet {
    let len = text.len();
    let start = position.min(len);
    let end = position.saturating_add(match_len).min(len);
    let before_start = start.saturating_sub(radius);
    let after_end = end.saturating_add(radius).min(len);

    Snippet {
        before: text[before_start..start].iter().collect(),
        matched: text[start..end].iter().collect(),
        after: text[end..after_end].iter().collect(),
    }
}

/// [`snippet`] over a string slice, for callers without a char table.
pub fn snippet_str(text: &str, position: usize, match_len: usize, radius: usize) -> Snippet {
    let chars: Vec<char> = text.chars().collect();
    snippet(&chars, position, match_len, radius)
}
