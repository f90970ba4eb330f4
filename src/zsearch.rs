// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Linear-time exact matching with the Z-function.
//!
//! Classically, all occurrences of a pattern `P` (length `m`) in a text `T`
//! come from the Z-array of `P ⧺ $ ⧺ T`: every text index whose Z-value
//! reaches `m` starts an occurrence. The separator `$` has to be a character
//! that appears in neither string, which a text using the full range of
//! Unicode cannot promise.
//!
//! So there is no separator character here. Index `m` of the virtual
//! concatenation is a boundary that compares unequal to everything, which is
//! the same as capping every comparison at the end of the pattern. With the
//! cap in place a text-region Z-value never exceeds `m`, so the Z-box lookup
//! `z[i - l]` always lands inside the pattern and only the pattern's Z-array
//! needs to be stored. The text region is streamed.
//!
//! ```text
//!   index:  0 .. m-1 │ m │ m+1 .. m+n
//!           pattern  │ ▮ │ text           ▮ = boundary, equal to nothing
//! ```
//!
//! Cost: O(n + m) time, O(m) extra space beyond the folded text.
//!
//! # Folding
//!
//! Both sides are folded one char to one char ([`crate::utils::fold_char`]),
//! so a position in the folded text is a position in the original.

use crate::config::{MatchMode, SearchOptions};
use crate::contracts::check_matches_sorted;
use crate::types::RawText;
use crate::utils::{fold_char, fold_chars, is_word_char};

/// Z-array of a sequence.
///
/// `z[i]` is the length of the longest common prefix of `s` and `s[i..]`.
/// `z[0]` is defined as `s.len()`.
pub fn z_function<T: PartialEq>(s: &[T]) -> Vec<usize> {
    let n = s.len();
    let mut z = vec![0; n];
    if n == 0 {
        return z;
    }
    z[0] = n;

    let (mut l, mut r) = (0, 0);
    for i in 1..n {
        let mut k = if i < r { (r - i).min(z[i - l]) } else { 0 };
        while i + k < n && s[k] == s[i + k] {
            k += 1;
        }
        z[i] = k;
        if i + k > r {
            l = i;
            r = i + k;
        }
    }
    z
}

/// A pattern prepared for repeated scans.
#[derive(Debug, Clone)]
pub struct ZMatcher {
    pattern: Vec<char>,
    z: Vec<usize>,
}

impl ZMatcher {
    /// Prepare an already-folded pattern.
    pub fn new(pattern: Vec<char>) -> Self {
        let z = z_function(&pattern);
        ZMatcher { pattern, z }
    }

    /// Fold and prepare a query string.
    pub fn for_query(query: &str, strip_diacritics: bool) -> Self {
        ZMatcher::new(fold_chars(query.chars(), strip_diacritics))
    }

    /// Pattern length in chars.
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Every start position of the pattern in `text`, ascending.
    ///
    /// `text` must be folded the same way as the pattern.
    pub fn find_all(&self, text: &[char]) -> Vec<usize> {
        let m = self.pattern.len();
        let n = text.len();
        let mut positions = Vec::new();
        if m == 0 || m > n {
            return positions;
        }

        // Z-box [l, r) in text coordinates: text[l..r] == pattern[..r - l].
        let (mut l, mut r) = (0, 0);
        for j in 0..n {
            // j > l whenever j < r, and j - l < r - l <= m.
            let mut k = if j < r { (r - j).min(self.z[j - l]) } else { 0 };
            while k < m && j + k < n && self.pattern[k] == text[j + k] {
                k += 1;
            }
            if j + k > r {
                l = j;
                r = j + k;
            }
            if k == m {
                positions.push(j);
            }
        }
        positions
    }
}

/// Every case-insensitive occurrence of `query` in `text`, ascending.
///
/// Positions are character offsets into `text`. An empty query, or one longer
/// than the text, finds nothing.
pub fn find_all(text: &str, query: &str) -> Vec<usize> {
    let matcher = ZMatcher::for_query(query, false);
    if matcher.is_empty() {
        return Vec::new();
    }
    let folded = fold_chars(text.chars(), false);
    matcher.find_all(&folded)
}

/// [`find_all`] over a loaded text, honoring match mode and diacritic folding.
pub fn find_all_with(text: &RawText, query: &str, options: &SearchOptions) -> Vec<usize> {
    let matcher = ZMatcher::for_query(query, options.strip_diacritics);
    if matcher.is_empty() || matcher.len() > text.len() {
        return Vec::new();
    }

    let folded: Vec<char> = text
        .as_chars()
        .iter()
        .map(|&c| fold_char(c, options.strip_diacritics))
        .collect();
    let mut positions = matcher.find_all(&folded);

    if options.match_mode == MatchMode::WholeWord {
        positions = filter_whole_words(text.as_chars(), matcher.len(), positions);
    }

    check_matches_sorted(&positions, matcher.len(), text.len());
    positions
}

/// Keep matches whose neighbours (if any) are not word characters.
pub fn filter_whole_words(text: &[char], match_len: usize, positions: Vec<usize>) -> Vec<usize> {
    positions
        .into_iter()
        .filter(|&p| {
            let left_ok = p == 0 || !is_word_char(text[p - 1]);
            let end = p + match_len;
            let right_ok = end >= text.len() || !is_word_char(text[end]);
            left_ok && right_ok
        })
        .collect()
}
