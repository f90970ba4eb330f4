// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character folding and classification helpers.
//!
//! Every fold here maps one `char` to exactly one `char`. Search positions are
//! reported against the original text, so a fold that changed length would
//! shift every match after it.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::char::{decompose_canonical, is_combining_mark};

/// Lowercase a single character without changing the character count.
///
/// Characters whose lowercase form expands (U+0130 → "i\u{307}") keep the
/// first scalar of the expansion.
#[inline]
pub fn fold_case(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    c.to_lowercase().next().unwrap_or(c)
}

/// Strip a diacritic from a single character by keeping its NFD base.
///
/// - 'é' → 'e'
/// - 'ṣ' → 's'
/// - 'ā' → 'a'
///
/// Only combining marks are dropped. A character whose decomposition carries
/// anything else after the base (Hangul syllables split into jamo) is returned
/// unchanged, as is one with no decomposition at all.
#[cfg(feature = "unicode-normalization")]
pub fn strip_diacritic(c: char) -> char {
    if c.is_ascii() {
        return c;
    }
    let mut base = None;
    let mut marks_only = true;
    decompose_canonical(c, |d| {
        if base.is_none() {
            base = Some(d);
        } else if !is_combining_mark(d) {
            marks_only = false;
        }
    });
    match base {
        Some(b) if marks_only => b,
        _ => c,
    }
}

/// Without `unicode-normalization` (e.g. minimal builds) diacritics are kept.
#[cfg(not(feature = "unicode-normalization"))]
pub fn strip_diacritic(c: char) -> char {
    c
}

/// Fold one character for comparison.
#[inline]
pub fn fold_char(c: char, strip_diacritics: bool) -> char {
    let c = fold_case(c);
    if strip_diacritics {
        fold_case(strip_diacritic(c))
    } else {
        c
    }
}

/// Fold a character sequence, one output char per input char.
pub fn fold_chars<I>(chars: I, strip_diacritics: bool) -> Vec<char>
where
    I: IntoIterator<Item = char>,
{
    chars
        .into_iter()
        .map(|c| fold_char(c, strip_diacritics))
        .collect()
}

/// Characters removed when trimming paragraphs.
///
/// Unicode whitespace plus the byte-order mark, which plain-text ebooks
/// frequently start with.
#[inline]
pub fn is_trim_char(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Word characters for whole-word matching: alphanumerics and underscore.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Sentence-terminal punctuation used by the oversized-paragraph fallback.
#[inline]
pub fn is_sentence_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}
