// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a paginated, searchable text.
//!
//! # Offsets
//!
//! Every position in this crate is a **character offset** into a [`RawText`]:
//! an index into its Unicode scalar values, NOT a byte offset. Pages, matches
//! and snippets all share that coordinate system, which is what lets a match
//! position be handed straight to [`crate::page_for_position`].
//!
//! # Invariants
//!
//! - **Pagination**: `pages.len() == offsets.len()`, offsets strictly increasing,
//!   every offset `< text.len()`, and `pages[i].index == i`.
//! - **Match**: `position + length <= text.len()`.
//!
//! `Pagination::validate` checks the structural ones and reports the first
//! violation as an [`InvariantError`].

use std::fmt;
use std::ops::Range;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::InvariantError;

// =============================================================================
// RAW TEXT
// =============================================================================

/// The full, immutable content of one document.
///
/// Stored as a `Vec<char>` so character offsets index directly. The CRC32
/// fingerprint of the original UTF-8 identifies the text when deciding whether
/// a finished search still belongs to the loaded document.
#[derive(Clone, PartialEq, Eq)]
pub struct RawText {
    chars: Vec<char>,
    fingerprint: u32,
}

impl RawText {
    pub fn new(text: &str) -> Self {
        RawText {
            chars: text.chars().collect(),
            fingerprint: crc32fast::hash(text.as_bytes()),
        }
    }

    /// Character count.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[inline]
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// CRC32 of the text's UTF-8 bytes.
    #[inline]
    pub fn fingerprint(&self) -> u32 {
        self.fingerprint
    }

    /// Collect a character range into a `String`, clamped to the text.
    pub fn slice(&self, range: Range<usize>) -> String {
        let end = range.end.min(self.chars.len());
        let start = range.start.min(end);
        self.chars[start..end].iter().collect()
    }
}

impl From<&str> for RawText {
    fn from(text: &str) -> Self {
        RawText::new(text)
    }
}

impl From<String> for RawText {
    fn from(text: String) -> Self {
        RawText::new(&text)
    }
}

impl fmt::Debug for RawText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawText")
            .field("len", &self.chars.len())
            .field("fingerprint", &format_args!("{:08x}", self.fingerprint))
            .finish()
    }
}

// =============================================================================
// PAGES
// =============================================================================

/// One reading-sized fragment of a document.
///
/// Content is reflowed: paragraphs are joined by exactly `"\n\n"` and carriage
/// returns are dropped, so it is not guaranteed to be a verbatim substring of
/// the source. Its start position lives in [`Pagination::offsets`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub content: String,
    pub index: usize,
}

impl Page {
    /// Character count of the page content.
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}

/// Pages of one document and the character offset where each begins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub pages: Vec<Page>,
    pub offsets: Vec<usize>,
}

impl Pagination {
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Check the structural invariants against the text the pages came from.
    pub fn validate(&self, text_len: usize) -> Result<(), InvariantError> {
        if self.pages.len() != self.offsets.len() {
            return Err(InvariantError::MismatchedPagesOffsets {
                pages_len: self.pages.len(),
                offsets_len: self.offsets.len(),
            });
        }

        for (i, page) in self.pages.iter().enumerate() {
            if page.index != i {
                return Err(InvariantError::MisnumberedPage {
                    position: i,
                    index: page.index,
                });
            }
            if page.content.is_empty() {
                return Err(InvariantError::EmptyPage { index: i });
            }
        }

        for (i, &offset) in self.offsets.iter().enumerate() {
            if offset >= text_len {
                return Err(InvariantError::OffsetOutOfBounds {
                    index: i,
                    offset,
                    text_len,
                });
            }
            if i > 0 && self.offsets[i - 1] >= offset {
                return Err(InvariantError::UnsortedOffsets { position: i });
            }
        }

        Ok(())
    }
}

// =============================================================================
// MATCHES AND SNIPPETS
// =============================================================================

/// An exact (folded) occurrence of a query in a [`RawText`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    pub position: usize,
    pub length: usize,
}

impl Match {
    #[inline]
    pub fn end(&self) -> usize {
        self.position + self.length
    }
}

/// Context window around a match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub before: String,
    #[serde(rename = "match")]
    pub matched: String,
    pub after: String,
}

impl Snippet {
    /// The same window with every line break replaced by a space.
    pub fn single_line(&self) -> Snippet {
        Snippet {
            before: unbreak(&self.before),
            matched: unbreak(&self.matched),
            after: unbreak(&self.after),
        }
    }

    /// Single-line rendering of the whole window.
    pub fn flattened(&self) -> String {
        let Snippet {
            before,
            matched,
            after,
        } = self.single_line();
        before + &matched + &after
    }
}

fn unbreak(part: &str) -> String {
    part.replace(['\n', '\r'], " ")
}

/// A match resolved to its page, ready for a results list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub position: usize,
    pub page_index: usize,
    pub snippet: Snippet,
}

/// Everything one query produced.
///
/// `total_matches` counts every occurrence; `hits` may be shorter when the
/// configured display cap kicked in (`truncated`). A document with no pages
/// has nowhere to place a hit, so its outcome is empty and `total_matches` is
/// 0 even when the raw text contains the query (a whitespace query against a
/// whitespace-only text). `find_all` still reports those positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    pub query: String,
    pub hits: Vec<SearchHit>,
    pub total_matches: usize,
    pub truncated: bool,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl SearchOutcome {
    pub fn empty(query: &str) -> Self {
        SearchOutcome {
            query: query.to_string(),
            ..SearchOutcome::default()
        }
    }
}
