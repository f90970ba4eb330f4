// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A loaded document: raw text plus the pages derived from it.
//!
//! Everything here is derived once, at load time, and never patched. A
//! different text means a different `Document`.

use crate::config::PaginationConfig;
use crate::offsets::{page_for_position, page_range};
use crate::paginate::paginate;
use crate::types::{Page, Pagination, RawText};

#[derive(Debug, Clone)]
pub struct Document {
    text: RawText,
    pagination: Pagination,
}

impl Document {
    /// Take ownership of a text and paginate it immediately.
    pub fn load(text: impl Into<RawText>, config: &PaginationConfig) -> Self {
        let text = text.into();
        let pagination = paginate(&text, config);
        Document { text, pagination }
    }

    pub fn text(&self) -> &RawText {
        &self.text
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn pages(&self) -> &[Page] {
        &self.pagination.pages
    }

    pub fn offsets(&self) -> &[usize] {
        &self.pagination.offsets
    }

    pub fn page_count(&self) -> usize {
        self.pagination.len()
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pagination.page(index)
    }

    /// CRC32 identity of the loaded text.
    pub fn fingerprint(&self) -> u32 {
        self.text.fingerprint()
    }

    /// Page holding character `pos`, or `None` for a document without pages.
    pub fn page_for_position(&self, pos: usize) -> Option<usize> {
        if self.pagination.is_empty() {
            None
        } else {
            Some(page_for_position(&self.pagination.offsets, pos))
        }
    }

    /// Source characters covered by page `index`, trailing whitespace included.
    pub fn page_source(&self, index: usize) -> Option<String> {
        page_range(&self.pagination.offsets, index, self.text.len())
            .map(|range| self.text.slice(range))
    }

    /// Reading progress as a fraction: `(current + 1) / pages`.
    ///
    /// `None` is the cover (no page selected) and reads as `0.0`, as does a
    /// document without pages. Indices past the end read as complete.
    pub fn progress(&self, current: Option<usize>) -> f64 {
        let total = self.pagination.len();
        match current {
            Some(index) if total > 0 => ((index + 1).min(total)) as f64 / total as f64,
            _ => 0.0,
        }
    }
}
