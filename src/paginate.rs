// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Greedy paragraph pagination with exact start offsets.
//!
//! A text is cut into paragraphs at runs of two or more newlines, and the
//! paragraphs are packed into pages of roughly `target_chars` characters:
//!
//! ```text
//!  raw text        paragraphs (spans)          pages
//! ┌──────────┐    ┌─────┐ ┌────────┐ ┌──┐     ┌──────────────┐ ┌────┐
//! │ ...\n\n..│───▶│ p0  │ │   p1   │ │p2│ ───▶│ p0 \n\n p1   │ │ p2 │
//! └──────────┘    └─────┘ └────────┘ └──┘     └──────────────┘ └────┘
//!                  start ─────────────────────▶ offsets[0]      offsets[1]
//! ```
//!
//! Each paragraph (and, for oversized paragraphs, each sentence) is carried as
//! a span of the source, so a page's offset is simply the start of the first
//! span packed into it. Nothing is searched for after the fact.
//!
//! Carriage returns are transparent everywhere: they never separate
//! paragraphs, never appear in page content, and never count toward length.

use tracing::debug;

use crate::config::PaginationConfig;
use crate::contracts::check_pagination_well_formed;
use crate::types::{Page, Pagination, RawText};
use crate::utils::{is_sentence_terminal, is_trim_char};

/// Separator between paragraphs on a page.
const PARAGRAPH_SEPARATOR: &str = "\n\n";
/// Separator between sentences of a split paragraph.
const SENTENCE_SEPARATOR: &str = " ";

/// A trimmed region of the source, in character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub start: usize,
    pub end: usize,
}

/// A span together with its reflowed content.
struct Piece {
    start: usize,
    text: String,
    len: usize,
}

impl Piece {
    fn from_span(chars: &[char], span: Span) -> Self {
        let text: String = chars[span.start..span.end]
            .iter()
            .filter(|&&c| c != '\r')
            .collect();
        let len = text.chars().count();
        Piece {
            start: span.start,
            text,
            len,
        }
    }
}

/// Page under construction.
#[derive(Default)]
struct PageBuffer {
    content: String,
    len: usize,
    start: Option<usize>,
}

impl PageBuffer {
    fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    /// Length the buffer would have after appending `piece`.
    fn candidate_len(&self, piece: &Piece, separator: &str) -> usize {
        if self.is_empty() {
            piece.len
        } else {
            self.len + separator.len() + piece.len
        }
    }

    fn push(&mut self, piece: Piece, separator: &str) {
        if self.is_empty() {
            self.start = Some(piece.start);
            self.content = piece.text;
            self.len = piece.len;
        } else {
            self.content.push_str(separator);
            self.content.push_str(&piece.text);
            self.len += separator.len() + piece.len;
        }
    }

    fn take(&mut self) -> Option<(usize, String)> {
        let start = self.start.take()?;
        self.len = 0;
        Some((start, std::mem::take(&mut self.content)))
    }
}

/// Collects flushed pages and their offsets.
#[derive(Default)]
struct PageSink {
    pagination: Pagination,
}

impl PageSink {
    fn flush(&mut self, buffer: &mut PageBuffer) {
        if let Some((start, content)) = buffer.take() {
            let index = self.pagination.pages.len();
            self.pagination.pages.push(Page { content, index });
            self.pagination.offsets.push(start);
        }
    }
}

/// Split a text into pages, recording where each page starts.
///
/// Deterministic: the same text and config always produce the same pages.
/// An empty or whitespace-only text produces no pages.
pub fn paginate(text: &RawText, config: &PaginationConfig) -> Pagination {
    let chars = text.as_chars();
    let max_len = config.max_page_chars();

    let mut sink = PageSink::default();
    let mut buffer = PageBuffer::default();
    let mut paragraph_count = 0usize;
    let mut split_count = 0usize;

    for span in paragraph_spans(chars) {
        paragraph_count += 1;
        let piece = Piece::from_span(chars, span);

        if buffer.candidate_len(&piece, PARAGRAPH_SEPARATOR) <= max_len {
            buffer.push(piece, PARAGRAPH_SEPARATOR);
            continue;
        }

        sink.flush(&mut buffer);

        if config.is_oversized(piece.len) {
            split_count += 1;
            let mut chunk = PageBuffer::default();
            for sentence in sentence_spans(chars, span) {
                let sentence = Piece::from_span(chars, sentence);
                if chunk.candidate_len(&sentence, SENTENCE_SEPARATOR) > max_len {
                    sink.flush(&mut chunk);
                }
                chunk.push(sentence, SENTENCE_SEPARATOR);
            }
            sink.flush(&mut chunk);
        } else {
            buffer.push(piece, PARAGRAPH_SEPARATOR);
        }
    }
    sink.flush(&mut buffer);

    let pagination = sink.pagination;
    debug!(
        chars = chars.len(),
        paragraphs = paragraph_count,
        split_paragraphs = split_count,
        pages = pagination.len(),
        "paginated text"
    );

    check_pagination_well_formed(text, &pagination);
    pagination
}

/// Paragraph spans: separated by runs of 2+ newlines, trimmed, non-empty.
pub(crate) fn paragraph_spans(chars: &[char]) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut paragraph_start = 0;
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '\n' && chars[i] != '\r' {
            i += 1;
            continue;
        }

        let run_start = i;
        let mut newlines = 0;
        while i < chars.len() && (chars[i] == '\n' || chars[i] == '\r') {
            if chars[i] == '\n' {
                newlines += 1;
            }
            i += 1;
        }

        if newlines >= 2 {
            push_trimmed(chars, paragraph_start, run_start, &mut spans);
            paragraph_start = i;
        }
    }
    push_trimmed(chars, paragraph_start, chars.len(), &mut spans);

    spans
}

fn push_trimmed(chars: &[char], mut start: usize, mut end: usize, spans: &mut Vec<Span>) {
    while start < end && is_trim_char(chars[start]) {
        start += 1;
    }
    while end > start && is_trim_char(chars[end - 1]) {
        end -= 1;
    }
    if start < end {
        spans.push(Span { start, end });
    }
}

/// Sentence spans within a trimmed paragraph.
///
/// A boundary is a whitespace run directly after `.`, `!` or `?`; the
/// punctuation stays with the sentence before it. A paragraph without such a
/// boundary comes back as a single span.
pub(crate) fn sentence_spans(chars: &[char], paragraph: Span) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut start = paragraph.start;
    let mut previous: Option<char> = None;
    let mut k = paragraph.start;

    while k < paragraph.end {
        let c = chars[k];
        if c == '\r' {
            k += 1;
            continue;
        }

        if is_trim_char(c) && previous.is_some_and(is_sentence_terminal) {
            spans.push(Span { start, end: k });
            while k < paragraph.end && is_trim_char(chars[k]) {
                k += 1;
            }
            start = k;
            previous = None;
            continue;
        }

        previous = Some(c);
        k += 1;
    }

    if start < paragraph.end {
        spans.push(Span {
            start,
            end: paragraph.end,
        });
    }
    spans
}
