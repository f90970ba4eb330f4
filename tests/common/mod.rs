//! Shared test utilities and fixtures.

#![allow(dead_code)]

use folio::{Document, Pagination, PaginationConfig, RawText};
use std::fs;
use std::sync::LazyLock;

// ============================================================================
// FIXTURES
// ============================================================================

/// Short story used by the end-to-end tests. ASCII only, LF line endings.
pub const KEEPER_PATH: &str = "tests/fixtures/keeper.txt";

static KEEPER: LazyLock<String> =
    LazyLock::new(|| fs::read_to_string(KEEPER_PATH).expect("Failed to read keeper fixture"));

/// The fixture text, normalised to LF in case a checkout rewrote line endings.
pub fn keeper() -> String {
    KEEPER.replace("\r\n", "\n")
}

pub fn layout(target_chars: usize, tolerance: usize) -> PaginationConfig {
    PaginationConfig {
        target_chars,
        tolerance,
    }
}

pub fn load(text: &str, target_chars: usize, tolerance: usize) -> Document {
    Document::load(text, &layout(target_chars, tolerance))
}

/// A synthetic book: `chapters` chapters of `paragraphs` paragraphs each.
/// Deterministic, so benchmarks and tests see the same text.
pub fn synthetic_book(chapters: usize, paragraphs: usize) -> String {
    const WORDS: [&str; 12] = [
        "whale", "sea", "harbour", "Captain", "rope", "lantern", "north", "storm", "deck", "salt",
        "tide", "mast",
    ];
    let mut book = String::new();
    for chapter in 0..chapters {
        book.push_str(&format!("CHAPTER {}\n\n\n", chapter + 1));
        for paragraph in 0..paragraphs {
            let sentences = 3 + (chapter * 7 + paragraph * 3) % 5;
            for sentence in 0..sentences {
                let len = 6 + (paragraph + sentence) % 9;
                let words: Vec<&str> = (0..len)
                    .map(|w| WORDS[(chapter + paragraph * 5 + sentence * 3 + w) % WORDS.len()])
                    .collect();
                book.push_str(&words.join(" "));
                book.push_str(if sentence % 4 == 3 { "! " } else { ". " });
            }
            book.push_str("\n\n");
        }
    }
    book
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Structural checks every pagination must pass.
pub fn assert_pagination_well_formed(text: &RawText, pagination: &Pagination) {
    assert_eq!(
        pagination.pages.len(),
        pagination.offsets.len(),
        "pages and offsets out of step"
    );
    for (i, page) in pagination.pages.iter().enumerate() {
        assert_eq!(page.index, i, "page {} misnumbered", i);
        assert!(!page.content.is_empty(), "page {} is empty", i);
    }
    for pair in pagination.offsets.windows(2) {
        assert!(pair[0] < pair[1], "offsets not increasing: {:?}", pair);
    }
    if let Some(&last) = pagination.offsets.last() {
        assert!(last < text.len(), "offset {} past end {}", last, text.len());
    }
    pagination
        .validate(text.len())
        .expect("pagination failed validation");
}

/// Every non-whitespace character of `s`, in order.
pub fn visible_chars(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{feff}')
        .collect()
}
