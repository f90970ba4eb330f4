// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for pagination structure.
//!
//! Arbitrary text and arbitrary page sizes. Whatever comes out must validate:
//! pages and offsets in step, offsets strictly increasing and in bounds, and
//! every offset landing on the first character of its page.

#![no_main]

use arbitrary::Arbitrary;
use folio::{page_for_position, paginate, PaginationConfig, RawText};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    target_chars: u8,
    tolerance: u8,
}

fuzz_target!(|input: Input| {
    let config = PaginationConfig {
        target_chars: (input.target_chars as usize).max(1),
        tolerance: input.tolerance as usize,
    };
    let text = RawText::new(&input.text);
    let pagination = paginate(&text, &config);

    if let Err(e) = pagination.validate(text.len()) {
        panic!("invalid pagination: {}", e);
    }

    for (i, (page, &offset)) in pagination.pages.iter().zip(&pagination.offsets).enumerate() {
        assert_eq!(
            page.content.chars().next(),
            text.as_chars().get(offset).copied(),
            "offset {} does not start page {}",
            offset,
            i
        );
        assert_eq!(page_for_position(&pagination.offsets, offset), i);
    }
});
