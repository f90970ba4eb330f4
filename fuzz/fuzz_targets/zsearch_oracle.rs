// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Differential fuzz target: Z-search against a brute-force scan.
//!
//! Any Unicode at all, on both sides. There is no separator character to
//! collide with, so a text containing `$`, NUL or private-use code points must
//! still match exactly what the naive scan finds.

#![no_main]

use arbitrary::Arbitrary;
use folio::{find_all, z_function};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    query: String,
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn naive(text: &str, query: &str) -> Vec<usize> {
    let text: Vec<char> = text.chars().map(fold).collect();
    let query: Vec<char> = query.chars().map(fold).collect();
    if query.is_empty() || query.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - query.len())
        .filter(|&i| text[i..i + query.len()] == query[..])
        .collect()
}

fuzz_target!(|input: Input| {
    // Keep the O(n·m) oracle cheap
    if input.text.len() > 4096 || input.query.len() > 64 {
        return;
    }

    assert_eq!(
        find_all(&input.text, &input.query),
        naive(&input.text, &input.query),
        "Z-search disagrees with brute force"
    );

    let chars: Vec<char> = input.text.chars().collect();
    let z = z_function(&chars);
    for (i, &value) in z.iter().enumerate() {
        assert!(i + value <= chars.len(), "z[{}] = {} runs past the end", i, value);
    }
});
