//! Property tests for pagination and the page lookup.

use crate::common::{assert_pagination_well_formed, visible_chars};
use crate::oracles::{oracle_page_for_position, oracle_paragraphs, text_strategy};
use folio::{page_for_position, page_range, paginate, PaginationConfig, RawText};
use proptest::prelude::*;

fn layout_strategy() -> impl Strategy<Value = PaginationConfig> {
    (1usize..120, 0usize..40).prop_map(|(target_chars, tolerance)| PaginationConfig {
        target_chars,
        tolerance,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: pages and offsets line up and offsets strictly increase.
    #[test]
    fn prop_pagination_well_formed(text in text_strategy(), config in layout_strategy()) {
        let raw = RawText::new(&text);
        let pagination = paginate(&raw, &config);
        assert_pagination_well_formed(&raw, &pagination);
    }

    /// Property: each offset is the source position of its page's first char.
    #[test]
    fn prop_offsets_point_at_page_starts(text in text_strategy(), config in layout_strategy()) {
        let raw = RawText::new(&text);
        let pagination = paginate(&raw, &config);
        for (page, &offset) in pagination.pages.iter().zip(&pagination.offsets) {
            prop_assert_eq!(page.content.chars().next(), raw.as_chars().get(offset).copied());
        }
    }

    /// Property: no visible character is lost, duplicated or reordered.
    #[test]
    fn prop_content_order_preserved(text in text_strategy(), config in layout_strategy()) {
        let pagination = paginate(&RawText::new(&text), &config);
        let joined: String = pagination.pages.iter().map(|p| p.content.as_str()).collect();
        prop_assert_eq!(visible_chars(&joined), visible_chars(&text));
    }

    /// Property: without oversized paragraphs, pages are exactly the
    /// paragraphs in order, regrouped.
    #[test]
    fn prop_pages_regroup_paragraphs(text in text_strategy()) {
        let config = PaginationConfig { target_chars: 100_000, tolerance: 0 };
        let paragraphs = oracle_paragraphs(&text);
        let pagination = paginate(&RawText::new(&text), &config);

        let pages: Vec<&str> = pagination.pages.iter().map(|p| p.content.as_str()).collect();
        prop_assert_eq!(pages.join("\n\n"), paragraphs.join("\n\n"));
        prop_assert!(pagination.len() <= 1);
    }

    /// Property: a page exceeds `target + tolerance` only when it holds a
    /// single paragraph or a single sentence.
    #[test]
    fn prop_page_length_bounded(text in text_strategy(), config in layout_strategy()) {
        let pagination = paginate(&RawText::new(&text), &config);
        let longest_piece = oracle_paragraphs(&text)
            .iter()
            .map(|p| p.chars().count())
            .max()
            .unwrap_or(0);

        for page in &pagination.pages {
            let len = page.char_len();
            if len > config.max_page_chars() {
                prop_assert!(!page.content.contains("\n\n"), "overlong page packs paragraphs: {:?}", page.content);
                prop_assert!(len <= longest_piece);
            }
        }
    }

    /// Property: pagination is deterministic.
    #[test]
    fn prop_pagination_deterministic(text in text_strategy(), config in layout_strategy()) {
        let raw = RawText::new(&text);
        prop_assert_eq!(paginate(&raw, &config), paginate(&raw, &config));
    }

    /// Property: the binary-search lookup agrees with a linear scan, is exact
    /// on offsets, and the page it returns contains the position.
    #[test]
    fn prop_page_lookup_matches_oracle(
        text in text_strategy(),
        config in layout_strategy(),
        probe in 0usize..2000,
    ) {
        let raw = RawText::new(&text);
        let pagination = paginate(&raw, &config);
        let offsets = &pagination.offsets;
        let pos = if raw.is_empty() { probe } else { probe % raw.len() };

        let page = page_for_position(offsets, pos);
        prop_assert_eq!(page, oracle_page_for_position(offsets, pos));

        for (i, &offset) in offsets.iter().enumerate() {
            prop_assert_eq!(page_for_position(offsets, offset), i);
        }

        if let Some(&first) = offsets.first() {
            if pos >= first {
                let range = page_range(offsets, page, raw.len()).unwrap();
                prop_assert!(range.contains(&pos));
            } else {
                prop_assert_eq!(page, 0);
            }
        }
    }
}
