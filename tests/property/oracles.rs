//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations. Slow, but they serve as ground
//! truth for the linear-time code under test.

use proptest::prelude::*;

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Brute-force case-insensitive search: compare the query at every position.
///
/// O(n·m) and trivially correct. Positions are char offsets.
pub fn oracle_find_all(text: &str, query: &str) -> Vec<usize> {
    let text: Vec<char> = text.chars().map(fold).collect();
    let query: Vec<char> = query.chars().map(fold).collect();
    if query.is_empty() || query.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - query.len())
        .filter(|&i| text[i..i + query.len()] == query[..])
        .collect()
}

/// Linear scan for the page holding `pos`: the last offset `<= pos`, else 0.
pub fn oracle_page_for_position(offsets: &[usize], pos: usize) -> usize {
    offsets
        .iter()
        .rposition(|&offset| offset <= pos)
        .unwrap_or(0)
}

/// Paragraphs via plain string operations: normalise line endings, split on
/// blank-line runs, trim.
pub fn oracle_paragraphs(text: &str) -> Vec<String> {
    let normalised = text.replace('\r', "");
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut pending_newlines = String::new();

    for c in normalised.chars() {
        if c == '\n' {
            pending_newlines.push(c);
            continue;
        }
        if pending_newlines.len() >= 2 {
            paragraphs.push(std::mem::take(&mut current));
        } else {
            current.push_str(&pending_newlines);
        }
        pending_newlines.clear();
        current.push(c);
    }
    paragraphs.push(current);

    paragraphs
        .into_iter()
        .map(|p| {
            p.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
                .to_string()
        })
        .filter(|p| !p.is_empty())
        .collect()
}

// =============================================================================
// STRATEGIES
// =============================================================================

/// Words over a small alphabet so queries hit often. Includes accented and
/// upper-case letters.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcABCéÉ]{1,7}").unwrap()
}

pub fn sentence_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(word_strategy(), 1..6),
        prop::sample::select(vec![".", "!", "?", ""]),
    )
        .prop_map(|(words, end)| words.join(" ") + end)
}

pub fn paragraph_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(sentence_strategy(), 1..8).prop_map(|s| s.join(" "))
}

/// Paragraphs separated by a mix of blank-line runs, single newlines and CRLF.
pub fn text_strategy() -> impl Strategy<Value = String> {
    let separator = prop::sample::select(vec![
        "\n\n", "\n\n\n", "\r\n\r\n", "\n \n\n", "\n", " ", "\n\t\n",
    ]);
    (
        prop::sample::select(vec!["", "\u{feff}", "  \n\n"]),
        prop::collection::vec((paragraph_strategy(), separator), 0..12),
    )
        .prop_map(|(lead, parts)| {
            let mut text = lead.to_string();
            for (paragraph, separator) in parts {
                text.push_str(&paragraph);
                text.push_str(separator);
            }
            text
        })
}

pub fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcABé]{1,3}").unwrap()
}

// =============================================================================
// ORACLE SELF-CHECKS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oracle_find_all() {
        assert_eq!(oracle_find_all("aAaA", "aa"), vec![0, 1, 2]);
        assert_eq!(oracle_find_all("abc", "abcd"), Vec::<usize>::new());
        assert_eq!(oracle_find_all("abc", ""), Vec::<usize>::new());
    }

    #[test]
    fn test_oracle_paragraphs() {
        assert_eq!(
            oracle_paragraphs("a\nb\n\n c \r\n\r\nd\n \n"),
            vec!["a\nb", "c", "d"]
        );
    }

    #[test]
    fn test_oracle_page_for_position() {
        assert_eq!(oracle_page_for_position(&[3, 10], 0), 0);
        assert_eq!(oracle_page_for_position(&[3, 10], 10), 1);
        assert_eq!(oracle_page_for_position(&[], 5), 0);
    }
}
