use std::sync::LazyLock;

use regex::Regex;

/// Whitespace runs and single punctuation marks are both boundaries and tokens.
/// U+FEFF counts as whitespace.
#[allow(clippy::expect_used)]
static BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[\s\x{FEFF}]+|[.,!?;:()"']"#).expect("boundary pattern compiles")
});

pub(crate) fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// True for empty input or input made only of whitespace (including U+FEFF).
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_space)
}

/// Split `text` into token substrings, left to right.
///
/// Every byte of the input lands in exactly one segment, so joining the
/// result reproduces `text`. Empty or whitespace-only input yields nothing.
pub fn tokenize(text: &str) -> Vec<&str> {
    if is_blank(text) {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut last = 0;
    for m in BOUNDARY.find_iter(text) {
        if let Some(gap) = text.get(last..m.start()) {
            if !gap.is_empty() {
                out.push(gap);
            }
        }
        out.push(m.as_str());
        last = m.end();
    }
    if let Some(tail) = text.get(last..) {
        if !tail.is_empty() {
            out.push(tail);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn hello_world() {
        assert_eq!(tokenize("Hello, world!"), vec!["Hello", ",", " ", "world", "!"]);
    }

    #[test]
    fn blank_input_is_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \n\t ").is_empty());
    }

    #[test]
    fn whitespace_runs_stay_whole() {
        assert_eq!(tokenize("a  b\n\tc"), vec!["a", "  ", "b", "\n\t", "c"]);
    }

    #[test]
    fn every_listed_mark_splits() {
        assert_eq!(
            tokenize(r#"x.y,z!w?v;u:t(s)r"q'p"#),
            vec![
                "x", ".", "y", ",", "z", "!", "w", "?", "v", ";", "u", ":", "t", "(", "s", ")",
                "r", "\"", "q", "'", "p"
            ]
        );
    }

    #[test]
    fn unlisted_punctuation_stays_in_word() {
        assert_eq!(tokenize("well-known e-mail"), vec!["well-known", " ", "e-mail"]);
    }

    #[test]
    fn byte_order_mark_is_whitespace() {
        assert!(tokenize("\u{FEFF}").is_empty());
        assert!(tokenize(" \u{FEFF}\n").is_empty());
        assert_eq!(tokenize("a\u{FEFF} b"), vec!["a", "\u{FEFF} ", "b"]);
    }

    #[test]
    fn leading_and_trailing_space_kept() {
        assert_eq!(tokenize(" hi "), vec![" ", "hi", " "]);
    }

    proptest! {
        #[test]
        fn segments_concatenate_to_input(s in "\\PC{0,64}") {
            let parts = tokenize(&s);
            if is_blank(&s) {
                prop_assert!(parts.is_empty());
            } else {
                prop_assert_eq!(parts.concat(), s.clone());
                prop_assert!(parts.iter().all(|p| !p.is_empty()));
            }
        }
    }
}
