//! Text segmentation for chat messages.
//!
//! Splits a message into lines, paragraphs, and words, and strips the
//! WhatsApp formatting symbols (`*bold*`, `_italic_`, `~strike~`) that do not
//! show up in the rendered message.

use regex::Regex;
use std::sync::LazyLock;

/// Formatting symbols removed before counting characters and words.
pub const FORMATTING_SYMBOLS: &[char] = &['*', '_', '~'];

/// Regex for word tokens: maximal runs of ASCII letters, digits, and underscore.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]+").expect("valid regex"));

/// Remove every formatting symbol from `text`.
pub fn strip_formatting(text: &str) -> String {
    text.chars()
        .filter(|c| !FORMATTING_SYMBOLS.contains(c))
        .collect()
}

/// Whether `text` holds nothing but whitespace.
///
/// The byte order mark (U+FEFF) counts as whitespace here, although it
/// lacks the Unicode `White_Space` property that [`str::trim`] uses.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(|c| c.is_whitespace() || c == '\u{FEFF}')
}

/// Lines (split on `\n`) that contain something other than whitespace.
pub fn non_empty_lines(text: &str) -> Vec<&str> {
    text.split('\n').filter(|l| !is_blank(l)).collect()
}

/// Paragraphs (split on a blank line, `\n\n`) that contain something other
/// than whitespace.
///
/// Segments are returned untrimmed.
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n").filter(|p| !is_blank(p)).collect()
}

/// Extract word tokens from `text`.
///
/// Callers normally pass the output of [`strip_formatting`].
pub fn words(text: &str) -> Vec<&str> {
    WORD_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_removes_all_formatting_symbols() {
        assert_eq!(strip_formatting("*bold* _it_ ~gone~"), "bold it gone");
        assert_eq!(strip_formatting("***"), "");
    }

    #[test]
    fn byte_order_mark_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\u{FEFF}\n"));
        assert!(!is_blank("\u{FEFF}hi"));
        assert_eq!(non_empty_lines("\u{FEFF}\nhi"), vec!["hi"]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let lines = non_empty_lines("one\n\n   \ntwo\n");
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn paragraphs_split_on_blank_line() {
        let paras = paragraphs("first line\nstill first\n\nsecond\n\n\n\nthird");
        assert_eq!(paras.len(), 3);
        assert_eq!(paras[0], "first line\nstill first");
    }

    #[test]
    fn whitespace_only_has_no_paragraphs() {
        assert!(paragraphs("  \n\n \t ").is_empty());
    }

    #[test]
    fn words_are_ascii_alphanumeric_runs() {
        assert_eq!(words("Hello, world! It's 2024"), vec!["Hello", "world", "It", "s", "2024"]);
        assert_eq!(words("café"), vec!["caf"]);
        assert!(words("!!! ???").is_empty());
    }
}
