//! Heuristic syllable estimation.
//!
//! No dictionary: the estimate drops a common silent suffix, then counts
//! vowel groups of at most two letters. It is tuned for speed on short chat
//! messages and is not phonetically exact ("beautiful" counts as 4).

use regex::Regex;
use std::sync::LazyLock;

/// Silent or suffix endings dropped before counting: `-es` and `-e` after a
/// letter other than `l` or a vowel, and `-ed`.
static SILENT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").expect("valid regex"));

/// One or two consecutive vowels (`y` included) count as one syllable.
static VOWEL_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouy]{1,2}").expect("valid regex"));

/// Estimate the syllables in a single word.
///
/// The word is lowercased first. Words of three characters or fewer are
/// always one syllable, and every word counts for at least one.
pub fn estimate_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    if word.chars().count() <= 3 {
        return 1;
    }

    let stripped = SILENT_SUFFIX.replace(&word, "");
    let stem = stripped.strip_prefix('y').unwrap_or(&*stripped);

    match VOWEL_GROUP.find_iter(stem).count() {
        0 => 1,
        n => n,
    }
}

/// Sum of [`estimate_syllables`] over `words`.
pub fn total_syllables<S: AsRef<str>>(words: &[S]) -> usize {
    words.iter().map(|w| estimate_syllables(w.as_ref())).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_words_are_one_syllable() {
        assert_eq!(estimate_syllables("a"), 1);
        assert_eq!(estimate_syllables("the"), 1);
        assert_eq!(estimate_syllables("tsk"), 1);
        assert_eq!(estimate_syllables("eye"), 1);
    }

    #[test]
    fn counts_vowel_groups() {
        assert_eq!(estimate_syllables("hello"), 2);
        assert_eq!(estimate_syllables("world"), 1);
        assert_eq!(estimate_syllables("yellow"), 2);
        assert_eq!(estimate_syllables("banana"), 3);
    }

    #[test]
    fn groups_are_capped_at_two_vowels() {
        // "eau" splits into "ea" + "u"
        assert_eq!(estimate_syllables("beautiful"), 4);
        assert_eq!(estimate_syllables("queue"), 2);
    }

    #[test]
    fn silent_suffixes_are_dropped() {
        assert_eq!(estimate_syllables("make"), 1);
        assert_eq!(estimate_syllables("wanted"), 1);
        assert_eq!(estimate_syllables("boxes"), 1);
    }

    #[test]
    fn le_ending_is_kept() {
        assert_eq!(estimate_syllables("table"), 2);
    }

    #[test]
    fn leading_y_is_not_a_vowel() {
        // "yard" -> "ard"
        assert_eq!(estimate_syllables("yard"), 1);
        assert_eq!(estimate_syllables("yoyo"), 2);
    }

    #[test]
    fn no_vowels_still_counts_one() {
        assert_eq!(estimate_syllables("hmmm"), 1);
        assert_eq!(estimate_syllables("2024"), 1);
    }

    #[test]
    fn case_is_ignored() {
        assert_eq!(estimate_syllables("HELLO"), estimate_syllables("hello"));
    }

    #[test]
    fn total_sums_words() {
        assert_eq!(total_syllables(&["Hello", "world"]), 3);
        assert_eq!(total_syllables::<&str>(&[]), 0);
    }
}
