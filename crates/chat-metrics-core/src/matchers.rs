//! Named pattern matchers for formatting and rich elements.
//!
//! Every count the engine derives from a regular expression lives here as a
//! standalone [`Matcher`], so each pattern can be inspected and tested on its
//! own. All matchers run over the raw message, formatting symbols included.
//!
//! | Matcher | Pattern | Counts |
//! |---|---|---|
//! | [`BOLD`] | `\*([^\n\r\x{2028}\x{2029}]*?)\*` | `*bold*` spans on one line |
//! | [`ITALIC`] | `_([^\n\r\x{2028}\x{2029}]*?)_` | `_italic_` spans on one line |
//! | [`EMOJI`] | `\p{Emoji}` | characters with the Unicode `Emoji` property |
//! | [`URL`] | `https?://\S+` | web links |
//! | [`HASHTAG`] | `#[^\s#]+` | hashtags |
//! | [`BulletMatcher`] | `(?m)^[•\-\*]\s` | bullet lines (marker set configurable) |

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Bullet glyphs recognized when no marker set is configured.
pub const DEFAULT_BULLET_MARKERS: &[char] = &['•', '-', '*'];

/// A named regular expression that counts its non-overlapping matches.
#[derive(Clone)]
pub struct Matcher {
    name: &'static str,
    regex: Regex,
}

impl Matcher {
    /// Compile a matcher.
    pub fn new(name: &'static str, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            regex: Regex::new(pattern)?,
        })
    }

    /// Short identifier, e.g. `"bold"`.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The source pattern.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Number of non-overlapping matches in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("name", &self.name)
            .field("pattern", &self.pattern())
            .finish()
    }
}

fn builtin(name: &'static str, pattern: &str) -> Matcher {
    Matcher::new(name, pattern).expect("valid regex")
}

/// Bold spans. Lazy, so `*a* *b*` is two spans; an unpaired `*` never matches.
///
/// A span never crosses a line break: `\n`, `\r`, U+2028, or U+2029.
pub static BOLD: LazyLock<Matcher> =
    LazyLock::new(|| builtin("bold", r"\*([^\n\r\x{2028}\x{2029}]*?)\*"));

/// Italic spans, same shape as [`BOLD`] with underscores.
pub static ITALIC: LazyLock<Matcher> =
    LazyLock::new(|| builtin("italic", r"_([^\n\r\x{2028}\x{2029}]*?)_"));

/// Emoji characters.
///
/// The `Emoji` property also covers the keycap bases `#`, `*`, and `0`-`9`,
/// so those characters are counted too.
pub static EMOJI: LazyLock<Matcher> = LazyLock::new(|| builtin("emoji", r"\p{Emoji}"));

/// `http://` or `https://` followed by everything up to the next whitespace.
pub static URL: LazyLock<Matcher> = LazyLock::new(|| builtin("url", r"https?://\S+"));

/// `#` followed by one or more characters that are neither whitespace nor `#`.
pub static HASHTAG: LazyLock<Matcher> = LazyLock::new(|| builtin("hashtag", r"#[^\s#]+"));

/// Counts lines that start with a bullet glyph followed by whitespace.
#[derive(Debug, Clone)]
pub struct BulletMatcher {
    markers: Vec<char>,
    matcher: Option<Matcher>,
}

impl BulletMatcher {
    /// Build a matcher for the given glyphs.
    ///
    /// An empty set produces a matcher that never matches.
    pub fn new(markers: &[char]) -> Self {
        let mut markers = markers.to_vec();
        markers.dedup();

        let matcher = if markers.is_empty() {
            None
        } else {
            let class: String = markers
                .iter()
                .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
                .collect();
            // Escaped single characters always form a valid class.
            Some(builtin("bullet", &format!(r"(?m)^[{class}]\s")))
        };

        Self { markers, matcher }
    }

    /// The glyphs this matcher recognizes.
    pub fn markers(&self) -> &[char] {
        &self.markers
    }

    /// The compiled pattern, if any markers are configured.
    pub fn pattern(&self) -> Option<&str> {
        self.matcher.as_ref().map(Matcher::pattern)
    }

    /// Number of bullet lines in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.matcher.as_ref().map_or(0, |m| m.count(text))
    }
}

impl Default for BulletMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_BULLET_MARKERS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_counts_paired_spans() {
        assert_eq!(BOLD.count("*bold*"), 1);
        assert_eq!(BOLD.count("*one* and *two*"), 2);
        assert_eq!(BOLD.count("*a"), 0);
        assert_eq!(BOLD.count("no stars"), 0);
    }

    #[test]
    fn bold_does_not_span_lines() {
        assert_eq!(BOLD.count("*open\nclose*"), 0);
    }

    #[test]
    fn spans_stop_at_every_line_terminator() {
        assert_eq!(BOLD.count("*a\rb*"), 0);
        assert_eq!(BOLD.count("*a\u{2029}b*"), 0);
        assert_eq!(ITALIC.count("_a\u{2028}b_"), 0);
        assert_eq!(ITALIC.count("_a\rb_"), 0);
        assert_eq!(ITALIC.count("_a b_"), 1);
    }

    #[test]
    fn double_star_is_an_empty_span() {
        // "**x**" pairs up as "**" twice
        assert_eq!(BOLD.count("**x**"), 2);
    }

    #[test]
    fn italic_counts_paired_spans() {
        assert_eq!(ITALIC.count("_italic_"), 1);
        assert_eq!(ITALIC.count("snake_case_name"), 1);
        assert_eq!(ITALIC.count("_a"), 0);
    }

    #[test]
    fn emoji_counts_pictographs() {
        assert_eq!(EMOJI.count("hi 👋 there 🎉"), 2);
        assert_eq!(EMOJI.count("plain words"), 0);
    }

    #[test]
    fn emoji_property_includes_keycap_bases() {
        assert_eq!(EMOJI.count("#1"), 2);
    }

    #[test]
    fn url_needs_scheme() {
        assert_eq!(URL.count("see https://x.com and http://a.b/c?d=1"), 2);
        assert_eq!(URL.count("www.example.com"), 0);
        assert_eq!(URL.count("https://"), 0);
    }

    #[test]
    fn hashtag_stops_at_whitespace_and_hash() {
        assert_eq!(HASHTAG.count("check #one #two https://x.com"), 2);
        assert_eq!(HASHTAG.count("#a#b"), 2);
        assert_eq!(HASHTAG.count("# alone"), 0);
    }

    #[test]
    fn matchers_expose_names_and_patterns() {
        assert_eq!(URL.name(), "url");
        assert_eq!(HASHTAG.pattern(), r"#[^\s#]+");
    }

    #[test]
    fn default_bullets_match_line_starts() {
        let bullets = BulletMatcher::default();
        let text = "List:\n• one\n- two\n* three\n-no space\n  - indented";
        assert_eq!(bullets.count(text), 3);
    }

    #[test]
    fn bullet_at_start_of_text() {
        assert_eq!(BulletMatcher::default().count("- first"), 1);
    }

    #[test]
    fn custom_bullet_markers() {
        let bullets = BulletMatcher::new(&['>', '+']);
        assert_eq!(bullets.count("> quoted\n+ plus\n- dash"), 2);
        assert_eq!(bullets.markers(), &['>', '+']);
    }

    #[test]
    fn regex_metacharacters_are_escaped() {
        let bullets = BulletMatcher::new(&[']', '^', '\\']);
        assert_eq!(bullets.count("] a\n^ b\n\\ c\nx d"), 3);
    }

    #[test]
    fn empty_marker_set_never_matches() {
        let bullets = BulletMatcher::new(&[]);
        assert_eq!(bullets.count("- one\n* two"), 0);
        assert!(bullets.pattern().is_none());
    }
}
