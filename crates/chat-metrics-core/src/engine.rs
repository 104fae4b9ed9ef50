//! Message analysis: one pass from raw chat text to an [`AnalysisResult`].
//!
//! The engine is a pure function of its input. Counting happens on two views
//! of the message:
//!
//! - the **raw** text, for formatting markers, bullets, emoji, links, and
//!   hashtags;
//! - the **visible** text (formatting symbols removed), for characters and
//!   words.
//!
//! Lines and paragraphs come from the raw text, split on `\n` and `\n\n`.

use std::sync::LazyLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::classify::{LengthCategory, TruncationRisk};
use crate::matchers::{self, BulletMatcher, DEFAULT_BULLET_MARKERS};
use crate::readability::ReadabilityMetrics;
use crate::syllables;
use crate::text;

/// Formatting markers used in the message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FormattingCounts {
    /// `*bold*` spans.
    pub bold: usize,
    /// `_italic_` spans.
    pub italics: usize,
    /// Lines starting with a bullet glyph.
    pub bullet_points: usize,
}

/// Everything measured about one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisResult {
    /// Visible characters (Unicode scalar values, formatting symbols excluded).
    pub character_count: usize,
    /// Non-empty lines.
    pub line_count: usize,
    /// Non-empty paragraphs.
    pub paragraph_count: usize,
    /// Word tokens in the visible text.
    pub word_count: usize,
    /// Estimated syllables across all words.
    pub syllable_count: usize,
    /// Formatting marker usage.
    pub formatting: FormattingCounts,
    /// Emoji characters.
    pub emoji_count: usize,
    /// Links.
    pub url_count: usize,
    /// Hashtags.
    pub hashtag_count: usize,
    /// Length bucket for the visible character count.
    pub length_category: LengthCategory,
    /// Preview truncation risk from the line count.
    pub truncation_risk: TruncationRisk,
    /// Readability grade and CEFR band.
    pub readability: ReadabilityMetrics,
}

/// Tunables for an [`Analyzer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Glyphs that mark a bullet line when followed by whitespace.
    pub bullet_markers: Vec<char>,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            bullet_markers: DEFAULT_BULLET_MARKERS.to_vec(),
        }
    }
}

impl AnalyzerOptions {
    /// Replace the bullet glyph set.
    pub fn with_bullet_markers<I: IntoIterator<Item = char>>(mut self, markers: I) -> Self {
        self.bullet_markers = markers.into_iter().collect();
        self
    }
}

/// Reusable analyzer holding compiled, option-dependent matchers.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    bullets: BulletMatcher,
}

static DEFAULT_ANALYZER: LazyLock<Analyzer> = LazyLock::new(Analyzer::default);

/// Analyze a message with default options.
///
/// Returns `None` for empty or whitespace-only input.
pub fn analyze(text: &str) -> Option<AnalysisResult> {
    DEFAULT_ANALYZER.analyze(text)
}

impl Analyzer {
    /// Build an analyzer from options.
    pub fn new(options: &AnalyzerOptions) -> Self {
        Self {
            bullets: BulletMatcher::new(&options.bullet_markers),
        }
    }

    /// The bullet glyphs this analyzer recognizes.
    pub fn bullet_markers(&self) -> &[char] {
        self.bullets.markers()
    }

    /// Analyze a message.
    ///
    /// Returns `None` for empty or whitespace-only input. Any other input
    /// produces a complete result; nothing in the analysis can fail.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn analyze(&self, text: &str) -> Option<AnalysisResult> {
        if text::is_blank(text) {
            tracing::debug!("empty input, nothing to analyze");
            return None;
        }

        let visible = text::strip_formatting(text);
        let character_count = visible.chars().count();
        let line_count = text::non_empty_lines(text).len();
        let paragraph_count = text::paragraphs(text).len();
        let words = text::words(&visible);
        let word_count = words.len();
        let syllable_count = syllables::total_syllables(&words);

        let formatting = FormattingCounts {
            bold: matchers::BOLD.count(text),
            italics: matchers::ITALIC.count(text),
            bullet_points: self.bullets.count(text),
        };

        let result = AnalysisResult {
            character_count,
            line_count,
            paragraph_count,
            word_count,
            syllable_count,
            formatting,
            emoji_count: matchers::EMOJI.count(text),
            url_count: matchers::URL.count(text),
            hashtag_count: matchers::HASHTAG.count(text),
            length_category: LengthCategory::from_char_count(character_count),
            truncation_risk: TruncationRisk::from_line_count(line_count),
            readability: ReadabilityMetrics::from_counts(
                word_count,
                paragraph_count,
                syllable_count,
            ),
        };

        tracing::debug!(
            characters = result.character_count,
            words = result.word_count,
            grade = result.readability.flesch_kincaid,
            "message analyzed"
        );
        Some(result)
    }
}
