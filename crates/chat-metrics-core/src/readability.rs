//! Readability scoring using a paragraph-based Flesch-Kincaid Grade Level.
//!
//! Formula: `0.39 * (words/paragraphs) + 11.8 * (syllables/words) - 15.59`
//!
//! Chat messages rarely punctuate sentences reliably, so paragraphs stand in
//! for sentences. The grade is then bucketed onto the CEFR scale (A1 to C2)
//! to give a rough sense of how widely a message will be understood.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Readability figures for one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityMetrics {
    /// Flesch-Kincaid Grade Level, rounded to one decimal.
    pub flesch_kincaid: f64,
    /// CEFR band for the unrounded grade.
    pub cefr: CefrLevel,
    /// Words per paragraph, rounded to the nearest whole word.
    pub average_words_per_paragraph: usize,
}

impl ReadabilityMetrics {
    /// Compute all readability figures from raw counts.
    pub fn from_counts(words: usize, paragraphs: usize, syllables: usize) -> Self {
        let grade = flesch_kincaid(words, paragraphs, syllables);
        Self {
            flesch_kincaid: round_tenth(grade),
            cefr: CefrLevel::from_score(grade),
            average_words_per_paragraph: average_words_per_paragraph(words, paragraphs),
        }
    }
}

/// Common European Framework of Reference band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
pub enum CefrLevel {
    /// Beginner.
    A1,
    /// Elementary.
    A2,
    /// Intermediate.
    B1,
    /// Upper intermediate.
    B2,
    /// Advanced.
    C1,
    /// Proficient.
    C2,
}

impl CefrLevel {
    /// Map a Flesch-Kincaid grade onto a band. Upper bounds are inclusive.
    pub fn from_score(grade: f64) -> Self {
        if grade <= 3.0 {
            Self::A1
        } else if grade <= 5.0 {
            Self::A2
        } else if grade <= 7.0 {
            Self::B1
        } else if grade <= 10.0 {
            Self::B2
        } else if grade <= 13.0 {
            Self::C1
        } else {
            Self::C2
        }
    }

    /// Band name, e.g. `"B2"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::B1 => "B1",
            Self::B2 => "B2",
            Self::C1 => "C1",
            Self::C2 => "C2",
        }
    }

    /// What the band means for a message's reach.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::A1 | Self::A2 => "Basic - very accessible to most readers",
            Self::B1 => "Intermediate - ideal for wide reach",
            Self::B2 => "Upper Intermediate - suitable for most WhatsApp users",
            Self::C1 | Self::C2 => "Advanced - consider simplifying for broader reach",
        }
    }
}

impl fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flesch-Kincaid Grade Level with paragraphs in place of sentences.
///
/// Returns `0.0` when there are no paragraphs or no words. Plain
/// multiply-then-add: a fused `mul_add` shifts scores that land on a
/// rounding half.
#[allow(clippy::suboptimal_flops)]
pub fn flesch_kincaid(words: usize, paragraphs: usize, syllables: usize) -> f64 {
    if paragraphs == 0 || words == 0 {
        return 0.0;
    }

    let words_per_paragraph = words as f64 / paragraphs as f64;
    let syllables_per_word = syllables as f64 / words as f64;
    0.39 * words_per_paragraph + 11.8 * syllables_per_word - 15.59
}

/// Round to one decimal place, halves toward positive infinity.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Rounded mean words per paragraph; `0` when there are no paragraphs.
pub fn average_words_per_paragraph(words: usize, paragraphs: usize) -> usize {
    if paragraphs == 0 {
        return 0;
    }
    (words as f64 / paragraphs as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn hello_world_grade() {
        // 0.39 * 2 + 11.8 * 1.5 - 15.59
        assert_close(flesch_kincaid(2, 1, 3), 2.89);
    }

    #[test]
    fn score_on_a_rounding_half_rounds_up() {
        // 0.39 * 20 + 11.8 * 2.8 - 15.59 = 25.25
        let metrics = ReadabilityMetrics::from_counts(20, 1, 56);
        assert_eq!(metrics.flesch_kincaid, 25.3);
        assert_eq!(metrics.cefr, CefrLevel::C2);
    }

    #[test]
    fn zero_paragraphs_scores_zero() {
        assert_eq!(flesch_kincaid(10, 0, 15), 0.0);
    }

    #[test]
    fn zero_words_scores_zero() {
        assert_eq!(flesch_kincaid(0, 1, 0), 0.0);
    }

    #[test]
    fn cefr_boundaries_are_inclusive() {
        assert_eq!(CefrLevel::from_score(3.0), CefrLevel::A1);
        assert_eq!(CefrLevel::from_score(3.1), CefrLevel::A2);
        assert_eq!(CefrLevel::from_score(5.0), CefrLevel::A2);
        assert_eq!(CefrLevel::from_score(7.0), CefrLevel::B1);
        assert_eq!(CefrLevel::from_score(10.0), CefrLevel::B2);
        assert_eq!(CefrLevel::from_score(13.0), CefrLevel::C1);
        assert_eq!(CefrLevel::from_score(13.1), CefrLevel::C2);
    }

    #[test]
    fn negative_grades_are_a1() {
        assert_eq!(CefrLevel::from_score(-3.4), CefrLevel::A1);
    }

    #[test]
    fn descriptions_group_bands() {
        assert_eq!(CefrLevel::A1.description(), CefrLevel::A2.description());
        assert_eq!(CefrLevel::C1.description(), CefrLevel::C2.description());
        assert!(CefrLevel::B2.description().starts_with("Upper Intermediate"));
    }

    #[test]
    fn rounding_to_tenths() {
        assert_close(round_tenth(2.89), 2.9);
        assert_close(round_tenth(2.84), 2.8);
        assert_close(round_tenth(-2.25), -2.2);
        assert_close(round_tenth(0.0), 0.0);
    }

    #[test]
    fn average_words_rounds_and_guards() {
        assert_eq!(average_words_per_paragraph(7, 2), 4);
        assert_eq!(average_words_per_paragraph(5, 3), 2);
        assert_eq!(average_words_per_paragraph(9, 0), 0);
    }

    #[test]
    fn metrics_from_counts() {
        let metrics = ReadabilityMetrics::from_counts(2, 1, 3);
        assert_close(metrics.flesch_kincaid, 2.9);
        assert_eq!(metrics.cefr, CefrLevel::A1);
        assert_eq!(metrics.average_words_per_paragraph, 2);
    }

    #[test]
    fn cefr_serializes_as_band_name() {
        let json = serde_json::to_string(&CefrLevel::B2).unwrap();
        assert_eq!(json, "\"B2\"");
        assert_eq!(CefrLevel::C1.to_string(), "C1");
    }
}
