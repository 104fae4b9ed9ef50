//! Message length buckets and truncation risk.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Largest visible character count still considered [`LengthCategory::Concise`].
pub const CONCISE_MAX: usize = 500;
/// Largest visible character count still considered [`LengthCategory::Golden`].
pub const GOLDEN_MAX: usize = 700;
/// Largest visible character count still considered [`LengthCategory::Extended`].
pub const EXTENDED_MAX: usize = 900;
/// Largest visible character count still considered [`LengthCategory::Long`].
pub const LONG_MAX: usize = 1100;

/// Messages with more non-empty lines than this are likely cut off in a
/// chat preview.
pub const TRUNCATION_LINE_LIMIT: usize = 8;

/// How long a message reads, by visible character count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum LengthCategory {
    /// Up to 500 characters.
    Concise,
    /// 501 to 700 characters, the sweet spot for broadcast messages.
    Golden,
    /// 701 to 900 characters.
    Extended,
    /// 901 to 1100 characters.
    Long,
    /// More than 1100 characters.
    #[serde(rename = "Very Long")]
    VeryLong,
}

/// Display tone for a value: how good or bad it looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Nothing to fix.
    Good,
    /// Worth a second look.
    Caution,
    /// Probably too much.
    Warning,
    /// Almost certainly too much.
    Critical,
}

impl LengthCategory {
    /// Bucket a visible character count. Upper bounds are inclusive.
    pub const fn from_char_count(chars: usize) -> Self {
        if chars <= CONCISE_MAX {
            Self::Concise
        } else if chars <= GOLDEN_MAX {
            Self::Golden
        } else if chars <= EXTENDED_MAX {
            Self::Extended
        } else if chars <= LONG_MAX {
            Self::Long
        } else {
            Self::VeryLong
        }
    }

    /// Human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Concise => "Concise",
            Self::Golden => "Golden",
            Self::Extended => "Extended",
            Self::Long => "Long",
            Self::VeryLong => "Very Long",
        }
    }

    /// Display tone for this category.
    pub const fn tone(&self) -> Tone {
        match self {
            Self::Concise | Self::Golden => Tone::Good,
            Self::Extended => Tone::Caution,
            Self::Long => Tone::Warning,
            Self::VeryLong => Tone::Critical,
        }
    }
}

impl fmt::Display for LengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a chat client is likely to collapse the message behind "Read more".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum TruncationRisk {
    /// Fits in a preview.
    Low,
    /// More than [`TRUNCATION_LINE_LIMIT`] non-empty lines.
    High,
}

impl TruncationRisk {
    /// Classify by number of non-empty lines.
    pub const fn from_line_count(lines: usize) -> Self {
        if lines > TRUNCATION_LINE_LIMIT {
            Self::High
        } else {
            Self::Low
        }
    }

    /// `"High"` or `"Low"`.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::High => "High",
        }
    }

    /// Display tone: high risk is critical.
    pub const fn tone(&self) -> Tone {
        match self {
            Self::Low => Tone::Good,
            Self::High => Tone::Critical,
        }
    }
}

impl fmt::Display for TruncationRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
