//! Core library for chat-metrics.
//!
//! Measures a chat message the way a WhatsApp broadcast author cares about:
//! visible length, structure, formatting, rich elements, and how easy the
//! text is to read.
//!
//! # Modules
//!
//! - [`engine`] - The analysis entry point and result types
//! - [`text`] - Line, paragraph, and word segmentation
//! - [`syllables`] - Heuristic syllable estimation
//! - [`matchers`] - Named regex matchers for formatting and rich elements
//! - [`readability`] - Flesch-Kincaid grade and CEFR band
//! - [`classify`] - Length category and truncation risk
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use chat_metrics_core::{CefrLevel, LengthCategory, analyze};
//!
//! let result = analyze("Hello world").expect("non-empty input");
//! assert_eq!(result.word_count, 2);
//! assert_eq!(result.length_category, LengthCategory::Concise);
//! assert_eq!(result.readability.cefr, CefrLevel::A1);
//!
//! assert!(analyze("   ").is_none());
//! ```
#![deny(unsafe_code)]

pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod matchers;
pub mod readability;
pub mod syllables;
pub mod text;

pub use classify::{LengthCategory, Tone, TruncationRisk};
pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use engine::{AnalysisResult, Analyzer, AnalyzerOptions, FormattingCounts, analyze};
pub use error::{ConfigError, ConfigResult};
pub use readability::{CefrLevel, ReadabilityMetrics};
