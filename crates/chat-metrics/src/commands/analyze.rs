//! Analyze command: message length, structure, formatting, and readability.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use chat_metrics_core::config::Config;
use chat_metrics_core::{AnalysisResult, Analyzer, Tone};

use super::{read_input_file, read_stdin};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// File containing the message. Reads stdin when omitted or `-`.
    pub file: Option<Utf8PathBuf>,

    /// Bullet glyphs (comma-separated), overriding the configured set.
    #[arg(long, value_delimiter = ',', value_name = "CHARS")]
    pub bullet_markers: Option<Vec<char>>,
}

impl AnalyzeArgs {
    fn source(&self) -> Option<&Utf8PathBuf> {
        self.file.as_ref().filter(|f| f.as_str() != "-")
    }
}

/// Analyze a chat message and print its metrics.
#[instrument(name = "cmd_analyze", skip_all, fields(file = ?args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = ?args.file, bullet_markers = ?args.bullet_markers, "executing analyze command");

    let (label, content) = match args.source() {
        Some(path) => (path.to_string(), read_input_file(path, max_input_bytes)?),
        None => (
            "stdin".to_string(),
            read_stdin(max_input_bytes).context("failed to read message from stdin")?,
        ),
    };

    let mut options = config.analyzer_options();
    if let Some(markers) = args.bullet_markers {
        options = options.with_bullet_markers(markers);
    }
    let analyzer = Analyzer::new(&options);
    let result = analyzer.analyze(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match result {
        Some(ref r) => print_report(&label, r),
        None => eprintln!(
            "{} {label} is empty; nothing to analyze",
            "note:".yellow()
        ),
    }

    Ok(())
}

fn paint(text: &str, tone: Tone) -> String {
    match tone {
        Tone::Good => text.green().to_string(),
        Tone::Caution => text.yellow().to_string(),
        Tone::Warning => text.red().to_string(),
        Tone::Critical => text.red().bold().to_string(),
    }
}

fn print_report(label: &str, r: &AnalysisResult) {
    println!("{}", label.bold());

    println!("\n  {}", "Summary".cyan());
    println!(
        "    Length category   {} ({} characters)",
        paint(r.length_category.label(), r.length_category.tone()),
        r.character_count,
    );
    println!(
        "    Truncation risk   {} ({} lines)",
        paint(r.truncation_risk.label(), r.truncation_risk.tone()),
        r.line_count,
    );
    println!(
        "    Reading level     {} (CEFR)",
        r.readability.cefr.as_str().blue(),
    );
    println!(
        "    Structure         {} paragraphs, ~{} words each",
        r.paragraph_count, r.readability.average_words_per_paragraph,
    );

    println!("\n  {}", "Content Structure".cyan());
    println!(
        "    Formatting        Bold: {}  Italic: {}  Bullets: {}",
        r.formatting.bold, r.formatting.italics, r.formatting.bullet_points,
    );
    println!(
        "    Rich elements     Emojis: {}  Links: {}  Hashtags: {}",
        r.emoji_count, r.url_count, r.hashtag_count,
    );

    println!("\n  {}", "Readability".cyan());
    println!(
        "    Flesch-Kincaid    {:.1} ({} words, {} syllables)",
        r.readability.flesch_kincaid, r.word_count, r.syllable_count,
    );
    println!(
        "    {:<18}{}",
        format!("CEFR {}", r.readability.cefr),
        r.readability.cefr.description().dimmed(),
    );
}
