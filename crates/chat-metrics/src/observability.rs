//! Logging setup: human-readable logs on stderr, JSON lines in a log file.
//!
//! Stdout is reserved for command output (and the MCP protocol in `serve`),
//! so nothing here ever writes to it.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Explicit log file path.
const ENV_LOG_PATH: &str = "CHAT_METRICS_LOG_PATH";
/// Log directory, overriding the config file.
const ENV_LOG_DIR: &str = "CHAT_METRICS_LOG_DIR";
/// File name prefix for daily-rotated logs.
const LOG_FILE_PREFIX: &str = "chat-metrics.jsonl";

/// Where log files go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Exact file to append to; never rotated.
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rotated files.
    pub log_dir: Option<PathBuf>,
    /// Whether `log_dir` is the platform default rather than a user choice.
    pub log_dir_is_default: bool,
}

impl ObservabilityConfig {
    /// Resolve log destinations: environment first, then the config file's
    /// `log_dir`, then the platform data directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(ENV_LOG_PATH).map(PathBuf::from),
            std::env::var_os(ENV_LOG_DIR).map(PathBuf::from),
            config_log_dir,
            chat_metrics_core::config::user_data_local_dir()
                .map(|dir| dir.join("logs").into_std_path_buf()),
        )
    }

    fn resolve(
        env_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
        default_dir: Option<PathBuf>,
    ) -> Self {
        let chosen = env_dir.or(config_dir);
        let log_dir_is_default = chosen.is_none() && default_dir.is_some();
        Self {
            log_path: env_path,
            log_dir: chosen.or(default_dir),
            log_dir_is_default,
        }
    }
}

/// Build the log filter.
///
/// `RUST_LOG` wins when set; otherwise `--quiet` means errors only, each
/// `-v` raises verbosity, and the configured level applies by default.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(level_for(quiet, verbose, default_level))
}

fn level_for(quiet: bool, verbose: u8, default_level: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => default_level,
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// Returns the file writer's guard, which must stay alive until exit so
/// buffered lines are flushed.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let (file_writer, guard) = match open_log_target(config)? {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();
    let file_layer = file_writer.map(|writer| fmt::layer().json().with_writer(writer));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

fn open_log_target(
    config: &ObservabilityConfig,
) -> anyhow::Result<Option<tracing_appender::rolling::RollingFileAppender>> {
    if let Some(ref path) = config.log_path {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let file_name = path
            .file_name()
            .with_context(|| format!("log path has no file name: {}", path.display()))?;
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        return Ok(Some(tracing_appender::rolling::never(dir, file_name)));
    }

    let Some(ref dir) = config.log_dir else {
        return Ok(None);
    };
    if let Err(err) = std::fs::create_dir_all(dir) {
        // The platform default is best effort; a directory the user asked for is not.
        if config.log_dir_is_default {
            return Ok(None);
        }
        return Err(err)
            .with_context(|| format!("failed to create log directory {}", dir.display()));
    }
    Ok(Some(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX)))
}
