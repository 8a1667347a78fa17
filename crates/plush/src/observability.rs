//! Logging setup for the CLI.
//!
//! Two layers feed one registry:
//!
//! - a compact human-readable layer on stderr, so stdout stays clean for
//!   reports and JSON output
//! - a JSON-lines file layer, rotated daily, when a log directory is usable
//!
//! The file layer is best effort. If the directory cannot be created the CLI
//! still runs and logs to stderr only.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Full path to the log file (directory and file name).
pub const LOG_PATH_ENV: &str = "PLUSH_LOG_PATH";
/// Directory for the log file.
pub const LOG_DIR_ENV: &str = "PLUSH_LOG_DIR";
/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "plush.jsonl";

/// Where (and whether) to write the JSON log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Directory holding the log file, if file logging is enabled.
    pub log_dir: Option<PathBuf>,
    /// Log file name within `log_dir`.
    pub log_file: String,
}

impl ObservabilityConfig {
    /// Resolve the log location from the environment, then `config_dir`,
    /// then the platform data directory.
    pub fn from_env_with_overrides(config_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_dir,
            default_log_dir(),
        )
    }

    fn resolve(
        log_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
        fallback_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = log_path.filter(|p| !p.as_os_str().is_empty()) {
            let log_file = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or(DEFAULT_LOG_FILE)
                .to_string();
            let log_dir = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            return Self {
                log_dir: Some(log_dir),
                log_file,
            };
        }

        let log_dir = env_dir
            .filter(|p| !p.as_os_str().is_empty())
            .or(config_dir)
            .or(fallback_dir);
        Self {
            log_dir,
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

fn default_log_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "plush").map(|dirs| dirs.data_dir().join("logs"))
}

/// Pick the filter directive from the verbosity flags.
///
/// `-q` wins over `-v`. Without either, the configured level applies.
pub fn level_directive(quiet: bool, verbose: u8, default_level: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => default_level,
        1 => "debug",
        _ => "trace",
    }
}

/// Build the filter: `RUST_LOG` when set, otherwise the verbosity flags.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(quiet, verbose, default_level)))
}

/// Install the global subscriber.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes and stops the file writer.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match config.log_dir.as_deref().and_then(usable_dir) {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, &config.log_file);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_writer(writer)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

fn usable_dir(dir: &Path) -> Option<&Path> {
    std::fs::create_dir_all(dir).ok().map(|()| dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_beats_verbose() {
        assert_eq!(level_directive(true, 2, "info"), "error");
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_directive(false, 0, "warn"), "warn");
        assert_eq!(level_directive(false, 1, "warn"), "debug");
        assert_eq!(level_directive(false, 3, "warn"), "trace");
    }

    #[test]
    fn log_path_splits_into_dir_and_file() {
        let cfg = ObservabilityConfig::resolve(
            Some(PathBuf::from("/var/log/plush/run.jsonl")),
            Some(PathBuf::from("/ignored")),
            None,
            None,
        );
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/var/log/plush")));
        assert_eq!(cfg.log_file, "run.jsonl");
    }

    #[test]
    fn bare_log_file_uses_current_dir() {
        let cfg = ObservabilityConfig::resolve(Some(PathBuf::from("run.jsonl")), None, None, None);
        assert_eq!(cfg.log_dir, Some(PathBuf::from(".")));
    }

    #[test]
    fn env_dir_beats_config_dir() {
        let cfg = ObservabilityConfig::resolve(
            None,
            Some(PathBuf::from("/env")),
            Some(PathBuf::from("/config")),
            Some(PathBuf::from("/data")),
        );
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/env")));
        assert_eq!(cfg.log_file, DEFAULT_LOG_FILE);
    }

    #[test]
    fn config_dir_beats_fallback() {
        let cfg = ObservabilityConfig::resolve(
            None,
            None,
            Some(PathBuf::from("/config")),
            Some(PathBuf::from("/data")),
        );
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/config")));
    }

    #[test]
    fn falls_back_to_data_dir() {
        let cfg = ObservabilityConfig::resolve(None, None, None, Some(PathBuf::from("/data")));
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/data")));
    }

    #[test]
    fn usable_dir_creates_missing_directories() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let nested = tmp.path().join("a/b");
        assert!(usable_dir(&nested).is_some());
        assert!(nested.is_dir());
    }
}
