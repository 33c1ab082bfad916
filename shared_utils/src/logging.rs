//! Logging Module
//!
//! Unified logging built on `tracing`:
//! - human-readable events on stderr
//! - a daily-rolling log file (system temp dir by default)
//! - `RUST_LOG` overrides the configured level
//!
//! # Examples
//!
//! ```no_run
//! use shared_utils::logging::{LogConfig, init_logging};
//! use tracing::info;
//!
//! let config = LogConfig::default().with_crate("my_program");
//! init_logging("my_program", config).expect("Failed to initialize logging");
//!
//! info!("Program started");
//! ```

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory holding the rolling log files.
    pub log_dir: PathBuf,
    /// Number of rotated log files kept on disk.
    pub max_files: usize,
    /// Level applied to the crates listed in `crates`.
    pub level: Level,
    /// Log targets that get `level`; everything else is held at WARN.
    pub crates: Vec<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: std::env::temp_dir(),
            max_files: 5,
            level: Level::INFO,
            crates: vec!["shared_utils".to_string()],
        }
    }
}

impl LogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.log_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_max_files(mut self, count: usize) -> Self {
        self.max_files = count;
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Add a log target (crate name) that should log at `level`.
    pub fn with_crate(mut self, name: &str) -> Self {
        if !self.crates.iter().any(|c| c == name) {
            self.crates.push(name.to_string());
        }
        self
    }

    /// The default `EnvFilter` directive string for this configuration.
    pub fn filter_directive(&self) -> String {
        let mut directive = String::from("warn");
        for name in &self.crates {
            directive.push_str(&format!(",{}={}", name, self.level));
        }
        directive
    }
}

/// Initialize the global subscriber.
///
/// Log files are named `{program_name}.{date}.log` and rotated daily; at most
/// `config.max_files` of them are kept. If the log file cannot be set up,
/// events still go to stderr and a warning says why. Errors only when a
/// global subscriber is already installed. Must be called at most once per
/// process.
pub fn init_logging(program_name: &str, config: LogConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()));

    let (file_layer, file_error) = match file_appender(program_name, &config) {
        Ok(appender) => (
            Some(
                fmt::layer()
                    .with_writer(appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true),
            ),
            None,
        ),
        Err(e) => (None, Some(e)),
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install the global tracing subscriber")?;

    if let Some(e) = file_error {
        tracing::warn!(
            error = %format!("{:#}", e),
            "File logging disabled, logging to stderr only"
        );
    }

    tracing::debug!(
        program = program_name,
        log_dir = ?config.log_dir,
        max_files = config.max_files,
        level = ?config.level,
        "Logging system initialized"
    );

    Ok(())
}

fn file_appender(program_name: &str, config: &LogConfig) -> Result<RollingFileAppender> {
    std::fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", config.log_dir))?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(program_name)
        .filename_suffix("log")
        .max_log_files(config.max_files.max(1))
        .build(&config.log_dir)
        .with_context(|| format!("Failed to create log file in {:?}", config.log_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_config_default() {
        let config = LogConfig::default();
        assert_eq!(config.max_files, 5);
        assert_eq!(config.level, Level::INFO);
        assert_eq!(config.log_dir, std::env::temp_dir());
    }

    #[test]
    fn test_log_config_builder() {
        let temp_dir = TempDir::new().unwrap();
        let config = LogConfig::new()
            .with_log_dir(temp_dir.path())
            .with_max_files(3)
            .with_level(Level::DEBUG);

        assert_eq!(config.log_dir, temp_dir.path());
        assert_eq!(config.max_files, 3);
        assert_eq!(config.level, Level::DEBUG);
    }

    #[test]
    fn test_filter_directive_lists_crates() {
        let config = LogConfig::new()
            .with_level(Level::DEBUG)
            .with_crate("img_conv")
            .with_crate("img_conv");

        assert_eq!(
            config.filter_directive(),
            "warn,shared_utils=DEBUG,img_conv=DEBUG"
        );
    }

    #[test]
    fn test_file_appender_rejects_unusable_log_dir() {
        let temp_dir = TempDir::new().unwrap();
        let not_a_dir = temp_dir.path().join("occupied");
        std::fs::write(&not_a_dir, b"file").unwrap();

        let config = LogConfig::new().with_log_dir(&not_a_dir);
        assert!(file_appender("test", &config).is_err());

        let config = LogConfig::new().with_log_dir(temp_dir.path().join("logs"));
        assert!(file_appender("test", &config).is_ok());
    }

    #[test]
    fn test_init_logging_falls_back_to_stderr() {
        let temp_dir = TempDir::new().unwrap();
        let not_a_dir = temp_dir.path().join("occupied");
        std::fs::write(&not_a_dir, b"file").unwrap();

        let config = LogConfig::new().with_log_dir(&not_a_dir);
        assert!(init_logging("test", config.clone()).is_ok());
        // The subscriber is global; a second install is refused.
        assert!(init_logging("test", config).is_err());
    }
}
