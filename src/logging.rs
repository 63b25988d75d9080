//! Logging and tracing configuration
//!
//! Centralized tracing-subscriber setup for the CLI. Library code only
//! emits events through the `tracing` macros; wiring a subscriber is the
//! binary's job.

use std::io;
use tracing::Level;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the application
    pub level: Level,
    /// Whether to emit JSON-formatted events
    pub json_format: bool,
    /// Whether to also log to a daily-rolled file
    pub log_to_file: bool,
    /// Log file directory (if logging to file)
    pub log_directory: Option<String>,
    /// Log file prefix (if logging to file)
    pub log_file_prefix: String,
    /// Whether to enable ANSI colors in console output
    pub enable_ansi: bool,
    /// Custom environment filter overriding the level
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            json_format: false,
            log_to_file: false,
            log_directory: None,
            log_file_prefix: "hotel-pms".to_string(),
            enable_ansi: true,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enable JSON formatting
    pub fn with_json_format(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Enable file logging into the given directory
    pub fn with_file_logging(mut self, directory: impl Into<String>) -> Self {
        self.log_to_file = true;
        self.log_directory = Some(directory.into());
        self
    }

    /// Disable ANSI colors
    pub fn without_ansi(mut self) -> Self {
        self.enable_ansi = false;
        self
    }

    /// Set a custom environment filter
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Initialize the global tracing subscriber
    ///
    /// Returns the file writer guard when file logging is enabled; the
    /// caller must keep it alive for buffered events to be flushed.
    pub fn init(self) -> Result<Option<WorkerGuard>, Box<dyn std::error::Error + Send + Sync>> {
        let env_filter = match &self.env_filter {
            Some(filter) => EnvFilter::try_new(filter)?,
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new(format!(
                    "{}={}",
                    env!("CARGO_PKG_NAME").replace('-', "_"),
                    self.level
                ))
            }),
        };

        let registry = Registry::default().with(env_filter);

        if self.log_to_file {
            let log_dir = self.log_directory.as_deref().unwrap_or("logs");
            let file_appender = rolling::daily(log_dir, &self.log_file_prefix);
            let (file_writer, guard) = non_blocking(file_appender);
            let file_layer = fmt::layer().json().with_writer(file_writer).with_ansi(false);

            if self.json_format {
                registry
                    .with(file_layer)
                    .with(fmt::layer().json().with_writer(io::stderr))
                    .try_init()?;
            } else {
                registry
                    .with(file_layer)
                    .with(fmt::layer().with_writer(io::stderr).with_ansi(self.enable_ansi))
                    .try_init()?;
            }
            Ok(Some(guard))
        } else {
            if self.json_format {
                registry.with(fmt::layer().json().with_writer(io::stderr)).try_init()?;
            } else {
                registry
                    .with(fmt::layer().with_writer(io::stderr).with_ansi(self.enable_ansi))
                    .try_init()?;
            }
            Ok(None)
        }
    }

    /// Initialize with info-level console logging
    pub fn init_verbose() -> Result<Option<WorkerGuard>, Box<dyn std::error::Error + Send + Sync>>
    {
        Self::new().with_level(Level::INFO).init()
    }

    /// Initialize with debug-level console logging
    pub fn init_debug() -> Result<Option<WorkerGuard>, Box<dyn std::error::Error + Send + Sync>> {
        Self::new().with_level(Level::DEBUG).init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let config = LoggingConfig::new()
            .with_level(Level::DEBUG)
            .with_json_format()
            .with_file_logging("/tmp/pms-logs")
            .without_ansi()
            .with_env_filter("hotel_pms_core=trace");

        assert_eq!(config.level, Level::DEBUG);
        assert!(config.json_format);
        assert!(config.log_to_file);
        assert_eq!(config.log_directory.as_deref(), Some("/tmp/pms-logs"));
        assert!(!config.enable_ansi);
        assert_eq!(config.env_filter.as_deref(), Some("hotel_pms_core=trace"));
    }

    #[test]
    fn test_default_level_is_warn() {
        assert_eq!(LoggingConfig::default().level, Level::WARN);
    }
}
