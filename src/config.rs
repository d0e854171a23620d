//! Configuration for daylog
//!
//! This module provides the sink configuration for [`Log`](crate::Log) and the
//! log directory shared with [`Searcher`](crate::Searcher).

use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};

use crate::error::{Result, Error};

/// Severity of a log record
///
/// Ordered from least to most severe, so a sink threshold passes every level
/// greater than or equal to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Diagnostic detail
    Debug,
    /// Normal operation
    Info,
    /// Something unexpected that did not stop the operation
    Warning,
    /// An operation failed
    Error,
    /// The program may not be able to continue
    Critical,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl LogLevel {
    /// Parse a log level from a string
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" => Ok(Self::Critical),
            _ => Err(Error::config(format!("Unknown log level: {}", s))),
        }
    }

    /// Get the name of the log level
    pub fn name(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }

    /// Get the label written into log records
    pub fn label(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// Get all log levels, least severe first
    pub fn all() -> [Self; 5] {
        [Self::Debug, Self::Info, Self::Warning, Self::Error, Self::Critical]
    }
}

/// Configuration options for a [`Log`](crate::Log)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct LogConfig {
    /// Root of the day file tree; no file sink when unset
    pub directory: Option<PathBuf>,
    /// Minimum level written to day files
    pub file_level: LogLevel,
    /// Minimum level written to stderr
    pub stream_level: LogLevel,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_level: LogLevel::Debug,
            stream_level: LogLevel::Info,
        }
    }
}

impl LogConfig {
    /// Create a new log configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root directory of the day file tree
    pub fn with_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the minimum level written to day files
    pub fn with_file_level(mut self, level: LogLevel) -> Self {
        self.file_level = level;
        self
    }

    /// Set the minimum level written to stderr
    pub fn with_stream_level(mut self, level: LogLevel) -> Self {
        self.stream_level = level;
        self
    }

    /// Validate the configuration
    ///
    /// The directory does not have to exist yet, it is created on first
    /// write. It must not be an existing regular file.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref dir) = self.directory {
            if dir.as_os_str().is_empty() {
                return Err(Error::config("Log directory must not be empty"));
            }

            if dir.exists() && !dir.is_dir() {
                return Err(Error::config(format!(
                    "Log directory is not a directory: {}",
                    dir.display()
                )));
            }
        }

        Ok(())
    }

    /// Check if records are written to day files
    pub fn has_file_sink(&self) -> bool {
        self.directory.is_some()
    }

    /// Create a human-readable string representation of the configuration
    pub fn to_string_pretty(&self) -> String {
        let mut result = String::new();

        result.push_str("=== daylog Configuration ===\n\n");

        result.push_str("File Sink:\n");
        match self.directory {
            Some(ref dir) => {
                result.push_str(&format!("  Directory: {:?}\n", dir));
                result.push_str(&format!("  Level: {}\n", self.file_level));
            }
            None => result.push_str("  Disabled\n"),
        }

        result.push_str("\nStream Sink:\n");
        result.push_str("  Target: stderr\n");
        result.push_str(&format!("  Level: {}\n", self.stream_level));

        result
    }

    /// Load configuration from a TOML file
    #[cfg(feature = "toml")]
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        use std::fs::read_to_string;
        use toml::from_str;

        let content = read_to_string(path)?;
        let config: Self = from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    #[cfg(feature = "toml")]
    pub fn to_toml_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        use std::fs::write;
        use toml::to_string_pretty;

        let content = to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize to TOML: {}", e)))?;

        write(path, content)?;

        Ok(())
    }
}
