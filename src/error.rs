//! Error handling for daylog
//!
//! This module provides error types and result aliases for daylog operations.

use std::path::PathBuf;
use std::io;
use thiserror::Error;

/// Errors that can occur in daylog operations
#[derive(Error, Debug)]
pub enum Error {
    /// Errors related to configuration, including a missing log root
    #[error("Configuration error: {0}")]
    Config(String),

    /// A day file path that does not describe a calendar date
    #[error("Path format error for {path:?}: {message}")]
    PathFormat {
        path: PathBuf,
        message: String,
    },

    /// Errors related to arguments that cannot be interpreted
    #[error("Argument error: {0}")]
    Argument(String),

    /// Errors related to I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors raised while walking the log directory tree
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Generic error type for other cases
    #[error("{0}")]
    Other(String),
}

/// Result type for daylog operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new path format error
    pub fn path_format(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::PathFormat {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new argument error
    pub fn argument(message: impl Into<String>) -> Self {
        Self::Argument(message.into())
    }

    /// Create a new generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is a path format error
    pub fn is_path_format_error(&self) -> bool {
        matches!(self, Self::PathFormat { .. })
    }

    /// Check if this is an argument error
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Self::Argument(_))
    }

    /// Check if this is an I/O error
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Get a developer-friendly description of the error
    pub fn dev_description(&self) -> String {
        match self {
            Self::Config(msg) => format!("Configuration error: {}", msg),
            Self::PathFormat { path, message } => format!("Path format error for {:?}: {}", path, message),
            Self::Argument(msg) => format!("Argument error: {}", msg),
            Self::Io(err) => format!("I/O error ({:?}): {}", err.kind(), err),
            Self::Walk(err) => match err.path() {
                Some(path) => format!("Directory walk error at {:?}: {}", path, err),
                None => format!("Directory walk error: {}", err),
            },
            Self::Other(msg) => format!("Error: {}", msg),
        }
    }

    /// Get a user-friendly suggestion for resolving the error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Config(_) => Some("Check that the log directory is set and exists".to_string()),
            Self::PathFormat { .. } => {
                Some("Remove or rename files that do not follow the YYYY/MM/DD.log layout".to_string())
            }
            Self::Argument(_) => Some("Dates must be written as YYYY-MM-DD".to_string()),
            Self::Io(err) if err.kind() == io::ErrorKind::NotFound => {
                Some("The specified file or directory does not exist".to_string())
            }
            Self::Io(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                Some("You don't have permission to access this file or directory".to_string())
            }
            Self::Io(err) if err.kind() == io::ErrorKind::InvalidData => {
                Some("Log files must be valid UTF-8 text".to_string())
            }
            _ => None,
        }
    }
}
