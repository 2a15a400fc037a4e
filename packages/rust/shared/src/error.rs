//! Error types for RecipeBook.
//!
//! Library crates use [`RecipeBookError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all RecipeBook operations.
///
/// Building a document never fails; these cover the edges around it
/// (reading forms, loading config, rendering and saving `config.yml`).
#[derive(Debug, thiserror::Error)]
pub enum RecipeBookError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Form file could not be parsed.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Document could not be rendered as YAML.
    #[error("serialize error: {0}")]
    Serialize(String),

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Invalid request (unknown form format, refused overwrite, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, RecipeBookError>;

impl RecipeBookError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = RecipeBookError::config("missing home directory");
        assert_eq!(err.to_string(), "config error: missing home directory");

        let err = RecipeBookError::validation("config.yml already exists");
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn io_error_keeps_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = RecipeBookError::io("/tmp/form.toml", source);
        let msg = err.to_string();
        assert!(msg.contains("form.toml"));
        assert!(msg.contains("gone"));
    }
}
