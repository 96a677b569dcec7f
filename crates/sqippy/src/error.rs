//! Error types for the sqippy placeholder stage.
//!
//! Errors are split between configuration loading and per-file pipeline
//! failures. Pipeline errors always carry the path of the file involved so a
//! host can report which input broke the build.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for sqippy operations.
#[derive(Error, Debug)]
pub enum SqippyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline processing errors
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to parse a JSON placeholder configuration
    #[error("Failed to parse placeholder options: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Per-file pipeline errors.
///
/// Only [`PipelineError::InputShape`] is recoverable: the stage reports it and
/// moves on to the next file. Every other variant halts the stage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The source file is not held in memory (stream-backed or empty)
    #[error("{plugin}: Source must be a file in buffer format: {}", .path.display())]
    InputShape { plugin: String, path: PathBuf },

    /// The vectorizer failed (unreadable image, bad parameters, tool failure)
    #[error("Vectorization failed for {}: {message}", .path.display())]
    Vectorization { path: PathBuf, message: String },

    /// The selected artifact could not be serialized
    #[error("Artifact error for {}: {message}", .path.display())]
    Artifact { path: PathBuf, message: String },

    /// The blocking transform task did not complete
    #[error("Task error for {}: {message}", .path.display())]
    Task { path: PathBuf, message: String },
}

impl PipelineError {
    /// Build the plugin-scoped error for a file that is not buffered.
    pub fn input_shape(path: impl Into<PathBuf>) -> Self {
        Self::InputShape {
            plugin: crate::PLUGIN_NAME.to_string(),
            path: path.into(),
        }
    }

    /// Whether the stage can keep going after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InputShape { .. })
    }

    /// Path of the file the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::InputShape { path, .. }
            | Self::Vectorization { path, .. }
            | Self::Artifact { path, .. }
            | Self::Task { path, .. } => path.as_path(),
        }
    }
}

/// Convenience type alias for sqippy results.
pub type Result<T> = std::result::Result<T, SqippyError>;

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_shape_message_names_plugin_and_path() {
        let err = PipelineError::input_shape("assets/photo.jpg");
        assert_eq!(
            err.to_string(),
            "sqippy: Source must be a file in buffer format: assets/photo.jpg"
        );
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_vectorization_is_not_recoverable() {
        let err = PipelineError::Vectorization {
            path: PathBuf::from("a.png"),
            message: "corrupt".into(),
        };
        assert!(!err.is_recoverable());
        assert_eq!(err.path(), std::path::Path::new("a.png"));
    }
}
