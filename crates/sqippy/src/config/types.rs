//! Sub-configuration structs for the ambient sections of `config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Stage channel settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Max files buffered between the stage and its neighbours
    pub buffer_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { buffer_size: 100 }
    }
}

/// Settings for the `primitive` vectorizer adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimitiveConfig {
    /// Binary name (looked up on PATH) or explicit path
    pub binary: PathBuf,
}

impl Default for PrimitiveConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("primitive"),
        }
    }
}

/// Settings for reading source images from disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Extensions treated as raster inputs
    pub supported_formats: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            supported_formats: ["jpg", "jpeg", "png", "gif", "webp", "bmp", "tiff"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
