//! Configuration management for sqippy.
//!
//! Hosts either hand a [`PlaceholderConfig`] straight to the stage or load a
//! `config.toml` whose `[placeholder]` table carries the same keys. A missing
//! `[placeholder]` table means "no options", which selects the default set.

mod placeholder;
mod resolve;
mod types;
mod validate;

pub use placeholder::*;
pub use resolve::PipelineOptions;
pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Placeholder options; absent means the default set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<PlaceholderConfig>,

    /// Channel settings
    pub pipeline: PipelineConfig,

    /// `primitive` adapter settings
    pub primitive: PrimitiveConfig,

    /// Source discovery settings
    pub source: SourceConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// - macOS: ~/Library/Application Support/com.sqippy.sqippy/config.toml
    /// - Linux: ~/.config/sqippy/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\sqippy\config\config.toml
    ///
    /// Falls back to ~/.sqippy/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "sqippy", "sqippy")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".sqippy").join("config.toml")
            })
    }

    /// Resolve the placeholder options for a stage.
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions::resolve(self.placeholder.clone())
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}
