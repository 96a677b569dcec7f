//! Validation of the ambient configuration sections.
//!
//! Placeholder parameters are deliberately left alone here; the vectorizer
//! reports out-of-range values itself.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.pipeline.buffer_size == 0 {
            return Err(ConfigError::ValidationError(
                "pipeline.buffer_size must be > 0".into(),
            ));
        }
        if self.primitive.binary.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "primitive.binary must not be empty".into(),
            ));
        }
        if self.source.supported_formats.is_empty() {
            return Err(ConfigError::ValidationError(
                "source.supported_formats must list at least one extension".into(),
            ));
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::ValidationError(format!(
                "logging.format must be \"pretty\" or \"json\", got \"{}\"",
                self.logging.format
            )));
        }
        Ok(())
    }
}
