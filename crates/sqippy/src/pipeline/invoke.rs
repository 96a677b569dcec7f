//! Placeholder invocation: progress logging plus the vectorizer call.

use std::path::Path;
use std::sync::Arc;

use crate::config::PipelineOptions;
use crate::error::PipelineError;
use crate::types::PlaceholderBundle;
use crate::vectorize::Vectorizer;

/// Calls the vectorizer for one file at a time.
#[derive(Clone)]
pub struct PlaceholderInvoker {
    vectorizer: Arc<dyn Vectorizer>,
}

impl PlaceholderInvoker {
    pub fn new(vectorizer: Arc<dyn Vectorizer>) -> Self {
        Self { vectorizer }
    }

    /// Name of the injected vectorizer.
    pub fn vectorizer_name(&self) -> &str {
        self.vectorizer.name()
    }

    /// Generate the placeholder bundle for `path`.
    ///
    /// Vectorizer errors are returned as-is; there is no retry.
    pub fn invoke(
        &self,
        path: &Path,
        options: &PipelineOptions,
    ) -> Result<PlaceholderBundle, PipelineError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unknown".to_string());
        tracing::info!(
            "Processing '{}' ({} with {} primitives)",
            file_name,
            size_annotation(path),
            primitives_annotation(options.primitive_count)
        );

        self.vectorizer.generate(path, &options.vectorize_params())
    }
}

/// Human-readable size of the file at `path`, or "unknown" if it can't be
/// stat'ed.
pub fn size_annotation(path: &Path) -> String {
    match file_size_mb(path) {
        Ok(mb) => format!("{mb:.1}mb"),
        Err(e) => {
            tracing::trace!("Size probe failed for {:?}: {}", path, e);
            "unknown".to_string()
        }
    }
}

fn file_size_mb(path: &Path) -> std::io::Result<f64> {
    let metadata = std::fs::metadata(path)?;
    Ok(metadata.len() as f64 / 1_000_000.0)
}

fn primitives_annotation(count: Option<i64>) -> String {
    match count {
        Some(n) if n != 0 => n.to_string(),
        _ => "default".to_string(),
    }
}
