//! Vectorizer backed by the external `primitive` binary.
//!
//! `primitive` fits geometric shapes to an image and writes an SVG. This
//! adapter runs it into a temporary file, then sizes the SVG to the source
//! image, adds the blur filter, and base64-encodes the result.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::PrimitiveConfig;
use crate::error::PipelineError;
use crate::types::{ImageDimensions, PlaceholderBundle};

use super::svg;
use super::{VectorizeParams, Vectorizer};

/// Runs `primitive` for each image.
pub struct PrimitiveVectorizer {
    config: PrimitiveConfig,
}

impl PrimitiveVectorizer {
    /// Create a new adapter with the given configuration.
    pub fn new(config: PrimitiveConfig) -> Self {
        Self { config }
    }

    /// Resolve the binary: explicit paths are used as-is, bare names are
    /// looked up on `PATH`.
    pub fn locate(&self) -> Option<PathBuf> {
        let binary = &self.config.binary;
        if binary.components().count() > 1 {
            return binary.is_file().then(|| binary.clone());
        }
        which::which(binary).ok()
    }

    /// Whether the binary can be found.
    pub fn is_available(&self) -> bool {
        self.locate().is_some()
    }

    fn fail(path: &Path, message: impl Into<String>) -> PipelineError {
        PipelineError::Vectorization {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    fn check_params(path: &Path, count: i64, blur: i64) -> Result<(), PipelineError> {
        if count <= 0 {
            return Err(Self::fail(
                path,
                format!("number of primitives must be > 0, got {count}"),
            ));
        }
        if blur < 0 {
            return Err(Self::fail(path, format!("blur must be >= 0, got {blur}")));
        }
        Ok(())
    }

    fn read_dimensions(path: &Path) -> Result<ImageDimensions, PipelineError> {
        let (width, height) = image::image_dimensions(path)
            .map_err(|e| Self::fail(path, format!("Cannot read image dimensions: {e}")))?;
        Ok(ImageDimensions { width, height })
    }

    /// Run `primitive` and return the raw SVG it wrote.
    fn run_primitive(
        &self,
        binary: &Path,
        path: &Path,
        params: &VectorizeParams,
        dimensions: ImageDimensions,
    ) -> Result<String, PipelineError> {
        let output = tempfile::Builder::new()
            .prefix("sqippy-")
            .suffix(".svg")
            .tempfile()
            .map_err(|e| Self::fail(path, format!("Cannot create temp file: {e}")))?;

        let size = dimensions.width.max(dimensions.height);
        let mode = params.mode_or_default();
        tracing::debug!(
            "Running {} on {:?} (n={}, m={})",
            binary.display(),
            path,
            params.primitive_count_or_default(),
            mode
        );

        let result = Command::new(binary)
            .arg("-i")
            .arg(path)
            .arg("-o")
            .arg(output.path())
            .arg("-n")
            .arg(params.primitive_count_or_default().to_string())
            .arg("-m")
            .arg(mode.code().to_string())
            .arg("-s")
            .arg(size.to_string())
            .output()
            .map_err(|e| {
                Self::fail(path, format!("Failed to execute `{}`: {e}", binary.display()))
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(Self::fail(
                path,
                format!(
                    "`{}` exited with {}: {}",
                    binary.display(),
                    result.status,
                    stderr.trim()
                ),
            ));
        }

        std::fs::read_to_string(output.path())
            .map_err(|e| Self::fail(path, format!("Cannot read primitive output: {e}")))
    }
}

impl Default for PrimitiveVectorizer {
    fn default() -> Self {
        Self::new(PrimitiveConfig::default())
    }
}

impl Vectorizer for PrimitiveVectorizer {
    fn name(&self) -> &str {
        "primitive"
    }

    fn generate(
        &self,
        path: &Path,
        params: &VectorizeParams,
    ) -> Result<PlaceholderBundle, PipelineError> {
        let count = params.primitive_count_or_default();
        let blur = params.blur_or_default();
        Self::check_params(path, count, blur)?;

        let binary = self.locate().ok_or_else(|| {
            Self::fail(
                path,
                format!(
                    "`{}` not found; install it with `go install github.com/fogleman/primitive@latest`",
                    self.config.binary.display()
                ),
            )
        })?;

        let dimensions = Self::read_dimensions(path)?;
        let raw = self.run_primitive(&binary, path, params, dimensions)?;
        let final_svg = svg::prepare(&raw, dimensions, blur);
        let svg_base64 = svg::encode_base64(&final_svg);

        Ok(PlaceholderBundle {
            final_svg,
            img_dimensions: dimensions,
            svg_base64,
        })
    }
}
