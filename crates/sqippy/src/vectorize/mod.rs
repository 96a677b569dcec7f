//! The vectorization collaborator.
//!
//! The stage never fits shapes itself. It hands a path and parameters to a
//! [`Vectorizer`] and publishes whatever bundle comes back. The production
//! implementation drives the `primitive` binary; tests inject fixed bundles.

pub mod primitive;
pub mod svg;

pub use primitive::PrimitiveVectorizer;

use std::path::Path;

use crate::config::ShapeMode;
use crate::error::PipelineError;
use crate::types::PlaceholderBundle;

/// Primitive count used when none is supplied.
pub const DEFAULT_PRIMITIVES: i64 = 8;
/// Shape mode used when none is supplied.
pub const DEFAULT_MODE: ShapeMode = ShapeMode::Combo;
/// Blur used when none is supplied.
pub const DEFAULT_BLUR: i64 = 12;

/// Parameters for one vectorization call.
///
/// Unset values fall back to the `DEFAULT_*` constants. Values are not
/// range-checked before they reach the vectorizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorizeParams {
    pub primitive_count: Option<i64>,
    pub blur: Option<i64>,
    pub mode: Option<ShapeMode>,
}

impl VectorizeParams {
    pub fn primitive_count_or_default(&self) -> i64 {
        self.primitive_count.unwrap_or(DEFAULT_PRIMITIVES)
    }

    pub fn blur_or_default(&self) -> i64 {
        self.blur.unwrap_or(DEFAULT_BLUR)
    }

    pub fn mode_or_default(&self) -> ShapeMode {
        self.mode.unwrap_or(DEFAULT_MODE)
    }
}

/// Turns a raster image on disk into a placeholder bundle.
///
/// Calls are synchronous and may block on disk or child processes; the stage
/// runs them on the blocking thread pool.
pub trait Vectorizer: Send + Sync {
    /// Vectorizer name for logging.
    fn name(&self) -> &str;

    /// Generate the placeholder bundle for the image at `path`.
    fn generate(
        &self,
        path: &Path,
        params: &VectorizeParams,
    ) -> Result<PlaceholderBundle, PipelineError>;
}
