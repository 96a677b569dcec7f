//! Core data types that flow through the placeholder stage.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Payload of a [`VirtualFile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contents {
    /// Bytes held in memory
    Buffer(Vec<u8>),
    /// Stream-backed file whose bytes are not in memory
    Stream,
    /// No contents (directories, files read with contents disabled)
    Null,
}

/// A file travelling between build pipeline stages.
///
/// Sources and outputs share this type: an output is a clone of its source
/// with a new path and new contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualFile {
    /// Path of the file, used for naming outputs
    pub path: PathBuf,
    /// File contents
    pub contents: Contents,
}

impl VirtualFile {
    /// Create a buffered file.
    pub fn buffered(path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            contents: Contents::Buffer(bytes.into()),
        }
    }

    /// Create a stream-backed file.
    pub fn streaming(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            contents: Contents::Stream,
        }
    }

    /// Whether the contents are held in memory.
    pub fn is_buffer(&self) -> bool {
        matches!(self.contents, Contents::Buffer(_))
    }

    /// The in-memory bytes, if buffered.
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.contents {
            Contents::Buffer(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Just the filename portion, or "unknown".
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// Clone this file with a different path and buffered contents.
    pub fn with_output(&self, path: PathBuf, bytes: Vec<u8>) -> Self {
        let mut out = self.clone();
        out.path = path;
        out.contents = Contents::Buffer(bytes);
        out
    }
}

/// Pixel dimensions of the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

/// Everything the vectorizer produces for one image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderBundle {
    /// Final SVG markup (dimensions applied, blur filter inserted)
    pub final_svg: String,

    /// Dimensions of the source image
    pub img_dimensions: ImageDimensions,

    /// `final_svg` encoded as base64
    #[serde(rename = "svg_base64encoded")]
    pub svg_base64: String,
}

/// Counters reported by a finished stage run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StageStats {
    /// Files received from upstream
    pub received: u64,
    /// Placeholder artifacts emitted
    pub artifacts: u64,
    /// Original sources passed through
    pub passed_through: u64,
    /// Files rejected as not buffered
    pub rejected: u64,
}
