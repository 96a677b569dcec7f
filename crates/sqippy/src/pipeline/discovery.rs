//! Source discovery: finds raster images on disk and loads them as buffered
//! virtual files for hosts that have no file stream of their own.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::SourceConfig;
use crate::types::VirtualFile;

/// Discovers and loads source images.
pub struct SourceDiscovery {
    config: SourceConfig,
}

impl SourceDiscovery {
    /// Create a new discovery instance.
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }

    /// Discover all supported image files at a path.
    ///
    /// If path is a file, returns it if supported.
    /// If path is a directory, recursively finds all supported files.
    pub fn discover(&self, path: &Path) -> Vec<PathBuf> {
        if path.is_file() {
            if self.is_supported(path) {
                return vec![path.to_path_buf()];
            }
            return vec![];
        }

        let mut files: Vec<PathBuf> = WalkDir::new(path)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && self.is_supported(e.path()))
            .map(|e| e.into_path())
            .collect();

        // Sort by path for deterministic ordering
        files.sort();
        files
    }

    /// Read a file into a buffered virtual file.
    pub fn load(&self, path: &Path) -> std::io::Result<VirtualFile> {
        let bytes = std::fs::read(path)?;
        Ok(VirtualFile::buffered(path, bytes))
    }

    /// Discover and load everything under `path`, skipping unreadable files.
    pub fn load_all(&self, path: &Path) -> Vec<VirtualFile> {
        self.discover(path)
            .into_iter()
            .filter_map(|p| match self.load(&p) {
                Ok(file) => Some(file),
                Err(e) => {
                    tracing::warn!("Skipping {:?}: {}", p, e);
                    None
                }
            })
            .collect()
    }

    /// Check if a file has a supported extension.
    fn is_supported(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.config
                    .supported_formats
                    .iter()
                    .any(|fmt| fmt.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }
}
