//! sqippy - SQIP-style SVG placeholders as a build pipeline stage.
//!
//! Raster images flow in one at a time. For each buffered image the stage
//! asks a [`Vectorizer`] for a blurred primitive-shape approximation and
//! emits it as a new file next to the original, then (by default) passes the
//! original through.
//!
//! ```text
//! options → resolve ─┐
//! image ─────────────┴→ invoke (vectorizer) → publish → artifact [, source]
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sqippy::{Config, PlaceholderStage, PrimitiveVectorizer, SourceDiscovery};
//! use sqippy::pipeline::{channel, spawn_stage};
//!
//! #[tokio::main]
//! async fn main() -> sqippy::Result<()> {
//!     let config = Config::load()?;
//!     let vectorizer = Arc::new(PrimitiveVectorizer::new(config.primitive.clone()));
//!     let stage = PlaceholderStage::new(config.pipeline_options(), vectorizer);
//!
//!     let files = SourceDiscovery::new(config.source.clone()).load_all("./images".as_ref());
//!     let (handle, rx) = spawn_stage(stage, files, &config.pipeline);
//!     for event in channel::collect(rx).await {
//!         println!("{}", event.path().display());
//!     }
//!     handle.await.expect("stage task")?;
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod types;
pub mod vectorize;

// Re-exports for convenient access
pub use config::{ArtifactKind, Config, PipelineOptions, PlaceholderConfig, ShapeMode};
pub use error::{ConfigError, PipelineError, PipelineResult, Result, SqippyError};
pub use pipeline::{PlaceholderStage, SourceDiscovery, StageEvent};
pub use types::{Contents, ImageDimensions, PlaceholderBundle, StageStats, VirtualFile};
pub use vectorize::{PrimitiveVectorizer, VectorizeParams, Vectorizer};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name used to scope errors raised by this stage.
pub const PLUGIN_NAME: &str = "sqippy";
