//! The placeholder stage: one file in, artifact (and maybe the source) out.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::{PipelineOptions, PlaceholderConfig};
use crate::error::{PipelineError, PipelineResult};
use crate::types::{StageStats, VirtualFile};
use crate::vectorize::Vectorizer;

use super::invoke::PlaceholderInvoker;
use super::publish::publish;

/// An item pushed downstream by the stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageEvent {
    /// An output file (artifact or passed-through source)
    File(VirtualFile),
    /// A per-file error
    Error(PipelineError),
}

impl StageEvent {
    pub fn path(&self) -> &Path {
        match self {
            Self::File(file) => &file.path,
            Self::Error(err) => err.path(),
        }
    }

    pub fn into_file(self) -> Option<VirtualFile> {
        match self {
            Self::File(file) => Some(file),
            Self::Error(_) => None,
        }
    }
}

/// Turns buffered raster images into placeholder artifacts.
///
/// Cloning is cheap: options and the vectorizer are shared.
#[derive(Clone)]
pub struct PlaceholderStage {
    options: Arc<PipelineOptions>,
    invoker: PlaceholderInvoker,
}

impl PlaceholderStage {
    /// Create a stage from resolved options.
    pub fn new(options: PipelineOptions, vectorizer: Arc<dyn Vectorizer>) -> Self {
        Self {
            options: Arc::new(options),
            invoker: PlaceholderInvoker::new(vectorizer),
        }
    }

    /// Create a stage from caller options (`None` selects the defaults).
    pub fn from_config(config: Option<PlaceholderConfig>, vectorizer: Arc<dyn Vectorizer>) -> Self {
        Self::new(PipelineOptions::resolve(config), vectorizer)
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Transform a single file.
    ///
    /// Non-buffered files are rejected with [`PipelineError::InputShape`]
    /// before the vectorizer runs. Either all outputs are returned or none.
    pub fn transform(&self, file: VirtualFile) -> PipelineResult<Vec<VirtualFile>> {
        if !file.is_buffer() {
            return Err(PipelineError::input_shape(file.path));
        }
        let bundle = self.invoker.invoke(&file.path, &self.options)?;
        publish(file, &bundle, &self.options)
    }

    /// Run the stage until the input closes.
    ///
    /// Files are processed strictly one at a time, in arrival order. Rejected
    /// inputs are reported downstream and skipped. Any other error is
    /// reported downstream and ends the run. If downstream hangs up, the run
    /// ends early with the stats gathered so far.
    pub async fn run(
        self,
        mut input: mpsc::Receiver<VirtualFile>,
        output: mpsc::Sender<StageEvent>,
    ) -> PipelineResult<StageStats> {
        tracing::debug!(
            "Placeholder stage started (vectorizer: {})",
            self.invoker.vectorizer_name()
        );
        let mut stats = StageStats::default();

        while let Some(file) = input.recv().await {
            stats.received += 1;
            let path = file.path.clone();
            let stage = self.clone();
            let result = tokio::task::spawn_blocking(move || stage.transform(file))
                .await
                .unwrap_or_else(|e| {
                    Err(PipelineError::Task {
                        path,
                        message: e.to_string(),
                    })
                });

            match result {
                Ok(files) => {
                    stats.artifacts += 1;
                    stats.passed_through += files.len().saturating_sub(1) as u64;
                    for out in files {
                        if output.send(StageEvent::File(out)).await.is_err() {
                            tracing::debug!("Downstream closed, stopping placeholder stage");
                            return Ok(stats);
                        }
                    }
                }
                Err(e) if e.is_recoverable() => {
                    stats.rejected += 1;
                    tracing::warn!("{}", e);
                    if output.send(StageEvent::Error(e)).await.is_err() {
                        return Ok(stats);
                    }
                }
                Err(e) => {
                    tracing::error!("Placeholder stage halted: {}", e);
                    // Downstream may already be gone; the error is returned either way
                    let _ = output.send(StageEvent::Error(e.clone())).await;
                    return Err(e);
                }
            }
        }

        tracing::debug!(
            "Placeholder stage finished: {} received, {} artifacts, {} rejected",
            stats.received,
            stats.artifacts,
            stats.rejected
        );
        Ok(stats)
    }
}
