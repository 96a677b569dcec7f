//! Bounded channels that carry files into and out of the stage.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::PipelineConfig;
use crate::error::PipelineResult;
use crate::types::{StageStats, VirtualFile};

use super::stage::{PlaceholderStage, StageEvent};

/// Create a bounded channel pair with the configured buffer size.
///
/// When the buffer is full, the sender waits, so a slow consumer holds back
/// the producer instead of piling files up in memory.
pub fn bounded_channel<T>(config: &PipelineConfig) -> (mpsc::Sender<T>, mpsc::Receiver<T>) {
    mpsc::channel(config.buffer_size)
}

/// Spawn a feeder for `files` and the stage behind it.
///
/// Returns the stage's join handle and the receiver of its events. The feeder
/// stops early if the stage goes away.
pub fn spawn_stage<I>(
    stage: PlaceholderStage,
    files: I,
    config: &PipelineConfig,
) -> (JoinHandle<PipelineResult<StageStats>>, mpsc::Receiver<StageEvent>)
where
    I: IntoIterator<Item = VirtualFile> + Send + 'static,
    I::IntoIter: Send,
{
    let (in_tx, in_rx) = bounded_channel::<VirtualFile>(config);
    let (out_tx, out_rx) = bounded_channel::<StageEvent>(config);

    tokio::spawn(async move {
        for file in files {
            if in_tx.send(file).await.is_err() {
                break;
            }
        }
    });

    (tokio::spawn(stage.run(in_rx, out_tx)), out_rx)
}

/// Drain a receiver into a `Vec`.
pub async fn collect<T>(mut rx: mpsc::Receiver<T>) -> Vec<T> {
    let mut items = Vec::new();
    while let Some(item) = rx.recv().await {
        items.push(item);
    }
    items
}
