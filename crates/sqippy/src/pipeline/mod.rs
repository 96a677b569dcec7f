//! Placeholder pipeline components.
//!
//! - **invoke**: size probe, progress log and the vectorizer call
//! - **publish**: artifact naming, content prefix and source passthrough
//! - **stage**: per-file transform and the async stage loop
//! - **channel**: bounded channels and stage wiring
//! - **discovery**: find and load source images from disk

pub mod channel;
pub mod discovery;
pub mod invoke;
pub mod publish;
pub mod stage;

// Re-exports for convenient access
pub use channel::{bounded_channel, spawn_stage};
pub use discovery::SourceDiscovery;
pub use invoke::PlaceholderInvoker;
pub use publish::{publish, DATA_URI_PREFIX};
pub use stage::{PlaceholderStage, StageEvent};
