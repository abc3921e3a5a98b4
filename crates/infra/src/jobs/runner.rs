//! Default pipeline runner used when no orchestrator is attached.

use async_trait::async_trait;
use tracing::warn;

use fraudscope_analytics::PipelineRunner;

/// Runner that does nothing but log.
///
/// Deployments wire the real orchestrator client in its place; tests use
/// it as a base for counting/blocking doubles.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPipelineRunner;

#[async_trait]
impl PipelineRunner for NoopPipelineRunner {
    async fn run_full_pipeline(&self) {
        warn!("no analytics pipeline attached; reanalysis run is a no-op");
    }
}
