//! Seam to the external analytics pipeline.

use async_trait::async_trait;

/// The full-reanalysis pipeline, consumed as an external collaborator.
///
/// One call analyzes every node in the graph: anomaly scoring, risk
/// ratios, and SHAP/feature-impact explanations. The trigger layer treats
/// it as a zero-argument, no-return callable; success or failure of a run
/// is not reported back through this seam.
///
/// Implementations must tolerate concurrent invocations: the trigger
/// schedules a new, independent run per request with no deduplication.
#[async_trait]
pub trait PipelineRunner: Send + Sync + 'static {
    async fn run_full_pipeline(&self);
}
