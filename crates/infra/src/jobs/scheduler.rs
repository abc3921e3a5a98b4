//! Fire-and-forget scheduling of pipeline runs.
//!
//! Ordering contract (per invocation): the run record is inserted into the
//! store *before* the task is handed to the executor, and the handoff
//! completes before `schedule` returns. The caller therefore acknowledges
//! only runs that were actually scheduled, and a run is observable through
//! the store from the moment it is acknowledged.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use fraudscope_analytics::PipelineRunner;

use super::store::PipelineRunStore;
use super::types::{JobId, PipelineRunRecord, RunState};

#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The background executor refused new work (e.g. the runtime is
    /// shutting down). Nothing was scheduled; no partial effects remain.
    #[error("background executor rejected the run: {0}")]
    ExecutorUnavailable(String),
}

/// Scheduler for full-reanalysis pipeline runs.
///
/// Every call launches a new, independent run. There is deliberately no
/// deduplication, single-flight guard, or bounded queue here: unlimited
/// concurrent runs are part of the trigger contract.
#[async_trait]
pub trait PipelineScheduler: Send + Sync + 'static {
    async fn schedule(&self, runner: Arc<dyn PipelineRunner>) -> Result<JobId, ScheduleError>;
}

/// Scheduler backed by the ambient Tokio runtime.
#[derive(Clone)]
pub struct TokioPipelineScheduler {
    runs: PipelineRunStore,
}

impl TokioPipelineScheduler {
    pub fn new(runs: PipelineRunStore) -> Self {
        Self { runs }
    }

    pub fn runs(&self) -> &PipelineRunStore {
        &self.runs
    }
}

#[async_trait]
impl PipelineScheduler for TokioPipelineScheduler {
    async fn schedule(&self, runner: Arc<dyn PipelineRunner>) -> Result<JobId, ScheduleError> {
        let executor = tokio::runtime::Handle::try_current()
            .map_err(|e| ScheduleError::ExecutorUnavailable(e.to_string()))?;

        let job_id = JobId::new();
        // Record first: a run must be observable before it is acknowledged.
        self.runs.insert(PipelineRunRecord::scheduled(job_id)).await;

        let runs = self.runs.clone();
        executor.spawn(async move {
            runs.set_state(job_id, RunState::Running).await;
            info!(job_id = %job_id, "visual analytics pipeline run started");

            // Run in a nested task so a panicking runner surfaces as a
            // JoinError instead of taking this bookkeeping task down.
            let outcome = tokio::spawn(async move { runner.run_full_pipeline().await }).await;

            match outcome {
                Ok(()) => {
                    runs.set_state(job_id, RunState::Completed).await;
                    info!(job_id = %job_id, "visual analytics pipeline run completed");
                }
                Err(e) => {
                    let error = e.to_string();
                    warn!(job_id = %job_id, error = %error, "visual analytics pipeline run failed");
                    runs.set_state(job_id, RunState::Failed { error }).await;
                }
            }
        });

        Ok(job_id)
    }
}
