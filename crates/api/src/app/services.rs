//! Infrastructure wiring for the HTTP application.

use std::sync::Arc;

use fraudscope_analytics::PipelineRunner;
use fraudscope_infra::jobs::{PipelineRunStore, PipelineScheduler, TokioPipelineScheduler};
use fraudscope_infra::store::{AnalyticsResultStore, AnomalyScoreStore, EnrichedNodeStore};

/// Shared services injected into route handlers.
pub struct AppServices {
    /// External pipeline seam; each trigger schedules one run of it.
    pub runner: Arc<dyn PipelineRunner>,
    pub scheduler: Arc<dyn PipelineScheduler>,
    pub runs: PipelineRunStore,
    pub scores: AnomalyScoreStore,
    pub nodes: EnrichedNodeStore,
    pub results: AnalyticsResultStore,
}

pub fn build_services(runner: Arc<dyn PipelineRunner>) -> AppServices {
    let runs = PipelineRunStore::new();

    AppServices {
        runner,
        scheduler: Arc::new(TokioPipelineScheduler::new(runs.clone())),
        runs,
        scores: AnomalyScoreStore::new(),
        nodes: EnrichedNodeStore::new(),
        results: AnalyticsResultStore::new(),
    }
}
