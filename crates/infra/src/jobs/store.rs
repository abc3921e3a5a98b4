//! In-memory store of pipeline run records.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use super::types::{JobId, PipelineRunRecord, RunState};

/// Tracks every run scheduled during the lifetime of the process.
///
/// Handles are retained so a status-query surface can report on runs
/// without re-deriving job identity. Cloning is cheap (shared map).
#[derive(Clone, Default)]
pub struct PipelineRunStore {
    runs: Arc<RwLock<HashMap<JobId, PipelineRunRecord>>>,
}

impl PipelineRunStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, record: PipelineRunRecord) {
        self.runs.write().await.insert(record.id, record);
    }

    pub async fn get(&self, id: &JobId) -> Option<PipelineRunRecord> {
        self.runs.read().await.get(id).cloned()
    }

    /// All records, oldest first.
    pub async fn list(&self) -> Vec<PipelineRunRecord> {
        let mut records: Vec<_> = self.runs.read().await.values().cloned().collect();
        records.sort_by_key(|r| (r.scheduled_at, r.id.0));
        records
    }

    /// Transition a run's state, stamping `finished_at` on terminal states.
    pub async fn set_state(&self, id: JobId, state: RunState) {
        let mut runs = self.runs.write().await;
        if let Some(record) = runs.get_mut(&id) {
            if state.is_terminal() {
                record.finished_at = Some(Utc::now());
            }
            record.state = state;
        }
    }

    pub async fn len(&self) -> usize {
        self.runs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.runs.read().await.is_empty()
    }
}
