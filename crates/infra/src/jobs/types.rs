//! Pipeline run identifiers and lifecycle state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of one scheduled pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of one run.
///
/// There is no retry or cancellation state: once scheduled, a run executes
/// to completion (or failure) and cannot be influenced through the trigger
/// interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// Handed to the executor, not yet started.
    Scheduled,
    /// Currently executing.
    Running,
    /// The runner returned.
    Completed,
    /// The runner panicked or was torn down by the runtime.
    Failed { error: String },
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Completed | RunState::Failed { .. })
    }
}

/// Tracked record of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineRunRecord {
    pub id: JobId,
    pub state: RunState,
    pub scheduled_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl PipelineRunRecord {
    pub fn scheduled(id: JobId) -> Self {
        Self {
            id,
            state: RunState::Scheduled,
            scheduled_at: Utc::now(),
            finished_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(!RunState::Scheduled.is_terminal());
        assert!(!RunState::Running.is_terminal());
        assert!(RunState::Completed.is_terminal());
        assert!(
            RunState::Failed {
                error: "boom".to_string()
            }
            .is_terminal()
        );
    }

    #[test]
    fn run_state_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(RunState::Scheduled).unwrap(),
            serde_json::json!("scheduled")
        );
    }
}
