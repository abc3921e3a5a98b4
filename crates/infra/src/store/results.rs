//! Latest accepted pipeline result.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use fraudscope_analytics::VisualAnalyticsResponse;

/// Holds the most recently accepted full-run payload.
///
/// Payloads must be validated before storage; this store does not
/// re-validate. Each pipeline run replaces the previous result wholesale
/// (results are immutable once produced).
#[derive(Clone, Default)]
pub struct AnalyticsResultStore {
    latest: Arc<RwLock<Option<StoredResult>>>,
}

#[derive(Clone)]
struct StoredResult {
    response: VisualAnalyticsResponse,
    received_at: DateTime<Utc>,
}

impl AnalyticsResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn replace(&self, response: VisualAnalyticsResponse) {
        *self.latest.write().await = Some(StoredResult {
            response,
            received_at: Utc::now(),
        });
    }

    pub async fn latest(&self) -> Option<VisualAnalyticsResponse> {
        self.latest.read().await.as_ref().map(|s| s.response.clone())
    }

    pub async fn received_at(&self) -> Option<DateTime<Utc>> {
        self.latest.read().await.as_ref().map(|s| s.received_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: &str) -> VisualAnalyticsResponse {
        VisualAnalyticsResponse {
            final_status: status.to_string(),
            nodes_processed: vec![],
            results: vec![],
        }
    }

    #[tokio::test]
    async fn starts_empty_and_replaces_wholesale() {
        let store = AnalyticsResultStore::new();
        assert!(store.latest().await.is_none());

        store.replace(response("completed")).await;
        assert_eq!(store.latest().await.unwrap().final_status, "completed");

        store.replace(response("failed")).await;
        assert_eq!(store.latest().await.unwrap().final_status, "failed");
        assert!(store.received_at().await.is_some());
    }
}
