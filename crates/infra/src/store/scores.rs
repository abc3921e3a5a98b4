//! Per-node anomaly score store.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use fraudscope_analytics::{AnomalyScoreRecord, AnomalyScoreUpsert};
use fraudscope_core::NodeId;

/// In-memory anomaly score store, one record per node.
///
/// `node_id` is a unique key: upserting a score for an existing node
/// replaces the previous record and refreshes its timestamp.
#[derive(Clone, Default)]
pub struct AnomalyScoreStore {
    scores: Arc<RwLock<HashMap<NodeId, AnomalyScoreRecord>>>,
}

impl AnomalyScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert a batch of scores, returning how many records were written.
    pub async fn upsert_batch(&self, batch: Vec<AnomalyScoreUpsert>) -> usize {
        let now = Utc::now();
        let mut scores = self.scores.write().await;
        let written = batch.len();
        for upsert in batch {
            scores.insert(
                upsert.node_id,
                AnomalyScoreRecord::from_upsert(upsert, now),
            );
        }
        written
    }

    pub async fn get(&self, node_id: &NodeId) -> Option<AnomalyScoreRecord> {
        self.scores.read().await.get(node_id).cloned()
    }

    /// All records ordered by `node_id`.
    pub async fn list(&self) -> Vec<AnomalyScoreRecord> {
        let mut records: Vec<_> = self.scores.read().await.values().cloned().collect();
        records.sort_by_key(|r| r.node_id);
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upsert(node_id: u64, score: f64) -> AnomalyScoreUpsert {
        AnomalyScoreUpsert {
            node_id: NodeId::new(node_id),
            anomaly_score: score,
            is_anomalous: score > 0.5,
            model: "isolation_forest".to_string(),
            source: "visual-analytics".to_string(),
        }
    }

    #[tokio::test]
    async fn batch_upsert_stores_all_records() {
        let store = AnomalyScoreStore::new();
        let written = store
            .upsert_batch(vec![upsert(1, 0.2), upsert(2, 0.9)])
            .await;
        assert_eq!(written, 2);

        let listed = store.list().await;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].node_id, NodeId::new(1));
        assert_eq!(listed[1].node_id, NodeId::new(2));
    }

    #[tokio::test]
    async fn upsert_replaces_existing_node_record() {
        let store = AnomalyScoreStore::new();
        store.upsert_batch(vec![upsert(1, 0.2)]).await;
        store.upsert_batch(vec![upsert(1, 0.95)]).await;

        let record = store.get(&NodeId::new(1)).await.unwrap();
        assert_eq!(record.anomaly_score, 0.95);
        assert!(record.is_anomalous);
        assert_eq!(store.list().await.len(), 1);
    }
}
