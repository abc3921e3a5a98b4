//! Enriched graph-node feature store.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use fraudscope_analytics::EnrichedNode;
use fraudscope_core::NodeId;

/// In-memory store of graph-feature enrichments, one per node.
#[derive(Clone, Default)]
pub struct EnrichedNodeStore {
    nodes: Arc<RwLock<HashMap<NodeId, EnrichedNode>>>,
}

impl EnrichedNodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert a batch of enriched nodes, returning how many were written.
    pub async fn upsert_batch(&self, batch: Vec<EnrichedNode>) -> usize {
        let mut nodes = self.nodes.write().await;
        let written = batch.len();
        for node in batch {
            nodes.insert(node.node_id, node);
        }
        written
    }

    pub async fn get(&self, node_id: &NodeId) -> Option<EnrichedNode> {
        self.nodes.read().await.get(node_id).cloned()
    }

    /// All enriched nodes ordered by `node_id`.
    pub async fn list(&self) -> Vec<EnrichedNode> {
        let mut nodes: Vec<_> = self.nodes.read().await.values().cloned().collect();
        nodes.sort_by_key(|n| n.node_id);
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enriched(node_id: u64, risk_ratio: f64) -> EnrichedNode {
        EnrichedNode {
            node_id: NodeId::new(node_id),
            in_degree: 3,
            out_degree: 1,
            total_incoming: 900.0,
            total_outgoing: 850.0,
            risk_ratio,
            tx_velocity: 4.2,
            account_age_days: 120,
            balance: 50.0,
        }
    }

    #[tokio::test]
    async fn upsert_and_list_ordered() {
        let store = EnrichedNodeStore::new();
        store
            .upsert_batch(vec![enriched(5, 0.3), enriched(2, 1.1)])
            .await;

        let nodes = store.list().await;
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].node_id, NodeId::new(2));
        assert_eq!(nodes[1].node_id, NodeId::new(5));
    }

    #[tokio::test]
    async fn upsert_replaces_existing_node() {
        let store = EnrichedNodeStore::new();
        store.upsert_batch(vec![enriched(2, 0.3)]).await;
        store.upsert_batch(vec![enriched(2, 2.5)]).await;

        let node = store.get(&NodeId::new(2)).await.unwrap();
        assert_eq!(node.risk_ratio, 2.5);
    }
}
