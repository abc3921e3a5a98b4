//! Ingest DTOs for intermediate pipeline artifacts.
//!
//! The pipeline pushes per-node anomaly scores and graph-feature
//! enrichments as they are computed, ahead of the final run payload.
//! Enriched nodes keep the camelCase wire names of the original graph
//! builder API; anomaly scores use snake_case like the run payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fraudscope_core::{DomainError, DomainResult, NodeId};

/// One anomaly score pushed by the pipeline for a single node.
///
/// Upserts are keyed by `node_id`: a later score for the same node
/// replaces the earlier one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyScoreUpsert {
    pub node_id: NodeId,
    pub anomaly_score: f64,
    pub is_anomalous: bool,
    /// Name of the model that produced the score.
    pub model: String,
    /// Pipeline stage or system that submitted the score.
    pub source: String,
}

impl AnomalyScoreUpsert {
    pub fn validate(&self) -> DomainResult<()> {
        if !self.anomaly_score.is_finite() {
            return Err(DomainError::validation(format!(
                "anomaly_score for node {} must be finite",
                self.node_id
            )));
        }
        if self.model.is_empty() {
            return Err(DomainError::validation(format!(
                "model for node {} must be non-empty",
                self.node_id
            )));
        }
        Ok(())
    }
}

/// Stored anomaly score with the time of the last upsert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyScoreRecord {
    pub node_id: NodeId,
    pub anomaly_score: f64,
    pub is_anomalous: bool,
    pub model: String,
    pub source: String,
    pub updated_at: DateTime<Utc>,
}

impl AnomalyScoreRecord {
    pub fn from_upsert(upsert: AnomalyScoreUpsert, updated_at: DateTime<Utc>) -> Self {
        Self {
            node_id: upsert.node_id,
            anomaly_score: upsert.anomaly_score,
            is_anomalous: upsert.is_anomalous,
            model: upsert.model,
            source: upsert.source,
            updated_at,
        }
    }
}

/// Graph-feature enrichment for one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedNode {
    pub node_id: NodeId,
    pub in_degree: u32,
    pub out_degree: u32,
    pub total_incoming: f64,
    pub total_outgoing: f64,
    pub risk_ratio: f64,
    pub tx_velocity: f64,
    pub account_age_days: u32,
    pub balance: f64,
}

impl EnrichedNode {
    pub fn validate(&self) -> DomainResult<()> {
        if !self.risk_ratio.is_finite() || self.risk_ratio < 0.0 {
            return Err(DomainError::validation(format!(
                "riskRatio for node {} must be a non-negative finite number",
                self.node_id
            )));
        }
        Ok(())
    }
}
