//! Visual analytics result schema.
//!
//! These are the exact wire shapes the pipeline produces for one full
//! reanalysis run. Field names are part of the contract and shared with
//! downstream consumers; do not rename without coordinating a migration.
//!
//! Payloads claiming to be a pipeline result are validated at the boundary
//! and rejected rather than coerced. `is_anomalous` is opaque: the
//! thresholding that derives it from `anomaly_score` belongs to the
//! pipeline's model, and this layer never second-guesses it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use fraudscope_core::{DomainError, DomainResult, NodeId};

/// One feature's contribution to a fraud decision.
///
/// `impact` is signed: the sign gives the direction of the contribution,
/// the magnitude its strength.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudFactor {
    pub feature: String,
    pub impact: f64,
}

/// Ranked per-feature explanation of a fraud decision.
///
/// `top_factors` is ordered by descending `|impact|`. Empty means no
/// explanation was computable for the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudExplanation {
    pub top_factors: Vec<FraudFactor>,
}

/// Model attribution plus human-readable reasons (SHAP-style).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapExplanation {
    pub model: String,
    pub reasons: Vec<String>,
}

/// Analysis output for one graph node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualNodeResult {
    pub node_id: NodeId,
    /// Higher = more anomalous. No fixed upper bound.
    pub anomaly_score: f64,
    /// Supplied by the pipeline's thresholding; never derived here.
    pub is_anomalous: bool,
    /// Relative risk multiplier, always >= 0.
    pub risk_ratio: f64,
    pub fraud_explanation: FraudExplanation,
    pub shap_explanation: ShapExplanation,
}

/// Batch envelope for one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualAnalyticsResponse {
    /// Textual status of the run, e.g. "completed" or "failed".
    pub final_status: String,
    /// Node IDs the run actually analyzed.
    pub nodes_processed: Vec<NodeId>,
    /// One entry per analyzed node, no duplicate `node_id`.
    pub results: Vec<VisualNodeResult>,
}

impl FraudExplanation {
    pub fn validate(&self) -> DomainResult<()> {
        for factor in &self.top_factors {
            if factor.feature.is_empty() {
                return Err(DomainError::validation(
                    "fraud factor feature name must be non-empty",
                ));
            }
            if !factor.impact.is_finite() {
                return Err(DomainError::validation(format!(
                    "fraud factor '{}' has non-finite impact",
                    factor.feature
                )));
            }
        }

        // Ranked by explanatory importance: |impact| must be non-increasing.
        let sorted = self
            .top_factors
            .windows(2)
            .all(|w| w[0].impact.abs() >= w[1].impact.abs());
        if !sorted {
            return Err(DomainError::invariant(
                "top_factors must be ordered by descending |impact|",
            ));
        }

        Ok(())
    }
}

impl VisualNodeResult {
    pub fn validate(&self) -> DomainResult<()> {
        if !self.anomaly_score.is_finite() {
            return Err(DomainError::validation(format!(
                "anomaly_score for node {} must be finite",
                self.node_id
            )));
        }
        if !self.risk_ratio.is_finite() || self.risk_ratio < 0.0 {
            return Err(DomainError::validation(format!(
                "risk_ratio for node {} must be a non-negative finite number",
                self.node_id
            )));
        }
        self.fraud_explanation.validate()
    }
}

impl VisualAnalyticsResponse {
    /// Validate the shape invariants of a complete run payload.
    ///
    /// On success the payload is accepted as-is; nothing is coerced.
    pub fn validate(&self) -> DomainResult<()> {
        let processed: HashSet<NodeId> = self.nodes_processed.iter().copied().collect();
        let mut seen: HashSet<NodeId> = HashSet::with_capacity(self.results.len());

        for result in &self.results {
            result.validate()?;

            if !seen.insert(result.node_id) {
                return Err(DomainError::invariant(format!(
                    "duplicate node_id {} in results",
                    result.node_id
                )));
            }
            if !processed.contains(&result.node_id) {
                return Err(DomainError::invariant(format!(
                    "node_id {} appears in results but not in nodes_processed",
                    result.node_id
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_result(node_id: u64) -> VisualNodeResult {
        VisualNodeResult {
            node_id: NodeId::new(node_id),
            anomaly_score: 0.91,
            is_anomalous: true,
            risk_ratio: 3.2,
            fraud_explanation: FraudExplanation {
                top_factors: vec![
                    FraudFactor {
                        feature: "tx_velocity".to_string(),
                        impact: -0.8,
                    },
                    FraudFactor {
                        feature: "in_degree".to_string(),
                        impact: 0.3,
                    },
                ],
            },
            shap_explanation: ShapExplanation {
                model: "isolation_forest".to_string(),
                reasons: vec!["unusually high transaction velocity".to_string()],
            },
        }
    }

    fn sample_response() -> VisualAnalyticsResponse {
        VisualAnalyticsResponse {
            final_status: "completed".to_string(),
            nodes_processed: vec![NodeId::new(1), NodeId::new(2), NodeId::new(3)],
            results: vec![node_result(1), node_result(3)],
        }
    }

    #[test]
    fn valid_payload_passes_validation() {
        assert_eq!(sample_response().validate(), Ok(()));
    }

    #[test]
    fn serde_round_trip_is_field_for_field_equal() {
        let original = sample_response();
        let json = serde_json::to_string(&original).unwrap();
        let parsed: VisualAnalyticsResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn wire_field_names_are_stable() {
        let value = serde_json::to_value(sample_response()).unwrap();
        assert!(value.get("final_status").is_some());
        assert!(value.get("nodes_processed").is_some());
        let result = &value["results"][0];
        for field in [
            "node_id",
            "anomaly_score",
            "is_anomalous",
            "risk_ratio",
            "fraud_explanation",
            "shap_explanation",
        ] {
            assert!(result.get(field).is_some(), "missing field {field}");
        }
        assert!(result["fraud_explanation"].get("top_factors").is_some());
        assert!(result["shap_explanation"].get("reasons").is_some());
    }

    #[test]
    fn rejects_result_node_missing_from_nodes_processed() {
        let mut response = sample_response();
        response.results.push(node_result(7));
        response.nodes_processed = vec![NodeId::new(1), NodeId::new(2), NodeId::new(3)];
        assert!(matches!(
            response.validate(),
            Err(DomainError::InvariantViolation(_))
        ));
    }

    #[test]
    fn rejects_negative_risk_ratio() {
        let mut response = sample_response();
        response.results[0].risk_ratio = -0.5;
        assert!(matches!(
            response.validate(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn rejects_duplicate_result_node_ids() {
        let mut response = sample_response();
        response.results.push(node_result(1));
        assert!(matches!(
            response.validate(),
            Err(DomainError::InvariantViolation(_))
        ));
    }

    #[test]
    fn rejects_unsorted_top_factors() {
        let mut response = sample_response();
        response.results[0].fraud_explanation.top_factors = vec![
            FraudFactor {
                feature: "balance".to_string(),
                impact: 0.1,
            },
            FraudFactor {
                feature: "tx_velocity".to_string(),
                impact: -0.9,
            },
        ];
        assert!(matches!(
            response.validate(),
            Err(DomainError::InvariantViolation(_))
        ));
    }

    #[test]
    fn rejects_empty_feature_name() {
        let mut response = sample_response();
        response.results[0].fraud_explanation.top_factors[0].feature = String::new();
        assert!(matches!(
            response.validate(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn rejects_non_finite_scores() {
        let mut response = sample_response();
        response.results[0].anomaly_score = f64::NAN;
        assert!(response.validate().is_err());

        let mut response = sample_response();
        response.results[0].risk_ratio = f64::INFINITY;
        assert!(response.validate().is_err());
    }

    #[test]
    fn empty_explanation_is_allowed() {
        let mut response = sample_response();
        response.results[0].fraud_explanation.top_factors.clear();
        assert_eq!(response.validate(), Ok(()));
    }

    #[test]
    fn missing_required_field_fails_deserialization() {
        let mut value = serde_json::to_value(sample_response()).unwrap();
        value["results"][0]
            .as_object_mut()
            .unwrap()
            .remove("risk_ratio");
        assert!(serde_json::from_value::<VisualAnalyticsResponse>(value).is_err());
    }

    #[test]
    fn negative_node_id_fails_deserialization() {
        let mut value = serde_json::to_value(sample_response()).unwrap();
        value["results"][0]["node_id"] = serde_json::json!(-4);
        assert!(serde_json::from_value::<VisualAnalyticsResponse>(value).is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: any negative risk_ratio is rejected, however small.
            #[test]
            fn negative_risk_ratio_is_always_rejected(ratio in -1.0e12f64..-1.0e-12f64) {
                let mut response = sample_response();
                response.results[0].risk_ratio = ratio;
                prop_assert!(response.validate().is_err());
            }

            /// Property: round-trip through JSON preserves equality for
            /// payloads with arbitrary finite scores.
            #[test]
            fn round_trip_preserves_finite_scores(
                score in -1.0e6f64..1.0e6f64,
                ratio in 0.0f64..1.0e6f64,
            ) {
                let mut response = sample_response();
                response.results[0].anomaly_score = score;
                response.results[0].risk_ratio = ratio;

                let json = serde_json::to_string(&response).unwrap();
                let parsed: VisualAnalyticsResponse = serde_json::from_str(&json).unwrap();
                prop_assert_eq!(parsed, response);
            }
        }
    }
}
