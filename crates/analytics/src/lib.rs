//! `fraudscope-analytics` — data contract of the visual analytics pipeline.
//!
//! Defines the wire types a pipeline run eventually produces (per-node
//! anomaly/fraud results with explanations), the ingest DTOs for
//! intermediate artifacts, and the seam through which the external
//! pipeline is invoked. Validation lives next to the types so every
//! boundary (HTTP, future queue consumers) enforces the same invariants.

pub mod ingest;
pub mod pipeline;
pub mod schema;

pub use ingest::{AnomalyScoreRecord, AnomalyScoreUpsert, EnrichedNode};
pub use pipeline::PipelineRunner;
pub use schema::{
    FraudExplanation, FraudFactor, ShapExplanation, VisualAnalyticsResponse, VisualNodeResult,
};
