//! In-memory stores for pipeline artifacts.
//!
//! Keyed by `NodeId` where the original system used a unique index; all
//! stores are cheaply clonable handles over shared state.

pub mod nodes;
pub mod results;
pub mod scores;

pub use nodes::EnrichedNodeStore;
pub use results::AnalyticsResultStore;
pub use scores::AnomalyScoreStore;
