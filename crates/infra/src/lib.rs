//! `fraudscope-infra` — runtime infrastructure for the analytics API.
//!
//! Fire-and-forget scheduling of pipeline runs on the Tokio runtime, plus
//! the in-memory stores backing the ingest/read endpoints. Domain crates
//! stay free of runtime concerns; everything that spawns, locks, or keeps
//! state lives here.

pub mod jobs;
pub mod store;
