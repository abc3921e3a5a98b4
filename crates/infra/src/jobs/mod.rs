//! Pipeline run scheduling and tracking.

pub mod runner;
pub mod scheduler;
pub mod store;
pub mod types;

pub use runner::NoopPipelineRunner;
pub use scheduler::{PipelineScheduler, ScheduleError, TokioPipelineScheduler};
pub use store::PipelineRunStore;
pub use types::{JobId, PipelineRunRecord, RunState};
