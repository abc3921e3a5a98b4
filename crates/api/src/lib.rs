//! `fraudscope-api` — HTTP surface of the visual analytics backend.

pub mod app;
pub mod middleware;
