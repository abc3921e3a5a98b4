//! `fraudscope-auth` — pure authentication boundary for internal callers.
//!
//! This crate is intentionally decoupled from HTTP and storage. The API
//! layer extracts the presented credential from the transport and calls
//! [`InternalApiKey::verify`]; nothing here knows about headers.

pub mod api_key;

pub use api_key::{ApiKeyError, InternalApiKey};
