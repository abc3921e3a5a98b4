//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: infrastructure wiring (scheduler, run store, artifact stores)
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use fraudscope_analytics::PipelineRunner;
use fraudscope_auth::InternalApiKey;

use crate::middleware;

pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
///
/// Everything except `/health` sits behind the internal API key gate.
pub fn build_app(internal_api_key: String, runner: Arc<dyn PipelineRunner>) -> Router {
    let auth_state = middleware::AuthState {
        api_key: Arc::new(InternalApiKey::new(internal_api_key)),
    };

    let services = Arc::new(services::build_services(runner));

    let protected = routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::require_internal_api_key,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
        .layer(ServiceBuilder::new())
}
