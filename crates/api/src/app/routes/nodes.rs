//! Enriched graph-node endpoints.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde_json::json;

use fraudscope_analytics::EnrichedNode;

use crate::app::{errors, services::AppServices};

pub fn router() -> Router {
    Router::new().route(
        "/enriched",
        post(upsert_enriched_nodes).get(list_enriched_nodes),
    )
}

/// POST /nodes/enriched
///
/// Batch upsert of graph-feature enrichments, keyed by node id.
pub async fn upsert_enriched_nodes(
    Extension(services): Extension<Arc<AppServices>>,
    Json(batch): Json<Vec<EnrichedNode>>,
) -> axum::response::Response {
    for node in &batch {
        if let Err(e) = node.validate() {
            return errors::domain_error_to_response(e);
        }
    }

    let stored = services.nodes.upsert_batch(batch).await;
    tracing::info!(stored, "enriched node batch ingested");

    (
        StatusCode::OK,
        Json(json!({
            "message": "Enriched nodes stored successfully",
            "stored": stored,
        })),
    )
        .into_response()
}

/// GET /nodes/enriched
pub async fn list_enriched_nodes(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let nodes = services.nodes.list().await;
    (StatusCode::OK, Json(nodes)).into_response()
}
