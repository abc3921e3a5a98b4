//! Visual analytics endpoints: pipeline trigger, run status, artifact
//! ingest, and the latest accepted run payload.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use fraudscope_analytics::{AnomalyScoreUpsert, VisualAnalyticsResponse};
use fraudscope_infra::jobs::JobId;

use crate::app::{errors, services::AppServices};

// ─────────────────────────────────────────────────────────────────────────────
// Response Types
// ─────────────────────────────────────────────────────────────────────────────

/// Acknowledgement of a scheduled reanalysis.
///
/// Exactly these two fields; the body deliberately carries no information
/// about the eventual outcome of the run.
#[derive(Debug, Serialize)]
pub struct ReanalyzeAck {
    pub status: &'static str,
    pub message: &'static str,
}

const REANALYZE_ACK: ReanalyzeAck = ReanalyzeAck {
    status: "started",
    message: "Visual analytics pipeline started successfully",
};

// ─────────────────────────────────────────────────────────────────────────────
// Router
// ─────────────────────────────────────────────────────────────────────────────

pub fn router() -> Router {
    Router::new()
        .route("/reanalyze/all", post(start_full_reanalysis))
        .route("/jobs", get(list_runs))
        .route("/jobs/:job_id", get(get_run_status))
        .route("/anomaly-scores/batch", post(upsert_anomaly_scores))
        .route("/anomaly-scores", get(list_anomaly_scores))
        .route("/results", post(submit_results))
        .route("/results/latest", get(latest_results))
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// POST /visual/reanalyze/all
///
/// Schedule one full pipeline run, fire-and-forget, and acknowledge
/// immediately. Every call launches a new independent run; concurrent
/// callers get concurrent runs.
pub async fn start_full_reanalysis(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.scheduler.schedule(services.runner.clone()).await {
        Ok(job_id) => {
            tracing::info!(job_id = %job_id, "scheduled full visual analytics reanalysis");
            (StatusCode::ACCEPTED, Json(REANALYZE_ACK)).into_response()
        }
        Err(e) => errors::json_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "scheduling_failed",
            e.to_string(),
        ),
    }
}

/// GET /visual/jobs
///
/// All pipeline runs scheduled by this process, oldest first.
pub async fn list_runs(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let jobs = services.runs.list().await;
    (StatusCode::OK, Json(json!({ "jobs": jobs }))).into_response()
}

/// GET /visual/jobs/:job_id
pub async fn get_run_status(
    Extension(services): Extension<Arc<AppServices>>,
    Path(job_id_str): Path<String>,
) -> axum::response::Response {
    let job_id = match job_id_str.parse::<Uuid>() {
        Ok(id) => JobId::from_uuid(id),
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid job id");
        }
    };

    match services.runs.get(&job_id).await {
        Some(record) => (StatusCode::OK, Json(record)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "job not found"),
    }
}

/// POST /visual/anomaly-scores/batch
///
/// Upsert a batch of per-node anomaly scores, keyed uniquely by node id.
pub async fn upsert_anomaly_scores(
    Extension(services): Extension<Arc<AppServices>>,
    Json(batch): Json<Vec<AnomalyScoreUpsert>>,
) -> axum::response::Response {
    for upsert in &batch {
        if let Err(e) = upsert.validate() {
            return errors::domain_error_to_response(e);
        }
    }

    let stored = services.scores.upsert_batch(batch).await;
    tracing::info!(stored, "anomaly score batch ingested");

    (
        StatusCode::OK,
        Json(json!({
            "message": "Anomaly scores stored successfully",
            "stored": stored,
        })),
    )
        .into_response()
}

/// GET /visual/anomaly-scores
pub async fn list_anomaly_scores(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let scores = services.scores.list().await;
    (StatusCode::OK, Json(scores)).into_response()
}

/// POST /visual/results
///
/// The pipeline submits its final run payload here. The payload is
/// validated against the result schema and rejected on any shape or
/// invariant violation; valid payloads replace the stored latest result.
pub async fn submit_results(
    Extension(services): Extension<Arc<AppServices>>,
    Json(payload): Json<VisualAnalyticsResponse>,
) -> axum::response::Response {
    if let Err(e) = payload.validate() {
        return errors::domain_error_to_response(e);
    }

    tracing::info!(
        final_status = %payload.final_status,
        nodes = payload.nodes_processed.len(),
        "accepted visual analytics result payload"
    );
    services.results.replace(payload).await;

    (
        StatusCode::OK,
        Json(json!({ "message": "Analytics results accepted" })),
    )
        .into_response()
}

/// GET /visual/results/latest
pub async fn latest_results(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.results.latest().await {
        Some(response) => (StatusCode::OK, Json(response)).into_response(),
        None => errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            "no analytics results received yet",
        ),
    }
}
