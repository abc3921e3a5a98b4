//! Internal API key gate.
//!
//! Runs strictly before any handler work: a missing or mismatched key
//! rejects the request with 401 and no side effects.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use fraudscope_auth::InternalApiKey;

/// Header carrying the shared internal secret.
pub const INTERNAL_API_KEY_HEADER: &str = "x-internal-api-key";

#[derive(Clone)]
pub struct AuthState {
    pub api_key: Arc<InternalApiKey>,
}

pub async fn require_internal_api_key(
    State(state): State<AuthState>,
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let presented = extract_api_key(req.headers())?;

    state
        .api_key
        .verify(presented)
        .map_err(|_e| StatusCode::UNAUTHORIZED)?;

    Ok(next.run(req).await)
}

fn extract_api_key(headers: &HeaderMap) -> Result<&str, StatusCode> {
    let header = headers
        .get(INTERNAL_API_KEY_HEADER)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let value = header.to_str().map_err(|_| StatusCode::UNAUTHORIZED)?;

    let value = value.trim();
    if value.is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(value)
}
