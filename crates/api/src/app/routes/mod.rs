use axum::Router;

pub mod nodes;
pub mod system;
pub mod visual;

/// Router for all endpoints behind the internal API key.
pub fn router() -> Router {
    Router::new()
        .nest("/visual", visual::router())
        .nest("/nodes", nodes::router())
}
