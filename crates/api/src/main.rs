use std::sync::Arc;

use fraudscope_analytics::PipelineRunner;
use fraudscope_infra::jobs::NoopPipelineRunner;

#[tokio::main]
async fn main() {
    fraudscope_observability::init();

    let internal_api_key = std::env::var("INTERNAL_API_KEY").unwrap_or_else(|_| {
        tracing::warn!("INTERNAL_API_KEY not set; using insecure dev default");
        "dev-internal-key".to_string()
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    // The real orchestrator client is wired here in deployments.
    let runner: Arc<dyn PipelineRunner> = Arc::new(NoopPipelineRunner);

    let app = fraudscope_api::app::build_app(internal_api_key, runner);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {bind_addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
