// ABOUTME: HTTP surface for the health service.
// ABOUTME: Builds the axum router and runs it until Ctrl-C.

mod handlers;
mod responses;

pub use responses::{ApiError, ContainerView, ErrorBody};

use crate::health::HealthService;
use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Routes:
/// - `GET /api/containers`
/// - `GET /api/health/{name}`
///
/// Request tracing records method, path, status and latency only. Daemon
/// failures behind a 500 were already logged by the runtime adapter.
pub fn router(service: HealthService) -> Router {
    Router::new()
        .route("/api/containers", get(handlers::list_containers))
        .route("/api/health/{name}", get(handlers::container_health))
        .layer(TraceLayer::new_for_http().on_failure(()))
        .with_state(service)
}

/// Serve requests on `listener` until the process receives Ctrl-C.
pub async fn serve(listener: TcpListener, service: HealthService) -> std::io::Result<()> {
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
