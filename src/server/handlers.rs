// ABOUTME: Axum handlers for the container and health endpoints.
// ABOUTME: Thin adapters from HTTP extractors to HealthService calls.

use super::responses::{ApiError, ContainerView};
use crate::health::{HealthService, ResolvedHealth};
use axum::Json;
use axum::extract::{Path, State};

pub async fn list_containers(
    State(service): State<HealthService>,
) -> Result<Json<Vec<ContainerView>>, ApiError> {
    let containers = service.list_containers().await?;
    tracing::info!(count = containers.len(), "fetched containers");
    Ok(Json(containers.into_iter().map(ContainerView::from).collect()))
}

pub async fn container_health(
    State(service): State<HealthService>,
    Path(name): Path<String>,
) -> Result<Json<ResolvedHealth>, ApiError> {
    let health = service.container_health(&name).await?;
    Ok(Json(health))
}
