// ABOUTME: Container health resolution service.
// ABOUTME: list -> resolve -> inspect -> normalize, one fresh daemon snapshot per call.

use super::error::HealthError;
use super::normalizer::{ResolvedHealth, normalize};
use super::resolver::resolve;
use crate::runtime::{ContainerError, ContainerOps, ContainerSummary};
use std::sync::Arc;

/// Answers health queries against one container runtime.
///
/// Holds no state besides the injected runtime, so clones can serve
/// concurrent requests. Nothing is cached or retried: every call reflects the
/// daemon at that moment, and two calls may observe different snapshots.
#[derive(Clone)]
pub struct HealthService {
    runtime: Arc<dyn ContainerOps>,
}

impl HealthService {
    pub fn new(runtime: Arc<dyn ContainerOps>) -> Self {
        Self { runtime }
    }

    /// All containers, stopped ones included, exactly as the runtime listed
    /// them. Names keep their leading `/`.
    pub async fn list_containers(&self) -> Result<Vec<ContainerSummary>, HealthError> {
        let containers = self.runtime.list_containers().await?;
        Ok(containers)
    }

    /// Health of the container called `name`.
    ///
    /// Failures were already logged by the runtime adapter; they are only
    /// relabeled here.
    pub async fn container_health(&self, name: &str) -> Result<ResolvedHealth, HealthError> {
        let containers = self.list_containers().await?;

        let id = resolve(name, &containers).inspect_err(|_| {
            tracing::debug!(container = name, "no container with this name");
        })?;

        let detail = self
            .runtime
            .inspect_container(&id)
            .await
            .map_err(|e| match e {
                // Removed between listing and inspection.
                ContainerError::NotFound(_) => HealthError::NotFound(name.to_string()),
                other => HealthError::from(other),
            })?;

        let resolved = normalize(detail, name);
        tracing::debug!(
            container = name,
            id = %resolved.id,
            health = %resolved.health_status,
            "resolved container health"
        );
        Ok(resolved)
    }
}
