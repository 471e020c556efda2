// ABOUTME: Derives one health signal from inspected container state.
// ABOUTME: Uses the health check status when present, otherwise the lifecycle status.

use crate::runtime::{ContainerDetail, HealthBlock};
use crate::types::ContainerId;
use serde::Serialize;

/// Normalized health of one container, as answered to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedHealth {
    /// Runtime-assigned id.
    pub id: ContainerId,
    /// Name the caller asked for.
    pub container: String,
    /// Health check status, or the lifecycle status without a health check.
    /// Never empty.
    pub health_status: String,
    pub details: HealthDetails,
}

/// Supporting data for `health_status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HealthDetails {
    /// The full health block, probe log included.
    Probe(HealthBlock),
    /// Only the lifecycle status, for containers without a health check.
    State { status: String },
}

/// Build the normalized health for an inspected container. Never fails.
pub fn normalize(detail: ContainerDetail, queried_name: &str) -> ResolvedHealth {
    let (health_status, details) = match detail.state.health {
        Some(health) => (health.status.clone(), HealthDetails::Probe(health)),
        None => (
            detail.state.status.clone(),
            HealthDetails::State {
                status: detail.state.status,
            },
        ),
    };

    ResolvedHealth {
        id: detail.id,
        container: queried_name.to_string(),
        health_status,
        details,
    }
}
