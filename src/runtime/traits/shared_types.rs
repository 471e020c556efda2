// ABOUTME: Shared types used across runtime trait definitions.
// ABOUTME: ContainerDetail, HealthBlock, HealthProbe and RuntimeMetadata.

use crate::types::ContainerId;
use serde::Serialize;

/// Inspection data for a single container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerDetail {
    /// Container ID.
    pub id: ContainerId,
    /// Lifecycle and health state.
    pub state: ContainerStateInfo,
}

/// State section of an inspected container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerStateInfo {
    /// Coarse lifecycle status ("running", "exited", ...). Never empty.
    pub status: String,
    /// Present only when the image declares a health check.
    pub health: Option<HealthBlock>,
}

/// Result of a container's declared health check.
///
/// Only `status` is interpreted; the rest is passed through to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthBlock {
    /// "healthy", "unhealthy" or "starting".
    pub status: String,
    /// Consecutive failed probes.
    pub failing_streak: i64,
    /// Most recent probe results, oldest first.
    pub log: Vec<HealthProbe>,
}

/// One health check probe run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthProbe {
    pub start: String,
    pub end: String,
    pub exit_code: i64,
    pub output: String,
}

/// Runtime metadata.
#[derive(Debug, Clone)]
pub struct RuntimeMetadata {
    /// Runtime name (e.g., "Docker", "Podman").
    pub name: String,
    /// Runtime version.
    pub version: String,
    /// API version.
    pub api_version: String,
    /// Operating system.
    pub os: String,
    /// Architecture.
    pub arch: String,
}
