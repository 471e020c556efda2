// ABOUTME: Container query trait for container runtimes.
// ABOUTME: List all containers and inspect one by id; read-only.

use super::shared_types::ContainerDetail;
use crate::types::ContainerId;
use async_trait::async_trait;

/// Read-only container queries against a runtime daemon.
///
/// Implementations perform exactly one daemon round-trip per call and never
/// retry; a failed call is surfaced immediately.
#[async_trait]
pub trait ContainerOps: Send + Sync {
    /// List every container known to the daemon, including stopped and
    /// exited ones, in the order the daemon returns them.
    async fn list_containers(&self) -> Result<Vec<ContainerSummary>, ContainerError>;

    /// Get detailed state, including the health block if the image declares
    /// a health check.
    async fn inspect_container(&self, id: &ContainerId) -> Result<ContainerDetail, ContainerError>;
}

/// Summary information about a container, as listed by the daemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSummary {
    /// Container ID.
    pub id: ContainerId,
    /// Raw names, each usually carrying a leading `/`.
    pub names: Vec<String>,
    /// Coarse lifecycle state ("running", "exited", ...).
    pub state: String,
    /// Free-form status message ("Up 2 hours (healthy)").
    pub status: String,
}

/// Errors from container queries.
#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    #[error("permission denied while connecting to the runtime socket at {0}")]
    PermissionDenied(String),

    #[error("connection to the runtime refused: {0}")]
    ConnectionRefused(String),

    #[error("request to the runtime timed out")]
    Timeout,

    #[error("malformed response from the runtime: {0}")]
    MalformedResponse(String),

    #[error("container not found: {0}")]
    NotFound(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}
