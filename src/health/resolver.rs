// ABOUTME: Resolves a human-supplied container name to the runtime's id.
// ABOUTME: Names are compared with one leading '/' removed; first match in listing order wins.

use super::error::HealthError;
use crate::runtime::ContainerSummary;
use crate::types::ContainerId;

/// Name as shown to people: the raw runtime name minus one leading `/`.
pub fn display_name(raw: &str) -> &str {
    raw.strip_prefix('/').unwrap_or(raw)
}

/// Find the id of the first container with any name equal to `name`.
///
/// Matching is exact and case-sensitive. The runtime enforces name
/// uniqueness, so collisions are not detected.
pub fn resolve(name: &str, containers: &[ContainerSummary]) -> Result<ContainerId, HealthError> {
    containers
        .iter()
        .find(|c| c.names.iter().any(|n| display_name(n) == name))
        .map(|c| c.id.clone())
        .ok_or_else(|| HealthError::NotFound(name.to_string()))
}
