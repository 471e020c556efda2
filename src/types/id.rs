// ABOUTME: Runtime-assigned container identifier.
// ABOUTME: Opaque to this crate; only compared, displayed and passed back to the daemon.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier the container runtime assigned to a container.
///
/// Kept distinct from `String` so a human-supplied container name cannot be
/// passed where the daemon expects an id.
#[must_use = "IDs reference containers and should not be ignored"]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerId(String);

impl ContainerId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
