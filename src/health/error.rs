// ABOUTME: Error taxonomy for container health queries.
// ABOUTME: NotFound for unknown names, Unavailable and PermissionDenied for daemon failures.

use crate::runtime::ContainerError;

/// Why a health query could not be answered.
#[derive(Debug, thiserror::Error)]
pub enum HealthError {
    /// No container's name matches the query.
    #[error("container '{0}' not found")]
    NotFound(String),

    /// The process may not open the daemon socket.
    #[error(
        "permission denied accessing the container runtime socket at {socket}. \
         Ensure this process has read/write access to {socket}, for example by running \
         as root (user 0:0) or by adding the user to the docker group on the host"
    )]
    PermissionDenied { socket: String },

    /// The daemon could not be reached, timed out, or answered with garbage.
    #[error("container runtime unavailable: {0}")]
    Unavailable(String),
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthErrorKind {
    NotFound,
    PermissionDenied,
    Unavailable,
}

impl HealthError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> HealthErrorKind {
        match self {
            HealthError::NotFound(_) => HealthErrorKind::NotFound,
            HealthError::PermissionDenied { .. } => HealthErrorKind::PermissionDenied,
            HealthError::Unavailable(_) => HealthErrorKind::Unavailable,
        }
    }

    /// True for every daemon-side failure, including permission problems.
    pub fn is_unavailable(&self) -> bool {
        !matches!(self, HealthError::NotFound(_))
    }
}

impl From<ContainerError> for HealthError {
    /// Relabel a transport failure. Daemon 404s are handled by the caller,
    /// which knows the queried name.
    fn from(err: ContainerError) -> Self {
        match err {
            ContainerError::PermissionDenied(socket) => HealthError::PermissionDenied { socket },
            other => HealthError::Unavailable(other.to_string()),
        }
    }
}
