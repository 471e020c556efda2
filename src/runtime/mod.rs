// ABOUTME: Container runtime adapter for Docker and Podman.
// ABOUTME: Endpoint selection, capability traits and the bollard-backed client.

mod bollard;
mod detection;
mod error;
pub mod traits;
mod types;

pub use self::bollard::BollardRuntime;
pub use detection::{DOCKER_PIPE, DOCKER_SOCKET, ROOTFUL_PODMAN, default_socket_path, detect_local};
pub use error::RuntimeError;
pub use traits::*;
pub use types::{DaemonEndpoint, RuntimeConfig, RuntimeType};
