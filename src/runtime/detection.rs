// ABOUTME: Daemon endpoint selection for the local host.
// ABOUTME: Explicit config wins; otherwise the well-known socket or pipe for the host OS.

use super::types::{DaemonEndpoint, RuntimeConfig, RuntimeType};
use std::path::Path;

pub const DOCKER_SOCKET: &str = "/var/run/docker.sock";
pub const DOCKER_PIPE: &str = "//./pipe/docker_engine";
pub const ROOTFUL_PODMAN: &str = "/run/podman/podman.sock";

/// Pick the daemon endpoint on the local host.
///
/// Selection order:
/// 1. Explicit `socket` (and `runtime`, defaulting to Docker) from config
/// 2. Explicit `runtime` with that runtime's default socket
/// 3. Docker's well-known socket (named pipe on Windows)
/// 4. Rootful, then rootless Podman socket, if Docker's socket is absent
///
/// When nothing exists on disk the Docker default is still returned so the
/// first daemon call reports the connection failure.
pub fn detect_local(config: &RuntimeConfig) -> DaemonEndpoint {
    if let Some(ref socket) = config.socket {
        return DaemonEndpoint {
            runtime_type: config.runtime.unwrap_or(RuntimeType::Docker),
            socket_path: socket.clone(),
        };
    }

    if let Some(runtime_type) = config.runtime {
        return DaemonEndpoint {
            runtime_type,
            socket_path: default_socket_path(runtime_type),
        };
    }

    if cfg!(windows) || Path::new(DOCKER_SOCKET).exists() {
        return docker_default();
    }

    if Path::new(ROOTFUL_PODMAN).exists() {
        return DaemonEndpoint {
            runtime_type: RuntimeType::Podman,
            socket_path: ROOTFUL_PODMAN.to_string(),
        };
    }

    if let Some(uid) = get_uid() {
        let rootless_socket = rootless_podman_socket(&uid);
        if Path::new(&rootless_socket).exists() {
            return DaemonEndpoint {
                runtime_type: RuntimeType::Podman,
                socket_path: rootless_socket,
            };
        }
    }

    docker_default()
}

/// Default socket for a runtime on this host.
pub fn default_socket_path(runtime: RuntimeType) -> String {
    match runtime {
        RuntimeType::Docker if cfg!(windows) => DOCKER_PIPE.to_string(),
        RuntimeType::Docker => DOCKER_SOCKET.to_string(),
        RuntimeType::Podman => ROOTFUL_PODMAN.to_string(),
    }
}

fn docker_default() -> DaemonEndpoint {
    DaemonEndpoint {
        runtime_type: RuntimeType::Docker,
        socket_path: default_socket_path(RuntimeType::Docker),
    }
}

fn rootless_podman_socket(uid: &str) -> String {
    format!("/run/user/{}/podman/podman.sock", uid)
}

fn get_uid() -> Option<String> {
    std::env::var("UID").ok().or_else(|| {
        // Fall back to reading /proc/self/status
        std::fs::read_to_string("/proc/self/status")
            .ok()
            .and_then(|s| {
                s.lines()
                    .find(|l| l.starts_with("Uid:"))
                    .and_then(|l| l.split_whitespace().nth(1))
                    .map(|s| s.to_string())
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_socket_wins() {
        let config = RuntimeConfig {
            runtime: Some(RuntimeType::Podman),
            socket: Some("/tmp/custom.sock".to_string()),
        };
        let endpoint = detect_local(&config);
        assert_eq!(endpoint.runtime_type, RuntimeType::Podman);
        assert_eq!(endpoint.socket_path, "/tmp/custom.sock");
    }

    #[test]
    fn explicit_socket_defaults_to_docker() {
        let config = RuntimeConfig {
            runtime: None,
            socket: Some("/tmp/custom.sock".to_string()),
        };
        assert_eq!(detect_local(&config).runtime_type, RuntimeType::Docker);
    }

    #[test]
    fn explicit_runtime_uses_its_default_socket() {
        let config = RuntimeConfig {
            runtime: Some(RuntimeType::Podman),
            socket: None,
        };
        let endpoint = detect_local(&config);
        assert_eq!(endpoint.socket_path, ROOTFUL_PODMAN);
    }

    #[test]
    fn rootless_socket_path_includes_uid() {
        assert_eq!(
            rootless_podman_socket("1000"),
            "/run/user/1000/podman/podman.sock"
        );
    }

    #[cfg(unix)]
    #[test]
    fn docker_default_is_unix_socket() {
        assert_eq!(default_socket_path(RuntimeType::Docker), DOCKER_SOCKET);
    }

    #[cfg(windows)]
    #[test]
    fn docker_default_is_named_pipe() {
        assert_eq!(default_socket_path(RuntimeType::Docker), DOCKER_PIPE);
    }
}
