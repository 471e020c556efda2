// ABOUTME: Bollard-based container runtime implementation.
// ABOUTME: Talks to Docker, or Podman via its Docker-compatible API, over a local socket or pipe.

use crate::runtime::traits::{
    ContainerDetail, ContainerError, ContainerOps, ContainerStateInfo, ContainerSummary,
    HealthBlock, HealthProbe, RuntimeInfo, RuntimeInfoError, RuntimeMetadata,
};
use crate::runtime::error::{RuntimeError, UnreachableSnafu};
use crate::runtime::types::{DaemonEndpoint, RuntimeType};
use crate::types::ContainerId;
use async_trait::async_trait;
use bollard::Docker;
use bollard::models::{
    ContainerInspectResponse, ContainerStateStatusEnum, Health, HealthStatusEnum,
};
use bollard::query_parameters::{InspectContainerOptions, ListContainersOptions};
use snafu::ResultExt;
use std::io;
use std::sync::OnceLock;
use std::time::Duration;

// =============================================================================
// Error Mapping Helpers
// =============================================================================

/// Find the I/O error kind behind a bollard error, if the failure came from
/// the socket rather than from the daemon.
///
/// Socket failures usually arrive wrapped (hyper client error, then the
/// connector's io error), so the whole source chain is searched, including
/// errors boxed inside an `io::Error`. A specific kind deeper in the chain
/// wins over an outer `Other`.
fn io_error_kind(e: &bollard::errors::Error) -> Option<io::ErrorKind> {
    let mut found = None;
    let mut next: Option<&(dyn std::error::Error + 'static)> = match e {
        bollard::errors::Error::IOError { err } => Some(err as &(dyn std::error::Error + 'static)),
        other => Some(other as &(dyn std::error::Error + 'static)),
    };

    while let Some(err) = next {
        if let Some(io_err) = err.downcast_ref::<io::Error>() {
            if io_err.kind() != io::ErrorKind::Other {
                return Some(io_err.kind());
            }
            found.get_or_insert(io_err.kind());
            if let Some(inner) = io_err.get_ref() {
                next = Some(inner);
                continue;
            }
        }
        next = err.source();
    }
    found
}

fn map_container_error(e: bollard::errors::Error, socket_path: &str) -> ContainerError {
    match &e {
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } if *status_code == 404 => ContainerError::NotFound(message.clone()),
        bollard::errors::Error::RequestTimeoutError => ContainerError::Timeout,
        bollard::errors::Error::SocketNotFoundError(path) => {
            ContainerError::ConnectionRefused(format!("socket not found: {path}"))
        }
        bollard::errors::Error::JsonDataError { .. }
        | bollard::errors::Error::JsonSerdeError { .. } => {
            ContainerError::MalformedResponse(e.to_string())
        }
        _ => match io_error_kind(&e) {
            Some(io::ErrorKind::PermissionDenied) => {
                ContainerError::PermissionDenied(socket_path.to_string())
            }
            Some(io::ErrorKind::ConnectionRefused) | Some(io::ErrorKind::NotFound) => {
                ContainerError::ConnectionRefused(e.to_string())
            }
            Some(io::ErrorKind::TimedOut) => ContainerError::Timeout,
            _ => ContainerError::Runtime(e.to_string()),
        },
    }
}

// =============================================================================
// Model Conversion
// =============================================================================

fn summary_from_model(c: bollard::models::ContainerSummary) -> ContainerSummary {
    ContainerSummary {
        id: ContainerId::new(c.id.unwrap_or_default()),
        names: c.names.unwrap_or_default(),
        state: c.state.map(|s| s.to_string()).unwrap_or_default(),
        status: c.status.unwrap_or_default(),
    }
}

fn detail_from_model(id: &ContainerId, details: ContainerInspectResponse) -> ContainerDetail {
    let state = details.state.unwrap_or_default();

    let status = match state.status {
        None | Some(ContainerStateStatusEnum::EMPTY) => "unknown".to_string(),
        Some(s) => s.as_ref().to_string(),
    };

    ContainerDetail {
        id: details.id.map(ContainerId::new).unwrap_or_else(|| id.clone()),
        state: ContainerStateInfo {
            status,
            health: state.health.and_then(health_from_model),
        },
    }
}

/// Daemons report a health block with status "none" when the health check is
/// disabled; that is treated as no health check at all.
fn health_from_model(health: Health) -> Option<HealthBlock> {
    let status = match health.status? {
        HealthStatusEnum::STARTING => "starting",
        HealthStatusEnum::HEALTHY => "healthy",
        HealthStatusEnum::UNHEALTHY => "unhealthy",
        _ => return None,
    };

    let log = health
        .log
        .unwrap_or_default()
        .into_iter()
        .map(|probe| HealthProbe {
            start: probe.start.map(|dt| dt.to_string()).unwrap_or_default(),
            end: probe.end.map(|dt| dt.to_string()).unwrap_or_default(),
            exit_code: probe.exit_code.unwrap_or_default(),
            output: probe.output.unwrap_or_default(),
        })
        .collect();

    Some(HealthBlock {
        status: status.to_string(),
        failing_streak: health.failing_streak.unwrap_or_default(),
        log,
    })
}

// =============================================================================
// BollardRuntime
// =============================================================================

/// Container runtime implementation using bollard.
///
/// The endpoint is fixed at construction. The client is created on first use
/// and then shared read-only by every request; until the socket exists each
/// call retries the creation and reports the failure itself, so the process
/// can start before the daemon does.
pub struct BollardRuntime {
    client: OnceLock<Docker>,
    endpoint: DaemonEndpoint,
    timeout: Duration,
}

impl BollardRuntime {
    /// Prepare a runtime client for the given endpoint.
    ///
    /// Use with `detect_local()`. Nothing is opened here; an unreachable
    /// daemon surfaces on the first query.
    pub fn connect(endpoint: DaemonEndpoint, timeout: Duration) -> Self {
        Self {
            client: OnceLock::new(),
            endpoint,
            timeout,
        }
    }

    /// Get the runtime type (Docker or Podman).
    pub fn runtime_type(&self) -> RuntimeType {
        self.endpoint.runtime_type
    }

    /// Socket or pipe the client talks to.
    pub fn socket_path(&self) -> &str {
        &self.endpoint.socket_path
    }

    fn client(&self) -> Result<&Docker, bollard::errors::Error> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }

        let client = Docker::connect_with_socket(
            &self.endpoint.socket_path,
            self.timeout.as_secs(),
            bollard::API_DEFAULT_VERSION,
        )?;
        Ok(self.client.get_or_init(|| client))
    }

    fn container_client(&self) -> Result<&Docker, ContainerError> {
        self.client()
            .map_err(|e| map_container_error(e, self.socket_path()))
    }

    /// Ping the daemon, then read its version, for the startup log line.
    pub async fn check(&self) -> Result<RuntimeMetadata, RuntimeError> {
        let context = || UnreachableSnafu {
            runtime: self.endpoint.runtime_type,
            socket: self.endpoint.socket_path.clone(),
        };
        self.ping().await.context(context())?;
        self.info().await.context(context())
    }
}

#[async_trait]
impl RuntimeInfo for BollardRuntime {
    async fn info(&self) -> Result<RuntimeMetadata, RuntimeInfoError> {
        let info = self
            .client()
            .map_err(|e| RuntimeInfoError::ConnectionFailed(e.to_string()))?
            .info()
            .await
            .map_err(|e| RuntimeInfoError::Runtime(e.to_string()))?;

        let name = match self.endpoint.runtime_type {
            RuntimeType::Docker => "Docker".to_string(),
            RuntimeType::Podman => "Podman".to_string(),
        };

        Ok(RuntimeMetadata {
            name,
            version: info.server_version.unwrap_or_default(),
            api_version: bollard::API_DEFAULT_VERSION.to_string(),
            os: info.operating_system.unwrap_or_default(),
            arch: info.architecture.unwrap_or_default(),
        })
    }

    async fn ping(&self) -> Result<(), RuntimeInfoError> {
        self.client()
            .map_err(|e| RuntimeInfoError::ConnectionFailed(e.to_string()))?
            .ping()
            .await
            .map_err(|e| RuntimeInfoError::ConnectionFailed(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl ContainerOps for BollardRuntime {
    async fn list_containers(&self) -> Result<Vec<ContainerSummary>, ContainerError> {
        let opts = ListContainersOptions {
            all: true,
            ..Default::default()
        };

        let result = match self.container_client() {
            Ok(client) => client
                .list_containers(Some(opts))
                .await
                .map_err(|e| map_container_error(e, self.socket_path())),
            Err(e) => Err(e),
        };
        let containers = result.inspect_err(|err| {
            tracing::warn!(socket = %self.socket_path(), error = %err, "failed to list containers");
        })?;

        tracing::debug!(count = containers.len(), "listed containers");
        Ok(containers.into_iter().map(summary_from_model).collect())
    }

    async fn inspect_container(&self, id: &ContainerId) -> Result<ContainerDetail, ContainerError> {
        let result = match self.container_client() {
            Ok(client) => client
                .inspect_container(id.as_str(), None::<InspectContainerOptions>)
                .await
                .map_err(|e| map_container_error(e, self.socket_path())),
            Err(e) => Err(e),
        };
        let details = result.inspect_err(|err| {
            tracing::warn!(socket = %self.socket_path(), container = %id, error = %err, "failed to inspect container");
        })?;

        Ok(detail_from_model(id, details))
    }
}
