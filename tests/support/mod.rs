// ABOUTME: Test support utilities.
// ABOUTME: In-memory container runtime double and tracing setup for integration tests.

use async_trait::async_trait;
use container_health::runtime::{
    ContainerDetail, ContainerError, ContainerOps, ContainerStateInfo, ContainerSummary,
    HealthBlock, HealthProbe,
};
use container_health::types::ContainerId;
use std::collections::HashMap;
use std::sync::Once;
use std::sync::atomic::{AtomicUsize, Ordering};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env()
            .add_directive("container_health=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Transport failures the fake daemon can be told to produce.
#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
pub enum Failure {
    PermissionDenied,
    Refused,
    Timeout,
    Malformed,
    Gone,
}

impl Failure {
    fn error(self) -> ContainerError {
        match self {
            Failure::PermissionDenied => {
                ContainerError::PermissionDenied("/var/run/docker.sock".to_string())
            }
            Failure::Refused => ContainerError::ConnectionRefused("connection refused".to_string()),
            Failure::Timeout => ContainerError::Timeout,
            Failure::Malformed => ContainerError::MalformedResponse("expected value".to_string()),
            Failure::Gone => ContainerError::NotFound("No such container".to_string()),
        }
    }
}

/// Container runtime that answers from canned data.
#[derive(Default)]
pub struct FakeRuntime {
    containers: Vec<ContainerSummary>,
    details: HashMap<String, ContainerDetail>,
    list_failure: Option<Failure>,
    inspect_failure: Option<Failure>,
    list_calls: AtomicUsize,
    inspect_calls: AtomicUsize,
}

#[allow(dead_code)]
impl FakeRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a container named `/{name}` with the given lifecycle state.
    pub fn with_container(self, id: &str, name: &str, state: &str) -> Self {
        self.with_names(id, &[&format!("/{name}")], state, None)
    }

    /// Add a running container named `/{name}` with a health block.
    pub fn with_healthy_container(self, id: &str, name: &str, health: HealthBlock) -> Self {
        self.with_names(id, &[&format!("/{name}")], "running", Some(health))
    }

    pub fn with_names(
        mut self,
        id: &str,
        names: &[&str],
        state: &str,
        health: Option<HealthBlock>,
    ) -> Self {
        let status = match health {
            Some(ref h) => format!("Up 3 minutes ({})", h.status),
            None if state == "running" => "Up 3 minutes".to_string(),
            None => "Exited (0) 1 minute ago".to_string(),
        };

        self.containers.push(ContainerSummary {
            id: ContainerId::new(id),
            names: names.iter().map(|n| n.to_string()).collect(),
            state: state.to_string(),
            status,
        });
        self.details.insert(
            id.to_string(),
            ContainerDetail {
                id: ContainerId::new(id),
                state: ContainerStateInfo {
                    status: state.to_string(),
                    health,
                },
            },
        );
        self
    }

    pub fn failing_list(mut self, failure: Failure) -> Self {
        self.list_failure = Some(failure);
        self
    }

    pub fn failing_inspect(mut self, failure: Failure) -> Self {
        self.inspect_failure = Some(failure);
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn inspect_calls(&self) -> usize {
        self.inspect_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContainerOps for FakeRuntime {
    async fn list_containers(&self) -> Result<Vec<ContainerSummary>, ContainerError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        match self.list_failure {
            Some(failure) => Err(failure.error()),
            None => Ok(self.containers.clone()),
        }
    }

    async fn inspect_container(&self, id: &ContainerId) -> Result<ContainerDetail, ContainerError> {
        self.inspect_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = self.inspect_failure {
            return Err(failure.error());
        }
        self.details
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| ContainerError::NotFound(id.to_string()))
    }
}

/// A health block with one probe in its log.
#[allow(dead_code)]
pub fn health_block(status: &str) -> HealthBlock {
    HealthBlock {
        status: status.to_string(),
        failing_streak: if status == "unhealthy" { 3 } else { 0 },
        log: vec![HealthProbe {
            start: "2024-05-01T10:00:00.000000000Z".to_string(),
            end: "2024-05-01T10:00:00.250000000Z".to_string(),
            exit_code: if status == "unhealthy" { 1 } else { 0 },
            output: "probe output".to_string(),
        }],
    }
}
