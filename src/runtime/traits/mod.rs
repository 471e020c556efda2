// ABOUTME: Capability traits for container runtimes.
// ABOUTME: Defines ContainerOps (list/inspect) and RuntimeInfo (version/ping).

mod container;
mod runtime_info;
mod shared_types;

pub use container::{ContainerError, ContainerOps, ContainerSummary};
pub use runtime_info::{RuntimeInfo, RuntimeInfoError};
pub use shared_types::*;
