// ABOUTME: Container health resolution: name lookup, health normalization, orchestration.
// ABOUTME: Callers use HealthService; resolver and normalizer are exposed for reuse and tests.

mod error;
mod normalizer;
mod resolver;
mod service;

pub use error::{HealthError, HealthErrorKind};
pub use normalizer::{HealthDetails, ResolvedHealth, normalize};
pub use resolver::{display_name, resolve};
pub use service::HealthService;
