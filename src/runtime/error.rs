// ABOUTME: Runtime error types with SNAFU pattern.
// ABOUTME: Reports a daemon that does not answer the startup check.

use snafu::Snafu;

use super::traits::RuntimeInfoError;
use super::types::RuntimeType;

/// The container daemon did not answer.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum RuntimeError {
    #[snafu(display("{runtime} not reachable at {socket}: {source}"))]
    Unreachable {
        runtime: RuntimeType,
        socket: String,
        source: RuntimeInfoError,
    },
}
