// ABOUTME: Library root for container-health - exposes the health service and its plumbing.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod error;
pub mod health;
pub mod output;
pub mod runtime;
pub mod server;
pub mod types;
