// ABOUTME: Output formatting for the one-shot CLI queries.
// ABOUTME: Supports human-readable and JSON output modes.

use crate::health::{HealthDetails, ResolvedHealth};
use crate::server::ContainerView;
use serde::Serialize;

/// Output mode for CLI results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Aligned, human-friendly lines
    Normal,
    /// The same JSON bodies the HTTP surface returns
    Json,
}

/// Renders query results according to the configured mode.
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Render the container listing.
    pub fn render_containers(&self, containers: &[ContainerView]) -> serde_json::Result<String> {
        match self.mode {
            OutputMode::Json => to_json(&containers),
            OutputMode::Normal => {
                let width = containers
                    .iter()
                    .map(|c| c.name.len())
                    .max()
                    .unwrap_or(0)
                    .max("NAME".len());

                let mut out = format!("{:<width$}  {:<10}  STATUS\n", "NAME", "STATE");
                for c in containers {
                    out.push_str(&format!(
                        "{:<width$}  {:<10}  {}\n",
                        c.name, c.state, c.health_status
                    ));
                }
                Ok(out)
            }
        }
    }

    /// Render one container's health.
    pub fn render_health(&self, health: &ResolvedHealth) -> serde_json::Result<String> {
        match self.mode {
            OutputMode::Json => to_json(health),
            OutputMode::Normal => {
                let mut out = format!("{}: {}\n", health.container, health.health_status);
                match &health.details {
                    HealthDetails::Probe(block) => {
                        out.push_str(&format!("  failing streak: {}\n", block.failing_streak));
                        if let Some(last) = block.log.last() {
                            out.push_str(&format!(
                                "  last probe: exit {} at {}\n",
                                last.exit_code, last.end
                            ));
                            let output = last.output.trim();
                            if !output.is_empty() {
                                out.push_str(&format!("  output: {}\n", output));
                            }
                        }
                    }
                    HealthDetails::State { .. } => {
                        out.push_str("  no health check configured; showing container state\n");
                    }
                }
                Ok(out)
            }
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal => {
                eprintln!("Error: {message}");
            }
            OutputMode::Json => {
                let event = JsonError { error: message };
                if let Ok(json) = serde_json::to_string(&event) {
                    eprintln!("{json}");
                }
            }
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

#[derive(Serialize)]
struct JsonError<'a> {
    error: &'a str,
}
