// ABOUTME: Configuration types and parsing for container-health.yml.
// ABOUTME: Handles YAML parsing, file discovery, defaults and CLI overrides.

mod init;

pub use init::init_config;

use crate::error::{Error, Result};
use crate::runtime::{RuntimeConfig, RuntimeType};
use serde::Deserialize;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "container-health.yml";
pub const CONFIG_FILENAME_ALT: &str = "container-health.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".container-health/config.yml";

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Address the HTTP server binds to.
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,

    /// Per-request timeout of the daemon client.
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    /// Daemon endpoint overrides; empty means auto-detect.
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

fn default_listen() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT))
}

fn default_timeout() -> Duration {
    Duration::from_secs(120)
}

impl Default for Config {
    fn default() -> Self {
        Config {
            listen: default_listen(),
            timeout: default_timeout(),
            runtime: RuntimeConfig::default(),
        }
    }
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    /// Load an explicitly named file, or discover one in `dir`.
    ///
    /// An explicit path must exist. Without one, a missing file means
    /// defaults, so the sidecar runs with no configuration at all.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Error::ConfigNotFound(path.to_path_buf()));
            }
            return Self::load(path);
        }

        match Self::discover(dir) {
            Err(Error::ConfigNotFound(_)) => Ok(Config::default()),
            other => other,
        }
    }

    /// Apply command-line / environment overrides on top of file values.
    pub fn with_overrides(
        mut self,
        listen: Option<SocketAddr>,
        runtime: Option<RuntimeType>,
        socket: Option<String>,
    ) -> Self {
        if let Some(listen) = listen {
            self.listen = listen;
        }
        if runtime.is_some() {
            self.runtime.runtime = runtime;
        }
        if socket.is_some() {
            self.runtime.socket = socket;
        }
        self
    }

    fn validate(&self) -> Result<()> {
        // The daemon client only takes whole seconds.
        if self.timeout.as_secs() == 0 {
            return Err(Error::InvalidConfig(
                "timeout must be at least one second".to_string(),
            ));
        }

        if let Some(ref socket) = self.runtime.socket
            && socket.trim().is_empty()
        {
            return Err(Error::InvalidConfig(
                "runtime.socket cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
