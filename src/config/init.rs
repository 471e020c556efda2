// ABOUTME: Config scaffolding for new deployments.
// ABOUTME: Creates a commented container-health.yml with the default values.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::{CONFIG_FILENAME, Config};

/// Write a template config into `dir`, returning its path.
pub fn init_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    let yaml = generate_template_yaml(&Config::default());
    std::fs::write(&config_path, yaml)?;

    Ok(config_path)
}

fn generate_template_yaml(config: &Config) -> String {
    format!(
        r#"# Address the HTTP server listens on
listen: {}
# Timeout for each request to the container runtime
timeout: {}s
# Container runtime endpoint (default: auto-detect)
# runtime:
#   # docker or podman
#   runtime: docker
#   # Socket, or named pipe on Windows (//./pipe/docker_engine)
#   socket: /var/run/docker.sock
"#,
        config.listen,
        config.timeout.as_secs()
    )
}
