// ABOUTME: Entry point for the container-health CLI application.
// ABOUTME: Parses arguments, wires the runtime into the health service and dispatches commands.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use container_health::config::{self, Config};
use container_health::error::{Error, Result};
use container_health::health::HealthService;
use container_health::output::Output;
use container_health::runtime::{BollardRuntime, RuntimeType, detect_local};
use container_health::server::{self, ContainerView};
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        let default_level = match cli.command {
            Commands::Serve { .. } => "info",
            _ => "warn",
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let output = Output::new(cli.output_mode());

    if let Err(e) = run(cli, &output).await {
        output.error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, output: &Output) -> Result<()> {
    let Cli {
        config: config_path,
        socket,
        runtime,
        command,
        ..
    } = cli;

    let cwd = env::current_dir()?;
    let load = |listen: Option<SocketAddr>| -> Result<Config> {
        Ok(Config::resolve(config_path.as_deref(), &cwd)?.with_overrides(
            listen,
            runtime,
            socket.clone(),
        ))
    };

    match command {
        Commands::Init { force } => {
            let path = config::init_config(&cwd, force)?;
            println!("Created {}", path.display());
            Ok(())
        }
        Commands::Serve { listen } => serve(load(listen)?).await,
        Commands::Containers { .. } => {
            let service = connect(&load(None)?);
            let views: Vec<ContainerView> = service
                .list_containers()
                .await?
                .into_iter()
                .map(ContainerView::from)
                .collect();
            print!("{}", output.render_containers(&views)?);
            Ok(())
        }
        Commands::Health { name, .. } => {
            let service = connect(&load(None)?);
            let health = service.container_health(&name).await?;
            print!("{}", output.render_health(&health)?);
            Ok(())
        }
    }
}

/// Build the daemon client for the configured endpoint.
fn connect_runtime(config: &Config) -> BollardRuntime {
    let endpoint = detect_local(&config.runtime);
    tracing::debug!(
        runtime = %endpoint.runtime_type,
        socket = %endpoint.socket_path,
        "using container runtime"
    );

    BollardRuntime::connect(endpoint, config.timeout)
}

fn connect(config: &Config) -> HealthService {
    HealthService::new(Arc::new(connect_runtime(config)))
}

/// Run the HTTP API until Ctrl-C.
async fn serve(config: Config) -> Result<()> {
    let runtime = Arc::new(connect_runtime(&config));

    // The daemon may come up after the sidecar; queries report it per request.
    match runtime.check().await {
        Ok(meta) => tracing::info!(
            runtime = %meta.name,
            version = %meta.version,
            os = %meta.os,
            arch = %meta.arch,
            socket = runtime.socket_path(),
            "connected to container runtime"
        ),
        Err(e) => tracing::warn!("{}; serving anyway", e),
    }

    if runtime.runtime_type() == RuntimeType::Podman {
        tracing::debug!("using Podman through its Docker-compatible API");
    }

    let service = HealthService::new(runtime);

    let listener = TcpListener::bind(config.listen)
        .await
        .map_err(|source| Error::Bind {
            addr: config.listen,
            source,
        })?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    server::serve(listener, service).await?;
    Ok(())
}
