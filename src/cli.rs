// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};
use container_health::output::OutputMode;
use container_health::runtime::RuntimeType;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "container-health")]
#[command(about = "Health and status of Docker and Podman containers over HTTP")]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: container-health.yml in the current directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Container runtime socket, or named pipe on Windows
    #[arg(long, global = true, env = "CONTAINER_HEALTH_SOCKET")]
    pub socket: Option<String>,

    /// Container runtime behind the socket
    #[arg(long, global = true, value_enum)]
    pub runtime: Option<RuntimeType>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a container-health.yml template in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Serve the HTTP API
    Serve {
        /// Address to listen on
        #[arg(short, long, env = "CONTAINER_HEALTH_LISTEN")]
        listen: Option<SocketAddr>,
    },

    /// List all containers, including stopped ones
    Containers {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the health of one container
    Health {
        /// Container name, without the leading '/'
        name: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        match self.command {
            Commands::Containers { json: true } | Commands::Health { json: true, .. } => {
                OutputMode::Json
            }
            _ => OutputMode::Normal,
        }
    }
}
