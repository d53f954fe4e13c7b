//! TileSwitch - remote focus switching for video-conference tiles
//!
//! Main entry point for the bridge and its remote-control client.

mod cli;
mod client;
mod server;

use std::path::Path;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tileswitch_config::{Config, ConfigLoader};

use crate::cli::{Cli, Commands, ServeArgs};
use crate::server::{apply_overrides, init_tracing, run_server};

const DEFAULT_CONFIG: &str = "config/tileswitch.toml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        None => serve(&cli.config, &ServeArgs::default()).await,
        Some(Commands::Serve(ref args)) => serve(&cli.config, args).await,
        Some(Commands::Watch { interval }) => {
            init_client_tracing();
            client::watch(&cli.bridge, Duration::from_secs(interval)).await
        }
        Some(ref command) => {
            init_client_tracing();
            client::run_command(&cli.bridge, command).await
        }
    }
}

async fn serve(config_path: &Path, args: &ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let allow_missing = config_path == Path::new(DEFAULT_CONFIG);
    let config = apply_overrides(load_config(config_path, allow_missing)?, args);
    init_tracing(&config.logging)?;
    run_server(config).await
}

/// Only the default path may be absent; an explicit `--config` must exist.
fn load_config(path: &Path, allow_missing: bool) -> Result<Config, Box<dyn std::error::Error>> {
    let config = if allow_missing {
        ConfigLoader::load_or_default(path)?
    } else {
        ConfigLoader::load(path)?
    };
    Ok(config)
}

/// Client commands print JSON on stdout, so their logs go to stderr.
fn init_client_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
