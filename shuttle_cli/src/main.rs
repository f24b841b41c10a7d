use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use mimalloc::MiMalloc;
use shuttle_optimizer::config::api_key_from_env;
use tracing::{error, info};

mod file_utils;
mod optimize;
mod parsers;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Groups pickups into vehicles and orders each vehicle's stops toward one shared destination.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// CSV file with `pickup_lat` and `pickup_lng` columns
    input: PathBuf,

    /// YAML (or JSON) configuration
    config: PathBuf,

    /// Where to write the routes, JSON if the extension is `.json`, YAML otherwise
    output: PathBuf,

    #[arg(short, long)]
    debug: bool,

    /// Timeout for each travel time request (e.g., "30s", "5m", "PT1M")
    #[arg(short, long, value_parser = parsers::parse_timeout)]
    timeout: Option<std::time::Duration>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    if let Err(err) = dotenvy::dotenv() {
        tracing::debug!("No .env file loaded: {}", err);
    }

    match optimize::run(&cli, api_key_from_env()).await {
        Ok(output) => {
            info!("Results saved to {}", output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
