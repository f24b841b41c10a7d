use std::path::PathBuf;

use shuttle_matrix_providers::{
    cache::{FileCache, MatricesCache},
    travel_matrix_client::TravelMatrixClient,
};
use shuttle_optimizer::{
    config::ShuttleConfig, json::types::JsonSolution, optimizer::optimize,
    parsers::pickups_csv::read_pickups_file,
};
use tracing::{info, warn};

use crate::{Cli, file_utils::write_document};

/// Loads the config and pickups, optimizes the routes and writes them to the output path.
///
/// The API key is resolved before the pickups are read, so a missing key fails
/// before anything is sent to the mapping service.
pub async fn run(cli: &Cli, env_api_key: Option<String>) -> Result<PathBuf, anyhow::Error> {
    info!("Loading configuration from {}", cli.config.display());
    let config = ShuttleConfig::from_path(&cli.config)?;

    let google_params = config.matrix_client_params(env_api_key, cli.timeout)?;

    let provider = config.matrix_provider.clone();
    let solution = match FileCache::from_env() {
        Some(Ok(cache)) => {
            info!("Caching time matrices in {}", cache.folder().display());
            let client = TravelMatrixClient::with_cache(provider, google_params, cache)?;
            solve(cli, &config, &client).await?
        }
        cache => {
            if let Some(Err(err)) = cache {
                warn!("Time matrix cache disabled: {}", err);
            }
            let client = TravelMatrixClient::new(provider, google_params)?;
            solve(cli, &config, &client).await?
        }
    };

    write_document(&cli.output, &solution)?;

    Ok(cli.output.clone())
}

async fn solve<C>(
    cli: &Cli,
    config: &ShuttleConfig,
    client: &TravelMatrixClient<C>,
) -> Result<JsonSolution, anyhow::Error>
where
    C: MatricesCache,
{
    info!("Reading pickups from {}", cli.input.display());
    let pickups = read_pickups_file(&cli.input)?;

    let solution = optimize(&pickups, &config.optimize_params(), client).await?;

    Ok(JsonSolution::from(&solution))
}
