use tracing::{debug, warn};

use crate::{
    as_the_crow_flies::as_the_crow_flies_matrix,
    cache::{MatricesCache, NoCache},
    error::MatrixError,
    google_api::{GoogleDistanceMatrixClient, GoogleMatrixClientParams},
    time_matrix_provider::{TimeMatrixProvider, ensure_dimension},
    travel_matrix_provider::TravelMatrixProvider,
    travel_time_matrix::TravelTimeMatrix,
};

pub struct TravelMatrixClient<C = NoCache> {
    provider: TravelMatrixProvider,
    google_client: Option<GoogleDistanceMatrixClient>,
    cache: C,
}

impl TravelMatrixClient<NoCache> {
    pub fn new(
        provider: TravelMatrixProvider,
        google_params: Option<GoogleMatrixClientParams>,
    ) -> Result<Self, MatrixError> {
        Self::with_cache(provider, google_params, NoCache)
    }
}

impl<C> TravelMatrixClient<C>
where
    C: MatricesCache,
{
    pub fn with_cache(
        provider: TravelMatrixProvider,
        google_params: Option<GoogleMatrixClientParams>,
        cache: C,
    ) -> Result<Self, MatrixError> {
        let google_client = match &provider {
            TravelMatrixProvider::GoogleDistanceMatrix { .. } => {
                let params = google_params.ok_or(MatrixError::MissingApiKey("Google"))?;
                Some(GoogleDistanceMatrixClient::new(params)?)
            }
            TravelMatrixProvider::AsTheCrowFlies { speed_kmh } => {
                if !speed_kmh.is_finite() || *speed_kmh <= 0.0 {
                    return Err(MatrixError::InvalidProvider(format!(
                        "speed must be positive, got {speed_kmh} km/h"
                    )));
                }
                None
            }
            TravelMatrixProvider::Custom { .. } => None,
        };

        Ok(Self {
            provider,
            google_client,
            cache,
        })
    }

    async fn fetch_from_provider<P>(&self, points: &[P]) -> Result<TravelTimeMatrix, MatrixError>
    where
        for<'a> &'a P: Into<geo_types::Point>,
    {
        match (&self.provider, &self.google_client) {
            (TravelMatrixProvider::GoogleDistanceMatrix { mode }, Some(client)) => {
                client.fetch_matrix(points, *mode).await
            }
            (TravelMatrixProvider::GoogleDistanceMatrix { .. }, None) => {
                Err(MatrixError::MissingApiKey("Google"))
            }
            (TravelMatrixProvider::AsTheCrowFlies { speed_kmh }, _) => {
                Ok(as_the_crow_flies_matrix(points, *speed_kmh))
            }
            (TravelMatrixProvider::Custom { matrix }, _) => Ok(matrix.clone()),
        }
    }
}

impl<C> TimeMatrixProvider for TravelMatrixClient<C>
where
    C: MatricesCache,
{
    async fn fetch_matrix<P>(&self, points: &[P]) -> Result<TravelTimeMatrix, MatrixError>
    where
        for<'a> &'a P: Into<geo_types::Point>,
    {
        if points.is_empty() {
            warn!("No locations provided to fetch a time matrix");
            return Ok(TravelTimeMatrix::default());
        }

        match self.cache.get_cached(&self.provider, points) {
            Ok(Some(matrix)) if matrix.num_points() == points.len() => {
                debug!("Using cached time matrix for {} locations", points.len());
                return Ok(matrix);
            }
            Ok(_) => {}
            Err(err) => warn!("Failed to read cached time matrix: {}", err),
        }

        debug!("Fetching time matrix for {} locations", points.len());
        let matrix = self.fetch_from_provider(points).await?;
        ensure_dimension(&matrix, points.len())?;

        if let Err(err) = self.cache.cache(&self.provider, points, &matrix) {
            warn!("Failed to cache time matrix: {}", err);
        }

        Ok(matrix)
    }
}
