use std::{fmt::Display, ops::Range, time::Duration};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::MatrixError, travel_time::TravelTime, travel_time_matrix::TravelTimeMatrix};

#[derive(Deserialize, Serialize, Debug, Copy, Clone, Hash, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TravelMode::Driving => "driving",
                TravelMode::Walking => "walking",
                TravelMode::Bicycling => "bicycling",
                TravelMode::Transit => "transit",
            }
        )
    }
}

#[derive(Deserialize)]
struct DistanceMatrixResponse {
    status: Option<String>,
    error_message: Option<String>,
    rows: Option<Vec<DistanceMatrixRow>>,
}

#[derive(Deserialize)]
struct DistanceMatrixRow {
    elements: Vec<DistanceMatrixElement>,
}

#[derive(Deserialize)]
struct DistanceMatrixElement {
    status: String,
    duration: Option<DistanceMatrixValue>,
    duration_in_traffic: Option<DistanceMatrixValue>,
}

#[derive(Deserialize)]
struct DistanceMatrixValue {
    /// Seconds for durations
    value: u64,
}

impl DistanceMatrixElement {
    fn travel_time(&self) -> Result<TravelTime, MatrixError> {
        if self.status != "OK" {
            return Ok(TravelTime::Unreachable);
        }

        self.duration_in_traffic
            .as_ref()
            .or(self.duration.as_ref())
            .map(|duration| TravelTime::Reachable(duration.value))
            .ok_or_else(|| MatrixError::MalformedResponse("element without duration".to_string()))
    }
}

impl DistanceMatrixResponse {
    fn into_travel_times(
        self,
        num_origins: usize,
        num_destinations: usize,
    ) -> Result<Vec<Vec<TravelTime>>, MatrixError> {
        if let Some(status) = self.status
            && status != "OK"
        {
            return Err(MatrixError::Api {
                status,
                message: self.error_message.unwrap_or_default(),
            });
        }

        let rows = self
            .rows
            .ok_or_else(|| MatrixError::MalformedResponse("missing rows".to_string()))?;

        if rows.len() != num_origins {
            return Err(MatrixError::DimensionMismatch {
                expected: num_origins,
                actual: rows.len(),
            });
        }

        rows.into_iter()
            .map(|row| {
                if row.elements.len() != num_destinations {
                    return Err(MatrixError::MalformedResponse(format!(
                        "row has {} elements, expected {}",
                        row.elements.len(),
                        num_destinations
                    )));
                }

                row.elements
                    .iter()
                    .map(DistanceMatrixElement::travel_time)
                    .collect()
            })
            .collect()
    }
}

/// Block of the full matrix fetched by a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixTile {
    pub origins: Range<usize>,
    pub destinations: Range<usize>,
}

/// Splits an all-to-all matrix over `num_points` into tiles that respect the
/// per-request limits on the number of origins, destinations and elements.
pub fn request_tiles(
    num_points: usize,
    max_points_per_request: usize,
    max_elements_per_request: usize,
) -> Vec<MatrixTile> {
    if num_points == 0 {
        return vec![];
    }

    let destinations_per_tile = num_points.min(max_points_per_request).max(1);
    let origins_per_tile = (max_elements_per_request / destinations_per_tile)
        .clamp(1, max_points_per_request.max(1));

    let mut tiles = vec![];
    for origins_start in (0..num_points).step_by(origins_per_tile) {
        let origins = origins_start..(origins_start + origins_per_tile).min(num_points);
        for destinations_start in (0..num_points).step_by(destinations_per_tile) {
            let destinations = destinations_start
                ..(destinations_start + destinations_per_tile).min(num_points);
            tiles.push(MatrixTile {
                origins: origins.clone(),
                destinations,
            });
        }
    }

    tiles
}

pub const GOOGLE_DISTANCE_MATRIX_API_URL: &str =
    "https://maps.googleapis.com/maps/api/distancematrix/json";
pub const GOOGLE_MAX_POINTS_PER_REQUEST: usize = 25;
pub const GOOGLE_MAX_ELEMENTS_PER_REQUEST: usize = 100;

pub struct GoogleMatrixClientParams {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub max_points_per_request: usize,
    pub max_elements_per_request: usize,
}

impl GoogleMatrixClientParams {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: GOOGLE_DISTANCE_MATRIX_API_URL.to_string(),
            timeout: None,
            max_points_per_request: GOOGLE_MAX_POINTS_PER_REQUEST,
            max_elements_per_request: GOOGLE_MAX_ELEMENTS_PER_REQUEST,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

pub struct GoogleDistanceMatrixClient {
    params: GoogleMatrixClientParams,
    client: reqwest::Client,
}

fn format_location(point: &geo_types::Point) -> String {
    format!("{},{}", point.y(), point.x())
}

impl GoogleDistanceMatrixClient {
    pub fn new(params: GoogleMatrixClientParams) -> Result<Self, MatrixError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = params.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            params,
            client: builder.build()?,
        })
    }

    pub async fn fetch_matrix<P>(
        &self,
        points: &[P],
        mode: TravelMode,
    ) -> Result<TravelTimeMatrix, MatrixError>
    where
        for<'a> &'a P: Into<geo_types::Point>,
    {
        let locations: Vec<String> = points
            .iter()
            .map(|p| {
                let point: geo_types::Point = p.into();
                format_location(&point)
            })
            .collect();

        let num_points = locations.len();
        let mut times = vec![vec![TravelTime::Unreachable; num_points]; num_points];

        let tiles = request_tiles(
            num_points,
            self.params.max_points_per_request,
            self.params.max_elements_per_request,
        );

        for (index, tile) in tiles.iter().enumerate() {
            debug!(
                "GoogleDistanceMatrix: requesting tile {}/{} ({}x{})",
                index + 1,
                tiles.len(),
                tile.origins.len(),
                tile.destinations.len()
            );

            let tile_times = self
                .matrix_request(
                    &locations[tile.origins.clone()],
                    &locations[tile.destinations.clone()],
                    mode,
                )
                .await?;

            for (row, origin) in tile_times.into_iter().zip(tile.origins.clone()) {
                for (time, destination) in row.into_iter().zip(tile.destinations.clone()) {
                    times[origin][destination] = time;
                }
            }
        }

        TravelTimeMatrix::new(times)
    }

    async fn matrix_request(
        &self,
        origins: &[String],
        destinations: &[String],
        mode: TravelMode,
    ) -> Result<Vec<Vec<TravelTime>>, MatrixError> {
        let response = self
            .client
            .get(&self.params.base_url)
            .query(&[
                ("origins", origins.join("|")),
                ("destinations", destinations.join("|")),
                ("key", self.params.api_key.clone()),
                ("mode", mode.to_string()),
                ("departure_time", "now".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(MatrixError::Http { status, message });
        }

        let body = response.text().await?;
        let matrix_response: DistanceMatrixResponse = serde_json::from_str(&body)?;

        matrix_response.into_travel_times(origins.len(), destinations.len())
    }
}
