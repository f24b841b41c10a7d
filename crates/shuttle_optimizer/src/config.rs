use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};
use shuttle_matrix_providers::{
    google_api::GoogleMatrixClientParams, travel_matrix_provider::TravelMatrixProvider,
};

use crate::{
    error::ValidationError,
    optimizer::OptimizeParams,
    problem::{location::Location, route_limits::RouteLimits, vehicle_type::VehicleType},
};

pub const GOOGLE_API_KEY_ENV_VAR: &str = "GOOGLE_API_KEY";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ShuttleConfig {
    pub destination_location: Location,
    pub constraints: ConstraintsConfig,
    pub car_types: Vec<VehicleType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_api_key: Option<String>,
    #[serde(default)]
    pub matrix_provider: TravelMatrixProvider,
}

/// Both values are in seconds.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintsConfig {
    pub max_time_between_stops_many2one: i64,
    pub max_total_route_time: i64,
}

/// Reads `GOOGLE_API_KEY` from the process environment, ignoring empty values.
pub fn api_key_from_env() -> Option<String> {
    std::env::var(GOOGLE_API_KEY_ENV_VAR)
        .ok()
        .filter(|key| !key.trim().is_empty())
}

impl ShuttleConfig {
    /// Parses JSON for `.json` files and YAML for anything else.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ValidationError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ValidationError> {
        let config: Self =
            serde_yaml::from_str(content).map_err(|err| ValidationError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ValidationError> {
        let config: Self =
            serde_json::from_str(content).map_err(|err| ValidationError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if !self.destination_location.is_valid() {
            return Err(ValidationError::Config(format!(
                "destination_location {} is not a valid coordinate",
                self.destination_location
            )));
        }

        let constraints = &self.constraints;
        if constraints.max_time_between_stops_many2one < 0 || constraints.max_total_route_time < 0
        {
            return Err(ValidationError::Config(String::from(
                "constraints must not be negative",
            )));
        }

        Ok(())
    }

    /// The environment value wins over the one in the config. Blank keys count as absent.
    pub fn resolve_api_key(&self, env_value: Option<String>) -> Option<String> {
        env_value
            .into_iter()
            .chain(self.google_api_key.clone())
            .find(|key| !key.trim().is_empty())
    }

    /// Parameters for the Google client, `None` when the provider does not call Google.
    pub fn matrix_client_params(
        &self,
        env_value: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Option<GoogleMatrixClientParams>, ValidationError> {
        if !self.matrix_provider.requires_api_key() {
            return Ok(None);
        }

        let api_key =
            self.resolve_api_key(env_value)
                .ok_or(ValidationError::MissingApiKey {
                    env_var: GOOGLE_API_KEY_ENV_VAR,
                })?;

        let mut params = GoogleMatrixClientParams::new(api_key);
        if let Some(timeout) = timeout {
            params = params.with_timeout(timeout);
        }

        Ok(Some(params))
    }

    pub fn optimize_params(&self) -> OptimizeParams {
        OptimizeParams {
            destination: self.destination_location,
            limits: RouteLimits::from_secs(
                self.constraints.max_time_between_stops_many2one,
                self.constraints.max_total_route_time,
            ),
            vehicle_types: self.car_types.clone(),
        }
    }
}
