use std::{io::Read, path::Path};

use tracing::{debug, instrument};

use crate::{error::ValidationError, problem::location::Location};

pub const PICKUP_LAT_COLUMN: &str = "pickup_lat";
pub const PICKUP_LNG_COLUMN: &str = "pickup_lng";

/// Reads pickup locations from a CSV file with a header row.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_pickups_file(path: impl AsRef<Path>) -> Result<Vec<Location>, ValidationError> {
    let file = std::fs::File::open(path.as_ref())?;
    read_pickups(file)
}

/// Reads pickup locations from CSV with a header row.
///
/// Only the `pickup_lat` and `pickup_lng` columns are used, in any position.
/// Input without a header or without any record is rejected as empty.
pub fn read_pickups<R: Read>(reader: R) -> Result<Vec<Location>, ValidationError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if headers.iter().all(|header| header.is_empty()) {
        return Err(ValidationError::EmptyInput);
    }

    let column = |name: &'static str| {
        headers
            .iter()
            .position(|header| header == name)
            .ok_or(ValidationError::MissingColumn(name))
    };
    let lat_column = column(PICKUP_LAT_COLUMN)?;
    let lng_column = column(PICKUP_LNG_COLUMN)?;

    let mut pickups = vec![];
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |position| position.line());

        let value = |index: usize, name: &'static str| -> Result<f64, ValidationError> {
            let raw = record.get(index).unwrap_or_default();
            raw.parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| ValidationError::InvalidValue {
                    line,
                    column: name,
                    value: raw.to_string(),
                })
        };

        let location = Location::from_lat_lng(
            value(lat_column, PICKUP_LAT_COLUMN)?,
            value(lng_column, PICKUP_LNG_COLUMN)?,
        );

        if !location.is_valid() {
            return Err(ValidationError::InvalidValue {
                line,
                column: if (-90.0..=90.0).contains(&location.lat()) {
                    PICKUP_LNG_COLUMN
                } else {
                    PICKUP_LAT_COLUMN
                },
                value: location.to_string(),
            });
        }

        pickups.push(location);
    }

    if pickups.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    debug!("Read {} pickups", pickups.len());

    Ok(pickups)
}
