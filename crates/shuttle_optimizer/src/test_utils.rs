use std::{cell::Cell, ops::Range};

use shuttle_matrix_providers::{
    error::MatrixError, time_matrix_provider::TimeMatrixProvider, travel_time::TravelTime,
    travel_time_matrix::TravelTimeMatrix,
};

use crate::problem::location::Location;

pub fn create_location(index: usize) -> Location {
    Location::from_lat_lng(
        32.0664 + index as f64 * 0.001,
        34.7777 + index as f64 * 0.001,
    )
}

pub fn create_locations(count: usize) -> Vec<Location> {
    (0..count).map(create_location).collect()
}

pub fn destination() -> Location {
    Location::from_lat_lng(32.0853, 34.7818)
}

/// Same travel time between every pair of distinct points, counts the requests it serves.
pub struct CountingProvider {
    seconds: u64,
    dimension_offset: usize,
    requests: Cell<usize>,
}

impl CountingProvider {
    pub fn constant(seconds: u64) -> Self {
        Self {
            seconds,
            dimension_offset: 0,
            requests: Cell::new(0),
        }
    }

    /// Answers with a matrix that has `offset` more rows than requested.
    pub fn with_dimension_offset(mut self, offset: usize) -> Self {
        self.dimension_offset = offset;
        self
    }

    pub fn requests(&self) -> usize {
        self.requests.get()
    }
}

impl TimeMatrixProvider for CountingProvider {
    async fn fetch_matrix<P>(&self, points: &[P]) -> Result<TravelTimeMatrix, MatrixError>
    where
        for<'a> &'a P: Into<geo::Point>,
    {
        self.requests.set(self.requests.get() + 1);

        Ok(TravelTimeMatrix::from_fn(
            points.len() + self.dimension_offset,
            |from, to| {
                if from == to {
                    TravelTime::ZERO
                } else {
                    TravelTime::Reachable(self.seconds)
                }
            },
        ))
    }
}

/// Points in the same group are `intra` seconds apart, everything else is `inter` apart.
pub struct GroupedMatrixProvider {
    groups: Vec<Vec<geo::Point>>,
    intra: u64,
    inter: u64,
}

impl GroupedMatrixProvider {
    pub fn from_ranges(
        locations: &[Location],
        ranges: Vec<Range<usize>>,
        intra: u64,
        inter: u64,
    ) -> Self {
        Self {
            groups: ranges
                .into_iter()
                .map(|range| locations[range].iter().map(geo::Point::from).collect())
                .collect(),
            intra,
            inter,
        }
    }

    fn group_of(&self, point: &geo::Point) -> Option<usize> {
        self.groups.iter().position(|group| group.contains(point))
    }
}

impl TimeMatrixProvider for GroupedMatrixProvider {
    async fn fetch_matrix<P>(&self, points: &[P]) -> Result<TravelTimeMatrix, MatrixError>
    where
        for<'a> &'a P: Into<geo::Point>,
    {
        let groups: Vec<Option<usize>> = points
            .iter()
            .map(|p| {
                let point: geo::Point = p.into();
                self.group_of(&point)
            })
            .collect();

        Ok(TravelTimeMatrix::from_fn(points.len(), |from, to| {
            if from == to {
                TravelTime::ZERO
            } else if groups[from].is_some() && groups[from] == groups[to] {
                TravelTime::Reachable(self.intra)
            } else {
                TravelTime::Reachable(self.inter)
            }
        }))
    }
}

/// Always answers with the same matrix, whatever the points.
pub struct FixedMatrixProvider {
    matrix: TravelTimeMatrix,
}

impl FixedMatrixProvider {
    pub fn new(matrix: TravelTimeMatrix) -> Self {
        Self { matrix }
    }

    pub fn from_seconds(rows: Vec<Vec<u64>>) -> Self {
        Self::new(TravelTimeMatrix::from_seconds(rows).unwrap())
    }
}

impl TimeMatrixProvider for FixedMatrixProvider {
    async fn fetch_matrix<P>(&self, _points: &[P]) -> Result<TravelTimeMatrix, MatrixError>
    where
        for<'a> &'a P: Into<geo::Point>,
    {
        Ok(self.matrix.clone())
    }
}

pub struct FailingProvider;

impl TimeMatrixProvider for FailingProvider {
    async fn fetch_matrix<P>(&self, _points: &[P]) -> Result<TravelTimeMatrix, MatrixError>
    where
        for<'a> &'a P: Into<geo::Point>,
    {
        Err(MatrixError::Http {
            status: 500,
            message: "Internal Server Error".to_string(),
        })
    }
}
