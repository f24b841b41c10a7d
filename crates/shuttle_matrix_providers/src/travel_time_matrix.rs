use serde::{Deserialize, Serialize};

use crate::{error::MatrixError, travel_time::TravelTime};

/// Square matrix of travel times between points, stored as a flat vector.
/// The cell for a pair of points is at `from * num_points + to`.
/// The matrix may be asymmetric.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
#[serde(
    try_from = "Vec<Vec<TravelTime>>",
    into = "Vec<Vec<TravelTime>>"
)]
pub struct TravelTimeMatrix {
    times: Vec<TravelTime>,
    num_points: usize,
}

impl TravelTimeMatrix {
    pub fn new(rows: Vec<Vec<TravelTime>>) -> Result<Self, MatrixError> {
        let num_points = rows.len();

        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != num_points)
        {
            return Err(MatrixError::NotSquare {
                row,
                expected: num_points,
                actual: cells.len(),
            });
        }

        Ok(TravelTimeMatrix {
            times: rows.into_iter().flatten().collect(),
            num_points,
        })
    }

    pub fn from_seconds(rows: Vec<Vec<u64>>) -> Result<Self, MatrixError> {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(TravelTime::Reachable).collect())
                .collect(),
        )
    }

    pub fn from_fn<F>(num_points: usize, mut time: F) -> Self
    where
        F: FnMut(usize, usize) -> TravelTime,
    {
        let mut times = Vec::with_capacity(num_points * num_points);
        for from in 0..num_points {
            for to in 0..num_points {
                times.push(time(from, to));
            }
        }

        TravelTimeMatrix { times, num_points }
    }

    #[inline(always)]
    fn index(&self, from: usize, to: usize) -> usize {
        from * self.num_points + to
    }

    #[inline(always)]
    pub fn travel_time(&self, from: usize, to: usize) -> TravelTime {
        self.times[self.index(from, to)]
    }

    /// Travel time in seconds, see [`TravelTime::seconds`].
    #[inline(always)]
    pub fn seconds(&self, from: usize, to: usize) -> u64 {
        self.travel_time(from, to).seconds()
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn is_empty(&self) -> bool {
        self.num_points == 0
    }

    pub fn rows(&self) -> impl Iterator<Item = &[TravelTime]> {
        // chunks_exact panics on 0
        self.times.chunks_exact(self.num_points.max(1))
    }
}

impl TryFrom<Vec<Vec<TravelTime>>> for TravelTimeMatrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<TravelTime>>) -> Result<Self, Self::Error> {
        TravelTimeMatrix::new(rows)
    }
}

impl From<TravelTimeMatrix> for Vec<Vec<TravelTime>> {
    fn from(matrix: TravelTimeMatrix) -> Self {
        matrix.rows().map(|row| row.to_vec()).collect()
    }
}
