use std::future::Future;

use crate::{error::MatrixError, travel_time_matrix::TravelTimeMatrix};

/// Source of travel times between a list of points.
///
/// Implementations must return a square matrix with one row per point, in
/// the order the points were given. Pairs without a route are reported as
/// [`crate::travel_time::TravelTime::Unreachable`] rather than as an error.
pub trait TimeMatrixProvider {
    fn fetch_matrix<P>(
        &self,
        points: &[P],
    ) -> impl Future<Output = Result<TravelTimeMatrix, MatrixError>>
    where
        for<'a> &'a P: Into<geo_types::Point>;
}

impl<T> TimeMatrixProvider for &T
where
    T: TimeMatrixProvider,
{
    fn fetch_matrix<P>(
        &self,
        points: &[P],
    ) -> impl Future<Output = Result<TravelTimeMatrix, MatrixError>>
    where
        for<'a> &'a P: Into<geo_types::Point>,
    {
        (**self).fetch_matrix(points)
    }
}

/// Checks that a matrix returned for `num_points` points has the right dimension.
pub fn ensure_dimension(
    matrix: &TravelTimeMatrix,
    num_points: usize,
) -> Result<(), MatrixError> {
    if matrix.num_points() != num_points {
        return Err(MatrixError::DimensionMismatch {
            expected: num_points,
            actual: matrix.num_points(),
        });
    }

    Ok(())
}
