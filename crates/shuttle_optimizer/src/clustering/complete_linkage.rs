//! Complete-linkage agglomerative clustering over a travel time matrix.
//!
//! Every point starts in its own cluster. At each step the two clusters with
//! the smallest linkage are merged, where the linkage of two clusters is the
//! largest distance between a point of one and a point of the other. Merging
//! stops as soon as the smallest linkage exceeds the threshold, so every pair
//! of points inside a resulting cluster is at most `threshold` apart.
//!
//! Linkage heights never decrease from one merge to the next, which makes
//! stopping early equivalent to cutting the full dendrogram at `threshold`.
//!
//! Ties are broken by original point order: clusters are kept ordered by
//! their smallest member, and among equal linkages the pair whose clusters
//! come first in that order is merged.

use shuttle_matrix_providers::travel_time_matrix::TravelTimeMatrix;

/// Symmetric distances where `d(i, j) = d(j, i)` is the mean of both directions.
/// Unreachable pairs take part with their sentinel seconds.
pub fn symmetrize(matrix: &TravelTimeMatrix) -> Vec<Vec<f64>> {
    let n = matrix.num_points();
    let mut distances = vec![vec![0.0; n]; n];

    for i in 0..n {
        for j in (i + 1)..n {
            let distance = (matrix.seconds(i, j) as f64 + matrix.seconds(j, i) as f64) / 2.0;
            distances[i][j] = distance;
            distances[j][i] = distance;
        }
    }

    distances
}

/// Groups point indices so that no pair in a group is more than `threshold` apart.
///
/// `distances` must be a symmetric square matrix, the diagonal is ignored.
/// Groups are returned ordered by their smallest member, members ascending.
pub fn complete_linkage(distances: &[Vec<f64>], threshold: f64) -> Vec<Vec<usize>> {
    let n = distances.len();
    let mut clusters: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();

    // Linkage between the clusters at positions a and b in `clusters`
    let mut linkage: Vec<Vec<f64>> = distances.to_vec();

    while let Some((a, b, height)) = closest_pair(&linkage)
        && height <= threshold
    {
        // a < b, so the merged cluster keeps the smaller first member at position a
        let merged = clusters.remove(b);
        clusters[a].extend(merged);
        clusters[a].sort_unstable();

        for k in 0..linkage.len() {
            let height = linkage[a][k].max(linkage[b][k]);
            linkage[a][k] = height;
            linkage[k][a] = height;
        }

        linkage.remove(b);
        for row in linkage.iter_mut() {
            row.remove(b);
        }
    }

    clusters
}

/// First pair `(a, b)` with `a < b` of minimal linkage in row-major order.
fn closest_pair(linkage: &[Vec<f64>]) -> Option<(usize, usize, f64)> {
    let mut best: Option<(usize, usize, f64)> = None;

    for a in 0..linkage.len() {
        for b in (a + 1)..linkage.len() {
            let height = linkage[a][b];
            if best.is_none_or(|(_, _, best_height)| height < best_height) {
                best = Some((a, b, height));
            }
        }
    }

    best
}
