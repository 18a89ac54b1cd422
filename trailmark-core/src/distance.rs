//! Great-circle distances between geographic points.
//!
//! Distances use the haversine formula on a sphere of radius
//! [`EARTH_RADIUS_METRES`]. Coordinates are WGS84 degrees with
//! `x = longitude` and `y = latitude`.

use geo::{Coord, Distance, HaversineMeasure, Point};

use crate::PointOfInterest;

/// Mean Earth radius used by every distance calculation, in metres.
pub const EARTH_RADIUS_METRES: f64 = 6_371_000.0;

/// Pairwise distances in metres, `matrix[i][j]` from point `i` to point `j`.
pub type DistanceMatrix = Vec<Vec<f64>>;

/// Great-circle distance between two coordinates in metres.
///
/// Identical coordinates yield exactly `0.0`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use trailmark_core::distance::haversine_distance;
///
/// let d = haversine_distance(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 0.0 });
/// assert!((d - 111_195.0).abs() < 1.0);
/// ```
#[must_use]
pub fn haversine_distance(from: Coord<f64>, to: Coord<f64>) -> f64 {
    HaversineMeasure::new(EARTH_RADIUS_METRES).distance(Point::from(from), Point::from(to))
}

/// Great-circle distance between two points of interest in metres.
#[must_use]
pub fn distance_between(from: &PointOfInterest, to: &PointOfInterest) -> f64 {
    haversine_distance(from.location, to.location)
}

/// Build the square matrix of pairwise distances for `points`.
///
/// The diagonal is zero and the matrix is symmetric. An empty slice yields an
/// empty matrix.
///
/// # Examples
/// ```
/// use trailmark_core::PointOfInterest;
/// use trailmark_core::distance::distance_matrix;
///
/// let points = [
///     PointOfInterest::at(1, "a", 0.0, 0.0, "x"),
///     PointOfInterest::at(2, "b", 0.0, 1.0, "x"),
/// ];
/// let matrix = distance_matrix(&points);
/// assert_eq!(matrix.len(), 2);
/// assert_eq!(matrix[0][0], 0.0);
/// assert_eq!(matrix[0][1], matrix[1][0]);
/// ```
#[must_use]
pub fn distance_matrix(points: &[PointOfInterest]) -> DistanceMatrix {
    points
        .iter()
        .map(|from| points.iter().map(|to| distance_between(from, to)).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Coord { x: 0.0, y: 0.0 })]
    #[case(Coord { x: -3.703339, y: 40.416729 })]
    #[case(Coord { x: 179.9, y: -89.5 })]
    fn identical_points_are_zero_apart(#[case] point: Coord<f64>) {
        assert_eq!(haversine_distance(point, point), 0.0);
    }

    #[rstest]
    fn one_degree_of_longitude_at_equator() {
        let d = haversine_distance(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 0.0 });
        assert!((d - 111_195.0).abs() < 1.0, "unexpected distance {d}");
    }

    #[rstest]
    fn distance_is_symmetric() {
        let sol = Coord { x: -3.703339, y: 40.416729 };
        let prado = Coord { x: -3.692459, y: 40.413848 };
        let there = haversine_distance(sol, prado);
        let back = haversine_distance(prado, sol);
        assert!((there - back).abs() < 1e-9);
        assert!(there > 900.0 && there < 1_000.0, "unexpected distance {there}");
    }

    #[rstest]
    #[case(Coord { x: 179.5, y: 0.0 }, Coord { x: -179.5, y: 0.0 })]
    #[case(Coord { x: 0.0, y: 89.9 }, Coord { x: 180.0, y: 89.9 })]
    fn short_way_round_near_antimeridian_and_poles(
        #[case] from: Coord<f64>,
        #[case] to: Coord<f64>,
    ) {
        let d = haversine_distance(from, to);
        assert!(d > 0.0 && d < 112_000.0, "unexpected distance {d}");
    }

    #[rstest]
    fn uses_fixed_earth_radius() {
        let d = haversine_distance(Coord { x: 0.0, y: 0.0 }, Coord { x: 180.0, y: 0.0 });
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_METRES;
        assert!((d - half_circumference).abs() < 1e-3, "unexpected distance {d}");
    }

    #[rstest]
    fn matrix_of_nothing_is_empty() {
        assert!(distance_matrix(&[]).is_empty());
    }
}
