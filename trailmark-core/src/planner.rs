//! Route planning over a set of points of interest.
//!
//! [`RoutePlanner`] is the seam between callers and ordering strategies.
//! [`NearestNeighbourPlanner`] is the default: a greedy heuristic that always
//! walks to the closest point not yet visited. It gives no optimality
//! guarantee and never backtracks.

use geo::Coord;
use thiserror::Error;

use crate::distance::distance_matrix;
use crate::{PointOfInterest, Route, TransportMode};

/// Parameters for a planning request.
///
/// # Examples
/// ```
/// use trailmark_core::{PointOfInterest, RouteRequest, TransportMode};
///
/// let request = RouteRequest::new(
///     vec![PointOfInterest::at(1, "Sol", 40.416729, -3.703339, "Turismo")],
///     TransportMode::Walking,
/// );
/// assert!(request.start.is_none());
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRequest {
    /// Points to visit, in any order.
    pub points: Vec<PointOfInterest>,
    /// Where the route begins; defaults to the first listed point.
    #[cfg_attr(feature = "serde", serde(default))]
    pub start: Option<PointOfInterest>,
    /// Mode used to estimate travel times.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: TransportMode,
}

/// Reasons a [`RouteRequest`] is rejected by [`RouteRequest::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteRequestError {
    /// A coordinate was NaN or infinite.
    #[error("point {id} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Identifier of the offending point.
        id: u64,
    },
    /// Latitude fell outside `[-90, 90]`.
    #[error("point {id} has latitude {latitude} outside [-90, 90]")]
    LatitudeOutOfRange {
        /// Identifier of the offending point.
        id: u64,
        /// The rejected latitude.
        latitude: f64,
    },
    /// Longitude fell outside `[-180, 180]`.
    #[error("point {id} has longitude {longitude} outside [-180, 180]")]
    LongitudeOutOfRange {
        /// Identifier of the offending point.
        id: u64,
        /// The rejected longitude.
        longitude: f64,
    },
}

impl RouteRequest {
    /// Construct a request without an explicit start point.
    #[must_use]
    pub const fn new(points: Vec<PointOfInterest>, mode: TransportMode) -> Self {
        Self {
            points,
            start: None,
            mode,
        }
    }

    /// Begin the route at `start` rather than the first listed point.
    #[must_use]
    pub fn with_start(mut self, start: PointOfInterest) -> Self {
        self.start = Some(start);
        self
    }

    /// Check every coordinate, including the start point, is a valid WGS84
    /// position.
    ///
    /// # Errors
    /// Returns the first [`RouteRequestError`] encountered in list order,
    /// checking the start point first.
    pub fn validate(&self) -> Result<(), RouteRequestError> {
        self.start
            .iter()
            .chain(self.points.iter())
            .try_for_each(validate_point)
    }
}

fn validate_point(poi: &PointOfInterest) -> Result<(), RouteRequestError> {
    let Coord { x: longitude, y: latitude } = poi.location;
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(RouteRequestError::NonFiniteCoordinate { id: poi.id });
    }
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(RouteRequestError::LatitudeOutOfRange {
            id: poi.id,
            latitude,
        });
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(RouteRequestError::LongitudeOutOfRange {
            id: poi.id,
            longitude,
        });
    }
    Ok(())
}

/// Order a request's points into a route.
///
/// Planning cannot fail: an empty request yields [`Route::empty`].
/// Planners must be `Send + Sync` so callers can share them across threads.
pub trait RoutePlanner: Send + Sync {
    /// Produce a route for `request`.
    fn plan(&self, request: &RouteRequest) -> Route;
}

/// Greedy nearest-neighbour planner.
///
/// Starting from the explicit start point (or the first listed point), it
/// repeatedly moves to the closest unvisited point. Ties go to the point that
/// appears first in the request.
///
/// # Examples
/// ```
/// use trailmark_core::{NearestNeighbourPlanner, PointOfInterest, RoutePlanner, RouteRequest, TransportMode};
///
/// let request = RouteRequest::new(
///     vec![
///         PointOfInterest::at(1, "start", 0.0, 0.0, "x"),
///         PointOfInterest::at(2, "far", 0.0, 2.0, "x"),
///         PointOfInterest::at(3, "near", 0.0, 1.0, "x"),
///     ],
///     TransportMode::Walking,
/// );
/// let route = NearestNeighbourPlanner.plan(&request);
/// let ids: Vec<_> = route.points.iter().map(|p| p.id).collect();
/// assert_eq!(ids, vec![1, 3, 2]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestNeighbourPlanner;

impl RoutePlanner for NearestNeighbourPlanner {
    #[expect(
        clippy::float_arithmetic,
        reason = "route totals accumulate floating-point distances and times"
    )]
    fn plan(&self, request: &RouteRequest) -> Route {
        let mode = request.mode;
        let Some(first) = request.points.first() else {
            return Route::empty(mode);
        };

        // Node 0 is always the start; listed points follow from index 1.
        let start = request.start.as_ref().unwrap_or(first);
        let mut nodes = Vec::with_capacity(request.points.len() + 1);
        nodes.push(start.clone());
        nodes.extend(request.points.iter().cloned());
        let matrix = distance_matrix(&nodes);

        let mut unvisited: Vec<usize> = (1..nodes.len()).collect();
        if let Some(pos) = unvisited
            .iter()
            .position(|&idx| nodes.get(idx).is_some_and(|poi| poi == start))
        {
            unvisited.remove(pos);
        }

        let mut order = vec![0_usize];
        let mut total_distance_metres = 0.0;
        let mut total_minutes = 0.0;
        let mut current = 0_usize;

        while let Some((pos, next, distance)) = nearest(&matrix, current, &unvisited) {
            unvisited.remove(pos);
            order.push(next);
            total_distance_metres += distance;
            total_minutes += mode.travel_minutes(distance);
            current = next;
        }

        log::debug!(
            "planned {} stops covering {total_distance_metres:.0} m by {mode}",
            order.len()
        );

        let points = order
            .into_iter()
            .filter_map(|idx| nodes.get(idx).cloned())
            .collect();
        Route::new(points, total_distance_metres, total_minutes, mode)
    }
}

/// Find the unvisited node closest to `current`.
///
/// Returns its position in `unvisited`, its node index and the distance.
/// Strict comparison keeps the first minimum on ties.
fn nearest(
    matrix: &[Vec<f64>],
    current: usize,
    unvisited: &[usize],
) -> Option<(usize, usize, f64)> {
    let row = matrix.get(current)?;
    unvisited
        .iter()
        .enumerate()
        .filter_map(|(pos, &idx)| row.get(idx).map(|&distance| (pos, idx, distance)))
        .fold(None, |best, candidate| match best {
            Some((_, _, best_distance)) if best_distance <= candidate.2 => best,
            _ => Some(candidate),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use rstest::{fixture, rstest};

    fn poi(id: u64, latitude: f64, longitude: f64) -> PointOfInterest {
        test_support::poi(id, latitude, longitude, "test")
    }

    fn ids(route: &Route) -> Vec<u64> {
        route.points.iter().map(|p| p.id).collect()
    }

    #[fixture]
    fn line() -> Vec<PointOfInterest> {
        vec![poi(1, 0.0, 0.0), poi(2, 0.0, 3.0), poi(3, 0.0, 1.0), poi(4, 0.0, 2.0)]
    }

    #[rstest]
    fn empty_request_yields_empty_route() {
        let route = NearestNeighbourPlanner.plan(&RouteRequest::new(Vec::new(), TransportMode::Driving));
        assert_eq!(route, Route::empty(TransportMode::Driving));
    }

    #[rstest]
    fn empty_request_ignores_start() {
        let request =
            RouteRequest::new(Vec::new(), TransportMode::Walking).with_start(poi(9, 1.0, 1.0));
        assert!(NearestNeighbourPlanner.plan(&request).is_empty());
    }

    #[rstest]
    fn starts_from_first_point_when_no_start_given(line: Vec<PointOfInterest>) {
        let route = NearestNeighbourPlanner.plan(&RouteRequest::new(line, TransportMode::Walking));
        assert_eq!(ids(&route), vec![1, 3, 4, 2]);
    }

    #[rstest]
    fn explicit_start_is_prepended(line: Vec<PointOfInterest>) {
        let request = RouteRequest::new(line, TransportMode::Walking).with_start(poi(0, 0.0, 2.6));
        let route = NearestNeighbourPlanner.plan(&request);
        assert_eq!(ids(&route), vec![0, 2, 4, 3, 1]);
    }

    #[rstest]
    fn listed_start_is_not_visited_twice(line: Vec<PointOfInterest>) {
        let start = poi(4, 0.0, 2.0);
        let request = RouteRequest::new(line, TransportMode::Walking).with_start(start);
        let route = NearestNeighbourPlanner.plan(&request);
        assert_eq!(route.points.len(), 4);
        assert_eq!(route.points.first().map(|p| p.id), Some(4));
    }

    #[rstest]
    fn ties_go_to_first_listed_point() {
        let points = vec![poi(1, 0.0, 0.0), poi(2, 0.0, 1.0), poi(3, 0.0, -1.0)];
        let route = NearestNeighbourPlanner.plan(&RouteRequest::new(points, TransportMode::Walking));
        assert_eq!(ids(&route), vec![1, 2, 3]);
    }

    #[rstest]
    fn totals_match_segment_sums(line: Vec<PointOfInterest>) {
        let route = NearestNeighbourPlanner.plan(&RouteRequest::new(line, TransportMode::Cycling));
        let segments = route.segments();
        let distance: f64 = segments.iter().map(|s| s.distance_metres).sum();
        let minutes: f64 = segments.iter().map(|s| s.minutes).sum();
        assert!((route.total_distance_metres - distance).abs() < 1e-6);
        assert!((route.total_minutes - minutes).abs() < 1e-6);
        assert_eq!(route.mode, TransportMode::Cycling);
    }

    #[rstest]
    #[case(poi(5, 91.0, 0.0))]
    #[case(poi(5, 0.0, -180.5))]
    #[case(poi(5, f64::NAN, 0.0))]
    fn validation_rejects_bad_coordinates(#[case] bad: PointOfInterest) {
        let request = RouteRequest::new(vec![poi(1, 0.0, 0.0), bad], TransportMode::Walking);
        let err = request.validate().expect_err("invalid coordinate");
        match err {
            RouteRequestError::NonFiniteCoordinate { id }
            | RouteRequestError::LatitudeOutOfRange { id, .. }
            | RouteRequestError::LongitudeOutOfRange { id, .. } => assert_eq!(id, 5),
        }
    }

    #[rstest]
    fn validation_checks_start_point() {
        let request = RouteRequest::new(vec![poi(1, 0.0, 0.0)], TransportMode::Walking)
            .with_start(poi(0, -95.0, 0.0));
        assert!(matches!(
            request.validate(),
            Err(RouteRequestError::LatitudeOutOfRange { id: 0, .. })
        ));
    }
}
