//! Routes through points of interest.
//!
//! A [`Route`] is produced fresh by a planner for each request and carries the
//! visiting order along with aggregate distance and time. Its
//! [`RouteSegment`]s are the per-leg view used by the traffic simulation.

use crate::distance::distance_between;
use crate::{PointOfInterest, TransportMode};

/// An ordered path through points of interest.
///
/// # Examples
/// ```
/// use trailmark_core::{Route, TransportMode};
///
/// let route = Route::empty(TransportMode::Cycling);
/// assert!(route.points.is_empty());
/// assert_eq!(route.total_distance_metres, 0.0);
/// assert_eq!(route.total_minutes, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Points visited in order, starting with the start point.
    pub points: Vec<PointOfInterest>,
    /// Sum of the leg distances in metres.
    pub total_distance_metres: f64,
    /// Sum of the leg travel times in minutes.
    pub total_minutes: f64,
    /// Mode the times were estimated for.
    pub mode: TransportMode,
}

impl Route {
    /// Construct a route from its parts.
    #[must_use]
    pub const fn new(
        points: Vec<PointOfInterest>,
        total_distance_metres: f64,
        total_minutes: f64,
        mode: TransportMode,
    ) -> Self {
        Self {
            points,
            total_distance_metres,
            total_minutes,
            mode,
        }
    }

    /// The route with no points, zero distance and zero time.
    #[must_use]
    pub const fn empty(mode: TransportMode) -> Self {
        Self::new(Vec::new(), 0.0, 0.0, mode)
    }

    /// Whether the route visits nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Split the route into legs between consecutive points.
    ///
    /// Distances and times are recomputed from the point coordinates and the
    /// route's mode. Routes with fewer than two points have no segments.
    ///
    /// # Examples
    /// ```
    /// use trailmark_core::{PointOfInterest, Route, TransportMode};
    ///
    /// let route = Route::new(
    ///     vec![
    ///         PointOfInterest::at(1, "a", 0.0, 0.0, "x"),
    ///         PointOfInterest::at(2, "b", 0.0, 0.01, "x"),
    ///     ],
    ///     0.0,
    ///     0.0,
    ///     TransportMode::Walking,
    /// );
    /// let segments = route.segments();
    /// assert_eq!(segments.len(), 1);
    /// assert_eq!(segments[0].end.id, 2);
    /// ```
    #[must_use]
    pub fn segments(&self) -> Vec<RouteSegment> {
        self.points
            .windows(2)
            .filter_map(|pair| match pair {
                [start, end] => Some(RouteSegment::between(start, end, self.mode)),
                _ => None,
            })
            .collect()
    }

    /// `[latitude, longitude]` pairs in visiting order, as map overlays expect.
    #[must_use]
    pub fn coordinates(&self) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .map(|poi| [poi.latitude(), poi.longitude()])
            .collect()
    }

    /// Render [`Route::coordinates`] as a JSON array string.
    ///
    /// # Examples
    /// ```
    /// use trailmark_core::{PointOfInterest, Route, TransportMode};
    ///
    /// let route = Route::new(
    ///     vec![PointOfInterest::at(1, "a", 40.5, -3.5, "x")],
    ///     0.0,
    ///     0.0,
    ///     TransportMode::Walking,
    /// );
    /// assert_eq!(route.to_overlay_json(), "[[40.5,-3.5]]");
    /// assert_eq!(Route::empty(TransportMode::Walking).to_overlay_json(), "[]");
    /// ```
    #[cfg(feature = "serde")]
    #[must_use]
    pub fn to_overlay_json(&self) -> String {
        serde_json::to_string(&self.coordinates()).unwrap_or_else(|err| {
            log::warn!("failed to encode route overlay: {err}");
            String::from("[]")
        })
    }
}

/// A single leg between two consecutive route points.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSegment {
    /// Where the leg begins.
    pub start: PointOfInterest,
    /// Where the leg ends.
    pub end: PointOfInterest,
    /// Leg distance in metres.
    pub distance_metres: f64,
    /// Leg travel time in minutes.
    pub minutes: f64,
}

impl RouteSegment {
    /// Build the leg from `start` to `end` for `mode`.
    #[must_use]
    pub fn between(start: &PointOfInterest, end: &PointOfInterest, mode: TransportMode) -> Self {
        let distance_metres = distance_between(start, end);
        Self {
            start: start.clone(),
            end: end.clone(),
            distance_metres,
            minutes: mode.travel_minutes(distance_metres),
        }
    }

    /// Return a copy of the leg with its time replaced.
    #[must_use]
    pub fn with_minutes(&self, minutes: f64) -> Self {
        Self {
            minutes,
            ..self.clone()
        }
    }
}
