//! Core domain types and algorithms for Trailmark.
//!
//! Trailmark tracks the places a user wants to visit and the zones they have
//! explored. This crate holds the computational pieces: great-circle
//! distances, greedy route planning, travel-time and traffic estimation,
//! the in-memory POI catalogue and the exploration tracker.
//!
//! Everything here is synchronous and free of I/O.
//!
//! # Examples
//! ```
//! use trailmark_core::{
//!     NearestNeighbourPlanner, PointOfInterest, RoutePlanner, RouteRequest, TransportMode,
//! };
//!
//! let landmarks = vec![
//!     PointOfInterest::at(1, "Puerta del Sol", 40.416729, -3.703339, "Turismo"),
//!     PointOfInterest::at(2, "Palacio Real", 40.418047, -3.714187, "Monumentos"),
//!     PointOfInterest::at(3, "Museo del Prado", 40.413848, -3.692459, "Museos"),
//! ];
//! let request = RouteRequest::new(landmarks, TransportMode::Walking);
//! let route = NearestNeighbourPlanner.plan(&request);
//! assert_eq!(route.points.len(), 3);
//! assert!(route.total_minutes > 0.0);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod distance;
pub mod map_link;
pub mod planner;
mod poi;
pub mod route;
pub mod store;
pub mod traffic;
pub mod transport;
pub mod zone;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use distance::{
    DistanceMatrix, EARTH_RADIUS_METRES, distance_between, distance_matrix, haversine_distance,
};
pub use map_link::{MapProvider, MapProviderParseError};
pub use planner::{NearestNeighbourPlanner, RoutePlanner, RouteRequest, RouteRequestError};
pub use poi::PointOfInterest;
pub use route::{Route, RouteSegment};
pub use store::{MemoryPoiStore, PoiStore};
pub use traffic::{SegmentTraffic, TrafficModel, TrafficStatus};
pub use transport::{TransportMode, TransportModeParseError};
pub use zone::{ExplorationTracker, ExploredZone};
