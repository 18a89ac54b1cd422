//! Facade crate for the Trailmark route planner.
//!
//! This crate re-exports the core domain types: points of interest, route
//! planning, travel-time and traffic estimation, the POI catalogue,
//! explored zones and map links.

#![forbid(unsafe_code)]

pub use trailmark_core::{
    DistanceMatrix, EARTH_RADIUS_METRES, ExplorationTracker, ExploredZone, MapProvider,
    MapProviderParseError, MemoryPoiStore, NearestNeighbourPlanner, PoiStore, PointOfInterest,
    Route, RoutePlanner, RouteRequest, RouteRequestError, RouteSegment, SegmentTraffic,
    TrafficModel, TrafficStatus, TransportMode, TransportModeParseError, distance_between,
    distance_matrix, haversine_distance,
};

#[cfg(feature = "test-support")]
pub use trailmark_core::test_support;
