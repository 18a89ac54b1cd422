//! Fixtures shared by unit and behaviour tests.
//!
//! Available under `cfg(test)` and the `test-support` feature.

use geo::Coord;

use crate::{ExploredZone, PointOfInterest};

/// Construct a POI named `poi-{id}`.
#[must_use]
pub fn poi(id: u64, latitude: f64, longitude: f64, category: &str) -> PointOfInterest {
    PointOfInterest::at(id, format!("poi-{id}"), latitude, longitude, category)
}

/// The three landmarks the app seeds a fresh Madrid install with.
#[must_use]
pub fn madrid_landmarks() -> Vec<PointOfInterest> {
    vec![
        PointOfInterest::at(1, "Puerta del Sol", 40.416729, -3.703339, "Turismo"),
        PointOfInterest::at(2, "Palacio Real", 40.418047, -3.714187, "Monumentos"),
        PointOfInterest::at(3, "Museo del Prado", 40.413848, -3.692459, "Museos"),
    ]
}

/// The three example zones seeded alongside [`madrid_landmarks`].
#[must_use]
pub fn madrid_zones() -> Vec<ExploredZone> {
    vec![
        ExploredZone::square(1, "Centro de Madrid", Coord { x: -3.703790, y: 40.416775 }, 0.01),
        ExploredZone::square(2, "Plaza Mayor", Coord { x: -3.707021, y: 40.415421 }, 0.005),
        ExploredZone::square(3, "Parque del Retiro", Coord { x: -3.682863, y: 40.414958 }, 0.015),
    ]
}
