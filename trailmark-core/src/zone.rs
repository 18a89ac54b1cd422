//! Explored zones and discovery progress.
//!
//! A zone is discovered the first time the user's location falls inside it.
//! Containment is tested against the axis-aligned bounds of the zone's
//! boundary ring, boundary included, which is exact for the square zones
//! the app creates and generous for irregular rings.

use chrono::{DateTime, Utc};
use geo::{BoundingRect, Coord, Intersects, LineString};

/// A named area the user can discover.
///
/// With the `serde` feature the boundary encodes as `[[lat, lng], ...]`, the
/// same layout map overlays use for routes.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use trailmark_core::ExploredZone;
///
/// let zone = ExploredZone::square(1, "Plaza Mayor", Coord { x: -3.707021, y: 40.415421 }, 0.005);
/// assert!(zone.contains(Coord { x: -3.707, y: 40.4154 }));
/// assert!(!zone.contains(Coord { x: -3.69, y: 40.4154 }));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExploredZone {
    /// Identifier assigned by the owner.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Boundary ring in WGS84 (`x = longitude`, `y = latitude`).
    #[cfg_attr(feature = "serde", serde(with = "lat_lng_ring"))]
    pub boundary: Vec<Coord<f64>>,
    /// Whether the user has been inside the zone.
    #[cfg_attr(feature = "serde", serde(default))]
    pub discovered: bool,
    /// When the zone was first discovered.
    #[cfg_attr(feature = "serde", serde(default))]
    pub discovered_at: Option<DateTime<Utc>>,
}

impl ExploredZone {
    /// Construct an undiscovered zone.
    pub fn new(id: u64, name: impl Into<String>, boundary: Vec<Coord<f64>>) -> Self {
        Self {
            id,
            name: name.into(),
            boundary,
            discovered: false,
            discovered_at: None,
        }
    }

    /// Construct a square zone centred on `centre` whose sides lie
    /// `half_side_degrees` away from it. The ring is closed.
    #[expect(
        clippy::float_arithmetic,
        reason = "square corners offset the centre by a float distance"
    )]
    pub fn square(
        id: u64,
        name: impl Into<String>,
        centre: Coord<f64>,
        half_side_degrees: f64,
    ) -> Self {
        let Coord { x, y } = centre;
        let d = half_side_degrees;
        let boundary = vec![
            Coord { x: x - d, y: y - d },
            Coord { x: x - d, y: y + d },
            Coord { x: x + d, y: y + d },
            Coord { x: x + d, y: y - d },
            Coord { x: x - d, y: y - d },
        ];
        Self::new(id, name, boundary)
    }

    /// Whether `location` lies within the zone's bounds. An empty boundary
    /// contains nothing.
    #[must_use]
    pub fn contains(&self, location: Coord<f64>) -> bool {
        LineString::from(self.boundary.clone())
            .bounding_rect()
            .is_some_and(|bounds| bounds.intersects(&location))
    }

    /// Mark the zone discovered at `at`. Returns `false` when it already was,
    /// leaving the original timestamp untouched.
    pub fn discover(&mut self, at: DateTime<Utc>) -> bool {
        if self.discovered {
            return false;
        }
        self.discovered = true;
        self.discovered_at = Some(at);
        true
    }
}

/// Tracks which zones the user has discovered.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExplorationTracker {
    zones: Vec<ExploredZone>,
}

impl ExplorationTracker {
    /// Track the given zones.
    pub fn new<I>(zones: I) -> Self
    where
        I: IntoIterator<Item = ExploredZone>,
    {
        Self {
            zones: zones.into_iter().collect(),
        }
    }

    /// Start tracking another zone.
    pub fn add(&mut self, zone: ExploredZone) {
        self.zones.push(zone);
    }

    /// All tracked zones.
    #[must_use]
    pub fn zones(&self) -> &[ExploredZone] {
        &self.zones
    }

    /// Consume the tracker, returning its zones.
    #[must_use]
    pub fn into_zones(self) -> Vec<ExploredZone> {
        self.zones
    }

    /// Zones already discovered, most recent first.
    #[must_use]
    pub fn discovered(&self) -> Vec<&ExploredZone> {
        let mut found: Vec<_> = self.zones.iter().filter(|zone| zone.discovered).collect();
        found.sort_by(|lhs, rhs| rhs.discovered_at.cmp(&lhs.discovered_at));
        found
    }

    /// Zones whose bounds contain `location`.
    #[must_use]
    pub fn zones_containing(&self, location: Coord<f64>) -> Vec<&ExploredZone> {
        self.zones
            .iter()
            .filter(|zone| zone.contains(location))
            .collect()
    }

    /// Record a visit to `location` at time `at`.
    ///
    /// Every undiscovered zone containing the location becomes discovered.
    /// Returns the ids of the newly discovered zones in tracking order.
    pub fn visit(&mut self, location: Coord<f64>, at: DateTime<Utc>) -> Vec<u64> {
        let newly: Vec<u64> = self
            .zones
            .iter_mut()
            .filter(|zone| zone.contains(location))
            .filter_map(|zone| zone.discover(at).then_some(zone.id))
            .collect();
        if !newly.is_empty() {
            log::info!(
                "discovered {} zone(s) at ({}, {}); progress {:.2}",
                newly.len(),
                location.y,
                location.x,
                self.progress()
            );
        }
        newly
    }

    /// Fraction of zones discovered, in `[0, 1]`. Zero when nothing is tracked.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use geo::Coord;
    /// use trailmark_core::{ExplorationTracker, ExploredZone};
    ///
    /// let mut tracker = ExplorationTracker::new([
    ///     ExploredZone::square(1, "a", Coord { x: 0.0, y: 0.0 }, 0.01),
    ///     ExploredZone::square(2, "b", Coord { x: 5.0, y: 5.0 }, 0.01),
    /// ]);
    /// assert_eq!(tracker.progress(), 0.0);
    /// tracker.visit(Coord { x: 0.0, y: 0.0 }, Utc::now());
    /// assert_eq!(tracker.progress(), 0.5);
    /// ```
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        clippy::float_arithmetic,
        reason = "zone counts are small enough to be exact in f32"
    )]
    pub fn progress(&self) -> f32 {
        if self.zones.is_empty() {
            return 0.0;
        }
        let discovered = self.zones.iter().filter(|zone| zone.discovered).count();
        discovered as f32 / self.zones.len() as f32
    }
}

#[cfg(feature = "serde")]
mod lat_lng_ring {
    use geo::Coord;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub(super) fn serialize<S: Serializer>(ring: &[Coord<f64>], serializer: S) -> Result<S::Ok, S::Error> {
        ring.iter()
            .map(|coord| [coord.y, coord.x])
            .collect::<Vec<_>>()
            .serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Coord<f64>>, D::Error> {
        let pairs = Vec::<[f64; 2]>::deserialize(deserializer)?;
        Ok(pairs
            .into_iter()
            .map(|[lat, lng]| Coord { x: lng, y: lat })
            .collect())
    }
}
