//! Access to the user's catalogue of points of interest.
//!
//! The `PoiStore` trait defines read-only spatial access. [`MemoryPoiStore`]
//! is the in-process catalogue used by the CLI: it holds POIs in insertion
//! order and answers the category, visited and proximity queries the map
//! screens need.

use geo::{Coord, Intersects, Rect};

use crate::PointOfInterest;

/// Read-only spatial access to points of interest.
///
/// The bounding box uses WGS84 coordinates (`x = longitude`, `y = latitude`).
/// Containment includes boundary points. Regions crossing the antimeridian
/// must be split into two queries by the caller.
///
/// # Examples
///
/// ```rust
/// use geo::{Coord, Rect};
/// use trailmark_core::{MemoryPoiStore, PoiStore, PointOfInterest};
///
/// let poi = PointOfInterest::at(1, "Sol", 0.0, 0.0, "Turismo");
/// let store = MemoryPoiStore::with_pois([poi.clone()]);
/// let bbox = Rect::new(Coord { x: -1.0, y: -1.0 }, Coord { x: 1.0, y: 1.0 });
///
/// let found: Vec<_> = store.get_pois_in_bbox(&bbox).collect();
/// assert_eq!(found, vec![poi]);
/// ```
pub trait PoiStore {
    /// Return all POIs that fall within the provided bounding box.
    fn get_pois_in_bbox(
        &self,
        bbox: &Rect<f64>,
    ) -> Box<dyn Iterator<Item = PointOfInterest> + Send + '_>;
}

/// In-memory POI catalogue backed by a linear scan.
///
/// Lookups are `O(n)`; the catalogue is sized for a user's saved places, not
/// a city-wide dataset.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemoryPoiStore {
    pois: Vec<PointOfInterest>,
}

impl MemoryPoiStore {
    /// Create a store from a collection of points of interest.
    pub fn with_pois<I>(pois: I) -> Self
    where
        I: IntoIterator<Item = PointOfInterest>,
    {
        Self {
            pois: pois.into_iter().collect(),
        }
    }

    /// Add a POI, replacing any existing entry with the same id.
    pub fn insert(&mut self, poi: PointOfInterest) {
        match self.pois.iter_mut().find(|existing| existing.id == poi.id) {
            Some(existing) => *existing = poi,
            None => self.pois.push(poi),
        }
    }

    /// Remove and return the POI with `id`.
    pub fn remove(&mut self, id: u64) -> Option<PointOfInterest> {
        let pos = self.pois.iter().position(|poi| poi.id == id)?;
        Some(self.pois.remove(pos))
    }

    /// Every POI in insertion order.
    #[must_use]
    pub fn all(&self) -> &[PointOfInterest] {
        &self.pois
    }

    /// Number of stored POIs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pois.len()
    }

    /// Whether the store holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }

    /// Look up a POI by id.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&PointOfInterest> {
        self.pois.iter().find(|poi| poi.id == id)
    }

    /// POIs in `category`, sorted by name.
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<PointOfInterest> {
        self.sorted_by_name(|poi| poi.category == category)
    }

    /// Visited POIs, sorted by name.
    #[must_use]
    pub fn visited(&self) -> Vec<PointOfInterest> {
        self.sorted_by_name(|poi| poi.visited)
    }

    /// Unvisited POIs in `category`, sorted by name.
    #[must_use]
    pub fn unvisited_in_category(&self, category: &str) -> Vec<PointOfInterest> {
        self.sorted_by_name(|poi| !poi.visited && poi.category == category)
    }

    /// POIs whose latitude and longitude each lie within `radius_degrees` of
    /// `centre`. The test is a square in degree space, not a circle.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "proximity compares absolute coordinate differences"
    )]
    pub fn nearby(&self, centre: Coord<f64>, radius_degrees: f64) -> Vec<PointOfInterest> {
        self.pois
            .iter()
            .filter(|poi| {
                (poi.location.y - centre.y).abs() <= radius_degrees
                    && (poi.location.x - centre.x).abs() <= radius_degrees
            })
            .cloned()
            .collect()
    }

    /// Flag the POI with `id` as visited.
    ///
    /// Returns `true` only when the flag changed; unknown ids and POIs that
    /// were already visited return `false`.
    pub fn mark_visited(&mut self, id: u64) -> bool {
        match self.pois.iter_mut().find(|poi| poi.id == id) {
            Some(poi) if !poi.visited => {
                poi.visited = true;
                log::debug!("marked POI {id} ({}) visited", poi.name);
                true
            }
            _ => false,
        }
    }

    /// Suggested groups of POIs to route through.
    ///
    /// Suggestions need at least three stored POIs. The result holds one
    /// group per entry of `categories` that has members, in the given order,
    /// followed by all unvisited POIs when there are any. Groups keep
    /// insertion order.
    ///
    /// # Examples
    /// ```
    /// use trailmark_core::{MemoryPoiStore, PointOfInterest};
    ///
    /// let store = MemoryPoiStore::with_pois([
    ///     PointOfInterest::at(1, "Palacio Real", 40.418, -3.714, "Monumentos"),
    ///     PointOfInterest::at(2, "Prado", 40.413, -3.692, "Museos"),
    ///     PointOfInterest::at(3, "Sol", 40.416, -3.703, "Turismo").with_visited(true),
    /// ]);
    /// let groups = store.recommended_groups(&["Monumentos", "Museos"]);
    /// assert_eq!(groups.len(), 3);
    /// assert_eq!(groups[2].len(), 2);
    /// ```
    #[must_use]
    pub fn recommended_groups(&self, categories: &[&str]) -> Vec<Vec<PointOfInterest>> {
        if self.pois.len() < 3 {
            return Vec::new();
        }
        let by_category = categories.iter().map(|category| {
            self.filtered(|poi| poi.category == *category)
        });
        by_category
            .chain(std::iter::once(self.filtered(|poi| !poi.visited)))
            .filter(|group| !group.is_empty())
            .collect()
    }

    fn filtered(&self, keep: impl Fn(&PointOfInterest) -> bool) -> Vec<PointOfInterest> {
        self.pois.iter().filter(|poi| keep(poi)).cloned().collect()
    }

    fn sorted_by_name(&self, keep: impl Fn(&PointOfInterest) -> bool) -> Vec<PointOfInterest> {
        let mut found = self.filtered(keep);
        found.sort_by(|lhs, rhs| lhs.name.cmp(&rhs.name));
        found
    }
}

impl PoiStore for MemoryPoiStore {
    fn get_pois_in_bbox(
        &self,
        bbox: &Rect<f64>,
    ) -> Box<dyn Iterator<Item = PointOfInterest> + Send + '_> {
        let bbox = *bbox;
        Box::new(
            self.pois
                .iter()
                // `Intersects` treats boundary points as inside the rectangle.
                .filter(move |p| bbox.intersects(&p.location))
                .cloned(),
        )
    }
}

impl FromIterator<PointOfInterest> for MemoryPoiStore {
    fn from_iter<I: IntoIterator<Item = PointOfInterest>>(iter: I) -> Self {
        Self::with_pois(iter)
    }
}
