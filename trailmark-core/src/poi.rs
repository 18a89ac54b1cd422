use geo::Coord;

/// A location the user wants to visit or has already visited.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. With the
/// `serde` feature enabled the point is encoded with explicit `latitude` and
/// `longitude` fields so map overlays can consume it unchanged.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use trailmark_core::PointOfInterest;
///
/// let poi = PointOfInterest::new(1, "Puerta del Sol", Coord { x: -3.703339, y: 40.416729 }, "Turismo");
///
/// assert_eq!(poi.latitude(), 40.416729);
/// assert!(!poi.visited);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "PoiRecord", into = "PoiRecord")
)]
pub struct PointOfInterest {
    /// Identifier assigned by the owning store.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Free-form category label, e.g. `Museos` or `highway`.
    pub category: String,
    /// Optional longer description.
    pub description: String,
    /// Whether the user has already been here.
    pub visited: bool,
}

impl PointOfInterest {
    /// Construct an unvisited `PointOfInterest` with an empty description.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use trailmark_core::PointOfInterest;
    ///
    /// let poi = PointOfInterest::new(7, "Museo del Prado", Coord { x: -3.692459, y: 40.413848 }, "Museos");
    /// assert_eq!(poi.category, "Museos");
    /// assert!(poi.description.is_empty());
    /// ```
    pub fn new(
        id: u64,
        name: impl Into<String>,
        location: Coord<f64>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            category: category.into(),
            description: String::new(),
            visited: false,
        }
    }

    /// Construct a point from latitude and longitude in degrees.
    ///
    /// # Examples
    /// ```
    /// use trailmark_core::PointOfInterest;
    ///
    /// let poi = PointOfInterest::at(1, "Palacio Real", 40.418047, -3.714187, "Monumentos");
    /// assert_eq!(poi.location.x, -3.714187);
    /// ```
    pub fn at(
        id: u64,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        category: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            name,
            Coord {
                x: longitude,
                y: latitude,
            },
            category,
        )
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the visited flag.
    #[must_use]
    pub const fn with_visited(mut self, visited: bool) -> Self {
        self.visited = visited;
        self
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PoiRecord {
    #[serde(default)]
    id: u64,
    #[serde(default)]
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    category: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    description: String,
    #[serde(default)]
    visited: bool,
}

#[cfg(feature = "serde")]
impl From<PoiRecord> for PointOfInterest {
    fn from(record: PoiRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            location: Coord {
                x: record.longitude,
                y: record.latitude,
            },
            category: record.category,
            description: record.description,
            visited: record.visited,
        }
    }
}

#[cfg(feature = "serde")]
impl From<PointOfInterest> for PoiRecord {
    fn from(poi: PointOfInterest) -> Self {
        Self {
            id: poi.id,
            name: poi.name,
            latitude: poi.location.y,
            longitude: poi.location.x,
            category: poi.category,
            description: poi.description,
            visited: poi.visited,
        }
    }
}
