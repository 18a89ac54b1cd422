//! Links into external map providers.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A web map the app can hand a location or search to.
///
/// # Examples
/// ```
/// use trailmark_core::MapProvider;
///
/// let url = MapProvider::OpenStreetMap.map_url(40.4168, -3.7038, 15);
/// assert_eq!(url, "https://www.openstreetmap.org/#map=15/40.4168/-3.7038");
///
/// // Unknown keys fall back to OpenStreetMap.
/// assert_eq!(MapProvider::from_key("bing"), MapProvider::OpenStreetMap);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum MapProvider {
    /// `openstreetmap.org`.
    #[default]
    OpenStreetMap,
    /// `google.com/maps`.
    GoogleMaps,
}

/// Error returned when parsing an unknown [`MapProvider`] key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown map provider {0:?} (expected openstreetmap or googlemaps)")]
pub struct MapProviderParseError(pub String);

impl MapProvider {
    /// Every supported provider.
    pub const ALL: [Self; 2] = [Self::OpenStreetMap, Self::GoogleMaps];

    /// Configuration key for the provider.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::OpenStreetMap => "openstreetmap",
            Self::GoogleMaps => "googlemaps",
        }
    }

    /// Human-readable provider name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::OpenStreetMap => "OpenStreetMap",
            Self::GoogleMaps => "Google Maps",
        }
    }

    /// Resolve a configuration key, falling back to the default provider
    /// for anything unrecognised.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or_else(|err: MapProviderParseError| {
            log::debug!("{err}; using {}", Self::default().name());
            Self::default()
        })
    }

    /// URL showing `latitude`, `longitude` at `zoom`.
    #[must_use]
    pub fn map_url(self, latitude: f64, longitude: f64, zoom: u8) -> String {
        match self {
            Self::OpenStreetMap => {
                format!("https://www.openstreetmap.org/#map={zoom}/{latitude}/{longitude}")
            }
            Self::GoogleMaps => format!("https://www.google.com/maps/@{latitude},{longitude},{zoom}z"),
        }
    }

    /// URL searching for `query`.
    ///
    /// Spaces and commas become `+`; nothing else is escaped.
    #[must_use]
    pub fn search_url(self, query: &str) -> String {
        let query = query.replace([' ', ','], "+");
        match self {
            Self::OpenStreetMap => format!("https://www.openstreetmap.org/search?query={query}"),
            Self::GoogleMaps => format!("https://www.google.com/maps/search/{query}"),
        }
    }
}

impl fmt::Display for MapProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MapProvider {
    type Err = MapProviderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|provider| provider.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MapProviderParseError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn google_map_url() {
        assert_eq!(
            MapProvider::GoogleMaps.map_url(40.4168, -3.7038, 12),
            "https://www.google.com/maps/@40.4168,-3.7038,12z"
        );
    }

    #[rstest]
    #[case(MapProvider::OpenStreetMap, "https://www.openstreetmap.org/search?query=Plaza+Mayor++Madrid")]
    #[case(MapProvider::GoogleMaps, "https://www.google.com/maps/search/Plaza+Mayor++Madrid")]
    fn search_replaces_spaces_and_commas(#[case] provider: MapProvider, #[case] expected: &str) {
        assert_eq!(provider.search_url("Plaza Mayor, Madrid"), expected);
    }

    #[rstest]
    #[case("openstreetmap", MapProvider::OpenStreetMap)]
    #[case("GoogleMaps", MapProvider::GoogleMaps)]
    #[case("", MapProvider::OpenStreetMap)]
    #[case("bing", MapProvider::OpenStreetMap)]
    fn from_key_falls_back(#[case] key: &str, #[case] expected: MapProvider) {
        assert_eq!(MapProvider::from_key(key), expected);
    }

    #[rstest]
    fn strict_parse_rejects_unknown() {
        assert_eq!(
            "bing".parse::<MapProvider>(),
            Err(MapProviderParseError("bing".to_owned()))
        );
    }
}
