//! Map link command implementation for the Trailmark CLI.

use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use trailmark_core::MapProvider;

use crate::explore::checked_location;
use crate::{
    ARG_LAT, ARG_LNG, ARG_MAP_PROVIDER, ARG_MAP_QUERY, ARG_MAP_ZOOM, CliError, ENV_MAP_LAT,
    ENV_MAP_LNG, write_json,
};

const DEFAULT_ZOOM: u8 = 15;

/// CLI arguments for the `map-url` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print a link showing the location in the chosen map \
                 provider, plus a search link when a query is given. \
                 Unknown providers fall back to OpenStreetMap.",
    about = "Print map and search links"
)]
#[ortho_config(prefix = "TRAILMARK")]
pub(crate) struct MapUrlArgs {
    /// Map provider key (openstreetmap or googlemaps).
    #[arg(long = ARG_MAP_PROVIDER, value_name = "key")]
    #[serde(default)]
    pub(crate) provider: Option<String>,
    /// Latitude to centre the map on.
    #[arg(long = ARG_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude to centre the map on.
    #[arg(long = ARG_LNG, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// Zoom level; defaults to 15.
    #[arg(long = ARG_MAP_ZOOM, value_name = "level")]
    #[serde(default)]
    pub(crate) zoom: Option<u8>,
    /// Free-text search, such as a place name.
    #[arg(long = ARG_MAP_QUERY, value_name = "text")]
    #[serde(default)]
    pub(crate) query: Option<String>,
}

/// Resolved `map-url` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MapUrlConfig {
    pub(crate) provider: MapProvider,
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
    pub(crate) zoom: u8,
    pub(crate) query: Option<String>,
}

impl TryFrom<MapUrlArgs> for MapUrlConfig {
    type Error = CliError;

    fn try_from(args: MapUrlArgs) -> Result<Self, Self::Error> {
        let latitude = args.lat.ok_or(CliError::MissingArgument {
            field: ARG_LAT,
            env: ENV_MAP_LAT,
        })?;
        let longitude = args.lng.ok_or(CliError::MissingArgument {
            field: ARG_LNG,
            env: ENV_MAP_LNG,
        })?;
        checked_location(latitude, longitude)?;
        let provider = args
            .provider
            .as_deref()
            .map_or_else(MapProvider::default, MapProvider::from_key);
        Ok(Self {
            provider,
            latitude,
            longitude,
            zoom: args.zoom.unwrap_or(DEFAULT_ZOOM),
            query: args.query.filter(|query| !query.trim().is_empty()),
        })
    }
}

/// Output of the `map-url` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct MapLinks {
    /// Provider the links point at.
    pub(crate) provider: MapProvider,
    /// Link centred on the location.
    pub(crate) map_url: String,
    /// Search link, when a query was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) search_url: Option<String>,
}

impl From<&MapUrlConfig> for MapLinks {
    fn from(config: &MapUrlConfig) -> Self {
        let provider = config.provider;
        Self {
            provider,
            map_url: provider.map_url(config.latitude, config.longitude, config.zoom),
            search_url: config.query.as_deref().map(|query| provider.search_url(query)),
        }
    }
}

pub(super) fn run_map_url_with(args: MapUrlArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = MapUrlConfig::try_from(merged)?;
    write_json(writer, &MapLinks::from(&config))
}
