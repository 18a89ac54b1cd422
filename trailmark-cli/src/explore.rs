//! Explore command implementation for the Trailmark CLI.

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};
use clap::Parser;
use geo::Coord;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use trailmark_core::{ExplorationTracker, ExploredZone};

use crate::fs::{load_json, require_existing};
use crate::{
    ARG_EXPLORE_AT, ARG_EXPLORE_ZONES, ARG_LAT, ARG_LNG, CliError, ENV_EXPLORE_LAT,
    ENV_EXPLORE_LNG, ENV_EXPLORE_ZONES, write_json,
};

/// CLI arguments for the `explore` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load a JSON array of explored zones, record a visit to the \
                 given location and print the zones it discovered together \
                 with the updated zone list.",
    about = "Record a visit and report discovered zones"
)]
#[ortho_config(prefix = "TRAILMARK")]
pub(crate) struct ExploreArgs {
    /// Path to a JSON file containing an array of zones.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) zones_path: Option<Utf8PathBuf>,
    /// Latitude of the visited location.
    #[arg(long = ARG_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude of the visited location.
    #[arg(long = ARG_LNG, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// RFC 3339 timestamp of the visit; defaults to now.
    #[arg(long = ARG_EXPLORE_AT, value_name = "timestamp")]
    #[serde(default)]
    pub(crate) at: Option<DateTime<Utc>>,
}

impl ExploreArgs {
    pub(crate) fn into_config(self) -> Result<ExploreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ExploreConfig::try_from(merged)
    }
}

/// Resolved `explore` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ExploreConfig {
    /// Path to the zones file.
    pub(crate) zones_path: Utf8PathBuf,
    /// Visited location (`x = longitude`, `y = latitude`).
    pub(crate) location: Coord<f64>,
    /// When the visit happened.
    pub(crate) at: DateTime<Utc>,
}

impl TryFrom<ExploreArgs> for ExploreConfig {
    type Error = CliError;

    fn try_from(args: ExploreArgs) -> Result<Self, Self::Error> {
        let zones_path = args.zones_path.ok_or(CliError::MissingPath {
            field: ARG_EXPLORE_ZONES,
            env: ENV_EXPLORE_ZONES,
        })?;
        let latitude = args.lat.ok_or(CliError::MissingArgument {
            field: ARG_LAT,
            env: ENV_EXPLORE_LAT,
        })?;
        let longitude = args.lng.ok_or(CliError::MissingArgument {
            field: ARG_LNG,
            env: ENV_EXPLORE_LNG,
        })?;
        Ok(Self {
            zones_path,
            location: checked_location(latitude, longitude)?,
            at: args.at.unwrap_or_else(Utc::now),
        })
    }
}

/// Build a coordinate from a WGS84 latitude and longitude.
pub(crate) fn checked_location(latitude: f64, longitude: f64) -> Result<Coord<f64>, CliError> {
    if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) {
        Ok(Coord {
            x: longitude,
            y: latitude,
        })
    } else {
        Err(CliError::InvalidLocation {
            latitude,
            longitude,
        })
    }
}

/// Output of the `explore` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ExploreReport {
    /// Ids of zones discovered by this visit.
    pub(crate) discovered: Vec<u64>,
    /// Fraction of all zones discovered so far.
    pub(crate) progress: f32,
    /// Every zone after the visit.
    pub(crate) zones: Vec<ExploredZone>,
}

pub(super) fn run_explore_with(args: ExploreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.zones_path, ARG_EXPLORE_ZONES)?;
    let zones = load_zones(&config.zones_path)?;
    let report = explore(zones, config.location, config.at);
    write_json(writer, &report)
}

/// Visit `location` among `zones` at time `at`.
pub(crate) fn explore(
    zones: Vec<ExploredZone>,
    location: Coord<f64>,
    at: DateTime<Utc>,
) -> ExploreReport {
    let mut tracker = ExplorationTracker::new(zones);
    let discovered = tracker.visit(location, at);
    ExploreReport {
        discovered,
        progress: tracker.progress(),
        zones: tracker.into_zones(),
    }
}

/// Loads a JSON array of [`ExploredZone`]s from disk.
pub(crate) fn load_zones(path: &Utf8Path) -> Result<Vec<ExploredZone>, CliError> {
    load_json(path)
}
