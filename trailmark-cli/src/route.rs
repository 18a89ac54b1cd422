//! Route command implementation for the Trailmark CLI.

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{Local, Timelike};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::io::Write;
use trailmark_core::{
    NearestNeighbourPlanner, Route, RoutePlanner, RouteRequest, RouteSegment, SegmentTraffic,
    TrafficModel, TransportMode,
};

use crate::fs::{load_json, require_existing};
use crate::{
    ARG_ROUTE_HOUR, ARG_ROUTE_MODE, ARG_ROUTE_REQUEST, ARG_ROUTE_SEED, CliError, ENV_ROUTE_REQUEST,
    write_json,
};

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Order the points of a JSON-encoded RouteRequest with the \
                 nearest-neighbour planner, then simulate traffic over each \
                 leg for the given hour of day.",
    about = "Plan a route and simulate traffic along it"
)]
#[ortho_config(prefix = "TRAILMARK")]
pub(crate) struct RouteArgs {
    /// Path to a JSON file containing a RouteRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Override the request's transport mode (walking, cycling, driving).
    #[arg(long = ARG_ROUTE_MODE, value_name = "mode")]
    #[serde(default)]
    pub(crate) mode: Option<TransportMode>,
    /// Hour of day (0-23) used for the traffic simulation; defaults to now.
    #[arg(long = ARG_ROUTE_HOUR, value_name = "hour")]
    #[serde(default)]
    pub(crate) hour: Option<u32>,
    /// Seed for the traffic simulation; omit for a fresh random draw.
    #[arg(long = ARG_ROUTE_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RouteConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Mode overriding the one in the request.
    pub(crate) mode: Option<TransportMode>,
    /// Hour of day for the traffic simulation.
    pub(crate) hour: u32,
    /// Seed for the traffic simulation.
    pub(crate) seed: Option<u64>,
}

impl RouteConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_ROUTE_REQUEST)
    }
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingPath {
            field: ARG_ROUTE_REQUEST,
            env: ENV_ROUTE_REQUEST,
        })?;
        let hour = args.hour.unwrap_or_else(|| Local::now().hour());
        if hour > 23 {
            return Err(CliError::InvalidHour { hour });
        }
        Ok(Self {
            request_path,
            mode: args.mode,
            hour,
            seed: args.seed,
        })
    }
}

/// Output of the `route` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct RouteReport {
    /// The planned route.
    pub(crate) route: Route,
    /// `[latitude, longitude]` pairs for a map overlay.
    pub(crate) overlay: Vec<[f64; 2]>,
    /// Legs with their base travel times.
    pub(crate) segments: Vec<RouteSegment>,
    /// Legs after traffic simulation, with their grades.
    pub(crate) traffic: Vec<SegmentTraffic>,
    /// Hour of day the traffic was simulated for.
    pub(crate) hour: u32,
}

pub(super) fn run_route_with(args: RouteArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let report = execute_route(args)?;
    write_json(writer, &report)
}

fn execute_route(args: RouteArgs) -> Result<RouteReport, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let mut request = load_route_request(&config.request_path)?;
    request
        .validate()
        .map_err(|source| CliError::InvalidRouteRequest {
            path: config.request_path.clone(),
            source,
        })?;
    if let Some(mode) = config.mode {
        request.mode = mode;
    }
    let mut rng = config
        .seed
        .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
    Ok(build_report(&request, config.hour, &mut rng))
}

/// Plan `request` and simulate traffic over the result at `hour`.
pub(crate) fn build_report(request: &RouteRequest, hour: u32, rng: &mut ChaCha8Rng) -> RouteReport {
    let route = NearestNeighbourPlanner.plan(request);
    let segments = route.segments();
    let traffic = TrafficModel::default().report(&segments, hour, rng);
    log::info!(
        "route through {} points: {:.0} m, {:.1} min by {}",
        route.points.len(),
        route.total_distance_metres,
        route.total_minutes,
        route.mode
    );
    RouteReport {
        overlay: route.coordinates(),
        route,
        segments,
        traffic,
        hour,
    }
}

/// Loads a JSON-encoded [`RouteRequest`] from disk.
pub(crate) fn load_route_request(path: &Utf8Path) -> Result<RouteRequest, CliError> {
    load_json(path)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RouteConfig, CliError> {
    let merged = RouteArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RouteConfig::try_from(merged)
}
