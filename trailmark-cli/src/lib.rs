//! Command-line interface for Trailmark's route and exploration tools.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;

mod error;
mod explore;
mod fs;
mod map_url;
mod route;

pub use error::CliError;

use explore::ExploreArgs;
use map_url::MapUrlArgs;
use route::RouteArgs;

pub(crate) const ARG_ROUTE_REQUEST: &str = "request";
pub(crate) const ARG_ROUTE_MODE: &str = "mode";
pub(crate) const ARG_ROUTE_HOUR: &str = "hour";
pub(crate) const ARG_ROUTE_SEED: &str = "seed";
pub(crate) const ENV_ROUTE_REQUEST: &str = "TRAILMARK_CMDS_ROUTE_REQUEST_PATH";

pub(crate) const ARG_EXPLORE_ZONES: &str = "zones";
pub(crate) const ARG_LAT: &str = "lat";
pub(crate) const ARG_LNG: &str = "lng";
pub(crate) const ARG_EXPLORE_AT: &str = "at";
pub(crate) const ENV_EXPLORE_ZONES: &str = "TRAILMARK_CMDS_EXPLORE_ZONES_PATH";
pub(crate) const ENV_EXPLORE_LAT: &str = "TRAILMARK_CMDS_EXPLORE_LAT";
pub(crate) const ENV_EXPLORE_LNG: &str = "TRAILMARK_CMDS_EXPLORE_LNG";

pub(crate) const ARG_MAP_PROVIDER: &str = "provider";
pub(crate) const ARG_MAP_ZOOM: &str = "zoom";
pub(crate) const ARG_MAP_QUERY: &str = "query";
pub(crate) const ENV_MAP_LAT: &str = "TRAILMARK_CMDS_MAP_URL_LAT";
pub(crate) const ENV_MAP_LNG: &str = "TRAILMARK_CMDS_MAP_URL_LNG";

/// Run the Trailmark CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when arguments or configuration are invalid, an
/// input file cannot be read, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Route(args) => route::run_route_with(args, &mut stdout),
        Command::Explore(args) => explore::run_explore_with(args, &mut stdout),
        Command::MapUrl(args) => map_url::run_map_url_with(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "trailmark",
    about = "Plan routes through points of interest and track explored zones",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Plan a route through the points in a JSON request.
    Route(RouteArgs),
    /// Record a visit and report newly discovered zones.
    Explore(ExploreArgs),
    /// Print map and search links for a location.
    MapUrl(MapUrlArgs),
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
