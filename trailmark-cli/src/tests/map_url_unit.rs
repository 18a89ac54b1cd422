//! Focused unit tests covering the map link command.

use super::*;
use crate::map_url::{MapLinks, MapUrlArgs, MapUrlConfig, run_map_url_with};
use rstest::rstest;
use trailmark_core::MapProvider;

fn madrid_args() -> MapUrlArgs {
    MapUrlArgs {
        lat: Some(40.4168),
        lng: Some(-3.7038),
        ..MapUrlArgs::default()
    }
}

#[rstest]
fn defaults_to_openstreetmap_at_zoom_fifteen() {
    let config = MapUrlConfig::try_from(madrid_args()).expect("config should build");
    let links = MapLinks::from(&config);
    assert_eq!(links.provider, MapProvider::OpenStreetMap);
    assert_eq!(
        links.map_url,
        "https://www.openstreetmap.org/#map=15/40.4168/-3.7038"
    );
    assert_eq!(links.search_url, None);
}

#[rstest]
#[case("googlemaps", MapProvider::GoogleMaps)]
#[case("bing", MapProvider::OpenStreetMap)]
fn provider_keys_fall_back_to_default(#[case] key: &str, #[case] expected: MapProvider) {
    let args = MapUrlArgs {
        provider: Some(key.to_owned()),
        ..madrid_args()
    };
    let config = MapUrlConfig::try_from(args).expect("config should build");
    assert_eq!(config.provider, expected);
}

#[rstest]
fn blank_queries_are_dropped() {
    let args = MapUrlArgs {
        query: Some("   ".to_owned()),
        ..madrid_args()
    };
    let config = MapUrlConfig::try_from(args).expect("config should build");
    assert_eq!(config.query, None);
}

#[rstest]
fn missing_latitude_errors() {
    let args = MapUrlArgs {
        lat: None,
        ..madrid_args()
    };
    match MapUrlConfig::try_from(args) {
        Err(CliError::MissingArgument { field, env }) => {
            assert_eq!(field, ARG_LAT);
            assert_eq!(env, ENV_MAP_LAT);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn command_prints_map_and_search_links() {
    let cli = Cli::try_parse_from([
        "trailmark",
        "map-url",
        "--provider",
        "googlemaps",
        "--lat",
        "40.4168",
        "--lng",
        "-3.7038",
        "--zoom",
        "12",
        "--query",
        "Plaza Mayor, Madrid",
    ])
    .expect("arguments should parse");
    let Command::MapUrl(args) = cli.command else {
        panic!("expected map-url command");
    };

    let mut out = Vec::new();
    run_map_url_with(args, &mut out).expect("map-url should succeed");
    let links: MapLinks = serde_json::from_slice(&out).expect("output should be JSON");
    assert_eq!(links.map_url, "https://www.google.com/maps/@40.4168,-3.7038,12z");
    assert_eq!(
        links.search_url.as_deref(),
        Some("https://www.google.com/maps/search/Plaza+Mayor++Madrid")
    );
}
