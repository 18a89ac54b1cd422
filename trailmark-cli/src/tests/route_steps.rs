//! Behaviour-driven step definitions driving the route CLI scenarios.

use super::helpers::{workspace, write_json, write_utf8};
use super::*;
use crate::route::{RouteReport, run_route_with};
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use std::collections::BTreeSet;
use tempfile::TempDir;
use trailmark_core::test_support::{madrid_landmarks, poi};
use trailmark_core::{RouteRequest, RouteRequestError, TransportMode};

#[derive(Debug)]
struct RouteWorld {
    _tmp: TempDir,
    request_path: Utf8PathBuf,
    include_request: RefCell<bool>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RouteWorld {
    fn new() -> Self {
        let (tmp, root) = workspace();
        Self {
            _tmp: tmp,
            request_path: root.join("request.json"),
            include_request: RefCell::new(true),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self, hour: u32, seed: u64) -> Vec<String> {
        let mut argv = vec!["trailmark".to_owned(), "route".to_owned()];
        if *self.include_request.borrow() {
            argv.push(self.request_path.as_str().to_owned());
        }
        argv.extend([
            format!("--{ARG_ROUTE_HOUR}"),
            hour.to_string(),
            format!("--{ARG_ROUTE_SEED}"),
            seed.to_string(),
        ]);
        argv
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> RouteWorld {
    RouteWorld::new()
}

#[given("a route request for three Madrid landmarks exists on disk")]
fn landmarks_request(#[from(world)] world: &RouteWorld) {
    let request = RouteRequest::new(madrid_landmarks(), TransportMode::Walking);
    write_json(&world.request_path, &request);
}

#[given("the route request contains invalid JSON")]
fn invalid_json(#[from(world)] world: &RouteWorld) {
    write_utf8(&world.request_path, b"{ not valid json");
}

#[given("the route request contains a point beyond the poles")]
fn beyond_poles(#[from(world)] world: &RouteWorld) {
    let request = RouteRequest::new(vec![poi(1, 91.0, 0.0, "x")], TransportMode::Walking);
    write_json(&world.request_path, &request);
}

#[given("I omit the route request path")]
fn omit_request(#[from(world)] world: &RouteWorld) {
    *world.include_request.borrow_mut() = false;
}

#[when("I run the route command at hour 8 with seed 42")]
fn run_route_command(#[from(world)] world: &RouteWorld) {
    let invocation = world.build_command_line(8, 42);
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Route(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_route_with(args, &mut *buffer)
        }
        other => panic!("expected route command, found {other:?}"),
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds and prints a route report")]
fn succeeds_with_report(#[from(world)] world: &RouteWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");

    let report: RouteReport =
        serde_json::from_slice(&world.stdout.borrow()).expect("output should be a route report");
    assert_eq!(report.hour, 8);
    assert_eq!(report.overlay.len(), report.route.points.len());
    assert_eq!(report.traffic.len(), report.segments.len());
}

#[then("the report covers every landmark once")]
fn covers_landmarks(#[from(world)] world: &RouteWorld) {
    let report: RouteReport =
        serde_json::from_slice(&world.stdout.borrow()).expect("output should be a route report");
    let ids: Vec<u64> = report.route.points.iter().map(|p| p.id).collect();
    let unique: BTreeSet<u64> = ids.iter().copied().collect();
    assert_eq!(ids.len(), 3);
    assert_eq!(unique, BTreeSet::from([1, 2, 3]));
}

#[then("the command fails because the request JSON is invalid")]
fn fails_invalid_json(#[from(world)] world: &RouteWorld) {
    match &*world.error() {
        CliError::ParseInput { path, .. } => assert_eq!(*path, world.request_path),
        other => panic!("expected ParseInput, found {other:?}"),
    }
}

#[then("the command fails because the request is invalid")]
fn fails_invalid_request(#[from(world)] world: &RouteWorld) {
    match &*world.error() {
        CliError::InvalidRouteRequest { source, .. } => assert!(matches!(
            source,
            RouteRequestError::LatitudeOutOfRange { id: 1, .. }
        )),
        other => panic!("expected InvalidRouteRequest, found {other:?}"),
    }
}

#[then("the command fails because the request path is missing")]
fn fails_missing_path(#[from(world)] world: &RouteWorld) {
    match &*world.error() {
        CliError::MissingPath { field, .. } => assert_eq!(*field, ARG_ROUTE_REQUEST),
        other => panic!("expected MissingPath, found {other:?}"),
    }
}

macro_rules! register_route_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/route_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RouteWorld) {
            let _ = world;
        }
    };
}

register_route_scenario!(route_happy_path, "planning a route from JSON");
register_route_scenario!(route_invalid_json, "rejecting invalid JSON input");
register_route_scenario!(route_invalid_request, "rejecting invalid coordinates");
register_route_scenario!(route_missing_request, "rejecting missing request paths");
