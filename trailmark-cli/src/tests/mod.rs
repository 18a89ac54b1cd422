//! Shared test harness modules for the Trailmark CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod helpers;
mod map_url_unit;
mod route_steps;
