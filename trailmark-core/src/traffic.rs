//! Synthetic traffic over route segments.
//!
//! Nothing here observes real traffic. [`TrafficModel::simulate`] scales each
//! leg's travel time by an hour-of-day factor and a random jitter, and
//! [`TrafficModel::classify`] grades a leg by comparing its speed with a
//! category-based expectation.

use std::fmt;
use std::ops::Range;

use rand::Rng;

use crate::RouteSegment;
use crate::transport::DRIVING_SPEED;

/// Congestion grade of a single leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TrafficStatus {
    /// Moving at or near the expected speed.
    Fluid,
    /// Noticeably slower than expected.
    Moderate,
    /// Well below the expected speed.
    Congested,
}

impl fmt::Display for TrafficStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fluid => "fluid",
            Self::Moderate => "moderate",
            Self::Congested => "congested",
        })
    }
}

/// A leg after simulation, paired with its grade.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentTraffic {
    /// The leg with its adjusted time.
    pub segment: RouteSegment,
    /// Grade derived from the adjusted time.
    pub status: TrafficStatus,
}

/// Tunables for the traffic simulation.
///
/// The defaults are a 1.5x rush-hour factor for 07:00-09:59 and
/// 17:00-19:59, 1.1x for daytime 10:00-16:59, 1.0x otherwise, a jitter drawn
/// uniformly from `[0.8, 1.2)`, and grading thresholds of 0.8 (fluid) and
/// 0.5 (moderate).
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use trailmark_core::{PointOfInterest, Route, TrafficModel, TransportMode};
///
/// let route = Route::new(
///     vec![
///         PointOfInterest::at(1, "a", 0.0, 0.0, "x"),
///         PointOfInterest::at(2, "b", 0.0, 0.01, "x"),
///     ],
///     0.0,
///     0.0,
///     TransportMode::Driving,
/// );
/// let segments = route.segments();
/// let model = TrafficModel::default();
/// let mut rng = StdRng::seed_from_u64(7);
/// let slowed = model.simulate(&segments, 8, &mut rng);
/// assert!(slowed[0].minutes >= segments[0].minutes * 1.5 * 0.8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficModel {
    /// Factor applied during the morning and evening rush.
    pub rush_hour_factor: f64,
    /// Factor applied during working hours outside the rush.
    pub daytime_factor: f64,
    /// Factor applied overnight.
    pub off_peak_factor: f64,
    /// Range the per-segment random scale is drawn from.
    pub jitter: Range<f64>,
    /// Minimum speed ratio graded as fluid.
    pub fluid_ratio: f64,
    /// Minimum speed ratio graded as moderate.
    pub moderate_ratio: f64,
}

impl Default for TrafficModel {
    fn default() -> Self {
        Self {
            rush_hour_factor: 1.5,
            daytime_factor: 1.1,
            off_peak_factor: 1.0,
            jitter: 0.8..1.2,
            fluid_ratio: 0.8,
            moderate_ratio: 0.5,
        }
    }
}

impl TrafficModel {
    /// Base congestion factor for an hour of the day (0-23).
    ///
    /// Hours outside 0-23 fall into the off-peak bucket.
    #[must_use]
    pub const fn hour_factor(&self, hour: u32) -> f64 {
        match hour {
            7..=9 | 17..=19 => self.rush_hour_factor,
            10..=16 => self.daytime_factor,
            _ => self.off_peak_factor,
        }
    }

    /// Scale each segment's time by the hour factor and a fresh random
    /// jitter. Distances are left unchanged.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "traffic factors multiply floating-point travel times"
    )]
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        segments: &[RouteSegment],
        hour: u32,
        rng: &mut R,
    ) -> Vec<RouteSegment> {
        let base = self.hour_factor(hour);
        segments
            .iter()
            .map(|segment| {
                let factor = base * self.draw_jitter(rng);
                segment.with_minutes(segment.minutes * factor)
            })
            .collect()
    }

    fn draw_jitter<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.jitter.is_empty() || !self.jitter.start.is_finite() || !self.jitter.end.is_finite()
        {
            return self.jitter.start;
        }
        rng.gen_range(self.jitter.clone())
    }

    /// Speed the leg is expected to sustain, from its start point's category.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "expected speeds are scaled float constants"
    )]
    pub fn expected_speed(segment: &RouteSegment) -> f64 {
        match segment.start.category.as_str() {
            "highway" => DRIVING_SPEED * 1.2,
            "main_road" => DRIVING_SPEED,
            _ => DRIVING_SPEED * 0.8,
        }
    }

    /// Grade a leg by its actual over expected speed.
    ///
    /// Zero-length legs have no measurable speed and grade as congested. A
    /// positive distance covered in no time is infinitely fast and grades as
    /// fluid.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "speed ratios are floating-point quotients"
    )]
    pub fn classify(&self, segment: &RouteSegment) -> TrafficStatus {
        let actual = if segment.distance_metres <= 0.0 {
            0.0
        } else {
            segment.distance_metres / segment.minutes
        };
        let ratio = actual / Self::expected_speed(segment);
        if ratio >= self.fluid_ratio {
            TrafficStatus::Fluid
        } else if ratio >= self.moderate_ratio {
            TrafficStatus::Moderate
        } else {
            TrafficStatus::Congested
        }
    }

    /// Simulate and grade every segment in one pass.
    #[must_use]
    pub fn report<R: Rng + ?Sized>(
        &self,
        segments: &[RouteSegment],
        hour: u32,
        rng: &mut R,
    ) -> Vec<SegmentTraffic> {
        self.simulate(segments, hour, rng)
            .into_iter()
            .map(|segment| {
                let status = self.classify(&segment);
                SegmentTraffic { segment, status }
            })
            .collect()
    }
}
