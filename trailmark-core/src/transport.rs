//! Transport modes and their fixed average speeds.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Average walking speed in metres per minute (5 km/h).
pub const WALKING_SPEED: f64 = 83.3;
/// Average cycling speed in metres per minute (15 km/h).
pub const CYCLING_SPEED: f64 = 250.0;
/// Average driving speed in metres per minute (30 km/h).
pub const DRIVING_SPEED: f64 = 500.0;

/// How the user travels between points.
///
/// # Examples
/// ```
/// use trailmark_core::TransportMode;
///
/// let mode: TransportMode = "cycling".parse().unwrap();
/// assert_eq!(mode.travel_minutes(500.0), 2.0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TransportMode {
    /// On foot.
    #[default]
    Walking,
    /// By bicycle.
    Cycling,
    /// By car.
    Driving,
}

impl TransportMode {
    /// Every supported mode, in declaration order.
    pub const ALL: [Self; 3] = [Self::Walking, Self::Cycling, Self::Driving];

    /// Average speed for this mode in metres per minute.
    #[must_use]
    pub const fn speed_metres_per_minute(self) -> f64 {
        match self {
            Self::Walking => WALKING_SPEED,
            Self::Cycling => CYCLING_SPEED,
            Self::Driving => DRIVING_SPEED,
        }
    }

    /// Minutes needed to cover `distance_metres` at this mode's speed.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "travel time is distance divided by a float speed"
    )]
    pub fn travel_minutes(self, distance_metres: f64) -> f64 {
        distance_metres / self.speed_metres_per_minute()
    }

    /// Lowercase identifier used in configuration and JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::Cycling => "cycling",
            Self::Driving => "driving",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`TransportMode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown transport mode {0:?} (expected walking, cycling or driving)")]
pub struct TransportModeParseError(pub String);

impl FromStr for TransportMode {
    type Err = TransportModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TransportModeParseError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TransportMode::Walking, 833.0, 10.0)]
    #[case(TransportMode::Cycling, 1_000.0, 4.0)]
    #[case(TransportMode::Driving, 1_000.0, 2.0)]
    fn minutes_divide_distance_by_speed(
        #[case] mode: TransportMode,
        #[case] metres: f64,
        #[case] minutes: f64,
    ) {
        assert!((mode.travel_minutes(metres) - minutes).abs() < 1e-9);
    }

    #[rstest]
    fn zero_distance_takes_no_time() {
        for mode in TransportMode::ALL {
            assert_eq!(mode.travel_minutes(0.0), 0.0);
        }
    }

    #[rstest]
    #[case("walking", TransportMode::Walking)]
    #[case("Cycling", TransportMode::Cycling)]
    #[case(" DRIVING ", TransportMode::Driving)]
    fn parses_case_insensitively(#[case] input: &str, #[case] expected: TransportMode) {
        assert_eq!(input.parse::<TransportMode>(), Ok(expected));
    }

    #[rstest]
    fn rejects_unknown_mode() {
        let err = "teleport"
            .parse::<TransportMode>()
            .expect_err("unknown mode should fail");
        assert_eq!(err, TransportModeParseError("teleport".to_owned()));
    }

    #[rstest]
    fn display_round_trips_through_from_str() {
        for mode in TransportMode::ALL {
            assert_eq!(mode.to_string().parse::<TransportMode>(), Ok(mode));
        }
    }
}
