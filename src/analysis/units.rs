//! Time unit normalization.
//!
//! Picks a display unit for a millisecond magnitude so that reported
//! values stay readable across recordings that run for milliseconds
//! or for hours.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display unit for a normalized time value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Microseconds.
    #[serde(rename = "µs")]
    Micros,
    /// Milliseconds.
    #[serde(rename = "ms")]
    Millis,
    /// Seconds.
    #[serde(rename = "sec")]
    Secs,
    /// Minutes.
    #[serde(rename = "min")]
    Mins,
    /// Hours.
    #[serde(rename = "hr")]
    Hours,
}

impl TimeUnit {
    /// Returns the unit's display symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            TimeUnit::Micros => "µs",
            TimeUnit::Millis => "ms",
            TimeUnit::Secs => "sec",
            TimeUnit::Mins => "min",
            TimeUnit::Hours => "hr",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

const MS_PER_HOUR: f64 = 3_600_000.0;
const MS_PER_MINUTE: f64 = 60_000.0;
const MS_PER_SECOND: f64 = 1_000.0;

/// Chooses a multiplier and unit for a value expressed in milliseconds.
///
/// Hours and minutes are selected inclusively (`>=`), seconds and
/// milliseconds strictly (`>`). Anything at or below one millisecond
/// is reported in microseconds.
pub fn normalize_units(value_ms: f64) -> (f64, TimeUnit) {
    if value_ms >= MS_PER_HOUR {
        (1.0 / MS_PER_HOUR, TimeUnit::Hours)
    } else if value_ms >= MS_PER_MINUTE {
        (1.0 / MS_PER_MINUTE, TimeUnit::Mins)
    } else if value_ms > MS_PER_SECOND {
        (1.0 / MS_PER_SECOND, TimeUnit::Secs)
    } else if value_ms > 1.0 {
        (1.0, TimeUnit::Millis)
    } else {
        (1000.0, TimeUnit::Micros)
    }
}

/// Chooses a multiplier and unit for a frame gap expressed in seconds.
///
/// Used to scale deviation traces, whose raw values are seconds.
pub fn deviation_unit(time_gap_s: f64) -> (f64, TimeUnit) {
    if time_gap_s > 1.0 {
        (1.0, TimeUnit::Secs)
    } else if time_gap_s * 1000.0 > 1.0 {
        (1000.0, TimeUnit::Millis)
    } else {
        (1_000_000.0, TimeUnit::Micros)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(normalize_units(999.999).1, TimeUnit::Millis);
        assert_eq!(normalize_units(1000.0).1, TimeUnit::Millis);
        assert_eq!(normalize_units(1000.001).1, TimeUnit::Secs);
        assert_eq!(normalize_units(59_999.0).1, TimeUnit::Secs);
        assert_eq!(normalize_units(60_000.0).1, TimeUnit::Mins);
        assert_eq!(normalize_units(3_599_999.0).1, TimeUnit::Mins);
        assert_eq!(normalize_units(3_600_000.0).1, TimeUnit::Hours);
    }

    #[test]
    fn test_one_millisecond_is_micros() {
        let (multiplier, unit) = normalize_units(1.0);
        assert_eq!(unit, TimeUnit::Micros);
        assert_eq!(multiplier, 1000.0);

        assert_eq!(normalize_units(1.0001).1, TimeUnit::Millis);
        assert_eq!(normalize_units(0.0).1, TimeUnit::Micros);
    }

    #[test]
    fn test_multipliers_convert_to_unit() {
        let (m, _) = normalize_units(120_000.0);
        assert!((120_000.0 * m - 2.0).abs() < 1e-12);

        let (m, _) = normalize_units(7_200_000.0);
        assert!((7_200_000.0 * m - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_deviation_unit() {
        assert_eq!(deviation_unit(2.0), (1.0, TimeUnit::Secs));
        assert_eq!(deviation_unit(1.0 / 30.0), (1000.0, TimeUnit::Millis));
        assert_eq!(deviation_unit(0.0005), (1_000_000.0, TimeUnit::Micros));
        // Exactly one second is not strictly above the seconds threshold.
        assert_eq!(deviation_unit(1.0).1, TimeUnit::Millis);
    }

    #[test]
    fn test_display_symbols() {
        assert_eq!(TimeUnit::Micros.to_string(), "µs");
        assert_eq!(TimeUnit::Hours.to_string(), "hr");
    }
}
