//! Summary statistics for a recording.

use super::{normalize_units, AnalysisError, IntervalSeries, TimeUnit};
use serde::{Deserialize, Serialize};

/// Mean frame interval and the framerate it implies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Framerate {
    /// Mean gap between frames in milliseconds.
    pub mean_interval_ms: f64,
    /// Frames per second.
    pub framerate_hz: f64,
}

impl Framerate {
    /// Derives the framerate from a mean interval in milliseconds.
    pub fn from_mean_interval(mean_interval_ms: f64) -> Result<Self, AnalysisError> {
        if !(mean_interval_ms > 0.0) {
            return Err(AnalysisError::DegenerateTiming { mean_interval_ms });
        }

        Ok(Self {
            mean_interval_ms,
            framerate_hz: 1000.0 / mean_interval_ms,
        })
    }

    /// Expected frame gap in milliseconds at this framerate.
    pub fn frame_period_ms(&self) -> f64 {
        1000.0 / self.framerate_hz
    }
}

/// Standard deviation of frame intervals in a normalized unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StdDev {
    /// Deviation expressed in `unit`.
    pub value: f64,
    /// Unit chosen from the variance magnitude.
    pub unit: TimeUnit,
    /// Population variance of the intervals, in ms².
    pub variance_ms2: f64,
}

impl StdDev {
    /// Normalizes the variance first and takes the square root after.
    ///
    /// The unit bucket therefore follows the variance's magnitude, not
    /// the deviation's; reported values depend on this order.
    pub fn from_variance(variance_ms2: f64) -> Self {
        let (multiplier, unit) = normalize_units(variance_ms2);
        Self {
            value: (variance_ms2 * multiplier).sqrt(),
            unit,
            variance_ms2,
        }
    }

    /// Un-normalized deviation in milliseconds.
    pub fn millis(&self) -> f64 {
        self.variance_ms2.sqrt()
    }
}

/// Aggregate statistics for one recording.
///
/// Framerate-dependent fields are `None` when the recording is
/// degenerate (zero mean interval); the rest stay valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Sum of frame intervals in milliseconds.
    pub total_duration_ms: f64,
    /// Number of frame intervals (timestamps minus one).
    pub frame_count: usize,
    /// Frames per second.
    pub framerate_hz: Option<f64>,
    /// Mean frame interval in milliseconds.
    pub mean_interval_ms: Option<f64>,
    /// Standard deviation in `std_dev_unit`.
    pub std_dev_value: f64,
    /// Unit of `std_dev_value`.
    pub std_dev_unit: TimeUnit,
    /// Un-normalized standard deviation in milliseconds.
    pub std_dev_ms: f64,
    /// Frames missing according to the per-interval gap estimate.
    pub estimated_dropped_frames: Option<u64>,
}

impl Summary {
    /// Builds the summary from intervals and the derived statistics.
    pub fn new(
        intervals: &IntervalSeries,
        framerate: Option<&Framerate>,
        std_dev: &StdDev,
    ) -> Self {
        Self {
            total_duration_ms: intervals.total_ms(),
            frame_count: intervals.len(),
            framerate_hz: framerate.map(|f| f.framerate_hz),
            mean_interval_ms: framerate.map(|f| f.mean_interval_ms),
            std_dev_value: std_dev.value,
            std_dev_unit: std_dev.unit,
            std_dev_ms: std_dev.millis(),
            estimated_dropped_frames: framerate.map(|f| estimate_dropped_frames(intervals, f)),
        }
    }

    /// Total duration in seconds.
    pub fn total_duration_secs(&self) -> f64 {
        self.total_duration_ms / 1000.0
    }
}

/// Counts frames missing from over-long gaps.
///
/// An interval spanning `k` whole frame periods, with `k > 1`, is taken
/// to hide `k - 1` missing frames.
pub fn estimate_dropped_frames(intervals: &IntervalSeries, framerate: &Framerate) -> u64 {
    let period_ms = framerate.frame_period_ms();
    intervals
        .as_slice()
        .iter()
        .map(|&gap| (gap / period_ms).floor())
        .filter(|&frames| frames > 1.0)
        .map(|frames| frames as u64 - 1)
        .sum()
}
