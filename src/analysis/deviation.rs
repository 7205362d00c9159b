//! Deviation of captured frames from an ideal, evenly spaced schedule.
//!
//! Frames are walked against windows of one target period each. A frame
//! inside the current window is a hit. A frame at least one full period
//! past the window means the window's frame never came: the window is
//! marked dropped and the same frame is examined again against the next
//! window. A frame at least one full period before the window is an
//! extra frame; it is consumed without moving the window.
//!
//! The schedule starts at t=0, so the walk takes one step per frame plus
//! one per window up to the latest timestamp. Its length follows the
//! recording's span times the target framerate rather than the number of
//! frames, and schedules longer than [`MAX_SLOTS`] windows are rejected.

use super::{deviation_unit, AnalysisError, TimeUnit, MAX_SLOTS};
use crate::capture::TimestampSeries;
use serde::{Deserialize, Serialize};

/// Classification of one step of the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameStatus {
    /// Frame found in its expected window.
    Hit,
    /// Window passed with no frame.
    Dropped,
    /// Frame arrived a full period or more ahead of its window.
    Extra,
}

/// One classified point, scaled to the trace's unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviationPoint {
    /// Step counter of the walk (frames plus dropped windows).
    pub index: usize,
    /// Deviation from the window start, in the trace's unit.
    ///
    /// Dropped and extra points carry `+gap` and `-gap` respectively.
    pub value: f64,
}

/// Hit, dropped and extra points produced by walking a recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviationTrace {
    /// Framerate of the ideal schedule.
    pub target_framerate_hz: f64,
    /// Unit of every point value.
    pub unit: TimeUnit,
    /// Frames found inside their window.
    pub hits: Vec<DeviationPoint>,
    /// Windows that passed without a frame.
    pub dropped: Vec<DeviationPoint>,
    /// Frames a full period or more ahead of their window.
    pub extra: Vec<DeviationPoint>,
}

impl DeviationTrace {
    /// Walks `series` against a schedule of `target_framerate_hz`.
    ///
    /// Fails with [`AnalysisError::ScheduleTooLong`] when the latest
    /// timestamp lies more than [`MAX_SLOTS`] windows past t=0.
    pub fn walk(series: &TimestampSeries, target_framerate_hz: f64) -> Result<Self, AnalysisError> {
        if !target_framerate_hz.is_finite() || target_framerate_hz <= 0.0 {
            return Err(AnalysisError::InvalidFramerate(target_framerate_hz));
        }

        let time_gap = 1.0 / target_framerate_hz;
        let latest = series.as_slice().iter().copied().fold(0.0, f64::max);
        let windows = (latest / 1000.0 / time_gap).floor() + 1.0;
        if windows > MAX_SLOTS as f64 {
            return Err(AnalysisError::ScheduleTooLong {
                windows,
                max: MAX_SLOTS,
            });
        }
        let (multiplier, unit) = deviation_unit(time_gap);
        let timestamps = series.as_slice();

        let mut trace = Self {
            target_framerate_hz,
            unit,
            hits: Vec::new(),
            dropped: Vec::new(),
            extra: Vec::new(),
        };

        let mut correct_time = 0.0;
        let mut cursor = 0;
        let mut count = 0;

        while cursor < timestamps.len() {
            let time = timestamps[cursor] / 1000.0;

            let (status, value) = if time >= correct_time + time_gap {
                (FrameStatus::Dropped, time_gap)
            } else if time <= correct_time - time_gap {
                (FrameStatus::Extra, -time_gap)
            } else {
                (FrameStatus::Hit, time - correct_time)
            };

            let point = DeviationPoint {
                index: count,
                value: value * multiplier,
            };
            count += 1;

            match status {
                FrameStatus::Hit => {
                    trace.hits.push(point);
                    cursor += 1;
                    correct_time += time_gap;
                }
                // The frame stays under the cursor for the next window.
                FrameStatus::Dropped => {
                    trace.dropped.push(point);
                    correct_time += time_gap;
                }
                FrameStatus::Extra => {
                    trace.extra.push(point);
                    cursor += 1;
                }
            }
        }

        tracing::debug!(
            target_framerate_hz,
            hits = trace.hits.len(),
            dropped = trace.dropped.len(),
            extra = trace.extra.len(),
            "Walked deviation schedule"
        );

        Ok(trace)
    }

    /// Number of walk steps (hits + dropped + extra).
    pub fn steps(&self) -> usize {
        self.hits.len() + self.dropped.len() + self.extra.len()
    }

    /// Largest absolute hit deviation, in the trace's unit.
    pub fn max_abs_hit_deviation(&self) -> f64 {
        self.hits
            .iter()
            .map(|p| p.value.abs())
            .fold(0.0, f64::max)
    }
}
