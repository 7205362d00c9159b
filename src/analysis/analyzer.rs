//! Frame-timing analysis over one recording.

use super::{
    normalize_units, DeviationTrace, DropClassification, Framerate, IntervalSeries, StdDev,
    Summary, TimeUnit,
};
use crate::capture::TimestampSeries;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors raised by timing analysis.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Fewer than two timestamps.
    #[error("need at least 2 timestamps to form an interval, found {found}")]
    InsufficientData {
        /// Number of timestamps supplied.
        found: usize,
    },

    /// Mean interval is zero or negative.
    #[error("mean frame interval is {mean_interval_ms} ms; framerate is undefined")]
    DegenerateTiming {
        /// The offending mean interval.
        mean_interval_ms: f64,
    },

    /// A timestamp is NaN, infinite or negative.
    #[error("timestamp {index} is invalid: {value}")]
    InvalidTimestamp {
        /// Zero-based position in the series.
        index: usize,
        /// The rejected value.
        value: f64,
    },

    /// A framerate argument is not finite and positive.
    #[error("framerate must be finite and positive, got {0}")]
    InvalidFramerate(f64),

    /// Slotting the recording from t=0 would need too many windows.
    #[error("schedule needs {windows} windows, limit is {max}")]
    ScheduleTooLong {
        /// Windows needed to reach the latest timestamp.
        windows: f64,
        /// Allocation limit.
        max: usize,
    },
}

/// Timestamp deltas scaled to a readable unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledDeltas {
    /// Unit picked from the first interval's magnitude.
    pub unit: TimeUnit,
    /// Every interval, multiplied into `unit`.
    pub values: Vec<f64>,
}

/// Immutable timing analysis of a single recording.
///
/// Interval statistics are computed once at construction. The slot
/// classification at the recording's own framerate is computed on first
/// request and cached. Every accessor returns the same value on every call.
#[derive(Debug, Clone)]
pub struct TimingAnalyzer {
    timestamps: TimestampSeries,
    intervals: IntervalSeries,
    framerate: Result<Framerate, AnalysisError>,
    std_dev: StdDev,
    drops: OnceLock<Result<DropClassification, AnalysisError>>,
    summary: Summary,
}

impl TimingAnalyzer {
    /// Analyzes a validated timestamp series.
    ///
    /// A degenerate recording (zero mean interval) still constructs;
    /// only framerate-dependent operations fail afterwards.
    pub fn new(timestamps: TimestampSeries) -> Self {
        let intervals = IntervalSeries::from_timestamps(&timestamps);
        let framerate = Framerate::from_mean_interval(intervals.mean_ms());
        let std_dev = StdDev::from_variance(intervals.variance_ms2());

        if let Err(e) = &framerate {
            tracing::warn!(error = %e, "Framerate-dependent statistics unavailable");
        }

        let summary = Summary::new(&intervals, framerate.as_ref().ok(), &std_dev);

        tracing::debug!(
            frames = summary.frame_count,
            duration_ms = summary.total_duration_ms,
            framerate_hz = ?summary.framerate_hz,
            std_dev = summary.std_dev_value,
            unit = %summary.std_dev_unit,
            "Analyzed recording"
        );

        Self {
            timestamps,
            intervals,
            framerate,
            std_dev,
            drops: OnceLock::new(),
            summary,
        }
    }

    /// Validates raw millisecond timestamps and analyzes them.
    pub fn from_millis(millis: Vec<f64>) -> Result<Self, AnalysisError> {
        Ok(Self::new(TimestampSeries::new(millis)?))
    }

    /// The analyzed timestamps.
    pub fn timestamps(&self) -> &TimestampSeries {
        &self.timestamps
    }

    /// Frame intervals and their total duration.
    pub fn compute_intervals(&self) -> &IntervalSeries {
        &self.intervals
    }

    /// Mean interval and framerate.
    pub fn compute_framerate(&self) -> Result<Framerate, AnalysisError> {
        self.framerate.clone()
    }

    /// Population standard deviation of the intervals.
    pub fn compute_standard_deviation(&self) -> StdDev {
        self.std_dev
    }

    /// Aggregate statistics.
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Slot classification at the recording's own framerate.
    pub fn drop_classification(&self) -> Result<&DropClassification, AnalysisError> {
        self.drops
            .get_or_init(|| {
                let framerate = self.framerate.clone()?;
                DropClassification::classify(&self.timestamps, framerate.framerate_hz)
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Slot classification at an arbitrary framerate.
    pub fn classify_drops(&self, framerate_hz: f64) -> Result<DropClassification, AnalysisError> {
        DropClassification::classify(&self.timestamps, framerate_hz)
    }

    /// Walks the recording against an ideal schedule at `target_framerate_hz`.
    pub fn deviation_from_target(
        &self,
        target_framerate_hz: f64,
    ) -> Result<DeviationTrace, AnalysisError> {
        DeviationTrace::walk(&self.timestamps, target_framerate_hz)
    }

    /// Deviation from a schedule at the recording's own framerate.
    pub fn relative_deviation(&self) -> Result<DeviationTrace, AnalysisError> {
        let framerate = self.compute_framerate()?;
        self.deviation_from_target(framerate.framerate_hz)
    }

    /// Instantaneous framerate at each frame after the first.
    ///
    /// Returns `(time_secs, framerate_hz)` pairs; zero-length intervals
    /// have no defined framerate and are left out.
    pub fn framerate_per_frame(&self) -> Vec<(f64, f64)> {
        let points: Vec<(f64, f64)> = self
            .timestamps
            .as_slice()
            .windows(2)
            .filter(|w| w[1] > w[0])
            .map(|w| (w[1] / 1000.0, 1000.0 / (w[1] - w[0])))
            .collect();

        let skipped = self.intervals.len() - points.len();
        if skipped > 0 {
            tracing::debug!(skipped, "Skipped non-positive intervals in framerate series");
        }
        points
    }

    /// Intervals scaled by the unit of the first interval.
    pub fn timestamp_deltas(&self) -> ScaledDeltas {
        let (multiplier, unit) = normalize_units(self.intervals.as_slice()[0]);
        ScaledDeltas {
            unit,
            values: self
                .intervals
                .as_slice()
                .iter()
                .map(|&d| d * multiplier)
                .collect(),
        }
    }
}
