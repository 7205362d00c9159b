//! Frame-timing analysis.
//!
//! Turns a recording's millisecond timestamps into interval statistics,
//! framerate, a unit-normalized standard deviation, and two dropped-frame
//! diagnostics: slot occupancy and a walk against an ideal schedule.
//! Everything here is pure and synchronous; analyzers never share state.

mod analyzer;
mod deviation;
mod drops;
mod intervals;
mod summary;
mod units;

pub use analyzer::{AnalysisError, ScaledDeltas, TimingAnalyzer};
pub use deviation::{DeviationPoint, DeviationTrace, FrameStatus};
pub use drops::{DropClassification, MAX_SLOTS};
pub use intervals::IntervalSeries;
pub use summary::{estimate_dropped_frames, Framerate, StdDev, Summary};
pub use units::{deviation_unit, normalize_units, TimeUnit};
