//! Prometheus exposition of recording statistics.
//!
//! Each analyzed recording becomes one set of gauges labelled with the
//! recording's name, so batch results can be pushed to or scraped into
//! existing dashboards.
//!
//! # Metrics Exposed
//!
//! - `frame_timing_frames` - Number of frame intervals
//! - `frame_timing_duration_seconds` - Total recording duration
//! - `frame_timing_framerate_hz` - Mean framerate
//! - `frame_timing_mean_interval_ms` - Mean frame interval
//! - `frame_timing_std_dev_ms` - Standard deviation of frame intervals
//! - `frame_timing_dropped_slots` - Empty frame slots
//! - `frame_timing_extra_hits` - Timestamps in crowded frame slots
//! - `frame_timing_balanced` - 1 when extra hits are twice the dropped slots
//! - `frame_timing_estimated_dropped_frames` - Gap-based dropped frame estimate
//!
//! # Example
//!
//! ```
//! use frame_timing::{metrics::MetricsRegistry, report::Recording, TimingAnalyzer};
//!
//! let analyzer = TimingAnalyzer::from_millis(vec![0.0, 33.0, 67.0, 100.0]).unwrap();
//! let registry = MetricsRegistry::new().unwrap();
//! registry.observe(&Recording::new("clip", analyzer));
//!
//! assert!(registry.encode().unwrap().contains("frame_timing_frames"));
//! ```

mod collector;

pub use collector::{MetricsError, MetricsRegistry};
