//! Frame Timing Analysis Library
//!
//! Framerate statistics and dropped-frame diagnostics for the timestamp
//! logs a camera recorder writes next to each video.
//!
//! # Architecture
//!
//! The system follows an explicit data flow:
//!
//! ```text
//! capture → analysis → report
//!               ↓
//!            metrics
//! ```
//!
//! - **capture** loads `<video>.timestamp.log` files into validated series
//! - **analysis** computes intervals, framerate, standard deviation and
//!   dropped/extra frame classifications
//! - **report** turns analyses into labelled series, bar charts, text and JSON
//! - **metrics** exposes summaries as Prometheus gauges
//!
//! # Example
//!
//! ```
//! use frame_timing::{capture::LogLoader, TimingAnalyzer, TimeUnit};
//!
//! let series = LogLoader::new().parse_str("0\n33\n67\n100\n133\n").unwrap();
//! let analyzer = TimingAnalyzer::new(series);
//!
//! let framerate = analyzer.compute_framerate().unwrap();
//! assert_eq!(framerate.mean_interval_ms, 33.25);
//!
//! let std_dev = analyzer.compute_standard_deviation();
//! assert_eq!(std_dev.unit, TimeUnit::Micros);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod capture;
pub mod config;
pub mod error;
pub mod metrics;
pub mod report;

// Re-export commonly used types at crate root
pub use analysis::{
    AnalysisError, DeviationTrace, DropClassification, Framerate, StdDev, Summary, TimeUnit,
    TimingAnalyzer,
};
pub use capture::{LogError, LogLoader, TimestampSeries};
pub use config::FileConfig;
pub use error::{Error, Result};
pub use report::{Aggregator, Analyzable, NumericSeries, Recording, SeriesKind};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
