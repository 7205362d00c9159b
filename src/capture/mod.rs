//! Timestamp input for recorded video.
//!
//! The recorder writes one millisecond timestamp per captured frame.
//! This module turns those logs into validated, immutable series; it
//! never talks to camera hardware itself.

mod loader;
mod series;

pub use loader::{recording_name, LogError, LogLoader, TIMESTAMP_LOG_SUFFIX};
pub use series::{TimestampSeries, MIN_TIMESTAMPS};
