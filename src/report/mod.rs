//! Reporting on analyzed recordings.
//!
//! Nothing here draws anything. Analyses are turned into labelled
//! numeric series and bar charts, then rendered as text or JSON for an
//! external plotting tool.

mod aggregate;
mod json;
mod series;
mod text;

pub use aggregate::{Aggregator, Bar, BarChart};
pub use json::{JsonDrops, JsonRecording, JsonReport};
pub use series::{Analyzable, LineStyle, NumericSeries, Recording, SeriesKind, SeriesLine};
pub use text::{render_bars, render_deltas, render_info, render_std_dev};
