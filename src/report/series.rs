//! Plot-ready numeric series.
//!
//! Series carry their own axis labels so a renderer can draw them
//! without knowing anything about frame timing.

use crate::analysis::{AnalysisError, DeviationPoint, DeviationTrace, Summary, TimingAnalyzer};
use serde::{Deserialize, Serialize};

/// How a line should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// Unconnected markers.
    Points,
    /// Connected line.
    Line,
}

/// One drawable line of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesLine {
    /// Legend entry.
    pub name: String,
    /// Drawing style.
    pub style: LineStyle,
    /// X coordinates.
    pub x: Vec<f64>,
    /// Y coordinates, same length as `x`.
    pub y: Vec<f64>,
}

impl SeriesLine {
    /// Creates a line from paired coordinates.
    pub fn new(name: impl Into<String>, style: LineStyle, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            style,
            x,
            y,
        }
    }

    fn from_points(name: &str, points: &[DeviationPoint]) -> Self {
        let (x, y) = points.iter().map(|p| (p.index as f64, p.value)).unzip();
        Self::new(name, LineStyle::Points, x, y)
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the line has no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// A titled set of lines sharing axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSeries {
    /// Plot title.
    pub title: String,
    /// X axis label.
    pub x_label: String,
    /// Y axis label, including the unit where there is one.
    pub y_label: String,
    /// Lines drawn on the shared axes.
    pub lines: Vec<SeriesLine>,
}

/// Which series to produce for a recording.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesKind {
    /// Instantaneous framerate per frame over time.
    Framerate,
    /// Gap between consecutive timestamps.
    TimestampDeltas,
    /// Deviation from a schedule at the given framerate.
    Deviation(f64),
    /// Deviation from a schedule at the recording's own framerate.
    RelativeDeviation,
}

/// Anything that can report a summary and plot-ready series.
///
/// Aggregation across recordings works only through this interface.
pub trait Analyzable {
    /// Display name of the recording.
    fn name(&self) -> &str;

    /// Aggregate statistics.
    fn summary(&self) -> &Summary;

    /// Builds the requested series.
    fn series(&self, kind: SeriesKind) -> Result<NumericSeries, AnalysisError>;
}

/// A named recording and its analysis.
#[derive(Debug, Clone)]
pub struct Recording {
    name: String,
    analyzer: TimingAnalyzer,
}

impl Recording {
    /// Names an analyzed recording.
    pub fn new(name: impl Into<String>, analyzer: TimingAnalyzer) -> Self {
        Self {
            name: name.into(),
            analyzer,
        }
    }

    /// The underlying analysis.
    pub fn analyzer(&self) -> &TimingAnalyzer {
        &self.analyzer
    }
}

impl Analyzable for Recording {
    fn name(&self) -> &str {
        &self.name
    }

    fn summary(&self) -> &Summary {
        self.analyzer.summary()
    }

    fn series(&self, kind: SeriesKind) -> Result<NumericSeries, AnalysisError> {
        match kind {
            SeriesKind::Framerate => {
                let (x, y) = self.analyzer.framerate_per_frame().into_iter().unzip();
                Ok(NumericSeries {
                    title: self.name.clone(),
                    x_label: "Time [sec]".to_string(),
                    y_label: "Framerate".to_string(),
                    lines: vec![SeriesLine::new("framerate", LineStyle::Points, x, y)],
                })
            }
            SeriesKind::TimestampDeltas => {
                let deltas = self.analyzer.timestamp_deltas();
                let x = (0..deltas.values.len()).map(|i| i as f64).collect();
                Ok(NumericSeries {
                    title: self.name.clone(),
                    x_label: "Timestamp".to_string(),
                    y_label: deltas.unit.to_string(),
                    lines: vec![SeriesLine::new("delta", LineStyle::Line, x, deltas.values)],
                })
            }
            SeriesKind::Deviation(target_hz) => {
                let trace = self.analyzer.deviation_from_target(target_hz)?;
                Ok(deviation_series(&self.name, &trace))
            }
            SeriesKind::RelativeDeviation => {
                let trace = self.analyzer.relative_deviation()?;
                Ok(deviation_series(&self.name, &trace))
            }
        }
    }
}

fn deviation_series(title: &str, trace: &DeviationTrace) -> NumericSeries {
    NumericSeries {
        title: title.to_string(),
        x_label: "Frame".to_string(),
        y_label: format!("Time Deviation from Expected [{}]", trace.unit),
        lines: vec![
            SeriesLine::from_points("hit", &trace.hits),
            SeriesLine::from_points("dropped", &trace.dropped),
            SeriesLine::from_points("extra", &trace.extra),
        ],
    }
}
