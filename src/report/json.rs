//! JSON report documents for renderers and scripts.

use super::{Analyzable, BarChart, NumericSeries, Recording};
use crate::analysis::{DropClassification, Summary};
use crate::config::RenderConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Slot counts without the per-slot offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonDrops {
    /// Framerate the slots were sized for.
    pub framerate_hz: f64,
    /// Number of slots.
    pub slots: usize,
    /// Empty slots.
    pub dropped_slots: usize,
    /// Slots with more than one timestamp.
    pub crowded_slots: usize,
    /// Entries in crowded slots.
    pub extra_hits: usize,
    /// Whether extra hits are twice the dropped slots.
    pub balanced: bool,
}

impl From<&DropClassification> for JsonDrops {
    fn from(drops: &DropClassification) -> Self {
        Self {
            framerate_hz: drops.framerate_hz,
            slots: drops.slot_count(),
            dropped_slots: drops.dropped_slots,
            crowded_slots: drops.crowded_slots,
            extra_hits: drops.extra_hits,
            balanced: drops.balanced,
        }
    }
}

/// Summary of a single recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRecording {
    /// Recording name.
    pub name: String,
    /// Aggregate statistics.
    pub summary: Summary,
    /// Slot counts, absent when the framerate is undefined or the
    /// schedule is too long.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drops: Option<JsonDrops>,
}

impl From<&Recording> for JsonRecording {
    fn from(recording: &Recording) -> Self {
        Self {
            name: recording.name().to_string(),
            summary: recording.summary().clone(),
            drops: recording
                .analyzer()
                .drop_classification()
                .ok()
                .map(JsonDrops::from),
        }
    }
}

/// Top-level JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    /// Creation time.
    pub generated_at: DateTime<Utc>,
    /// Crate version that produced the report.
    pub version: String,
    /// Figure hints for the renderer.
    pub render: RenderConfig,
    /// Per-recording summaries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recordings: Vec<JsonRecording>,
    /// Plot-ready series.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<NumericSeries>,
    /// Cross-recording bar charts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub charts: Vec<BarChart>,
}

impl JsonReport {
    /// Starts an empty report stamped with the current time.
    pub fn new(render: RenderConfig) -> Self {
        Self {
            generated_at: Utc::now(),
            version: crate::VERSION.to_string(),
            render,
            recordings: Vec::new(),
            series: Vec::new(),
            charts: Vec::new(),
        }
    }

    /// Appends the summary of `recording`.
    pub fn add_recording(&mut self, recording: &Recording) {
        self.recordings.push(JsonRecording::from(recording));
    }

    /// Appends a series.
    pub fn add_series(&mut self, series: NumericSeries) {
        self.series.push(series);
    }

    /// Appends a chart.
    pub fn add_chart(&mut self, chart: BarChart) {
        self.charts.push(chart);
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
