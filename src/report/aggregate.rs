//! Cross-recording comparison.

use super::Analyzable;
use serde::{Deserialize, Serialize};

/// A single bar, optionally with a symmetric error bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Recording name.
    pub label: String,
    /// Bar height.
    pub value: f64,
    /// Half-height of the error bar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<f64>,
}

/// A labelled bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    /// Chart title.
    pub title: String,
    /// Value axis label.
    pub y_label: String,
    /// One bar per recording, in input order.
    pub bars: Vec<Bar>,
}

/// Combines the summaries of several recordings.
pub struct Aggregator<'a, A: Analyzable> {
    recordings: &'a [A],
}

impl<'a, A: Analyzable> Aggregator<'a, A> {
    /// Aggregates over `recordings`.
    pub fn new(recordings: &'a [A]) -> Self {
        Self { recordings }
    }

    /// Mean frame interval per recording, with the standard deviation
    /// as error bar. Degenerate recordings are left out.
    pub fn mean_deviation_bars(&self) -> BarChart {
        let bars = self
            .recordings
            .iter()
            .filter_map(|r| {
                let summary = r.summary();
                summary.mean_interval_ms.map(|mean| Bar {
                    label: r.name().to_string(),
                    value: mean,
                    error: Some(summary.std_dev_ms),
                })
            })
            .collect();

        BarChart {
            title: "Mean Frame Interval".to_string(),
            y_label: "Interval [ms]".to_string(),
            bars,
        }
    }

    /// Estimated dropped frames per recording.
    pub fn dropped_frame_bars(&self) -> BarChart {
        let bars = self
            .recordings
            .iter()
            .filter_map(|r| {
                r.summary().estimated_dropped_frames.map(|dropped| Bar {
                    label: r.name().to_string(),
                    value: dropped as f64,
                    error: None,
                })
            })
            .collect();

        BarChart {
            title: "Dropped Frames".to_string(),
            y_label: "Dropped Frames".to_string(),
            bars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisError, Summary, TimeUnit};
    use crate::report::{NumericSeries, SeriesKind};

    /// Stand-in recording with a fixed summary.
    struct Fixed {
        name: String,
        summary: Summary,
    }

    impl Fixed {
        fn new(name: &str, mean: Option<f64>, std_dev_ms: f64, dropped: Option<u64>) -> Self {
            Self {
                name: name.to_string(),
                summary: Summary {
                    total_duration_ms: 1000.0,
                    frame_count: 30,
                    framerate_hz: mean.map(|m| 1000.0 / m),
                    mean_interval_ms: mean,
                    std_dev_value: std_dev_ms,
                    std_dev_unit: TimeUnit::Millis,
                    std_dev_ms,
                    estimated_dropped_frames: dropped,
                },
            }
        }
    }

    impl Analyzable for Fixed {
        fn name(&self) -> &str {
            &self.name
        }

        fn summary(&self) -> &Summary {
            &self.summary
        }

        fn series(&self, _kind: SeriesKind) -> Result<NumericSeries, AnalysisError> {
            unimplemented!("not used by the aggregator")
        }
    }

    #[test]
    fn test_mean_deviation_bars() {
        let recordings = vec![
            Fixed::new("1080p @ 30", Some(33.3), 1.5, Some(2)),
            Fixed::new("stalled", None, 0.0, None),
            Fixed::new("480p @ 120", Some(8.3), 0.4, Some(11)),
        ];
        let chart = Aggregator::new(&recordings).mean_deviation_bars();

        assert_eq!(chart.bars.len(), 2);
        assert_eq!(chart.bars[0].label, "1080p @ 30");
        assert_eq!(chart.bars[0].value, 33.3);
        assert_eq!(chart.bars[0].error, Some(1.5));
        assert_eq!(chart.bars[1].label, "480p @ 120");
    }

    #[test]
    fn test_dropped_frame_bars() {
        let recordings = vec![
            Fixed::new("a", Some(33.3), 1.0, Some(2)),
            Fixed::new("b", Some(16.7), 1.0, Some(0)),
        ];
        let chart = Aggregator::new(&recordings).dropped_frame_bars();

        let values: Vec<f64> = chart.bars.iter().map(|b| b.value).collect();
        assert_eq!(values, vec![2.0, 0.0]);
        assert!(chart.bars.iter().all(|b| b.error.is_none()));
    }
}
