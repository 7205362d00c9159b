//! Human-readable report rendering.

use super::{Analyzable, BarChart, Recording};
use crate::analysis::StdDev;
use std::fmt;

/// Formats a standard deviation as `Standard Deviation: <value> <unit>`.
pub fn render_std_dev(std_dev: &StdDev) -> String {
    format!("Standard Deviation: {:.6} {}", std_dev.value, std_dev.unit)
}

/// Renders the summary and slot diagnostics of one recording.
pub fn render_info(recording: &Recording) -> String {
    Info(recording).to_string()
}

/// Renders the intervals of a recording, one per line.
pub fn render_deltas(recording: &Recording) -> String {
    Deltas(recording).to_string()
}

/// Renders a bar chart as an aligned table.
pub fn render_bars(chart: &BarChart) -> String {
    Bars(chart).to_string()
}

struct Info<'a>(&'a Recording);

impl fmt::Display for Info<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recording = self.0;
        let summary = recording.summary();
        let analyzer = recording.analyzer();

        writeln!(f, "{}", recording.name())?;
        writeln!(f, "  Sec: {}", summary.total_duration_secs())?;
        writeln!(f, "  Frames: {}", summary.frame_count)?;
        match summary.framerate_hz {
            Some(hz) => writeln!(f, "  Framerate: {}", hz)?,
            None => writeln!(f, "  Framerate: undefined")?,
        }
        writeln!(
            f,
            "  {}",
            render_std_dev(&analyzer.compute_standard_deviation())
        )?;

        if let Ok(drops) = analyzer.drop_classification() {
            writeln!(f, "  Dropped: {}", drops.dropped_slots)?;
            writeln!(f, "  Extra: {}", drops.crowded_slots)?;
            writeln!(
                f,
                "  {}",
                if drops.balanced { "Balanced" } else { "Unbalanced" }
            )?;
        }
        if let Some(estimate) = summary.estimated_dropped_frames {
            writeln!(f, "  Estimated Dropped Frames: {}", estimate)?;
        }
        Ok(())
    }
}

struct Deltas<'a>(&'a Recording);

impl fmt::Display for Deltas<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for delta in self.0.analyzer().compute_intervals().as_slice() {
            writeln!(f, "{}", delta)?;
        }
        Ok(())
    }
}

struct Bars<'a>(&'a BarChart);

impl fmt::Display for Bars<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chart = self.0;
        let width = chart.bars.iter().map(|b| b.label.len()).max().unwrap_or(0);

        writeln!(f, "{} ({})", chart.title, chart.y_label)?;
        for bar in &chart.bars {
            match bar.error {
                Some(error) => writeln!(
                    f,
                    "  {:<width$}  {:.3} ± {:.3}",
                    bar.label,
                    bar.value,
                    error,
                    width = width
                )?,
                None => writeln!(f, "  {:<width$}  {}", bar.label, bar.value, width = width)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::TimingAnalyzer;
    use crate::report::Bar;

    fn recording(ts: Vec<f64>) -> Recording {
        Recording::new("720p_60", TimingAnalyzer::from_millis(ts).unwrap())
    }

    #[test]
    fn test_std_dev_line() {
        let sd = StdDev::from_variance(4.0);
        assert_eq!(render_std_dev(&sd), "Standard Deviation: 2.000000 ms");
    }

    #[test]
    fn test_info_block() {
        let text = render_info(&recording(vec![0.0, 40.0, 110.0, 120.0, 160.0, 200.0]));

        assert!(text.starts_with("720p_60\n"));
        assert!(text.contains("  Sec: 0.2\n"));
        assert!(text.contains("  Frames: 5\n"));
        assert!(text.contains("  Framerate: 25\n"));
        assert!(text.contains("  Dropped: 1\n"));
        assert!(text.contains("  Extra: 1\n"));
        assert!(text.contains("  Balanced\n"));
    }

    #[test]
    fn test_info_block_for_degenerate_recording() {
        let text = render_info(&recording(vec![3.0, 3.0]));

        assert!(text.contains("  Framerate: undefined\n"));
        assert!(text.contains("  Standard Deviation: 0.000000 µs\n"));
        assert!(!text.contains("Dropped"));
    }

    #[test]
    fn test_info_block_for_large_clock_origin() {
        let text = render_info(&recording(vec![1e20, 1e20 + 65536.0, 1e20 + 131072.0]));

        assert!(text.contains("  Frames: 2\n"));
        assert!(text.contains("  Standard Deviation: 0.000000 µs\n"));
        assert!(!text.contains("Dropped:"));
    }

    #[test]
    fn test_deltas() {
        let text = render_deltas(&recording(vec![0.0, 33.5, 67.0]));
        assert_eq!(text, "33.5\n33.5\n");
    }

    #[test]
    fn test_bars() {
        let chart = BarChart {
            title: "Mean Frame Interval".to_string(),
            y_label: "Interval [ms]".to_string(),
            bars: vec![
                Bar {
                    label: "a".to_string(),
                    value: 33.25,
                    error: Some(0.5),
                },
                Bar {
                    label: "longer".to_string(),
                    value: 2.0,
                    error: None,
                },
            ],
        };
        let text = render_bars(&chart);

        assert!(text.contains("  a       33.250 ± 0.500\n"));
        assert!(text.contains("  longer  2\n"));
    }
}
