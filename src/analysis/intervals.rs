//! Frame intervals derived from consecutive timestamps.

use crate::capture::TimestampSeries;

/// Gaps between consecutive frame timestamps, in milliseconds.
///
/// Holds exactly `timestamps.len() - 1` values.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalSeries {
    intervals: Vec<f64>,
    total_ms: f64,
}

impl IntervalSeries {
    /// Computes `timestamp[i + 1] - timestamp[i]` for every adjacent pair.
    pub fn from_timestamps(series: &TimestampSeries) -> Self {
        let intervals: Vec<f64> = series
            .as_slice()
            .windows(2)
            .map(|w| w[1] - w[0])
            .collect();
        let total_ms = intervals.iter().sum();

        Self {
            intervals,
            total_ms,
        }
    }

    /// Returns the intervals as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.intervals
    }

    /// Number of intervals.
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Always false for intervals of a validated series.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Sum of all intervals in milliseconds.
    #[inline]
    pub fn total_ms(&self) -> f64 {
        self.total_ms
    }

    /// Mean interval in milliseconds.
    pub fn mean_ms(&self) -> f64 {
        self.total_ms / self.intervals.len() as f64
    }

    /// Population variance of the intervals, in ms².
    pub fn variance_ms2(&self) -> f64 {
        let mean = self.mean_ms();
        let sum_sq: f64 = self.intervals.iter().map(|&d| (d - mean).powi(2)).sum();
        sum_sq / self.intervals.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> TimestampSeries {
        TimestampSeries::new(values.to_vec()).unwrap()
    }

    #[test]
    fn test_intervals_of_reference_recording() {
        let intervals = IntervalSeries::from_timestamps(&series(&[0.0, 33.0, 67.0, 100.0, 133.0]));
        assert_eq!(intervals.as_slice(), &[33.0, 34.0, 33.0, 33.0]);
        assert_eq!(intervals.total_ms(), 133.0);
        assert_eq!(intervals.mean_ms(), 33.25);
        assert!((intervals.variance_ms2() - 0.1875).abs() < 1e-12);
    }

    #[test]
    fn test_total_matches_span() {
        let ts = series(&[5.5, 38.2, 71.9, 104.1, 140.0, 171.3]);
        let intervals = IntervalSeries::from_timestamps(&ts);
        assert_eq!(intervals.len(), ts.len() - 1);
        assert!((intervals.total_ms() - ts.span_ms()).abs() < 1e-9);
    }

    #[test]
    fn test_constant_intervals_have_zero_variance() {
        let intervals = IntervalSeries::from_timestamps(&series(&[0.0, 40.0, 80.0, 120.0]));
        assert_eq!(intervals.variance_ms2(), 0.0);
    }
}
