//! Ordered frame timestamps for a single recording.

use crate::analysis::AnalysisError;

/// Minimum number of timestamps needed to form one frame interval.
pub const MIN_TIMESTAMPS: usize = 2;

/// Frame capture timestamps in milliseconds, in capture order.
///
/// Every value is finite and non-negative, and there are at least two
/// of them. The series is immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct TimestampSeries {
    millis: Vec<f64>,
}

impl TimestampSeries {
    /// Validates and wraps a sequence of millisecond timestamps.
    pub fn new(millis: Vec<f64>) -> Result<Self, AnalysisError> {
        if millis.len() < MIN_TIMESTAMPS {
            return Err(AnalysisError::InsufficientData {
                found: millis.len(),
            });
        }

        if let Some((index, &value)) = millis
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(AnalysisError::InvalidTimestamp { index, value });
        }

        Ok(Self { millis })
    }

    /// Returns the timestamps as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.millis
    }

    /// Returns the number of timestamps.
    #[inline]
    pub fn len(&self) -> usize {
        self.millis.len()
    }

    /// Always false for a validated series.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.millis.is_empty()
    }

    /// Returns the first timestamp.
    #[inline]
    pub fn first(&self) -> f64 {
        self.millis[0]
    }

    /// Returns the last timestamp.
    #[inline]
    pub fn last(&self) -> f64 {
        self.millis[self.millis.len() - 1]
    }

    /// Telescoping duration, `last - first`, in milliseconds.
    pub fn span_ms(&self) -> f64 {
        self.last() - self.first()
    }
}
