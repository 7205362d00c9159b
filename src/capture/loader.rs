//! Timestamp log loading.
//!
//! A recording's timestamp log holds one floating-point millisecond
//! timestamp per line, in capture order. The recorder names these files
//! `<video>.timestamp.log`, so a bare video path is resolved to its log.

use super::TimestampSeries;
use crate::analysis::AnalysisError;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Suffix the recorder appends to a video path for its timestamp log.
pub const TIMESTAMP_LOG_SUFFIX: &str = ".timestamp.log";

/// Errors raised while reading a timestamp log.
#[derive(Debug, Error)]
pub enum LogError {
    /// The log could not be opened or read.
    #[error("failed to read timestamp log {path}: {source}")]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A line is not a finite, non-negative number.
    #[error("malformed timestamp on line {line}: {content:?}")]
    Malformed {
        /// One-based line number.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },

    /// The parsed timestamps do not form a valid series.
    #[error(transparent)]
    Series(#[from] AnalysisError),
}

/// Reads timestamp logs into validated series.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogLoader;

impl LogLoader {
    /// Creates a loader.
    pub fn new() -> Self {
        Self
    }

    /// Resolves the on-disk log for `path`.
    ///
    /// Uses `path` itself when it exists, otherwise `<path>.timestamp.log`
    /// when that exists. Falls back to `path` so the read error names
    /// what the caller asked for.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_file() {
            return path.to_path_buf();
        }

        let mut candidate = path.as_os_str().to_owned();
        candidate.push(TIMESTAMP_LOG_SUFFIX);
        let candidate = PathBuf::from(candidate);
        if candidate.is_file() {
            tracing::debug!(
                requested = %path.display(),
                resolved = %candidate.display(),
                "Resolved recording to its timestamp log"
            );
            return candidate;
        }

        path.to_path_buf()
    }

    /// Loads and validates the timestamp log for `path`.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<TimestampSeries, LogError> {
        let path = self.resolve(path);
        let file = std::fs::File::open(&path).map_err(|source| LogError::Read {
            path: path.clone(),
            source,
        })?;

        let series = self
            .parse(std::io::BufReader::new(file))
            .map_err(|e| match e {
                LogError::Read { source, .. } => LogError::Read {
                    path: path.clone(),
                    source,
                },
                other => other,
            })?;

        tracing::info!(
            path = %path.display(),
            timestamps = series.len(),
            "Loaded timestamp log"
        );
        Ok(series)
    }

    /// Parses a timestamp log from any buffered reader.
    ///
    /// Blank lines, non-numeric text, non-finite and negative values are
    /// all reported as malformed; nothing is skipped.
    pub fn parse(&self, reader: impl BufRead) -> Result<TimestampSeries, LogError> {
        let mut millis = Vec::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| LogError::Read {
                path: PathBuf::new(),
                source,
            })?;
            millis.push(parse_line(i + 1, &line)?);
        }

        Ok(TimestampSeries::new(millis)?)
    }

    /// Parses a timestamp log held in memory.
    pub fn parse_str(&self, content: &str) -> Result<TimestampSeries, LogError> {
        self.parse(content.as_bytes())
    }
}

fn parse_line(line: usize, raw: &str) -> Result<f64, LogError> {
    let trimmed = raw.trim();
    let malformed = || LogError::Malformed {
        line,
        content: raw.to_string(),
    };

    let value: f64 = trimmed.parse().map_err(|_| malformed())?;
    if !value.is_finite() || value < 0.0 {
        return Err(malformed());
    }
    Ok(value)
}

/// Derives a display name for a recording from its path.
///
/// Strips the directory and the recorder's log suffixes, so
/// `runs/720p_60.timestamp.log` becomes `720p_60`.
pub fn recording_name(path: impl AsRef<Path>) -> String {
    let file_name = path
        .as_ref()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    for suffix in [TIMESTAMP_LOG_SUFFIX, ".log", ".ts"] {
        if let Some(stem) = file_name.strip_suffix(suffix) {
            if !stem.is_empty() {
                return stem.to_string();
            }
        }
    }
    file_name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_log() {
        let series = LogLoader::new()
            .parse_str("0.000000\n33.100000\n  66.5 \n100\n")
            .unwrap();
        assert_eq!(series.as_slice(), &[0.0, 33.1, 66.5, 100.0]);
    }

    #[test]
    fn test_non_numeric_line_is_malformed() {
        let err = LogLoader::new()
            .parse_str("0.0\n33.0\nframe\n99.0\n")
            .unwrap_err();
        match err {
            LogError::Malformed { line, content } => {
                assert_eq!(line, 3);
                assert_eq!(content, "frame");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_line_is_malformed() {
        let err = LogLoader::new().parse_str("0.0\n\n66.0\n").unwrap_err();
        assert!(matches!(err, LogError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_nan_and_negative_are_malformed() {
        let loader = LogLoader::new();
        assert!(matches!(
            loader.parse_str("0.0\nNaN\n"),
            Err(LogError::Malformed { line: 2, .. })
        ));
        assert!(matches!(
            loader.parse_str("-4.0\n10.0\n"),
            Err(LogError::Malformed { line: 1, .. })
        ));
    }

    #[test]
    fn test_single_line_is_insufficient() {
        assert!(matches!(
            LogLoader::new().parse_str("12.0\n"),
            Err(LogError::Series(AnalysisError::InsufficientData { found: 1 }))
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = LogLoader::new()
            .load("/nonexistent/frame-timing/recording")
            .unwrap_err();
        match err {
            LogError::Read { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/frame-timing/recording"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_recording_name() {
        assert_eq!(recording_name("runs/720p_60.timestamp.log"), "720p_60");
        assert_eq!(recording_name("capture.log"), "capture");
        assert_eq!(recording_name("/tmp/clip.ts"), "clip");
        assert_eq!(recording_name("plain"), "plain");
    }
}
