//! File configuration.
//!
//! Settings are read from a TOML file; every section and field is
//! optional and falls back to its default. Command-line flags take
//! precedence over file values.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Analysis settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Framerate the recorder was asked for, used by deviation series.
    pub target_framerate: Option<f64>,
}

impl AnalysisConfig {
    /// Returns the configured target framerate.
    pub fn require_target_framerate(&self) -> Result<f64, ConfigError> {
        self.target_framerate
            .ok_or(ConfigError::MissingTargetFramerate)
    }

    /// Validates the analysis parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.target_framerate {
            Some(hz) if !hz.is_finite() || hz <= 0.0 => Err(ConfigError::InvalidFrameRate(hz)),
            _ => Ok(()),
        }
    }
}

/// Output encoding for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON for renderers and scripts.
    Json,
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format.
    pub format: OutputFormat,
    /// Skip recordings that fail to load instead of aborting a batch.
    pub keep_going: bool,
}

/// How a renderer should lay out several recordings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// One subplot per recording, stacked.
    #[default]
    Vertical,
    /// One subplot per recording, side by side.
    Horizontal,
}

/// Figure hints passed through to renderers with JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Figure width in inches.
    pub width: f64,
    /// Figure height in inches.
    pub height: f64,
    /// Arrangement of multiple recordings.
    pub layout: Layout,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 8.0,
            height: 6.0,
            layout: Layout::Vertical,
        }
    }
}

impl RenderConfig {
    /// Rejects non-positive figure dimensions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0) || !(self.height > 0.0) {
            return Err(ConfigError::InvalidFigureSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Target framerate is not finite and positive.
    #[error("invalid target framerate {0} (must be finite and positive)")]
    InvalidFrameRate(f64),
    /// A deviation series was requested without a target.
    #[error("no target framerate given (use --target or [analysis] target_framerate)")]
    MissingTargetFramerate,
    /// Figure width or height is not positive.
    #[error("invalid figure size {width}x{height}")]
    InvalidFigureSize {
        /// Requested width in inches.
        width: f64,
        /// Requested height in inches.
        height: f64,
    },
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    /// The config file is not valid TOML for this schema.
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    /// `[analysis]` section.
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// `[output]` section.
    #[serde(default)]
    pub output: OutputConfig,
    /// `[render]` section.
    #[serde(default)]
    pub render: RenderConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.analysis.validate()?;
        self.render.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.render.width, 8.0);
    }

    #[test]
    fn test_parse_full_file() {
        let config = FileConfig::from_toml(
            r#"
            [analysis]
            target_framerate = 60.0

            [output]
            format = "json"
            keep_going = true

            [render]
            width = 12.0
            height = 4.0
            layout = "horizontal"
            "#,
        )
        .unwrap();

        assert_eq!(config.analysis.target_framerate, Some(60.0));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.keep_going);
        assert_eq!(config.render.layout, Layout::Horizontal);
    }

    #[test]
    fn test_partial_sections_use_defaults() {
        let config = FileConfig::from_toml("[render]\nwidth = 10.0\n").unwrap();
        assert_eq!(config.render.width, 10.0);
        assert_eq!(config.render.height, 6.0);
        assert!(config.analysis.target_framerate.is_none());
    }

    #[test]
    fn test_zero_target_framerate_invalid() {
        assert!(matches!(
            FileConfig::from_toml("[analysis]\ntarget_framerate = 0.0\n"),
            Err(ConfigError::InvalidFrameRate(_))
        ));
    }

    #[test]
    fn test_missing_target_framerate() {
        let config = FileConfig::default();
        assert!(matches!(
            config.analysis.require_target_framerate(),
            Err(ConfigError::MissingTargetFramerate)
        ));
    }

    #[test]
    fn test_bad_figure_size_invalid() {
        assert!(matches!(
            FileConfig::from_toml("[render]\nheight = -1.0\n"),
            Err(ConfigError::InvalidFigureSize { .. })
        ));
    }

    #[test]
    fn test_unparseable_file() {
        assert!(matches!(
            FileConfig::from_toml("[analysis\n"),
            Err(ConfigError::ParseError(_))
        ));
    }
}
