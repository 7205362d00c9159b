//! CLI argument parsing for frame-timing

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use frame_timing::config::OutputFormat;
use std::path::PathBuf;

/// Output format for reports
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Human-readable text format (default)
    Text,
    /// JSON format for renderers and scripts
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Series to emit for plotting
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SeriesArg {
    /// Instantaneous framerate at each frame
    Framerate,
    /// Gap between consecutive timestamps
    Deltas,
    /// Deviation from a schedule at --target framerate
    Deviation,
    /// Deviation from a schedule at the recording's own framerate
    RelativeDeviation,
}

#[derive(Parser, Debug)]
#[command(name = "frame-timing")]
#[command(version)]
#[command(about = "Framerate statistics and dropped-frame diagnostics for timestamp logs", long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub format: Option<FormatArg>,

    /// Skip recordings that fail to load instead of aborting
    #[arg(long, global = true)]
    pub keep_going: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the standard deviation of frame intervals
    Stddev {
        /// Timestamp log, or video path with a .timestamp.log beside it
        log: PathBuf,
    },

    /// Print duration, framerate, deviation and dropped-frame summary
    Info {
        #[arg(required = true)]
        logs: Vec<PathBuf>,
    },

    /// Print the interval between each timestamp and the one before it
    Deltas { log: PathBuf },

    /// Emit plot-ready series with axis labels
    Series {
        #[arg(required = true)]
        logs: Vec<PathBuf>,

        /// Which series to emit
        #[arg(long, value_enum, default_value = "framerate")]
        kind: SeriesArg,

        /// Target framerate in Hz for deviation series
        #[arg(long, value_name = "HZ")]
        target: Option<f64>,
    },

    /// Compare mean interval, deviation and dropped frames across recordings
    Compare {
        #[arg(required = true)]
        logs: Vec<PathBuf>,
    },

    /// Print recording statistics in Prometheus text format
    Metrics {
        #[arg(required = true)]
        logs: Vec<PathBuf>,
    },
}
