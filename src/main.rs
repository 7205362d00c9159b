//! Frame Timing CLI
//!
//! Command-line interface for analyzing the timestamp logs recorded
//! alongside camera video.

mod cli;

use clap::Parser;
use cli::{Cli, Command, SeriesArg};
use frame_timing::{
    capture::{recording_name, LogLoader},
    config::{FileConfig, OutputFormat},
    metrics::MetricsRegistry,
    report::{self, Aggregator, JsonReport, NumericSeries, Recording, SeriesKind},
    Analyzable, Error, TimingAnalyzer,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

fn main() {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for reports
    let level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let mut config = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration");
            FileConfig::from_file(path)?
        }
        None => FileConfig::default(),
    };
    if let Some(format) = cli.format {
        config.output.format = format.into();
    }
    config.output.keep_going |= cli.keep_going;

    match cli.command {
        Command::Stddev { log } => {
            let recording = load_recording(&log)?;
            match config.output.format {
                OutputFormat::Text => println!(
                    "{}",
                    report::render_std_dev(&recording.analyzer().compute_standard_deviation())
                ),
                OutputFormat::Json => print_json(&config, &[recording], Vec::new())?,
            }
        }

        Command::Info { logs } => {
            let recordings = load_recordings(&logs, config.output.keep_going)?;
            match config.output.format {
                OutputFormat::Text => {
                    for recording in &recordings {
                        println!("{}", report::render_info(recording));
                    }
                }
                OutputFormat::Json => print_json(&config, &recordings, Vec::new())?,
            }
        }

        Command::Deltas { log } => {
            let recording = load_recording(&log)?;
            match config.output.format {
                OutputFormat::Text => print!("{}", report::render_deltas(&recording)),
                OutputFormat::Json => {
                    let series = vec![recording.series(SeriesKind::TimestampDeltas)?];
                    print_json(&config, &[], series)?;
                }
            }
        }

        Command::Series { logs, kind, target } => {
            let kind = match kind {
                SeriesArg::Framerate => SeriesKind::Framerate,
                SeriesArg::Deltas => SeriesKind::TimestampDeltas,
                SeriesArg::RelativeDeviation => SeriesKind::RelativeDeviation,
                SeriesArg::Deviation => {
                    let hz = match target {
                        Some(hz) => hz,
                        None => config.analysis.require_target_framerate()?,
                    };
                    SeriesKind::Deviation(hz)
                }
            };

            let recordings = load_recordings(&logs, config.output.keep_going)?;
            let series = recordings
                .iter()
                .map(|r| r.series(kind))
                .collect::<Result<Vec<_>, _>>()?;

            match config.output.format {
                OutputFormat::Text => {
                    for s in &series {
                        print!("{}", render_series_table(s));
                    }
                }
                OutputFormat::Json => print_json(&config, &[], series)?,
            }
        }

        Command::Compare { logs } => {
            let recordings = load_recordings(&logs, config.output.keep_going)?;
            let aggregator = Aggregator::new(&recordings);
            let charts = [aggregator.mean_deviation_bars(), aggregator.dropped_frame_bars()];

            match config.output.format {
                OutputFormat::Text => {
                    for chart in &charts {
                        println!("{}", report::render_bars(chart));
                    }
                }
                OutputFormat::Json => {
                    let mut report = JsonReport::new(config.render.clone());
                    for chart in charts {
                        report.add_chart(chart);
                    }
                    println!("{}", report.to_json()?);
                }
            }
        }

        Command::Metrics { logs } => {
            let recordings = load_recordings(&logs, config.output.keep_going)?;
            let registry = MetricsRegistry::new()?;
            for recording in &recordings {
                registry.observe(recording);
            }
            print!("{}", registry.encode()?);
        }
    }

    Ok(())
}

fn load_recording(path: &Path) -> Result<Recording, Error> {
    let series = LogLoader::new().load(path)?;
    Ok(Recording::new(
        recording_name(path),
        TimingAnalyzer::new(series),
    ))
}

/// Loads every recording, skipping failures when `keep_going` is set.
///
/// Fails if nothing could be loaded.
fn load_recordings(paths: &[PathBuf], keep_going: bool) -> Result<Vec<Recording>, Error> {
    let mut recordings = Vec::with_capacity(paths.len());
    let mut last_error = None;

    for path in paths {
        match load_recording(path) {
            Ok(recording) => recordings.push(recording),
            Err(e) if keep_going => {
                warn!(path = %path.display(), error = %e, "Skipping recording");
                last_error = Some(e);
            }
            Err(e) => return Err(e),
        }
    }

    match last_error {
        Some(e) if recordings.is_empty() => Err(e),
        _ => {
            info!(
                loaded = recordings.len(),
                requested = paths.len(),
                "Recordings analyzed"
            );
            Ok(recordings)
        }
    }
}

fn print_json(
    config: &FileConfig,
    recordings: &[Recording],
    series: Vec<NumericSeries>,
) -> Result<(), Error> {
    let mut report = JsonReport::new(config.render.clone());
    for recording in recordings {
        report.add_recording(recording);
    }
    for s in series {
        report.add_series(s);
    }
    println!("{}", report.to_json()?);
    Ok(())
}

fn render_series_table(series: &NumericSeries) -> String {
    let mut out = format!(
        "# {}: {} vs {}\n",
        series.title, series.y_label, series.x_label
    );
    for line in &series.lines {
        out.push_str(&format!("[{}]\n", line.name));
        for (x, y) in line.x.iter().zip(&line.y) {
            out.push_str(&format!("{}\t{}\n", x, y));
        }
    }
    out
}
