//! Metrics collection and registry.

use crate::report::{Analyzable, Recording};
use prometheus::{Encoder, GaugeVec, IntGaugeVec, Opts, Registry, TextEncoder};
use thiserror::Error;

/// Errors that can occur during metrics operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Error from the Prometheus client.
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
}

const RECORDING_LABEL: &str = "recording";

/// Prometheus registry of per-recording timing gauges.
pub struct MetricsRegistry {
    registry: Registry,

    // Summary metrics
    frames: IntGaugeVec,
    duration_seconds: GaugeVec,
    framerate_hz: GaugeVec,
    mean_interval_ms: GaugeVec,
    std_dev_ms: GaugeVec,

    // Drop metrics
    dropped_slots: IntGaugeVec,
    extra_hits: IntGaugeVec,
    balanced: IntGaugeVec,
    estimated_dropped_frames: IntGaugeVec,
}

fn gauge(name: &str, help: &str) -> Result<GaugeVec, prometheus::Error> {
    GaugeVec::new(Opts::new(name, help), &[RECORDING_LABEL])
}

fn int_gauge(name: &str, help: &str) -> Result<IntGaugeVec, prometheus::Error> {
    IntGaugeVec::new(Opts::new(name, help), &[RECORDING_LABEL])
}

impl MetricsRegistry {
    /// Creates a registry with all timing metrics registered.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let frames = int_gauge("frame_timing_frames", "Number of frame intervals recorded")?;
        let duration_seconds = gauge(
            "frame_timing_duration_seconds",
            "Total recording duration in seconds",
        )?;
        let framerate_hz = gauge("frame_timing_framerate_hz", "Mean framerate in frames per second")?;
        let mean_interval_ms = gauge(
            "frame_timing_mean_interval_ms",
            "Mean frame interval in milliseconds",
        )?;
        let std_dev_ms = gauge(
            "frame_timing_std_dev_ms",
            "Standard deviation of frame intervals in milliseconds",
        )?;

        let dropped_slots = int_gauge(
            "frame_timing_dropped_slots",
            "Frame slots with no timestamp",
        )?;
        let extra_hits = int_gauge(
            "frame_timing_extra_hits",
            "Timestamps in frame slots holding more than one",
        )?;
        let balanced = int_gauge(
            "frame_timing_balanced",
            "Whether extra hits are exactly twice the dropped slots (1=balanced)",
        )?;
        let estimated_dropped_frames = int_gauge(
            "frame_timing_estimated_dropped_frames",
            "Frames missing according to the per-interval gap estimate",
        )?;

        registry.register(Box::new(frames.clone()))?;
        registry.register(Box::new(duration_seconds.clone()))?;
        registry.register(Box::new(framerate_hz.clone()))?;
        registry.register(Box::new(mean_interval_ms.clone()))?;
        registry.register(Box::new(std_dev_ms.clone()))?;
        registry.register(Box::new(dropped_slots.clone()))?;
        registry.register(Box::new(extra_hits.clone()))?;
        registry.register(Box::new(balanced.clone()))?;
        registry.register(Box::new(estimated_dropped_frames.clone()))?;

        Ok(Self {
            registry,
            frames,
            duration_seconds,
            framerate_hz,
            mean_interval_ms,
            std_dev_ms,
            dropped_slots,
            extra_hits,
            balanced,
            estimated_dropped_frames,
        })
    }

    /// Records the statistics of one recording.
    ///
    /// Framerate-dependent gauges are left unset for degenerate recordings.
    pub fn observe(&self, recording: &Recording) {
        let label = [recording.name()];
        let summary = recording.summary();

        self.frames
            .with_label_values(&label)
            .set(summary.frame_count as i64);
        self.duration_seconds
            .with_label_values(&label)
            .set(summary.total_duration_secs());
        self.std_dev_ms
            .with_label_values(&label)
            .set(summary.std_dev_ms);

        if let Some(hz) = summary.framerate_hz {
            self.framerate_hz.with_label_values(&label).set(hz);
        }
        if let Some(mean) = summary.mean_interval_ms {
            self.mean_interval_ms.with_label_values(&label).set(mean);
        }
        if let Some(estimate) = summary.estimated_dropped_frames {
            self.estimated_dropped_frames
                .with_label_values(&label)
                .set(estimate as i64);
        }

        if let Ok(drops) = recording.analyzer().drop_classification() {
            self.dropped_slots
                .with_label_values(&label)
                .set(drops.dropped_slots as i64);
            self.extra_hits
                .with_label_values(&label)
                .set(drops.extra_hits as i64);
            self.balanced
                .with_label_values(&label)
                .set(if drops.balanced { 1 } else { 0 });
        }
    }

    /// Returns the underlying Prometheus registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Encodes all metrics in Prometheus text format.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
