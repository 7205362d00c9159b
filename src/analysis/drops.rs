//! Slot-based dropped/extra frame classification.
//!
//! Time is cut into slots one frame period wide. Each timestamp is
//! rounded to its nearest slot; empty slots are dropped frames and
//! slots holding several timestamps contain extra frames. A frame that
//! arrives late spills into its neighbour's slot, so a lone late frame
//! shows up as one empty slot next to one slot holding two entries.
//!
//! Slots are counted from t=0, not from the first timestamp, so a clock
//! with a large origin needs as many slots as a recording that long.
//! Classification refuses to allocate more than [`MAX_SLOTS`].

use super::AnalysisError;
use crate::capture::TimestampSeries;
use serde::{Deserialize, Serialize};

/// Largest number of slots (or schedule windows) analysis will allocate.
///
/// About 155 hours at 30 fps.
pub const MAX_SLOTS: usize = 1 << 24;

/// Per-slot occupancy and the counts derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropClassification {
    /// Framerate the slots were sized for.
    pub framerate_hz: f64,
    /// Offsets (in slot widths) of the timestamps assigned to each slot.
    pub slots: Vec<Vec<f64>>,
    /// Slots with no timestamp.
    pub dropped_slots: usize,
    /// Slots holding more than one timestamp.
    pub crowded_slots: usize,
    /// Entries in crowded slots, every entry counted.
    pub extra_hits: usize,
    /// Whether `extra_hits == 2 * dropped_slots`.
    pub balanced: bool,
}

impl DropClassification {
    /// Assigns each timestamp to a slot of width `1 / framerate_hz` seconds.
    pub fn classify(series: &TimestampSeries, framerate_hz: f64) -> Result<Self, AnalysisError> {
        if !framerate_hz.is_finite() || framerate_hz <= 0.0 {
            return Err(AnalysisError::InvalidFramerate(framerate_hz));
        }

        let inverse_fps = 1.0 / framerate_hz;

        let latest = series.as_slice().iter().copied().fold(0.0, f64::max);
        let needed = (latest / 1000.0 / inverse_fps + 0.5).floor() + 1.0;
        if needed > MAX_SLOTS as f64 {
            return Err(AnalysisError::ScheduleTooLong {
                windows: needed,
                max: MAX_SLOTS,
            });
        }

        let mut slots: Vec<Vec<f64>> = vec![Vec::new()];

        for &millis in series.as_slice() {
            let ratio = (millis / 1000.0) / inverse_fps;
            // Round half up; slot edges at exact halves belong to the later slot.
            let index = (ratio + 0.5).floor() as usize;
            if index >= slots.len() {
                slots.resize_with(index + 1, Vec::new);
            }
            slots[index].push(ratio - index as f64);
        }

        let dropped_slots = slots.iter().filter(|s| s.is_empty()).count();
        let crowded = slots.iter().filter(|s| s.len() > 1);
        let crowded_slots = crowded.clone().count();
        let extra_hits = crowded.map(Vec::len).sum::<usize>();
        let balanced = extra_hits == 2 * dropped_slots;

        tracing::debug!(
            framerate_hz,
            slots = slots.len(),
            dropped_slots,
            crowded_slots,
            extra_hits,
            balanced,
            "Classified frame slots"
        );

        Ok(Self {
            framerate_hz,
            slots,
            dropped_slots,
            crowded_slots,
            extra_hits,
            balanced,
        })
    }

    /// Total number of slots spanned by the recording.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> TimestampSeries {
        TimestampSeries::new(values.to_vec()).unwrap()
    }

    #[test]
    fn test_regular_recording_has_no_drops() {
        let ts: Vec<f64> = (0..50).map(|i| i as f64 * 40.0).collect();
        let drops = DropClassification::classify(&series(&ts), 25.0).unwrap();

        assert_eq!(drops.slot_count(), 50);
        assert_eq!(drops.dropped_slots, 0);
        assert_eq!(drops.extra_hits, 0);
        assert!(drops.balanced);
    }

    #[test]
    fn test_late_frame_is_balanced() {
        // The frame due at 80 ms arrives at 110 ms and lands in slot 3.
        // One late frame in an otherwise regular recording is exactly one
        // dropped slot plus one crowded slot of two entries, at the
        // recording's own framerate as well as the nominal one.
        let drops =
            DropClassification::classify(&series(&[0.0, 40.0, 110.0, 120.0, 160.0, 200.0]), 25.0)
                .unwrap();

        assert_eq!(drops.dropped_slots, 1);
        assert_eq!(drops.crowded_slots, 1);
        assert_eq!(drops.extra_hits, 2);
        assert!(drops.balanced);
        assert!(drops.slots[2].is_empty());
    }

    #[test]
    fn test_missing_frame_is_unbalanced() {
        // Gap doubled between 80 and 160 ms: slot 3 never filled. This
        // holds at the nominal 25 Hz only. At the recording's own mean
        // framerate the slots widen to cover the gap and nothing is
        // dropped. A single late frame is the case that shows up
        // as exactly one drop balanced by one crowded slot.
        let drops =
            DropClassification::classify(&series(&[0.0, 40.0, 80.0, 160.0, 200.0]), 25.0).unwrap();

        assert_eq!(drops.dropped_slots, 1);
        assert_eq!(drops.extra_hits, 0);
        assert!(!drops.balanced);
    }

    #[test]
    fn test_half_slot_rounds_up() {
        // 20 ms is exactly half of a 40 ms slot.
        let drops = DropClassification::classify(&series(&[0.0, 20.0]), 25.0).unwrap();
        assert_eq!(drops.slot_count(), 2);
        assert_eq!(drops.slots[1].len(), 1);
    }

    #[test]
    fn test_offsets_are_relative_to_slot() {
        let drops = DropClassification::classify(&series(&[0.0, 50.0]), 25.0).unwrap();
        // 50 ms is 1.25 slots: slot 1, offset +0.25.
        assert!((drops.slots[1][0] - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_large_clock_origin_is_rejected_not_allocated() {
        let ts = series(&[1e20, 1e20 + 65536.0, 1e20 + 131072.0]);
        assert!(matches!(
            DropClassification::classify(&ts, 30.0),
            Err(AnalysisError::ScheduleTooLong { max: MAX_SLOTS, .. })
        ));
    }

    #[test]
    fn test_slot_index_beyond_usize_is_rejected() {
        let ts = series(&[0.0, 1e300]);
        assert!(matches!(
            DropClassification::classify(&ts, 30.0),
            Err(AnalysisError::ScheduleTooLong { .. })
        ));
    }

    #[test]
    fn test_rejects_invalid_framerate() {
        let ts = series(&[0.0, 40.0]);
        assert!(DropClassification::classify(&ts, 0.0).is_err());
        assert!(DropClassification::classify(&ts, -25.0).is_err());
        assert!(DropClassification::classify(&ts, f64::NAN).is_err());
    }
}
