// SPDX-License-Identifier: MPL-2.0
//! Progress sampling for the periodic UI refresh.
//!
//! Pure read-side helpers: a tick turns the engine's position and time
//! readings into display values. Nothing here writes back to the engine,
//! so a tick can never feed back into a user-initiated seek.

/// Upper bound of the seek slider; slider values are `round(position * 1000)`.
pub const SLIDER_SCALE: u16 = 1000;

/// Label shown while nothing is playing or after a stop.
pub const IDLE_LABEL: &str = "00:00 / 00:00";

/// Display values derived from one sampling tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSnapshot {
    /// Seek slider value in `0..=1000`.
    pub slider: u16,
    /// Formatted "elapsed / duration" text.
    pub label: String,
}

impl Default for ProgressSnapshot {
    fn default() -> Self {
        Self {
            slider: 0,
            label: IDLE_LABEL.to_string(),
        }
    }
}

/// Builds display values from raw engine readings.
///
/// Returns `None` while the duration is unknown; the previous display is
/// kept on screen in that case rather than flashing zeros.
pub fn snapshot(position: f64, time_ms: i64, duration_ms: i64) -> Option<ProgressSnapshot> {
    if duration_ms <= 0 {
        return None;
    }
    let slider = (position.clamp(0.0, 1.0) * f64::from(SLIDER_SCALE)).round() as u16;
    Some(ProgressSnapshot {
        slider,
        label: format!("{} / {}", format_time(time_ms), format_time(duration_ms)),
    })
}

/// Formats milliseconds as `MM:SS`, flooring to whole seconds.
/// Non-positive inputs (unknown time or duration) render as `00:00`.
pub fn format_time(ms: i64) -> String {
    if ms <= 0 {
        return "00:00".to_string();
    }
    let seconds = ms / 1000;
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_renders_zero_for_non_positive() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(-1), "00:00");
        assert_eq!(format_time(-120_000), "00:00");
    }

    #[test]
    fn format_time_floors_to_whole_seconds() {
        assert_eq!(format_time(999), "00:00");
        assert_eq!(format_time(1_000), "00:01");
        assert_eq!(format_time(125_000), "02:05");
        assert_eq!(format_time(125_999), "02:05");
    }

    #[test]
    fn format_time_minutes_can_exceed_an_hour() {
        // 1h14m5s renders as 74:05, the label has no hour field.
        assert_eq!(format_time(4_445_000), "74:05");
    }

    #[test]
    fn snapshot_scales_position_onto_the_slider() {
        let snap = snapshot(0.5, 62_500, 125_000).unwrap();
        assert_eq!(snap.slider, 500);
        assert_eq!(snap.label, "01:02 / 02:05");
    }

    #[test]
    fn snapshot_rounds_the_slider_value() {
        assert_eq!(snapshot(0.9994, 0, 1_000).unwrap().slider, 999);
        assert_eq!(snapshot(0.9996, 0, 1_000).unwrap().slider, 1000);
    }

    #[test]
    fn snapshot_clamps_out_of_range_positions() {
        assert_eq!(snapshot(1.2, 0, 1_000).unwrap().slider, SLIDER_SCALE);
        assert_eq!(snapshot(-0.5, 0, 1_000).unwrap().slider, 0);
    }

    #[test]
    fn snapshot_is_absent_while_duration_is_unknown() {
        assert!(snapshot(0.5, 5_000, 0).is_none());
        assert!(snapshot(0.5, 5_000, -1).is_none());
    }

    #[test]
    fn default_snapshot_is_the_idle_display() {
        let snap = ProgressSnapshot::default();
        assert_eq!(snap.slider, 0);
        assert_eq!(snap.label, IDLE_LABEL);
    }
}
