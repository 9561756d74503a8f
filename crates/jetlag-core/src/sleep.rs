//! Sleep window shifting.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::travel::{format_clock, parse_clock};
use crate::travel::time::offset_minutes;

/// Differences above this many hours are treated as a major adjustment.
const MAJOR_ADJUSTMENT_THRESHOLD_HOURS: f64 = 6.0;

/// Coarse severity of the required shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdjustmentPhase {
    #[serde(rename = "Major adjustment needed")]
    Major,
    #[serde(rename = "Moderate adjustment")]
    Moderate,
}

impl AdjustmentPhase {
    pub fn from_difference(signed_hours: f64) -> Self {
        if signed_hours.abs() > MAJOR_ADJUSTMENT_THRESHOLD_HOURS {
            AdjustmentPhase::Major
        } else {
            AdjustmentPhase::Moderate
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdjustmentPhase::Major => "Major adjustment needed",
            AdjustmentPhase::Moderate => "Moderate adjustment",
        }
    }
}

impl fmt::Display for AdjustmentPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sleep window expressed in destination clock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepSchedule {
    pub new_bedtime: String,
    pub new_wake_time: String,
    pub adjustment_phase: AdjustmentPhase,
}

/// Shift the habitual sleep window by the signed zone difference.
///
/// Both times move by `difference * 60` minutes and wrap to a time of day;
/// no date component is kept.
///
/// # Errors
///
/// Returns `InvalidInput` if either time is not a valid "HH:MM" string.
pub fn shift_sleep_schedule(
    usual_bedtime: &str,
    usual_wake_time: &str,
    signed_difference: f64,
) -> Result<SleepSchedule> {
    let bedtime = parse_clock("usualBedtime", usual_bedtime)?;
    let wake_time = parse_clock("usualWakeTime", usual_wake_time)?;
    let shift = offset_minutes(signed_difference);

    Ok(SleepSchedule {
        new_bedtime: format_clock(bedtime + shift),
        new_wake_time: format_clock(wake_time + shift),
        adjustment_phase: AdjustmentPhase::from_difference(signed_difference),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eastward_shift_wraps_past_midnight() {
        let schedule = shift_sleep_schedule("22:00", "06:00", 9.0).unwrap();
        assert_eq!(schedule.new_bedtime, "07:00");
        assert_eq!(schedule.new_wake_time, "15:00");
        assert_eq!(schedule.adjustment_phase, AdjustmentPhase::Major);
    }

    #[test]
    fn negative_shift_wraps_backwards() {
        let schedule = shift_sleep_schedule("00:30", "08:00", -2.0).unwrap();
        assert_eq!(schedule.new_bedtime, "22:30");
        assert_eq!(schedule.new_wake_time, "06:00");
        assert_eq!(schedule.adjustment_phase, AdjustmentPhase::Moderate);
    }

    #[test]
    fn fractional_offset_shifts_by_minutes() {
        let schedule = shift_sleep_schedule("23:00", "07:00", 4.5).unwrap();
        assert_eq!(schedule.new_bedtime, "03:30");
        assert_eq!(schedule.new_wake_time, "11:30");
    }

    #[test]
    fn phase_threshold_is_strict() {
        assert_eq!(AdjustmentPhase::from_difference(6.0), AdjustmentPhase::Moderate);
        assert_eq!(AdjustmentPhase::from_difference(-6.0), AdjustmentPhase::Moderate);
        assert_eq!(AdjustmentPhase::from_difference(6.5), AdjustmentPhase::Major);
        assert_eq!(AdjustmentPhase::from_difference(-17.0), AdjustmentPhase::Major);
    }

    #[test]
    fn malformed_time_is_rejected() {
        let err = shift_sleep_schedule("late", "07:00", 1.0).unwrap_err();
        assert!(err.to_string().contains("usualBedtime"));
        let err = shift_sleep_schedule("23:00", "7am", 1.0).unwrap_err();
        assert!(err.to_string().contains("usualWakeTime"));
    }

    #[test]
    fn phase_serializes_as_label() {
        let schedule = shift_sleep_schedule("23:00", "07:00", 0.0).unwrap();
        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(json["adjustmentPhase"], "Moderate adjustment");
        assert_eq!(json["newBedtime"], "23:00");
    }
}
