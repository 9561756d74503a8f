//! Light-exposure schedule generators.
//!
//! Each generator is a pure function of the travel direction and zone
//! difference (plus the local arrival time for the travel day).

mod post_travel;
mod pre_travel;
mod recommendation;
mod travel_day;

pub use post_travel::{post_travel_schedule, MAX_POST_TRAVEL_DAYS};
pub use pre_travel::{pre_travel_schedule, MAX_PRE_TRAVEL_DAYS};
pub use recommendation::{LightAction, LightExposureRecommendation};
pub use travel_day::{travel_day_schedule, ArrivalBucket};

/// Recommendations for a single day.
pub type DaySchedule = Vec<LightExposureRecommendation>;

/// Whole days of schedule for a zone difference, capped at `cap`.
///
/// Fractional differences only count completed hours, so 2.5 zones gives two
/// days and half an hour gives none.
pub(crate) fn schedule_days(zone_difference: f64, cap: u32) -> u32 {
    if !zone_difference.is_finite() || zone_difference <= 0.0 {
        return 0;
    }
    zone_difference.min(f64::from(cap)).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_days_caps_and_floors() {
        assert_eq!(schedule_days(0.0, 3), 0);
        assert_eq!(schedule_days(0.5, 3), 0);
        assert_eq!(schedule_days(2.0, 3), 2);
        assert_eq!(schedule_days(2.5, 3), 2);
        assert_eq!(schedule_days(17.0, 3), 3);
        assert_eq!(schedule_days(17.0, 5), 5);
        assert_eq!(schedule_days(4.5, 5), 4);
    }
}
