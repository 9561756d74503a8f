//! Plan assembly.
//!
//! [`JetLagPlanner`] composes the travel, light and sleep calculations into a
//! single [`JetLagPlan`].

mod planner;
mod report;

pub use planner::{calculate_jet_lag_plan, JetLagPlanner};

use serde::{Deserialize, Serialize};

use crate::light::{DaySchedule, LightExposureRecommendation};
use crate::sleep::SleepSchedule;
use crate::travel::Direction;

/// Flights longer than this add a day to the adjustment estimate.
pub const LONG_FLIGHT_HOURS: f64 = 12.0;

/// Differences above this many zones add a day to the adjustment estimate.
pub const LARGE_DIFFERENCE_ZONES: f64 = 8.0;

/// Complete jet lag plan for one trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JetLagPlan {
    /// Absolute offset difference in hours
    pub time_zones_difference: f64,
    pub direction: Direction,
    pub estimated_adjustment_days: u32,
    pub pre_travel_days: Vec<DaySchedule>,
    pub travel_day: Vec<LightExposureRecommendation>,
    pub post_travel_days: Vec<DaySchedule>,
    pub sleep_schedule: SleepSchedule,
    /// Flight duration on a common timeline, in hours
    pub flight_duration_hours: f64,
    /// Wall-clock arrival time at the destination ("HH:MM")
    pub arrival_local_time: String,
}

/// Days needed to fully adjust.
///
/// Base is `ceil(0.8 * difference)`, plus one for a long flight and one more
/// for a large difference. The base is computed in quarter-hour units so the
/// ceiling is exact for every offset in the table.
pub fn estimate_adjustment_days(zone_difference: f64, flight_duration_hours: f64) -> u32 {
    let zone_difference = zone_difference.abs();
    let quarters = (zone_difference * 4.0).round() as u32;
    // ceil(0.8 * q / 4) == ceil(q / 5)
    let mut days = quarters.div_ceil(5);
    if flight_duration_hours > LONG_FLIGHT_HOURS {
        days += 1;
    }
    if zone_difference > LARGE_DIFFERENCE_ZONES {
        days += 1;
    }
    days
}
