//! Travel input and the derived travel facts: zone difference, direction,
//! destination-local times and flight duration.

mod details;
pub mod time;

pub use details::{Direction, TravelDetails};
pub use time::{
    flight_duration_hours, format_clock, parse_clock, parse_local_datetime, to_destination_local,
};

use crate::zones::ZoneTable;

/// Signed offset difference `arrival - departure` in hours.
pub fn time_zone_difference(zones: &ZoneTable, departure: &str, arrival: &str) -> f64 {
    zones.offset_hours(arrival) - zones.offset_hours(departure)
}
