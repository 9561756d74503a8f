use crate::error::Result;
use crate::light::{post_travel_schedule, pre_travel_schedule, travel_day_schedule};
use crate::plan::{estimate_adjustment_days, JetLagPlan};
use crate::sleep::shift_sleep_schedule;
use crate::travel::{
    flight_duration_hours, parse_local_datetime, time_zone_difference, Direction, TravelDetails,
};
use crate::zones::{ZoneResolution, ZoneTable};

/// Stateless plan generator.
///
/// Holds only the offset table and the resolution mode, so a single planner
/// can be shared freely between callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct JetLagPlanner {
    zones: ZoneTable,
    resolution: ZoneResolution,
}

impl JetLagPlanner {
    /// Planner over the built-in table with lenient zone resolution.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolution(mut self, resolution: ZoneResolution) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn resolution(&self) -> ZoneResolution {
        self.resolution
    }

    /// Compute the full plan for a trip.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for malformed date-time or clock strings and,
    /// in strict mode, `UnrecognizedZone` for symbols missing from the table.
    pub fn plan(&self, travel: &TravelDetails) -> Result<JetLagPlan> {
        let departure_zone = travel.departure_timezone.as_str();
        let arrival_zone = travel.arrival_timezone.as_str();
        self.zones.resolve(departure_zone, self.resolution)?;
        self.zones.resolve(arrival_zone, self.resolution)?;

        let signed_difference = time_zone_difference(&self.zones, departure_zone, arrival_zone);
        let direction = Direction::from_difference(signed_difference);
        let zone_difference = signed_difference.abs();
        tracing::debug!(signed_difference, %direction, "zone difference resolved");

        let departure = parse_local_datetime("departureTime", &travel.departure_time)?;
        // Arrival is entered in arrival-local time, so it already is the
        // destination wall clock.
        let arrival_local = parse_local_datetime("arrivalTime", &travel.arrival_time)?;
        let flight_hours = flight_duration_hours(
            &self.zones,
            departure,
            departure_zone,
            arrival_local,
            arrival_zone,
        )?;
        tracing::debug!(flight_hours, arrival = %arrival_local, "flight timing derived");

        let estimated_adjustment_days = estimate_adjustment_days(zone_difference, flight_hours);

        let pre_travel_days = pre_travel_schedule(direction, zone_difference);
        let travel_day = travel_day_schedule(direction, arrival_local);
        let post_travel_days = post_travel_schedule(direction, zone_difference);
        let sleep_schedule = shift_sleep_schedule(
            &travel.usual_bedtime,
            &travel.usual_wake_time,
            signed_difference,
        )?;

        tracing::info!(
            from = departure_zone,
            to = arrival_zone,
            %direction,
            zone_difference,
            estimated_adjustment_days,
            "jet lag plan computed"
        );

        Ok(JetLagPlan {
            time_zones_difference: zone_difference,
            direction,
            estimated_adjustment_days,
            pre_travel_days,
            travel_day,
            post_travel_days,
            sleep_schedule,
            flight_duration_hours: flight_hours,
            arrival_local_time: arrival_local.format("%H:%M").to_string(),
        })
    }
}

/// Compute a plan with the built-in table and lenient zone resolution.
///
/// # Errors
///
/// Returns `InvalidInput` for malformed date-time or clock strings.
pub fn calculate_jet_lag_plan(travel: &TravelDetails) -> Result<JetLagPlan> {
    JetLagPlanner::new().plan(travel)
}
