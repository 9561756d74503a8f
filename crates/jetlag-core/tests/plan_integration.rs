//! Integration tests for end-to-end plan computation.

use jetlag_core::{
    calculate_jet_lag_plan, AdjustmentPhase, Config, CoreError, Direction, JetLagPlan,
    JetLagPlanner, LightAction, TravelDetails, ZoneResolution,
};

fn los_angeles_to_tokyo() -> TravelDetails {
    TravelDetails::new(
        "PST",
        "JST",
        "2024-03-10T11:00",
        "2024-03-11T15:30",
        "22:00",
        "06:30",
    )
}

#[test]
fn test_transpacific_eastward_plan() {
    let plan = calculate_jet_lag_plan(&los_angeles_to_tokyo()).unwrap();

    assert_eq!(plan.direction, Direction::Eastward);
    assert_eq!(plan.time_zones_difference, 17.0);
    assert_eq!(plan.pre_travel_days.len(), 3);
    assert_eq!(plan.post_travel_days.len(), 5);
    assert_eq!(plan.travel_day.len(), 2);

    // 11:00 PST -> 15:30 JST is 11.5h on a common clock
    assert_eq!(plan.flight_duration_hours, 11.5);
    assert_eq!(plan.estimated_adjustment_days, 14 + 1);

    // 22:00 + 17h wraps to 15:00
    assert_eq!(plan.sleep_schedule.new_bedtime, "15:00");
    assert_eq!(plan.sleep_schedule.new_wake_time, "23:30");
    assert_eq!(plan.sleep_schedule.adjustment_phase, AdjustmentPhase::Major);

    // Midday arrival going east gets reduced-intensity light
    assert_eq!(plan.travel_day[1].action, LightAction::BrightLight);
    assert_eq!(plan.travel_day[1].intensity.as_deref(), Some("2,500+ lux"));
}

#[test]
fn test_westward_evening_arrival() {
    let travel = TravelDetails::new(
        "CET",
        "EST",
        "2024-07-01T13:00",
        "2024-07-01T19:00",
        "23:00",
        "07:00",
    );
    let plan = calculate_jet_lag_plan(&travel).unwrap();

    assert_eq!(plan.direction, Direction::Westward);
    assert_eq!(plan.time_zones_difference, 6.0);
    assert_eq!(plan.flight_duration_hours, 12.0);
    // ceil(4.8), flight is not strictly longer than 12h
    assert_eq!(plan.estimated_adjustment_days, 5);
    assert_eq!(plan.travel_day[0].action, LightAction::DimLight);
    assert_eq!(plan.travel_day[1].action, LightAction::BrightLight);
    assert!(plan.travel_day[1].description.contains("Optimal evening arrival"));
    assert_eq!(plan.sleep_schedule.new_bedtime, "17:00");
    assert_eq!(plan.sleep_schedule.adjustment_phase, AdjustmentPhase::Moderate);
}

#[test]
fn test_long_haul_penalties() {
    let travel = TravelDetails::new(
        "EST",
        "SGT",
        "2024-01-10T22:00",
        "2024-01-12T07:00",
        "23:00",
        "07:00",
    );
    let plan = calculate_jet_lag_plan(&travel).unwrap();

    assert_eq!(plan.time_zones_difference, 13.0);
    assert_eq!(plan.flight_duration_hours, 20.0);
    // ceil(10.4) = 11, +1 long flight, +1 large difference
    assert_eq!(plan.estimated_adjustment_days, 13);
}

#[test]
fn test_fractional_zone_difference() {
    let travel = TravelDetails::new(
        "UTC",
        "IST",
        "2024-02-28T20:00",
        "2024-02-29T09:30",
        "23:15",
        "07:15",
    );
    let plan = calculate_jet_lag_plan(&travel).unwrap();

    assert_eq!(plan.time_zones_difference, 5.5);
    assert_eq!(plan.pre_travel_days.len(), 3);
    assert_eq!(plan.post_travel_days.len(), 5);
    assert_eq!(plan.flight_duration_hours, 8.0);
    assert_eq!(plan.estimated_adjustment_days, 5);
    assert_eq!(plan.sleep_schedule.new_bedtime, "04:45");
    assert_eq!(plan.sleep_schedule.new_wake_time, "12:45");
}

#[test]
fn test_plan_json_shape() {
    let plan = calculate_jet_lag_plan(&los_angeles_to_tokyo()).unwrap();
    let json = serde_json::to_value(&plan).unwrap();

    for field in [
        "timeZonesDifference",
        "direction",
        "estimatedAdjustmentDays",
        "preTravelDays",
        "travelDay",
        "postTravelDays",
        "sleepSchedule",
    ] {
        assert!(json.get(field).is_some(), "missing field {field}");
    }
    assert_eq!(json["direction"], "eastward");
    assert_eq!(json["travelDay"][0]["action"], "avoid_light");
    assert_eq!(json["sleepSchedule"]["adjustmentPhase"], "Major adjustment needed");
    assert!(json["preTravelDays"][0][2].get("intensity").is_none());

    let back: JetLagPlan = serde_json::from_value(json).unwrap();
    assert_eq!(back, plan);
}

#[test]
fn test_travel_details_from_json() {
    let raw = r#"{
        "departureTimezone": "HKT",
        "arrivalTimezone": "GMT",
        "departureTime": "2024-09-01 23:45",
        "arrivalTime": "2024-09-02 06:10",
        "usualBedtime": "00:30",
        "usualWakeTime": "08:00"
    }"#;
    let travel: TravelDetails = serde_json::from_str(raw).unwrap();
    let plan = calculate_jet_lag_plan(&travel).unwrap();

    assert_eq!(plan.direction, Direction::Westward);
    assert_eq!(plan.time_zones_difference, 8.0);
    assert_eq!(plan.arrival_local_time, "06:10");
    assert_eq!(plan.sleep_schedule.new_bedtime, "16:30");
    // Westward morning arrival: keep the light off
    assert_eq!(plan.travel_day[1].action, LightAction::AvoidLight);
}

#[test]
fn test_config_driven_strict_planner() {
    let mut config = Config::default();
    config.set("planner.strict_zones", "true").unwrap();
    let planner = config.planner();
    assert_eq!(planner.resolution(), ZoneResolution::Strict);

    let mut travel = los_angeles_to_tokyo();
    travel.arrival_timezone = "BST".to_string();
    let err = planner.plan(&travel).unwrap_err();
    assert!(matches!(err, CoreError::UnrecognizedZone { .. }));

    let lenient = JetLagPlanner::new().plan(&travel).unwrap();
    assert_eq!(lenient.time_zones_difference, 8.0);
    assert_eq!(lenient.direction, Direction::Eastward);
}
