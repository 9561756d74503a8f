use super::{schedule_days, DaySchedule, LightAction, LightExposureRecommendation};
use crate::travel::Direction;

/// Follow-up runs for at most this many days after arrival.
pub const MAX_POST_TRAVEL_DAYS: u32 = 5;

/// Daily routine after arrival. Unlike preparation days the clock times
/// stay fixed from one day to the next.
pub fn post_travel_schedule(direction: Direction, zone_difference: f64) -> Vec<DaySchedule> {
    let days = schedule_days(zone_difference, MAX_POST_TRAVEL_DAYS);
    (0..days)
        .map(|_| match direction {
            Direction::Eastward => eastward_day(),
            Direction::Westward => westward_day(),
        })
        .collect()
}

fn eastward_day() -> DaySchedule {
    vec![
        LightExposureRecommendation::new(
            "06:00",
            LightAction::BrightLight,
            "Get morning sunlight - go outside within 30 minutes of waking",
        )
        .with_intensity("Natural sunlight"),
        LightExposureRecommendation::new(
            "10:00",
            LightAction::BrightLight,
            "Continue bright light exposure throughout morning",
        )
        .with_intensity("2,500+ lux"),
        LightExposureRecommendation::new(
            "19:00",
            LightAction::AvoidLight,
            "Start dimming lights 2-3 hours before intended bedtime",
        ),
    ]
}

fn westward_day() -> DaySchedule {
    vec![
        LightExposureRecommendation::new(
            "07:00",
            LightAction::DimLight,
            "Keep morning light minimal - stay indoors or wear sunglasses",
        ),
        LightExposureRecommendation::new(
            "17:00",
            LightAction::BrightLight,
            "Seek afternoon/evening light exposure",
        )
        .with_intensity("2,500+ lux"),
        LightExposureRecommendation::new(
            "20:00",
            LightAction::BrightLight,
            "Continue bright light in evening to delay sleep",
        )
        .with_intensity("10,000+ lux"),
    ]
}
