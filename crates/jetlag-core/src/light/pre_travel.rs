use super::{schedule_days, DaySchedule, LightAction, LightExposureRecommendation};
use crate::travel::{format_clock, Direction};

/// Preparation starts at most this many days before departure.
pub const MAX_PRE_TRAVEL_DAYS: u32 = 3;

/// Largest shift applied per preparation day, in minutes.
const MAX_SHIFT_PER_DAY_MIN: f64 = 60.0;

const EAST_LIGHT_ANCHOR_MIN: i64 = 7 * 60;
const EAST_DIM_ANCHOR_MIN: i64 = 21 * 60;
const WEST_MORNING_MIN: i64 = 6 * 60;
const WEST_NAP_MIN: i64 = 13 * 60;
const WEST_LIGHT_ANCHOR_MIN: i64 = 18 * 60;

/// Gradual body-clock shift for the days before departure.
///
/// Eastward trips move morning light and evening dimming earlier each day;
/// westward trips keep mornings dim and push evening light later. Day 1 is
/// the first preparation day.
pub fn pre_travel_schedule(direction: Direction, zone_difference: f64) -> Vec<DaySchedule> {
    let days = schedule_days(zone_difference, MAX_PRE_TRAVEL_DAYS);
    if days == 0 {
        return Vec::new();
    }

    let step_min = (zone_difference * 60.0 / f64::from(days))
        .min(MAX_SHIFT_PER_DAY_MIN)
        .round() as i64;

    (1..=days)
        .map(|day| {
            let shift = i64::from(day) * step_min;
            match direction {
                Direction::Eastward => eastward_day(shift),
                Direction::Westward => westward_day(shift),
            }
        })
        .collect()
}

fn eastward_day(shift_min: i64) -> DaySchedule {
    vec![
        LightExposureRecommendation::new(
            format_clock(EAST_LIGHT_ANCHOR_MIN - shift_min),
            LightAction::BrightLight,
            "Get bright light exposure (10,000+ lux) - outdoor sunlight or light therapy box",
        )
        .with_intensity("10,000+ lux"),
        LightExposureRecommendation::new(
            "Afternoon",
            LightAction::SeekLight,
            "Avoid napping - stay active in daylight to build sleep pressure for an earlier bedtime",
        )
        .with_intensity("Natural daylight"),
        LightExposureRecommendation::new(
            format_clock(EAST_DIM_ANCHOR_MIN - shift_min),
            LightAction::AvoidLight,
            "Start dimming lights, avoid screens. Use blue light filters.",
        ),
    ]
}

fn westward_day(shift_min: i64) -> DaySchedule {
    vec![
        LightExposureRecommendation::new(
            format_clock(WEST_MORNING_MIN),
            LightAction::AvoidLight,
            "Keep lights dim, wear sunglasses if going outside",
        ),
        LightExposureRecommendation::new(
            format_clock(WEST_NAP_MIN),
            LightAction::DimLight,
            "A short nap is fine if needed - keep it under 30 minutes and finish before 15:00",
        ),
        LightExposureRecommendation::new(
            format_clock(WEST_LIGHT_ANCHOR_MIN + shift_min),
            LightAction::BrightLight,
            "Get bright light exposure in the evening to push your body clock later",
        )
        .with_intensity("10,000+ lux"),
    ]
}
