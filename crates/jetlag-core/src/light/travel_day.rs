use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use super::{DaySchedule, LightAction, LightExposureRecommendation};
use crate::travel::Direction;

/// Part of the day the traveler lands in, by destination-local hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrivalBucket {
    /// 06:00-11:59
    Morning,
    /// 12:00-17:59
    Midday,
    /// 18:00-23:59
    Evening,
    /// 00:00-05:59
    Night,
}

impl ArrivalBucket {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=11 => ArrivalBucket::Morning,
            18..=23 => ArrivalBucket::Evening,
            0..=5 => ArrivalBucket::Night,
            _ => ArrivalBucket::Midday,
        }
    }
}

/// Recommendations for the day of the flight: one for the flight itself and
/// one for the first hours after landing.
pub fn travel_day_schedule(direction: Direction, arrival_local: NaiveDateTime) -> DaySchedule {
    let bucket = ArrivalBucket::from_hour(arrival_local.hour());
    let arrival_label = format!("Upon arrival ({})", arrival_local.format("%H:%M"));

    vec![in_flight(direction), on_arrival(direction, bucket, arrival_label)]
}

fn in_flight(direction: Direction) -> LightExposureRecommendation {
    match direction {
        Direction::Eastward => LightExposureRecommendation::new(
            "During flight",
            LightAction::AvoidLight,
            "Keep cabin lights dim, wear eye mask, try to sleep if it's nighttime at destination",
        ),
        Direction::Westward => LightExposureRecommendation::new(
            "During flight",
            LightAction::DimLight,
            "Stay awake if it's daytime at destination, use normal cabin lighting",
        ),
    }
}

fn on_arrival(
    direction: Direction,
    bucket: ArrivalBucket,
    time: String,
) -> LightExposureRecommendation {
    use ArrivalBucket::*;

    match (direction, bucket) {
        (Direction::Eastward, Morning) => LightExposureRecommendation::new(
            time,
            LightAction::BrightLight,
            "Optimal morning arrival - get outdoor sunlight immediately to advance your body clock",
        )
        .with_intensity("Natural sunlight"),
        (Direction::Eastward, Evening | Night) => LightExposureRecommendation::new(
            time,
            LightAction::AvoidLight,
            "Keep lights low and get to sleep as soon as possible",
        ),
        (Direction::Eastward, Midday) => LightExposureRecommendation::new(
            time,
            LightAction::BrightLight,
            "Get moderate daylight this afternoon, then dim lights early in the evening",
        )
        .with_intensity("2,500+ lux"),
        (Direction::Westward, Evening) => LightExposureRecommendation::new(
            time,
            LightAction::BrightLight,
            "Optimal evening arrival - seek bright light to stay up until local bedtime",
        )
        .with_intensity("10,000+ lux"),
        (Direction::Westward, Morning) => LightExposureRecommendation::new(
            time,
            LightAction::AvoidLight,
            "Avoid bright morning light - wear sunglasses and save light exposure for the evening",
        ),
        (Direction::Westward, Midday | Night) => LightExposureRecommendation::new(
            time,
            LightAction::DimLight,
            "Keep lighting soft and stay awake until local evening",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn arriving_at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 11)
            .unwrap()
            .and_hms_opt(hour, 15, 0)
            .unwrap()
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(ArrivalBucket::from_hour(0), ArrivalBucket::Night);
        assert_eq!(ArrivalBucket::from_hour(5), ArrivalBucket::Night);
        assert_eq!(ArrivalBucket::from_hour(6), ArrivalBucket::Morning);
        assert_eq!(ArrivalBucket::from_hour(11), ArrivalBucket::Morning);
        assert_eq!(ArrivalBucket::from_hour(12), ArrivalBucket::Midday);
        assert_eq!(ArrivalBucket::from_hour(17), ArrivalBucket::Midday);
        assert_eq!(ArrivalBucket::from_hour(18), ArrivalBucket::Evening);
        assert_eq!(ArrivalBucket::from_hour(23), ArrivalBucket::Evening);
    }

    #[test]
    fn always_two_entries_starting_with_flight() {
        for direction in [Direction::Eastward, Direction::Westward] {
            for hour in 0..24 {
                let schedule = travel_day_schedule(direction, arriving_at(hour));
                assert_eq!(schedule.len(), 2);
                assert_eq!(schedule[0].time, "During flight");
                assert!(!schedule[0].action.is_light_seeking());
            }
        }
    }

    #[test]
    fn eastward_morning_arrival_is_optimal() {
        let schedule = travel_day_schedule(Direction::Eastward, arriving_at(7));
        assert_eq!(schedule[0].action, LightAction::AvoidLight);
        assert_eq!(schedule[1].action, LightAction::BrightLight);
        assert!(schedule[1].description.contains("Optimal morning arrival"));
        assert_eq!(schedule[1].time, "Upon arrival (07:15)");
    }

    #[test]
    fn eastward_policy_table() {
        let action = |hour| travel_day_schedule(Direction::Eastward, arriving_at(hour))[1].action;
        assert_eq!(action(20), LightAction::AvoidLight);
        assert_eq!(action(2), LightAction::AvoidLight);
        let midday = &travel_day_schedule(Direction::Eastward, arriving_at(14))[1];
        assert_eq!(midday.action, LightAction::BrightLight);
        assert_eq!(midday.intensity.as_deref(), Some("2,500+ lux"));
    }

    #[test]
    fn westward_policy_table() {
        let schedule = travel_day_schedule(Direction::Westward, arriving_at(19));
        assert_eq!(schedule[0].action, LightAction::DimLight);
        assert_eq!(schedule[1].action, LightAction::BrightLight);
        assert!(schedule[1].description.contains("Optimal evening arrival"));

        let action = |hour| travel_day_schedule(Direction::Westward, arriving_at(hour))[1].action;
        assert_eq!(action(8), LightAction::AvoidLight);
        assert_eq!(action(13), LightAction::DimLight);
        assert_eq!(action(3), LightAction::DimLight);
    }
}
