use serde::{Deserialize, Serialize};
use std::fmt;

/// Traveler input as collected by the front end.
///
/// Times are plain strings: `departure_time` is local to the departure zone,
/// `arrival_time` is local to the arrival zone, and the sleep window is given
/// as "HH:MM" clock times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelDetails {
    pub departure_timezone: String,
    pub arrival_timezone: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub usual_bedtime: String,
    pub usual_wake_time: String,
}

impl TravelDetails {
    pub fn new(
        departure_timezone: impl Into<String>,
        arrival_timezone: impl Into<String>,
        departure_time: impl Into<String>,
        arrival_time: impl Into<String>,
        usual_bedtime: impl Into<String>,
        usual_wake_time: impl Into<String>,
    ) -> Self {
        Self {
            departure_timezone: departure_timezone.into(),
            arrival_timezone: arrival_timezone.into(),
            departure_time: departure_time.into(),
            arrival_time: arrival_time.into(),
            usual_bedtime: usual_bedtime.into(),
            usual_wake_time: usual_wake_time.into(),
        }
    }
}

/// Direction of travel relative to the body clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Eastward,
    Westward,
}

impl Direction {
    /// Eastward only for a strictly positive difference; zero counts as westward.
    pub fn from_difference(signed_hours: f64) -> Self {
        if signed_hours > 0.0 {
            Direction::Eastward
        } else {
            Direction::Westward
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Eastward => "eastward",
            Direction::Westward => "westward",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_from_difference() {
        assert_eq!(Direction::from_difference(9.0), Direction::Eastward);
        assert_eq!(Direction::from_difference(0.5), Direction::Eastward);
        assert_eq!(Direction::from_difference(0.0), Direction::Westward);
        assert_eq!(Direction::from_difference(-3.0), Direction::Westward);
    }

    #[test]
    fn travel_details_uses_camel_case_json() {
        let details = TravelDetails::new("PST", "JST", "2024-03-10T13:00", "2024-03-11T17:00", "23:00", "07:00");
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["departureTimezone"], "PST");
        assert_eq!(json["usualWakeTime"], "07:00");

        let parsed: TravelDetails = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, details);
    }

    #[test]
    fn direction_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Eastward).unwrap(), "\"eastward\"");
        assert_eq!(Direction::Westward.to_string(), "westward");
    }
}
