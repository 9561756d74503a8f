//! Clock and naive date-time arithmetic.
//!
//! Everything here works on naive wall-clock values shifted by whole-table
//! offsets. Calendar rollover (midnight, month and year ends) is delegated to
//! chrono.

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};

use crate::error::{CoreError, Result, ValidationError};
use crate::zones::ZoneTable;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse an "HH:MM" 24-hour clock string into minutes after midnight.
///
/// # Errors
///
/// Returns `InvalidInput` naming `field` when the string is not a valid clock time.
pub fn parse_clock(field: &str, value: &str) -> Result<i64> {
    let time = NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|e| {
        ValidationError::invalid_input(field, format!("expected HH:MM, got '{value}' ({e})"))
    })?;
    Ok(i64::from(time.hour()) * 60 + i64::from(time.minute()))
}

/// Format minutes as a zero-padded "HH:MM" time of day.
///
/// Values outside a single day wrap around, including negative ones.
pub fn format_clock(minutes: i64) -> String {
    let wrapped = minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", wrapped / 60, wrapped % 60)
}

/// Parse a naive local date-time such as `2024-03-10T13:00`.
///
/// # Errors
///
/// Returns `InvalidInput` naming `field` when no accepted format matches.
pub fn parse_local_datetime(field: &str, value: &str) -> Result<NaiveDateTime> {
    let trimmed = value.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| {
            ValidationError::invalid_input(
                field,
                format!("expected YYYY-MM-DDTHH:MM, got '{value}'"),
            )
            .into()
        })
}

/// Convert an offset in (possibly fractional) hours to whole minutes.
pub fn offset_minutes(hours: f64) -> i64 {
    (hours * 60.0).round() as i64
}

/// Shift a naive instant from one UTC offset to another.
///
/// Returns `None` when the result falls outside chrono's supported range.
pub fn shift_between_offsets(
    local: NaiveDateTime,
    from_hours: f64,
    to_hours: f64,
) -> Option<NaiveDateTime> {
    local.checked_add_signed(Duration::minutes(
        offset_minutes(to_hours) - offset_minutes(from_hours),
    ))
}

fn out_of_range(field: &str, local: NaiveDateTime) -> CoreError {
    ValidationError::invalid_input(field, format!("date out of range: {local}")).into()
}

/// Wall-clock time at `dest` for an instant expressed in `source` local time.
///
/// # Errors
///
/// Returns `InvalidInput` when the shifted instant is not representable.
pub fn to_destination_local(
    zones: &ZoneTable,
    local: NaiveDateTime,
    source: &str,
    dest: &str,
) -> Result<NaiveDateTime> {
    shift_between_offsets(local, zones.offset_hours(source), zones.offset_hours(dest))
        .ok_or_else(|| out_of_range("dateTime", local))
}

/// Absolute flight duration in hours.
///
/// The arrival instant is moved onto the departure zone's timeline before
/// the two are differenced.
///
/// # Errors
///
/// Returns `InvalidInput` for `arrivalTime` when the arrival cannot be moved
/// onto the departure clock without leaving the supported date range.
pub fn flight_duration_hours(
    zones: &ZoneTable,
    departure: NaiveDateTime,
    departure_zone: &str,
    arrival: NaiveDateTime,
    arrival_zone: &str,
) -> Result<f64> {
    let arrival_on_departure_clock = shift_between_offsets(
        arrival,
        zones.offset_hours(arrival_zone),
        zones.offset_hours(departure_zone),
    )
    .ok_or_else(|| out_of_range("arrivalTime", arrival))?;
    let minutes = (arrival_on_departure_clock - departure).num_minutes().abs();
    Ok(minutes as f64 / 60.0)
}
