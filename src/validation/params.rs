//! Bounds checks that turn raw caller values into validated domain values.
//!
//! Every check here is pure and runs before any request is assembled. A value that
//! makes it through one of these functions is safe to hand to the normalizer.

use crate::types::geo::GeoBounds;
use crate::validation::error::ValidationError;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

pub const MIN_YEAR: i64 = 1900;
pub const MAX_YEAR: i64 = 2100;
pub const MAX_STATION: i64 = 99_999;

/// Largest year that still fits the four-digit year of `YYYYMMDD` and `YYYYMMDDHHmm`.
pub const MAX_WIRE_YEAR: i32 = 9999;

/// Splits `raw` into its numeric fields when it is exactly `width` ASCII digits.
fn digits(raw: &str, width: usize) -> Option<&str> {
    (raw.len() == width && raw.bytes().all(|b| b.is_ascii_digit())).then_some(raw)
}

fn field(raw: &str, from: usize, to: usize) -> u32 {
    // Only called on slices already checked to be ASCII digits.
    raw[from..to]
        .bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

/// Validates a `YYYYMMDD` string and returns the calendar date it names.
///
/// The string must be exactly 8 digits and name a real date, so `"20250230"` is
/// rejected just like `"2025-01-01"`.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = digits(raw, 8).ok_or_else(|| {
        ValidationError::InvalidDate(format!(
            "Date must be 8 digits in YYYYMMDD format, got: {raw}"
        ))
    })?;
    let year = field(raw, 0, 4) as i32;
    NaiveDate::from_ymd_opt(year, field(raw, 4, 6), field(raw, 6, 8))
        .ok_or_else(|| ValidationError::InvalidDate(format!("{raw} is not a calendar date")))
}

/// Validates a `YYYYMMDDHHmm` string and returns the instant it names.
///
/// Any failure, including an impossible calendar date inside the string, is an
/// [`ValidationError::InvalidTime`].
pub fn parse_datetime(raw: &str) -> Result<NaiveDateTime, ValidationError> {
    let raw = digits(raw, 12).ok_or_else(|| {
        ValidationError::InvalidTime(format!(
            "Datetime must be 12 digits in YYYYMMDDHHmm format, got: {raw}"
        ))
    })?;
    let year = field(raw, 0, 4) as i32;
    let date = NaiveDate::from_ymd_opt(year, field(raw, 4, 6), field(raw, 6, 8));
    let time = NaiveTime::from_hms_opt(field(raw, 8, 10), field(raw, 10, 12), 0);
    match (date, time) {
        (Some(date), Some(time)) => Ok(date.and_time(time)),
        _ => Err(ValidationError::InvalidTime(format!(
            "{raw} is not a valid date and time"
        ))),
    }
}

/// Checks that a typed date can be written as exactly 8 digits.
pub fn validate_wire_date(date: NaiveDate) -> Result<NaiveDate, ValidationError> {
    if (0..=MAX_WIRE_YEAR).contains(&date.year()) {
        Ok(date)
    } else {
        Err(ValidationError::InvalidDate(format!(
            "Year must be between 0 and {MAX_WIRE_YEAR} to fit YYYYMMDD, got: {}",
            date.year()
        )))
    }
}

/// Checks that a typed datetime can be written as exactly 12 digits.
pub fn validate_wire_datetime(datetime: NaiveDateTime) -> Result<NaiveDateTime, ValidationError> {
    if (0..=MAX_WIRE_YEAR).contains(&datetime.year()) {
        Ok(datetime)
    } else {
        Err(ValidationError::InvalidTime(format!(
            "Year must be between 0 and {MAX_WIRE_YEAR} to fit YYYYMMDDHHmm, got: {}",
            datetime.year()
        )))
    }
}

pub fn validate_year(year: i64) -> Result<i32, ValidationError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(year as i32)
    } else {
        Err(ValidationError::InvalidDate(format!(
            "Year must be between {MIN_YEAR} and {MAX_YEAR}, got: {year}"
        )))
    }
}

/// Base periods of the surface normals, named by the year after their last year.
pub const NORMALS_BASES: [i64; 4] = [1991, 2001, 2011, 2021];

pub fn validate_normals_base(base: i64) -> Result<u16, ValidationError> {
    if NORMALS_BASES.contains(&base) {
        Ok(base as u16)
    } else {
        Err(ValidationError::InvalidDate(format!(
            "Normals base must be one of 1991, 2001, 2011, 2021, got: {base}"
        )))
    }
}

/// Enforces the numeric envelope shared by every station identifier space.
///
/// Which space the number belongs to (domestic, WMO) is decided by the caller;
/// see [`crate::StationSelector`].
pub fn validate_station(station: i64) -> Result<u32, ValidationError> {
    if (0..=MAX_STATION).contains(&station) {
        Ok(station as u32)
    } else {
        Err(ValidationError::InvalidStation(format!(
            "Station ID must be between 0 and {MAX_STATION}, got: {station}"
        )))
    }
}

/// Checks a latitude against the box declared by the calling operation, inclusive.
pub fn validate_latitude(latitude: f64, bounds: &GeoBounds) -> Result<f64, ValidationError> {
    if bounds.contains_latitude(latitude) {
        Ok(latitude)
    } else {
        Err(ValidationError::InvalidCoordinate(format!(
            "Latitude must be between {} and {} for {}, got: {latitude}",
            bounds.min_latitude, bounds.max_latitude, bounds.name
        )))
    }
}

/// Checks a longitude against the box declared by the calling operation, inclusive.
pub fn validate_longitude(longitude: f64, bounds: &GeoBounds) -> Result<f64, ValidationError> {
    if bounds.contains_longitude(longitude) {
        Ok(longitude)
    } else {
        Err(ValidationError::InvalidCoordinate(format!(
            "Longitude must be between {} and {} for {}, got: {longitude}",
            bounds.min_longitude, bounds.max_longitude, bounds.name
        )))
    }
}

/// Typhoon numbers are `YYNN`: two-digit year, two-digit sequence within the year.
pub fn validate_typhoon_id(raw: &str) -> Result<&str, ValidationError> {
    digits(raw, 4)
        .filter(|id| field(id, 2, 4) > 0)
        .ok_or_else(|| {
            ValidationError::InvalidStation(format!(
                "Typhoon ID must be 4 digits in YYNN format, got: {raw}"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::error::ValidationKind;

    #[test]
    fn test_valid_dates_round_trip() {
        for raw in ["20250101", "20240229", "19000101", "21001231"] {
            let date = parse_date(raw).unwrap();
            assert_eq!(date.format("%Y%m%d").to_string(), raw);
        }
    }

    #[test]
    fn test_impossible_dates_rejected() {
        for raw in ["20250230", "20230229", "20251301", "20250100", "20250132"] {
            let err = parse_date(raw).unwrap_err();
            assert_eq!(err.kind(), ValidationKind::Date, "{raw}");
        }
    }

    #[test]
    fn test_malformed_dates_rejected() {
        for raw in ["2025-01-01", "2025011", "202501011", "", "2025O101"] {
            assert!(matches!(
                parse_date(raw),
                Err(ValidationError::InvalidDate(_))
            ));
        }
    }

    #[test]
    fn test_datetime_hour_and_minute_limits() {
        assert!(matches!(
            parse_datetime("202501012560"),
            Err(ValidationError::InvalidTime(_))
        ));
        assert!(matches!(
            parse_datetime("202501011299"),
            Err(ValidationError::InvalidTime(_))
        ));
        assert!(matches!(
            parse_datetime("202501012400"),
            Err(ValidationError::InvalidTime(_))
        ));

        let noon = parse_datetime("202501011200").unwrap();
        assert_eq!(noon.format("%Y%m%d%H%M").to_string(), "202501011200");
        assert!(parse_datetime("202501010000").is_ok());
        assert!(parse_datetime("202501012359").is_ok());
    }

    #[test]
    fn test_datetime_with_impossible_date_is_a_time_error() {
        assert!(matches!(
            parse_datetime("202502301200"),
            Err(ValidationError::InvalidTime(_))
        ));
        assert!(matches!(
            parse_datetime("20250101"),
            Err(ValidationError::InvalidTime(_))
        ));
    }

    #[test]
    fn test_messages_do_not_repeat_the_error_prefix() {
        let err = parse_date("20250230").unwrap_err();
        assert_eq!(err.to_string(), "Invalid date: 20250230 is not a calendar date");
        let err = parse_datetime("202502301200").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid datetime: 202502301200 is not a valid date and time"
        );
        for err in [err, parse_date("2025").unwrap_err(), validate_station(-1).unwrap_err()] {
            let text = err.to_string();
            assert_eq!(text.matches("Invalid").count(), 1, "{text}");
        }
    }

    #[test]
    fn test_typed_years_must_fit_four_digits() {
        let far = NaiveDate::from_ymd_opt(12345, 1, 1).unwrap();
        assert!(matches!(
            validate_wire_date(far),
            Err(ValidationError::InvalidDate(_))
        ));
        let before_zero = NaiveDate::from_ymd_opt(-1, 12, 31).unwrap();
        assert!(validate_wire_date(before_zero).is_err());
        assert!(matches!(
            validate_wire_datetime(far.and_hms_opt(0, 0, 0).unwrap()),
            Err(ValidationError::InvalidTime(_))
        ));

        let last = NaiveDate::from_ymd_opt(MAX_WIRE_YEAR, 12, 31).unwrap();
        assert_eq!(validate_wire_date(last), Ok(last));
        let first = NaiveDate::from_ymd_opt(0, 1, 1).unwrap();
        assert_eq!(validate_wire_date(first), Ok(first));
    }

    #[test]
    fn test_year_bounds() {
        assert_eq!(validate_year(1900), Ok(1900));
        assert_eq!(validate_year(2100), Ok(2100));
        assert_eq!(validate_year(2025), Ok(2025));
        assert!(matches!(
            validate_year(1899),
            Err(ValidationError::InvalidDate(_))
        ));
        assert!(matches!(
            validate_year(2101),
            Err(ValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_normals_bases() {
        assert_eq!(validate_normals_base(2021), Ok(2021));
        assert_eq!(validate_normals_base(1991), Ok(1991));
        assert!(matches!(
            validate_normals_base(2020),
            Err(ValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_station_bounds() {
        assert_eq!(validate_station(0), Ok(0));
        assert_eq!(validate_station(108), Ok(108));
        assert_eq!(validate_station(47122), Ok(47122));
        assert_eq!(validate_station(99_999), Ok(99_999));
        assert!(matches!(
            validate_station(-1),
            Err(ValidationError::InvalidStation(_))
        ));
        assert!(matches!(
            validate_station(100_000),
            Err(ValidationError::InvalidStation(_))
        ));
    }

    #[test]
    fn test_latitude_bounds_are_inclusive() {
        let korea = GeoBounds::KOREA;
        assert_eq!(validate_latitude(33.0, &korea), Ok(33.0));
        assert_eq!(validate_latitude(43.0, &korea), Ok(43.0));
        assert_eq!(validate_latitude(37.5, &korea), Ok(37.5));
        assert!(matches!(
            validate_latitude(32.999, &korea),
            Err(ValidationError::InvalidCoordinate(_))
        ));
        assert!(matches!(
            validate_latitude(43.001, &korea),
            Err(ValidationError::InvalidCoordinate(_))
        ));
        assert!(validate_latitude(f64::NAN, &korea).is_err());
    }

    #[test]
    fn test_longitude_bounds_are_inclusive() {
        let korea = GeoBounds::KOREA;
        assert_eq!(validate_longitude(124.0, &korea), Ok(124.0));
        assert_eq!(validate_longitude(132.0, &korea), Ok(132.0));
        assert!(validate_longitude(123.999, &korea).is_err());
        assert!(validate_longitude(132.001, &korea).is_err());
    }

    #[test]
    fn test_bounds_are_per_operation() {
        // 32.0 lies outside the observation box but inside the grid-conversion box.
        assert!(validate_latitude(32.0, &GeoBounds::KOREA).is_err());
        assert_eq!(
            validate_latitude(32.0, &GeoBounds::GRID_CONVERSION),
            Ok(32.0)
        );
        assert!(validate_longitude(123.5, &GeoBounds::KOREA).is_err());
        assert!(validate_longitude(123.5, &GeoBounds::GRID_CONVERSION).is_ok());
    }

    #[test]
    fn test_typhoon_ids() {
        assert_eq!(validate_typhoon_id("2501"), Ok("2501"));
        for raw in ["250", "25011", "25a1", "2500", ""] {
            assert!(matches!(
                validate_typhoon_id(raw),
                Err(ValidationError::InvalidStation(_))
            ));
        }
    }
}
