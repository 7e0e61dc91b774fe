use crate::validation::error::ValidationError;
use crate::validation::params::{parse_datetime, validate_wire_datetime};
use chrono::{DateTime, NaiveDateTime, TimeZone, Timelike};

/// Anything that can name a minute-precision instant.
///
/// Upstream times are Korea Standard Time wall-clock values, so zoned
/// datetimes contribute their local reading and seconds are truncated.
pub trait AnyDateTime {
    fn to_datetime(self) -> Result<NaiveDateTime, ValidationError>;
}

fn truncate_to_minute(datetime: NaiveDateTime) -> NaiveDateTime {
    datetime
        .with_second(0)
        .and_then(|dt| dt.with_nanosecond(0))
        .unwrap_or(datetime)
}

impl AnyDateTime for NaiveDateTime {
    fn to_datetime(self) -> Result<NaiveDateTime, ValidationError> {
        validate_wire_datetime(truncate_to_minute(self))
    }
}

impl<Tz: TimeZone> AnyDateTime for DateTime<Tz> {
    fn to_datetime(self) -> Result<NaiveDateTime, ValidationError> {
        validate_wire_datetime(truncate_to_minute(self.naive_local()))
    }
}

impl AnyDateTime for &str {
    fn to_datetime(self) -> Result<NaiveDateTime, ValidationError> {
        parse_datetime(self)
    }
}

impl AnyDateTime for String {
    fn to_datetime(self) -> Result<NaiveDateTime, ValidationError> {
        parse_datetime(&self)
    }
}

impl AnyDateTime for &String {
    fn to_datetime(self) -> Result<NaiveDateTime, ValidationError> {
        parse_datetime(self)
    }
}
