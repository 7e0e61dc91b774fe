use crate::validation::error::ValidationError;
use crate::validation::params::{parse_date, validate_wire_date};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// Anything that can name a calendar day for a date-granularity endpoint.
///
/// Strings must be in the upstream `YYYYMMDD` form and are checked by
/// [`parse_date`]; typed values only need a year that fits four digits.
pub trait AnyDate {
    fn to_date(self) -> Result<NaiveDate, ValidationError>;
}

impl AnyDate for NaiveDate {
    fn to_date(self) -> Result<NaiveDate, ValidationError> {
        validate_wire_date(self)
    }
}

impl AnyDate for NaiveDateTime {
    fn to_date(self) -> Result<NaiveDate, ValidationError> {
        validate_wire_date(self.date())
    }
}

impl<Tz: TimeZone> AnyDate for DateTime<Tz> {
    fn to_date(self) -> Result<NaiveDate, ValidationError> {
        validate_wire_date(self.naive_local().date())
    }
}

impl AnyDate for &str {
    fn to_date(self) -> Result<NaiveDate, ValidationError> {
        parse_date(self)
    }
}

impl AnyDate for String {
    fn to_date(self) -> Result<NaiveDate, ValidationError> {
        parse_date(&self)
    }
}

impl AnyDate for &String {
    fn to_date(self) -> Result<NaiveDate, ValidationError> {
        parse_date(self)
    }
}
