//! Points and ranges in time as the upstream endpoints understand them.
//!
//! Endpoints work at one of two granularities: a calendar date (`YYYYMMDD`) or a
//! minute-precision instant (`YYYYMMDDHHmm`). Values here are already validated;
//! turning them into wire strings is the job of [`crate::normalize`].

use crate::types::traits::any::any_date::AnyDate;
use crate::types::traits::any::any_datetime::AnyDateTime;
use crate::validation::error::ValidationError;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta, Timelike, Utc};
use std::fmt;

/// Offset of Korea Standard Time from UTC. KST has no daylight saving.
const KST_OFFSET_HOURS: i64 = 9;

/// Current Korea Standard Time wall clock, truncated to the minute.
pub fn kst_now() -> NaiveDateTime {
    let now = Utc::now().naive_utc() + TimeDelta::hours(KST_OFFSET_HOURS);
    // Truncation cannot fail for a `NaiveDateTime` built this way.
    now.to_datetime().unwrap_or(now)
}

/// Current KST hour, with minutes zeroed. Hourly products are keyed on this.
pub fn kst_current_hour() -> NaiveDateTime {
    let now = kst_now();
    now.date().and_hms_opt(now.hour(), 0, 0).unwrap_or(now)
}

/// The precision an endpoint declares for its time parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Date,
    Minute,
}

/// A single validated point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LogicalInstant {
    Date(NaiveDate),
    Minute(NaiveDateTime),
}

impl LogicalInstant {
    pub fn date(value: impl AnyDate) -> Result<Self, ValidationError> {
        Ok(Self::Date(value.to_date()?))
    }

    pub fn minute(value: impl AnyDateTime) -> Result<Self, ValidationError> {
        Ok(Self::Minute(value.to_datetime()?))
    }

    pub fn granularity(&self) -> Granularity {
        match self {
            LogicalInstant::Date(_) => Granularity::Date,
            LogicalInstant::Minute(_) => Granularity::Minute,
        }
    }

    /// Start of the instant at minute precision. Dates resolve to midnight.
    pub fn as_datetime(&self) -> NaiveDateTime {
        match self {
            LogicalInstant::Date(date) => date.and_time(chrono::NaiveTime::MIN),
            LogicalInstant::Minute(datetime) => *datetime,
        }
    }
}

impl From<NaiveDate> for LogicalInstant {
    fn from(value: NaiveDate) -> Self {
        LogicalInstant::Date(value)
    }
}

impl From<NaiveDateTime> for LogicalInstant {
    fn from(value: NaiveDateTime) -> Self {
        LogicalInstant::Minute(value)
    }
}

/// A closed range of two instants at the same granularity, with `end >= start`.
///
/// An interval whose end precedes its start is rejected at construction; equal
/// bounds are allowed and describe a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogicalInterval {
    start: LogicalInstant,
    end: LogicalInstant,
}

impl LogicalInterval {
    pub fn dates(start: impl AnyDate, end: impl AnyDate) -> Result<Self, ValidationError> {
        Self::new(LogicalInstant::date(start)?, LogicalInstant::date(end)?)
    }

    pub fn minutes(
        start: impl AnyDateTime,
        end: impl AnyDateTime,
    ) -> Result<Self, ValidationError> {
        Self::new(LogicalInstant::minute(start)?, LogicalInstant::minute(end)?)
    }

    pub fn new(start: LogicalInstant, end: LogicalInstant) -> Result<Self, ValidationError> {
        match (start, end) {
            (LogicalInstant::Date(s), LogicalInstant::Date(e)) if e < s => {
                Err(ValidationError::InvalidDate(format!(
                    "End date {} precedes start date {}",
                    e.format("%Y%m%d"),
                    s.format("%Y%m%d")
                )))
            }
            (LogicalInstant::Minute(s), LogicalInstant::Minute(e)) if e < s => {
                Err(ValidationError::InvalidTime(format!(
                    "End time {} precedes start time {}",
                    e.format("%Y%m%d%H%M"),
                    s.format("%Y%m%d%H%M")
                )))
            }
            (LogicalInstant::Date(_), LogicalInstant::Date(_))
            | (LogicalInstant::Minute(_), LogicalInstant::Minute(_)) => Ok(Self { start, end }),
            _ => Err(ValidationError::InvalidTime(
                "Interval bounds must share the same granularity".to_string(),
            )),
        }
    }

    pub fn start(&self) -> LogicalInstant {
        self.start
    }

    pub fn end(&self) -> LogicalInstant {
        self.end
    }

    pub fn granularity(&self) -> Granularity {
        self.start.granularity()
    }
}

/// Issue time of a forecast product. `Latest` is sent as the literal `"0"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IssueTime {
    #[default]
    Latest,
    At(NaiveDateTime),
}

impl IssueTime {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw == "0" {
            Ok(IssueTime::Latest)
        } else {
            Ok(IssueTime::At(raw.to_datetime()?))
        }
    }
}

impl From<NaiveDateTime> for IssueTime {
    fn from(value: NaiveDateTime) -> Self {
        IssueTime::At(value)
    }
}

impl fmt::Display for IssueTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueTime::Latest => f.write_str("0"),
            IssueTime::At(at) => write!(f, "{}", at.format("%Y%m%d%H%M")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_rejects_reversed_minutes() {
        let err = LogicalInterval::minutes("202501021200", "202501011200").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidTime(_)));
    }

    #[test]
    fn test_interval_rejects_reversed_dates() {
        let err = LogicalInterval::dates("20250102", "20250101").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDate(_)));
    }

    #[test]
    fn test_interval_allows_equal_bounds() {
        let interval = LogicalInterval::dates("20250101", "20250101").unwrap();
        assert_eq!(interval.start(), interval.end());
        assert_eq!(interval.granularity(), Granularity::Date);
    }

    #[test]
    fn test_interval_rejects_mixed_granularity() {
        let start = LogicalInstant::date("20250101").unwrap();
        let end = LogicalInstant::minute("202501011200").unwrap();
        assert!(LogicalInterval::new(start, end).is_err());
    }

    #[test]
    fn test_interval_propagates_bound_validation() {
        assert!(matches!(
            LogicalInterval::minutes("202501012560", "202501021200"),
            Err(ValidationError::InvalidTime(_))
        ));
        assert!(matches!(
            LogicalInterval::dates("20250101", "20250230"),
            Err(ValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_issue_time_sentinel() {
        assert_eq!(IssueTime::parse("0").unwrap(), IssueTime::Latest);
        assert_eq!(IssueTime::Latest.to_string(), "0");

        let at = IssueTime::parse("202501010500").unwrap();
        assert_eq!(at.to_string(), "202501010500");
        assert!(IssueTime::parse("00").is_err());
    }

    #[test]
    fn test_kst_now_is_minute_aligned() {
        let now = kst_now();
        assert_eq!(now.second(), 0);
        assert_eq!(now.nanosecond(), 0);
        assert_eq!(kst_current_hour().minute(), 0);
    }

    #[test]
    fn test_date_instant_as_datetime_is_midnight() {
        let instant = LogicalInstant::date("20250101").unwrap();
        assert_eq!(
            instant.as_datetime().format("%Y%m%d%H%M").to_string(),
            "202501010000"
        );
    }
}
