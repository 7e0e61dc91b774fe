//! Calendar fields used by the climate-normals endpoints.

use crate::validation::error::ValidationError;
use chrono::NaiveDate;

/// Month of the year, `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClimateMonth(u8);

impl ClimateMonth {
    pub fn new(month: i64) -> Result<Self, ValidationError> {
        if (1..=12).contains(&month) {
            Ok(Self(month as u8))
        } else {
            Err(ValidationError::InvalidDate(format!(
                "Month must be between 1 and 12, got: {month}"
            )))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

/// A month/day pair that exists in at least one year (so `02-29` is fine, `02-30` is not).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthDay {
    month: ClimateMonth,
    day: u8,
}

impl MonthDay {
    pub fn new(month: i64, day: i64) -> Result<Self, ValidationError> {
        let month = ClimateMonth::new(month)?;
        let valid = u32::try_from(day)
            .ok()
            .and_then(|d| NaiveDate::from_ymd_opt(2000, u32::from(month.get()), d))
            .is_some();
        if !valid {
            return Err(ValidationError::InvalidDate(format!(
                "Day {day} does not exist in month {}",
                month.get()
            )));
        }
        Ok(Self {
            month,
            day: day as u8,
        })
    }

    pub fn month(&self) -> ClimateMonth {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }
}

/// One of the three ten-day periods ("dekads") of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DekadPeriod(u8);

impl DekadPeriod {
    pub fn new(period: i64) -> Result<Self, ValidationError> {
        if (1..=3).contains(&period) {
            Ok(Self(period as u8))
        } else {
            Err(ValidationError::InvalidDate(format!(
                "Ten-day period must be 1, 2 or 3, got: {period}"
            )))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}
