//! Wire encodings for validated values, and the ordered parameter list they go into.
//!
//! Everything here is pure. Encodings follow the upstream conventions exactly,
//! quirks included: climate-normal months and days are zero-padded, ten-day
//! periods are not.

use crate::types::calendar::{ClimateMonth, DekadPeriod, MonthDay};
use crate::types::geo::{GeoCoordinate, GridPoint};
use crate::types::station::StationSelector;
use crate::types::time::{Granularity, IssueTime, LogicalInstant, LogicalInterval};
use chrono::{NaiveDate, NaiveDateTime};

/// `YYYYMMDD`
pub fn encode_date(date: &NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// `YYYYMMDDHHmm`
pub fn encode_minute(datetime: &NaiveDateTime) -> String {
    datetime.format("%Y%m%d%H%M").to_string()
}

/// `HHmm`, the time-of-day half of a split issue time.
pub fn encode_time_of_day(datetime: &NaiveDateTime) -> String {
    datetime.format("%H%M").to_string()
}

/// Encodes an instant at its own granularity.
pub fn encode_instant(instant: &LogicalInstant) -> String {
    encode_instant_as(instant, instant.granularity())
}

/// Encodes an instant at the granularity an endpoint declares.
///
/// A date sent to a minute endpoint means midnight; a minute instant sent to a
/// date endpoint keeps only its date.
pub fn encode_instant_as(instant: &LogicalInstant, granularity: Granularity) -> String {
    match (instant, granularity) {
        (LogicalInstant::Date(date), Granularity::Date) => encode_date(date),
        (LogicalInstant::Minute(datetime), Granularity::Date) => encode_date(&datetime.date()),
        (instant, Granularity::Minute) => encode_minute(&instant.as_datetime()),
    }
}

pub fn encode_interval(interval: &LogicalInterval) -> (String, String) {
    (
        encode_instant(&interval.start()),
        encode_instant(&interval.end()),
    )
}

pub fn encode_issue_time(issue: &IssueTime) -> String {
    issue.to_string()
}

/// Decimal form of a station or zone identifier. The sentinel stays `"0"`.
pub fn encode_station(station: &StationSelector) -> String {
    station.to_string()
}

/// Plain decimal form without precision truncation.
///
/// Whole numbers keep a trailing `.0` (`127.0`, not `127`), which is the form
/// the upstream has always been sent.
pub fn encode_decimal(value: f64) -> String {
    let mut encoded = value.to_string();
    if value.is_finite() && !encoded.contains('.') {
        encoded.push_str(".0");
    }
    encoded
}

/// Decimal degrees, see [`encode_decimal`].
pub fn encode_coordinate(value: f64) -> String {
    encode_decimal(value)
}

pub fn encode_month(month: ClimateMonth) -> String {
    format!("{:02}", month.get())
}

pub fn encode_day(month_day: MonthDay) -> String {
    format!("{:02}", month_day.day())
}

/// Ten-day periods are sent bare (`1`, not `01`).
pub fn encode_dekad(period: DekadPeriod) -> String {
    period.get().to_string()
}

/// Query parameters in insertion order.
///
/// Setting a key that is already present replaces its value in place, so a key
/// appears at most once. Optional values that are `None` are never stored.
///
/// A list opened for an operation that declares a time granularity encodes every
/// instant at that granularity; otherwise each instant keeps its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, String)>,
    granularity: Option<Granularity>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_granularity(granularity: Option<Granularity>) -> Self {
        Self {
            entries: Vec::new(),
            granularity,
        }
    }

    pub fn granularity(&self) -> Option<Granularity> {
        self.granularity
    }

    fn encode(&self, instant: &LogicalInstant) -> String {
        match self.granularity {
            Some(granularity) => encode_instant_as(instant, granularity),
            None => encode_instant(instant),
        }
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    pub fn push_opt<V: Into<String>>(&mut self, key: impl Into<String>, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    pub fn push_date(&mut self, key: &str, date: &NaiveDate) -> &mut Self {
        self.push(key, encode_date(date))
    }

    pub fn push_instant(&mut self, key: &str, instant: &LogicalInstant) -> &mut Self {
        let value = self.encode(instant);
        self.push(key, value)
    }

    pub fn push_interval(&mut self, start_key: &str, end_key: &str, interval: &LogicalInterval) -> &mut Self {
        let start = self.encode(&interval.start());
        let end = self.encode(&interval.end());
        self.push(start_key, start).push(end_key, end)
    }

    pub fn push_station(&mut self, key: &str, station: &StationSelector) -> &mut Self {
        self.push(key, encode_station(station))
    }

    /// Pushes longitude then latitude under the given keys.
    pub fn push_lon_lat(&mut self, lon_key: &str, lat_key: &str, coordinate: &GeoCoordinate) -> &mut Self {
        self.push(lon_key, encode_coordinate(coordinate.longitude()))
            .push(lat_key, encode_coordinate(coordinate.latitude()))
    }

    pub fn push_grid(&mut self, x_key: &str, y_key: &str, point: &GridPoint) -> &mut Self {
        self.push(x_key, point.x().to_string())
            .push(y_key, point.y().to_string())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (key, value) in iter {
            params.push(key, value);
        }
        params
    }
}

impl IntoIterator for QueryParams {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
