//! Provides the `UpperAirClient` for radiosonde soundings.

use crate::catalog::{UPPER_AIR_MAX_ALTITUDE, UPPER_AIR_STABILITY, UPPER_AIR_TEMP};
use crate::client::Client;
use crate::normalize::encode_decimal;
use crate::transport::executor::Executor;
use crate::types::station::StationSelector;
use crate::types::time::{LogicalInstant, LogicalInterval};
use crate::types::traits::any::any_date::AnyDate;
use crate::types::traits::any::any_datetime::AnyDateTime;
use bon::bon;

/// Facade over the upper-air endpoints. Stations are WMO indices (e.g. `47122`
/// for Osan).
pub struct UpperAirClient<'a, E> {
    client: &'a Client<E>,
}

#[bon]
impl<'a, E: Executor> UpperAirClient<'a, E> {
    pub(crate) fn new(client: &'a Client<E>) -> Self {
        Self { client }
    }

    /// TEMP profile for one sounding.
    ///
    /// `.pa(f64)` restricts the profile to one pressure level in hPa.
    #[builder(start_fn = temp)]
    #[doc(hidden)]
    pub fn build_temp(
        &self,
        #[builder(start_fn)] tm: &str,
        #[builder(start_fn)] stn: i64,
        pa: Option<f64>,
    ) -> E::Output<'a> {
        self.client.dispatch(&UPPER_AIR_TEMP, |params| {
            let tm = LogicalInstant::minute(tm)?;
            let stn = StationSelector::wmo(stn)?;
            params
                .push_instant("tm", &tm)
                .push_station("stn", &stn)
                .push_opt("pa", pa.map(encode_decimal));
            Ok(())
        })
    }

    /// Stability indices (CAPE, CIN, lifted index, ...) over a period.
    pub fn stability_indices(
        &self,
        tm1: impl AnyDateTime,
        tm2: impl AnyDateTime,
        stn: i64,
    ) -> E::Output<'a> {
        self.client.dispatch(&UPPER_AIR_STABILITY, |params| {
            let period = LogicalInterval::minutes(tm1, tm2)?;
            let stn = StationSelector::wmo(stn)?;
            params
                .push_interval("tm1", "tm2", &period)
                .push_station("stn", &stn);
            Ok(())
        })
    }

    /// Highest point of each ascent between two days: flight time, height and
    /// horizontal drift.
    pub fn max_altitude(&self, tm1: impl AnyDate, tm2: impl AnyDate, stn: i64) -> E::Output<'a> {
        self.client.dispatch(&UPPER_AIR_MAX_ALTITUDE, |params| {
            let period = LogicalInterval::dates(tm1, tm2)?;
            let stn = StationSelector::wmo(stn)?;
            params
                .push_interval("tm1", "tm2", &period)
                .push_station("stn", &stn);
            Ok(())
        })
    }
}
