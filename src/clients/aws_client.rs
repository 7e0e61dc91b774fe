//! Provides the `AwsClient` for Automatic Weather Station data and the AWS objective
//! analysis.

use crate::catalog::{
    AWS_DAILY, AWS_DAILY_PERIOD, AWS_HOURLY, AWS_HOURLY_PERIOD, AWS_LAND_SURFACE_TEMPERATURE,
    AWS_MINUTELY, AWS_OA_ANALYSIS, AWS_OA_PERIOD,
};
use crate::client::Client;
use crate::normalize::QueryParams;
use crate::transport::executor::Executor;
use crate::types::station::StationSelector;
use crate::types::time::{LogicalInstant, LogicalInterval};
use crate::types::traits::any::any_date::AnyDate;
use crate::types::traits::any::any_datetime::AnyDateTime;
use crate::validation::error::ValidationError;
use bon::bon;

/// Facade over the AWS endpoints.
///
/// Minutely data lives on the CGI family and defaults `help` to `1`. Hourly and
/// daily summaries and the objective analysis live on the legacy family; the
/// analysis checks coordinates against the Korea box.
pub struct AwsClient<'a, E> {
    client: &'a Client<E>,
}

/// Pushes an optional `tm1`/`tm2` window.
///
/// Each bound is validated on its own; when both are present they must also be
/// in order.
fn push_window(
    params: &mut QueryParams,
    tm1: Option<&str>,
    tm2: Option<&str>,
) -> Result<(), ValidationError> {
    match (tm1, tm2) {
        (Some(tm1), Some(tm2)) => {
            params.push_interval("tm1", "tm2", &LogicalInterval::minutes(tm1, tm2)?);
        }
        (tm1, tm2) => {
            if let Some(tm1) = tm1 {
                params.push_instant("tm1", &LogicalInstant::minute(tm1)?);
            }
            if let Some(tm2) = tm2 {
                params.push_instant("tm2", &LogicalInstant::minute(tm2)?);
            }
        }
    }
    Ok(())
}

#[bon]
impl<'a, E: Executor> AwsClient<'a, E> {
    pub(crate) fn new(client: &'a Client<E>) -> Self {
        Self { client }
    }

    /// Fetches minutely AWS observations.
    ///
    /// # Arguments (Initial Builder Method)
    ///
    /// * `stn` - Domestic station number, `0` for all stations.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.tm1(&str)` / `.tm2(&str)`: Start and end of the window (`YYYYMMDDHHmm`).
    ///   Without them the upstream returns its latest minute.
    /// * `.disp(u8)`: Upstream display mode. Defaults to `0`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use kma_mcp::{KmaClient, KmaError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), KmaError> {
    /// let client = KmaClient::from_env()?;
    /// let data = client
    ///     .aws()
    ///     .minutely(0)
    ///     .tm1("202501011200")
    ///     .tm2("202501011230")
    ///     .call()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = minutely)]
    #[doc(hidden)]
    pub fn build_minutely(
        &self,
        #[builder(start_fn)] stn: i64,
        tm1: Option<&str>,
        tm2: Option<&str>,
        disp: Option<u8>,
    ) -> E::Output<'a> {
        self.client.dispatch(&AWS_MINUTELY, |params| {
            let stn = StationSelector::domestic(stn)?;
            params
                .push_station("stn", &stn)
                .push("disp", disp.unwrap_or(0).to_string());
            push_window(params, tm1, tm2)
        })
    }

    /// Fetches minutely land surface temperature, at one instant (`.tm()`) or over a
    /// window (`.tm1()` / `.tm2()`).
    #[builder(start_fn = land_surface_temperature)]
    #[doc(hidden)]
    pub fn build_land_surface_temperature(
        &self,
        #[builder(start_fn)] stn: i64,
        tm: Option<&str>,
        tm1: Option<&str>,
        tm2: Option<&str>,
        disp: Option<u8>,
    ) -> E::Output<'a> {
        self.client.dispatch(&AWS_LAND_SURFACE_TEMPERATURE, |params| {
            let stn = StationSelector::domestic(stn)?;
            params
                .push_station("stn", &stn)
                .push("disp", disp.unwrap_or(0).to_string());
            if let Some(tm) = tm {
                params.push_instant("tm", &LogicalInstant::minute(tm)?);
            }
            push_window(params, tm1, tm2)
        })
    }

    /// Hourly AWS observation at one instant.
    pub fn hourly(&self, tm: impl AnyDateTime, stn: i64) -> E::Output<'a> {
        self.client.dispatch(&AWS_HOURLY, |params| {
            let tm = LogicalInstant::minute(tm)?;
            let stn = StationSelector::domestic(stn)?;
            params.push_instant("tm", &tm).push_station("stn", &stn);
            Ok(())
        })
    }

    pub fn hourly_period(
        &self,
        tm1: impl AnyDateTime,
        tm2: impl AnyDateTime,
        stn: i64,
    ) -> E::Output<'a> {
        self.client.dispatch(&AWS_HOURLY_PERIOD, |params| {
            let period = LogicalInterval::minutes(tm1, tm2)?;
            let stn = StationSelector::domestic(stn)?;
            params
                .push_interval("tm1", "tm2", &period)
                .push_station("stn", &stn);
            Ok(())
        })
    }

    /// Daily AWS summary for one day (`YYYYMMDD`).
    pub fn daily(&self, tm: impl AnyDate, stn: i64) -> E::Output<'a> {
        self.client.dispatch(&AWS_DAILY, |params| {
            let tm = LogicalInstant::date(tm)?;
            let stn = StationSelector::domestic(stn)?;
            params.push_instant("tm", &tm).push_station("stn", &stn);
            Ok(())
        })
    }

    /// Daily AWS summaries between two days, inclusive.
    pub fn daily_period(&self, tm1: impl AnyDate, tm2: impl AnyDate, stn: i64) -> E::Output<'a> {
        self.client.dispatch(&AWS_DAILY_PERIOD, |params| {
            let period = LogicalInterval::dates(tm1, tm2)?;
            let stn = StationSelector::domestic(stn)?;
            params
                .push_interval("tm1", "tm2", &period)
                .push_station("stn", &stn);
            Ok(())
        })
    }

    /// Objective analysis at one coordinate and instant. Longitude is sent as `x`,
    /// latitude as `y`.
    pub fn objective_analysis(
        &self,
        tm: impl AnyDateTime,
        lat: f64,
        lon: f64,
    ) -> E::Output<'a> {
        self.client.dispatch(&AWS_OA_ANALYSIS, |params| {
            let tm = LogicalInstant::minute(tm)?;
            let at = AWS_OA_ANALYSIS.coordinate(lat, lon)?;
            params.push_instant("tm", &tm).push_lon_lat("x", "y", &at);
            Ok(())
        })
    }

    pub fn objective_analysis_period(
        &self,
        tm1: impl AnyDateTime,
        tm2: impl AnyDateTime,
        lat: f64,
        lon: f64,
    ) -> E::Output<'a> {
        self.client.dispatch(&AWS_OA_PERIOD, |params| {
            let period = LogicalInterval::minutes(tm1, tm2)?;
            let at = AWS_OA_PERIOD.coordinate(lat, lon)?;
            params
                .push_interval("tm1", "tm2", &period)
                .push_lon_lat("x", "y", &at);
            Ok(())
        })
    }
}
