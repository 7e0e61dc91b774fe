//! Provides the `AsosClient` for ASOS (Automated Synoptic Observing System) surface
//! observations.
//!
//! Obtained via [`Client::asos()`]. All operations here are legacy-query endpoints.
//! Observations default `help` to `0`, the normals endpoint to `1`.

use crate::catalog::{
    ASOS_DAILY, ASOS_DAILY_PERIOD, ASOS_ELEMENT, ASOS_HOURLY, ASOS_HOURLY_PERIOD, ASOS_NORMALS,
};
use crate::client::Client;
use crate::clients::climate_client::NormalsPeriod;
use crate::transport::executor::Executor;
use crate::types::station::StationSelector;
use crate::types::time::{LogicalInstant, LogicalInterval};
use crate::types::traits::any::any_datetime::AnyDateTime;
use crate::validation::params::validate_normals_base;
use bon::bon;

/// 1991-2020.
pub const DEFAULT_NORMALS_BASE: i64 = 2021;

/// `norm` code and the `MM`/`DD` pairs the normals endpoint expects for a period.
///
/// Ten-day periods go in the day field as `100`, `200` or `300`. Monthly spans pin
/// the day to `1`; the annual span covers the whole year.
fn normals_span(period: &NormalsPeriod) -> (&'static str, (u8, u16), (u8, u16)) {
    match period {
        NormalsPeriod::Daily { from, to } => (
            "D",
            (from.month().get(), from.day().into()),
            (to.month().get(), to.day().into()),
        ),
        NormalsPeriod::TenDay {
            from: (mm1, dd1),
            to: (mm2, dd2),
        } => (
            "S",
            (mm1.get(), u16::from(dd1.get()) * 100),
            (mm2.get(), u16::from(dd2.get()) * 100),
        ),
        NormalsPeriod::Monthly { from, to } => ("M", (from.get(), 1), (to.get(), 1)),
        NormalsPeriod::Annual => ("Y", (1, 1), (12, 31)),
    }
}

/// Facade over the ASOS surface observation endpoints.
///
/// Every method validates its inputs before anything is sent. Stations are domestic
/// station numbers; `0` asks for all stations.
pub struct AsosClient<'a, E> {
    client: &'a Client<E>,
}

#[bon]
impl<'a, E: Executor> AsosClient<'a, E> {
    pub(crate) fn new(client: &'a Client<E>) -> Self {
        Self { client }
    }

    /// Fetches hourly observations for a single instant.
    ///
    /// # Arguments
    ///
    /// * `tm` - Observation time, `YYYYMMDDHHmm` or any [`AnyDateTime`] value.
    /// * `stn` - Domestic station number (e.g. `108` for Seoul), `0` for all.
    ///
    /// # Errors
    ///
    /// * [`KmaError::Validation`](crate::KmaError::Validation) with `InvalidTime` or
    ///   `InvalidStation` before any request is made.
    /// * Transport, HTTP status and decode errors from the request itself.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use kma_mcp::{BlockingKmaClient, ClientConfig, KmaError};
    /// # fn main() -> Result<(), KmaError> {
    /// let client = BlockingKmaClient::new(ClientConfig::builder().auth_key("key").build())?;
    /// let data = client.asos().hourly("202501011200", 108)?;
    /// println!("{data}");
    /// # Ok(())
    /// # }
    /// ```
    pub fn hourly(&self, tm: impl AnyDateTime, stn: i64) -> E::Output<'a> {
        self.client.dispatch(&ASOS_HOURLY, |params| {
            let tm = LogicalInstant::minute(tm)?;
            let stn = StationSelector::domestic(stn)?;
            params.push_instant("tm", &tm).push_station("stn", &stn);
            Ok(())
        })
    }

    /// Fetches hourly observations between `tm1` and `tm2`, inclusive.
    ///
    /// `tm2` may equal `tm1` but not precede it.
    pub fn hourly_period(
        &self,
        tm1: impl AnyDateTime,
        tm2: impl AnyDateTime,
        stn: i64,
    ) -> E::Output<'a> {
        self.client.dispatch(&ASOS_HOURLY_PERIOD, |params| {
            let period = LogicalInterval::minutes(tm1, tm2)?;
            let stn = StationSelector::domestic(stn)?;
            params
                .push_interval("tm1", "tm2", &period)
                .push_station("stn", &stn);
            Ok(())
        })
    }

    /// Fetches the daily summary for one date (`YYYYMMDD`).
    ///
    /// # Optional Builder Methods
    ///
    /// * `.disp(u8)`: Upstream display mode. Defaults to `0`.
    ///
    /// Finish with `.call()`.
    #[builder(start_fn = daily)]
    #[doc(hidden)]
    pub fn build_daily(
        &self,
        #[builder(start_fn)] tm: &str,
        #[builder(start_fn)] stn: i64,
        disp: Option<u8>,
    ) -> E::Output<'a> {
        self.client.dispatch(&ASOS_DAILY, |params| {
            let tm = LogicalInstant::date(tm)?;
            let stn = StationSelector::domestic(stn)?;
            params
                .push_instant("tm", &tm)
                .push_station("stn", &stn)
                .push("disp", disp.unwrap_or(0).to_string());
            Ok(())
        })
    }

    /// Fetches daily summaries between two dates (`YYYYMMDD`), inclusive.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.obs(&str)`: Restrict to one element code (e.g. `"TA"`). Omitted when unset.
    /// * `.mode(u8)`: Upstream output mode. Defaults to `0`.
    #[builder(start_fn = daily_period)]
    #[doc(hidden)]
    pub fn build_daily_period(
        &self,
        #[builder(start_fn)] tm1: &str,
        #[builder(start_fn)] tm2: &str,
        #[builder(start_fn)] stn: i64,
        obs: Option<&str>,
        mode: Option<u8>,
    ) -> E::Output<'a> {
        self.client.dispatch(&ASOS_DAILY_PERIOD, |params| {
            let period = LogicalInterval::dates(tm1, tm2)?;
            let stn = StationSelector::domestic(stn)?;
            params
                .push_interval("tm1", "tm2", &period)
                .push_station("stn", &stn)
                .push_opt("obs", obs)
                .push("mode", mode.unwrap_or(0).to_string());
            Ok(())
        })
    }

    /// Climate normals from the surface normals endpoint, which serves every base
    /// period rather than only 1991-2020.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.base(i64)`: Base period, named by the year after it ends: `1991`
    ///   (1961-1990), `2001`, `2011` or `2021` (1991-2020). Defaults to `2021`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use kma_mcp::{BlockingKmaClient, ClimateMonth, KmaError, NormalsPeriod};
    /// # fn main() -> Result<(), KmaError> {
    /// let client = BlockingKmaClient::from_env()?;
    /// let may = ClimateMonth::new(5)?;
    /// let normals = client
    ///     .asos()
    ///     .normals(NormalsPeriod::Monthly { from: may, to: may }, 108)
    ///     .base(2011)
    ///     .call()?;
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = normals)]
    #[doc(hidden)]
    pub fn build_normals(
        &self,
        #[builder(start_fn)] period: NormalsPeriod,
        #[builder(start_fn)] stn: i64,
        base: Option<i64>,
    ) -> E::Output<'a> {
        self.client.dispatch(&ASOS_NORMALS, |params| {
            let base = validate_normals_base(base.unwrap_or(DEFAULT_NORMALS_BASE))?;
            let stn = StationSelector::domestic(stn)?;
            let (norm, (mm1, dd1), (mm2, dd2)) = normals_span(&period);
            params
                .push("norm", norm)
                .push("tmst", base.to_string())
                .push_station("stn", &stn)
                .push("MM1", mm1.to_string())
                .push("DD1", dd1.to_string())
                .push("MM2", mm2.to_string())
                .push("DD2", dd2.to_string());
            Ok(())
        })
    }

    /// Fetches a single observation element (e.g. `"TA"` temperature, `"RN"`
    /// precipitation) between `tm1` and `tm2`.
    pub fn element(
        &self,
        tm1: impl AnyDateTime,
        tm2: impl AnyDateTime,
        obs: &str,
        stn: i64,
    ) -> E::Output<'a> {
        self.client.dispatch(&ASOS_ELEMENT, |params| {
            let period = LogicalInterval::minutes(tm1, tm2)?;
            let stn = StationSelector::domestic(stn)?;
            params
                .push_interval("tm1", "tm2", &period)
                .push("obs", obs)
                .push_station("stn", &stn);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::NormalsPeriod;
    use crate::client::tests::{blocking_stub, cooperative_stub};
    use crate::error::KmaError;
    use crate::types::calendar::{ClimateMonth, DekadPeriod, MonthDay};
    use crate::validation::error::ValidationError;
    use chrono::NaiveDate;

    fn pairs(url: &reqwest::Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_hourly_query_order() -> Result<(), KmaError> {
        let (client, stub) = blocking_stub();
        client.asos().hourly("202501011200", 108)?;
        let query = pairs(&stub.requests()[0]);
        let keys: Vec<_> = query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["tm", "stn", "help", "authKey"]);
        assert_eq!(query[2].1, "0");
        Ok(())
    }

    #[test]
    fn test_all_stations_sentinel() -> Result<(), KmaError> {
        let (client, stub) = blocking_stub();
        client.asos().hourly_period("202501010000", "202501011200", 0)?;
        let url = &stub.requests()[0];
        assert!(url.as_str().contains("stn=0&"));
        Ok(())
    }

    #[test]
    fn test_hourly_period_rejects_reversed_interval() {
        let (client, stub) = blocking_stub();
        let err = client
            .asos()
            .hourly_period("202501021200", "202501011200", 108)
            .unwrap_err();
        assert!(matches!(
            err,
            KmaError::Validation(ValidationError::InvalidTime(_))
        ));
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn test_daily_defaults_disp() -> Result<(), KmaError> {
        let (client, stub) = cooperative_stub();
        client.asos().daily("20250101", 108).call().await?;
        client.asos().daily("20250102", 108).disp(1).call().await?;

        let requests = stub.requests();
        assert!(requests[0].as_str().contains("tm=20250101&stn=108&disp=0&help=0"));
        assert!(requests[1].as_str().contains("disp=1"));
        Ok(())
    }

    #[test]
    fn test_daily_rejects_minute_input() {
        let (client, _) = blocking_stub();
        let err = client.asos().daily("202501011200", 108).call().unwrap_err();
        assert!(matches!(
            err,
            KmaError::Validation(ValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_daily_period_omits_unset_obs() -> Result<(), KmaError> {
        let (client, stub) = blocking_stub();
        client
            .asos()
            .daily_period("20250101", "20250131", 108)
            .call()?;
        client
            .asos()
            .daily_period("20250101", "20250131", 108)
            .obs("TA")
            .mode(1)
            .call()?;

        let first = pairs(&stub.requests()[0]);
        assert!(!first.iter().any(|(k, _)| k == "obs"));
        assert!(first.contains(&("mode".to_string(), "0".to_string())));

        let second = pairs(&stub.requests()[1]);
        assert!(second.contains(&("obs".to_string(), "TA".to_string())));
        assert!(second.contains(&("mode".to_string(), "1".to_string())));
        Ok(())
    }

    #[test]
    fn test_element_accepts_chrono_values() -> Result<(), KmaError> {
        let (client, stub) = blocking_stub();
        let start = NaiveDate::from_ymd_opt(2025, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        client.asos().element(start, "202501010600", "RN", 108)?;

        let url = &stub.requests()[0];
        assert!(url.path().ends_with("kma_sfctm5.php"));
        assert!(url
            .as_str()
            .contains("tm1=202501010000&tm2=202501010600&obs=RN&stn=108"));
        Ok(())
    }

    #[test]
    fn test_chrono_years_beyond_four_digits_never_reach_the_network() {
        let (client, stub) = blocking_stub();
        let far = NaiveDate::from_ymd_opt(12345, 1, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap();
        let err = client.asos().hourly(far, 108).unwrap_err();
        assert!(matches!(
            err,
            KmaError::Validation(ValidationError::InvalidTime(_))
        ));
        let err = client.asos().element(far, far, "TA", 108).unwrap_err();
        assert!(matches!(err, KmaError::Validation(_)));
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn test_normals_spans() -> Result<(), KmaError> {
        let (client, stub) = cooperative_stub();
        let asos = client.asos();
        asos.normals(
            NormalsPeriod::Daily {
                from: MonthDay::new(5, 1)?,
                to: MonthDay::new(5, 2)?,
            },
            108,
        )
        .call()
        .await?;
        asos.normals(
            NormalsPeriod::TenDay {
                from: (ClimateMonth::new(5)?, DekadPeriod::new(1)?),
                to: (ClimateMonth::new(5)?, DekadPeriod::new(3)?),
            },
            0,
        )
        .base(2011)
        .call()
        .await?;
        asos.normals(NormalsPeriod::Annual, 108).call().await?;

        let requests = stub.requests();
        assert!(requests[0].path().ends_with("sfc_norm1.php"));
        assert_eq!(
            requests[0].query(),
            Some("norm=D&tmst=2021&stn=108&MM1=5&DD1=1&MM2=5&DD2=2&help=1&authKey=test-key")
        );
        assert!(requests[1]
            .as_str()
            .contains("norm=S&tmst=2011&stn=0&MM1=5&DD1=100&MM2=5&DD2=300"));
        assert!(requests[2].as_str().contains("norm=Y&tmst=2021&stn=108&MM1=1&DD1=1&MM2=12&DD2=31"));
        Ok(())
    }

    #[test]
    fn test_normals_reject_unknown_base() {
        let (client, stub) = blocking_stub();
        let err = client
            .asos()
            .normals(NormalsPeriod::Annual, 108)
            .base(2020)
            .call()
            .unwrap_err();
        assert!(matches!(
            err,
            KmaError::Validation(ValidationError::InvalidDate(_))
        ));
        assert!(stub.requests().is_empty());
    }
}
