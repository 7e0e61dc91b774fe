//! Provides the `ClimateClient` for the 1991–2020 climate normals.
//!
//! Obtained via [`Client::climate()`]. Months and days are zero-padded on the wire;
//! ten-day periods are not.

use crate::catalog::{
    CLIMATE_ANNUAL_NORMALS, CLIMATE_DAILY_NORMALS, CLIMATE_MONTHLY_NORMALS, CLIMATE_TEN_DAY_NORMALS,
};
use crate::client::Client;
use crate::normalize::{encode_day, encode_dekad, encode_month};
use crate::transport::executor::Executor;
use crate::types::calendar::{ClimateMonth, DekadPeriod, MonthDay};
use crate::types::station::StationSelector;

/// The span a climate-normals request covers, already validated.
///
/// Each variant maps to one upstream endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalsPeriod {
    Daily {
        from: MonthDay,
        to: MonthDay,
    },
    TenDay {
        from: (ClimateMonth, DekadPeriod),
        to: (ClimateMonth, DekadPeriod),
    },
    Monthly {
        from: ClimateMonth,
        to: ClimateMonth,
    },
    Annual,
}

/// Facade over the climate normals endpoints.
///
/// All four operations take a domestic station number, `0` for every station.
pub struct ClimateClient<'a, E> {
    client: &'a Client<E>,
}

impl<'a, E: Executor> ClimateClient<'a, E> {
    pub(crate) fn new(client: &'a Client<E>) -> Self {
        Self { client }
    }

    /// Daily normals between two month/day pairs.
    ///
    /// # Arguments
    ///
    /// * `start_month`, `start_day` - First day of the range. Days are checked against
    ///   a leap year, so `2/29` is accepted and `2/30` is not.
    /// * `end_month`, `end_day` - Last day of the range.
    /// * `stn` - Domestic station number.
    ///
    /// # Errors
    ///
    /// `InvalidDate` for an impossible month or day, `InvalidStation` for a station
    /// outside `0..=99999`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use kma_mcp::{BlockingKmaClient, KmaError};
    /// # fn main() -> Result<(), KmaError> {
    /// let client = BlockingKmaClient::from_env()?;
    /// // All of January at Seoul
    /// let normals = client.climate().daily_normals(1, 1, 1, 31, 108)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn daily_normals(
        &self,
        start_month: i64,
        start_day: i64,
        end_month: i64,
        end_day: i64,
        stn: i64,
    ) -> E::Output<'a> {
        self.client.dispatch(&CLIMATE_DAILY_NORMALS, |params| {
            let from = MonthDay::new(start_month, start_day)?;
            let to = MonthDay::new(end_month, end_day)?;
            let stn = StationSelector::domestic(stn)?;
            params
                .push_station("stn", &stn)
                .push("mm1", encode_month(from.month()))
                .push("dd1", encode_day(from))
                .push("mm2", encode_month(to.month()))
                .push("dd2", encode_day(to));
            Ok(())
        })
    }

    /// Ten-day normals. Periods are `1` (days 1–10), `2` (11–20) and `3` (21–end).
    pub fn ten_day_normals(
        &self,
        start_month: i64,
        start_period: i64,
        end_month: i64,
        end_period: i64,
        stn: i64,
    ) -> E::Output<'a> {
        self.client.dispatch(&CLIMATE_TEN_DAY_NORMALS, |params| {
            let mm1 = ClimateMonth::new(start_month)?;
            let dd1 = DekadPeriod::new(start_period)?;
            let mm2 = ClimateMonth::new(end_month)?;
            let dd2 = DekadPeriod::new(end_period)?;
            let stn = StationSelector::domestic(stn)?;
            params
                .push_station("stn", &stn)
                .push("mm1", encode_month(mm1))
                .push("dd1", encode_dekad(dd1))
                .push("mm2", encode_month(mm2))
                .push("dd2", encode_dekad(dd2));
            Ok(())
        })
    }

    pub fn monthly_normals(&self, start_month: i64, end_month: i64, stn: i64) -> E::Output<'a> {
        self.client.dispatch(&CLIMATE_MONTHLY_NORMALS, |params| {
            let mm1 = ClimateMonth::new(start_month)?;
            let mm2 = ClimateMonth::new(end_month)?;
            let stn = StationSelector::domestic(stn)?;
            params
                .push_station("stn", &stn)
                .push("mm1", encode_month(mm1))
                .push("mm2", encode_month(mm2));
            Ok(())
        })
    }

    pub fn annual_normals(&self, stn: i64) -> E::Output<'a> {
        self.client.dispatch(&CLIMATE_ANNUAL_NORMALS, |params| {
            params.push_station("stn", &StationSelector::domestic(stn)?);
            Ok(())
        })
    }

    /// Normals for an already validated [`NormalsPeriod`], picking the endpoint from
    /// the variant.
    pub fn normals(&self, period: NormalsPeriod, stn: i64) -> E::Output<'a> {
        match period {
            NormalsPeriod::Daily { from, to } => self.daily_normals(
                from.month().get().into(),
                from.day().into(),
                to.month().get().into(),
                to.day().into(),
                stn,
            ),
            NormalsPeriod::TenDay {
                from: (mm1, dd1),
                to: (mm2, dd2),
            } => self.ten_day_normals(
                mm1.get().into(),
                dd1.get().into(),
                mm2.get().into(),
                dd2.get().into(),
                stn,
            ),
            NormalsPeriod::Monthly { from, to } => {
                self.monthly_normals(from.get().into(), to.get().into(), stn)
            }
            NormalsPeriod::Annual => self.annual_normals(stn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{blocking_stub, cooperative_stub};
    use crate::error::KmaError;
    use crate::validation::error::ValidationError;

    #[test]
    fn test_daily_normals_padding() -> Result<(), KmaError> {
        let (client, stub) = blocking_stub();
        client.climate().daily_normals(1, 1, 1, 31, 108)?;
        assert_eq!(
            stub.requests()[0].query(),
            Some("stn=108&mm1=01&dd1=01&mm2=01&dd2=31&help=0&authKey=test-key")
        );
        Ok(())
    }

    #[test]
    fn test_ten_day_periods_are_bare() -> Result<(), KmaError> {
        let (client, stub) = blocking_stub();
        client.climate().ten_day_normals(3, 1, 4, 3, 0)?;
        assert_eq!(
            stub.requests()[0].query(),
            Some("stn=0&mm1=03&dd1=1&mm2=04&dd2=3&help=0&authKey=test-key")
        );
        Ok(())
    }

    #[test]
    fn test_calendar_validation() {
        let (client, stub) = blocking_stub();
        for (mm, dd) in [(2, 30), (13, 1), (0, 1), (4, 31)] {
            let err = client.climate().daily_normals(mm, dd, 12, 31, 108).unwrap_err();
            assert!(matches!(
                err,
                KmaError::Validation(ValidationError::InvalidDate(_))
            ));
        }
        assert!(client.climate().ten_day_normals(1, 4, 2, 1, 108).is_err());
        assert!(client.climate().monthly_normals(1, 12, 100_000).is_err());
        assert!(stub.requests().is_empty());

        client.climate().daily_normals(2, 29, 2, 29, 108).unwrap();
        assert_eq!(stub.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_normals_dispatch_by_period() -> Result<(), KmaError> {
        let (client, stub) = cooperative_stub();
        let climate = client.climate();
        climate
            .normals(
                NormalsPeriod::Monthly {
                    from: ClimateMonth::new(1)?,
                    to: ClimateMonth::new(12)?,
                },
                108,
            )
            .await?;
        climate.normals(NormalsPeriod::Annual, 108).await?;
        climate
            .normals(
                NormalsPeriod::Daily {
                    from: MonthDay::new(7, 1)?,
                    to: MonthDay::new(7, 10)?,
                },
                108,
            )
            .await?;

        let paths: Vec<_> = stub
            .requests()
            .iter()
            .map(|url| url.path().rsplit('/').next().unwrap_or_default().to_string())
            .collect();
        assert_eq!(
            paths,
            vec!["kma_clm_month.php", "kma_clm_year.php", "kma_clm_daily.php"]
        );
        assert!(stub.requests()[0].as_str().contains("mm1=01&mm2=12"));
        assert!(stub.requests()[2].as_str().contains("mm1=07&dd1=01&mm2=07&dd2=10"));
        Ok(())
    }
}
