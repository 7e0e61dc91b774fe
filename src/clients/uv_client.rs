//! Provides the `UvClient` for ultraviolet index observations.

use crate::catalog::{UV_DAILY, UV_DAILY_PERIOD, UV_HOURLY, UV_HOURLY_PERIOD, UV_OBSERVATION};
use crate::client::Client;
use crate::transport::executor::Executor;
use crate::types::station::StationSelector;
use crate::types::time::LogicalInstant;
use crate::types::traits::any::any_date::AnyDate;
use crate::types::traits::any::any_datetime::AnyDateTime;

/// Facade over the UV endpoints.
///
/// Only [`UvClient::observation`] is wired. The hourly and daily variants are
/// declared upstream without a documented request shape and always yield
/// [`KmaError::NotYetWired`](crate::KmaError::NotYetWired) without touching the
/// network.
pub struct UvClient<'a, E> {
    client: &'a Client<E>,
}

impl<'a, E: Executor> UvClient<'a, E> {
    pub(crate) fn new(client: &'a Client<E>) -> Self {
        Self { client }
    }

    /// UV index observation at one instant.
    pub fn observation(&self, tm: impl AnyDateTime, stn: i64) -> E::Output<'a> {
        self.client.dispatch(&UV_OBSERVATION, |params| {
            let tm = LogicalInstant::minute(tm)?;
            let stn = StationSelector::domestic(stn)?;
            params.push_instant("tm", &tm).push_station("stn", &stn);
            Ok(())
        })
    }

    // The four variants below have no request shape yet. Their signatures are the
    // ones the wired versions will take; the arguments are not read.

    pub fn hourly(&self, _tm: impl AnyDateTime, _stn: i64) -> E::Output<'a> {
        self.client.call_unwired(&UV_HOURLY)
    }

    pub fn hourly_period(
        &self,
        _tm1: impl AnyDateTime,
        _tm2: impl AnyDateTime,
        _stn: i64,
    ) -> E::Output<'a> {
        self.client.call_unwired(&UV_HOURLY_PERIOD)
    }

    pub fn daily(&self, _tm: impl AnyDate, _stn: i64) -> E::Output<'a> {
        self.client.call_unwired(&UV_DAILY)
    }

    pub fn daily_period(&self, _tm1: impl AnyDate, _tm2: impl AnyDate, _stn: i64) -> E::Output<'a> {
        self.client.call_unwired(&UV_DAILY_PERIOD)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::{blocking_stub, cooperative_stub};
    use crate::error::KmaError;

    #[test]
    fn test_observation_defaults_help_to_one() -> Result<(), KmaError> {
        let (client, stub) = blocking_stub();
        client.uv().observation("202501011200", 108)?;
        assert_eq!(
            stub.requests()[0].query(),
            Some("tm=202501011200&stn=108&help=1&authKey=test-key")
        );
        Ok(())
    }

    #[test]
    fn test_unwired_operations_report_their_hint() {
        let (client, stub) = blocking_stub();
        let uv = client.uv();
        let results = [
            uv.hourly("202501011200", 108),
            uv.hourly_period("202501010000", "202501011200", 108),
            uv.daily("20250101", 108),
            uv.daily_period("20250101", "20250107", 108),
        ];
        for result in results {
            match result {
                Err(KmaError::NotYetWired { operation, hint }) => {
                    assert!(operation.starts_with("uv_"));
                    assert!(!hint.is_empty());
                }
                other => panic!("expected NotYetWired, got {other:?}"),
            }
        }
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn test_unwired_takes_precedence_over_validation() {
        let (client, stub) = cooperative_stub();
        let err = client.uv().hourly("garbage", -1).await.unwrap_err();
        assert!(err.is_not_yet_wired());
        assert!(stub.requests().is_empty());
    }

    #[test]
    fn test_unwired_variants_name_their_own_operation() {
        let (client, stub) = blocking_stub();
        let uv = client.uv();
        let names: Vec<_> = [
            uv.hourly("not a time", -1),
            uv.hourly_period("202501011200", "202501010000", 108),
            uv.daily("2025", 108),
            uv.daily_period("20250107", "20250101", 100_000),
        ]
        .into_iter()
        .map(|result| match result {
            Err(KmaError::NotYetWired { operation, .. }) => operation,
            other => panic!("expected NotYetWired, got {other:?}"),
        })
        .collect();
        assert_eq!(
            names,
            vec!["uv_hourly", "uv_hourly_period", "uv_daily", "uv_daily_period"]
        );
        assert!(stub.requests().is_empty());
    }
}
