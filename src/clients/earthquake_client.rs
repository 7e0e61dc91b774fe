//! Provides the `EarthquakeClient` for earthquake reports.

use crate::catalog::{EARTHQUAKE_LIST, EARTHQUAKE_RECENT};
use crate::client::Client;
use crate::transport::executor::Executor;
use crate::types::time::{kst_now, LogicalInstant, LogicalInterval};
use bon::bon;

/// Facade over the earthquake endpoints.
pub struct EarthquakeClient<'a, E> {
    client: &'a Client<E>,
}

#[bon]
impl<'a, E: Executor> EarthquakeClient<'a, E> {
    pub(crate) fn new(client: &'a Client<E>) -> Self {
        Self { client }
    }

    /// Most recent earthquake as of `.tm()`, which defaults to the current KST minute.
    #[builder(start_fn = recent)]
    #[doc(hidden)]
    pub fn build_recent(&self, tm: Option<&str>, disp: Option<u8>) -> E::Output<'a> {
        self.client.dispatch(&EARTHQUAKE_RECENT, |params| {
            let tm = match tm {
                Some(tm) => LogicalInstant::minute(tm)?,
                None => LogicalInstant::from(kst_now()),
            };
            params
                .push_instant("tm", &tm)
                .push("disp", disp.unwrap_or(0).to_string());
            Ok(())
        })
    }

    /// Earthquakes between `tm1` and `tm2`.
    #[builder(start_fn = list)]
    #[doc(hidden)]
    pub fn build_list(
        &self,
        #[builder(start_fn)] tm1: &str,
        #[builder(start_fn)] tm2: &str,
        disp: Option<u8>,
    ) -> E::Output<'a> {
        self.client.dispatch(&EARTHQUAKE_LIST, |params| {
            let period = LogicalInterval::minutes(tm1, tm2)?;
            params
                .push_interval("tm1", "tm2", &period)
                .push("disp", disp.unwrap_or(0).to_string());
            Ok(())
        })
    }
}
