//! Provides the `TyphoonClient` for typhoon tracks and history.

use crate::catalog::{TYPHOON_CURRENT, TYPHOON_DETAILS, TYPHOON_FORECAST, TYPHOON_HISTORY};
use crate::client::Client;
use crate::transport::executor::Executor;
use crate::validation::params::{validate_typhoon_id, validate_year};

/// Facade over the typhoon endpoints. Typhoon IDs are `YYNN`, e.g. `"2501"` for the
/// first typhoon of 2025.
pub struct TyphoonClient<'a, E> {
    client: &'a Client<E>,
}

impl<'a, E: Executor> TyphoonClient<'a, E> {
    pub(crate) fn new(client: &'a Client<E>) -> Self {
        Self { client }
    }

    /// Typhoons active right now.
    pub fn current(&self) -> E::Output<'a> {
        self.client.dispatch(&TYPHOON_CURRENT, |_| Ok(()))
    }

    pub fn details(&self, typ_id: &str) -> E::Output<'a> {
        self.client.dispatch(&TYPHOON_DETAILS, |params| {
            params.push("typ_id", validate_typhoon_id(typ_id)?);
            Ok(())
        })
    }

    /// Forecast track of one typhoon.
    pub fn forecast(&self, typ_id: &str) -> E::Output<'a> {
        self.client.dispatch(&TYPHOON_FORECAST, |params| {
            params.push("typ_id", validate_typhoon_id(typ_id)?);
            Ok(())
        })
    }

    /// Every typhoon of `year`.
    pub fn history(&self, year: i64) -> E::Output<'a> {
        self.client.dispatch(&TYPHOON_HISTORY, |params| {
            params.push("year", validate_year(year)?.to_string());
            Ok(())
        })
    }
}
