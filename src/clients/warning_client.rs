//! Provides the `WarningClient` for weather warnings and advisories.

use crate::catalog::{SPECIAL_WEATHER_REPORT, WARNING_CURRENT, WARNING_HISTORY, WARNING_IMAGE};
use crate::client::Client;
use crate::normalize::encode_coordinate;
use crate::transport::executor::Executor;
use crate::types::station::StationSelector;
use crate::types::time::{LogicalInstant, LogicalInterval};
use crate::types::traits::any::any_date::AnyDate;
use crate::types::traits::any::any_datetime::AnyDateTime;
use bon::bon;

/// Facade over the weather warning endpoints.
pub struct WarningClient<'a, E> {
    client: &'a Client<E>,
}

#[bon]
impl<'a, E: Executor> WarningClient<'a, E> {
    pub(crate) fn new(client: &'a Client<E>) -> Self {
        Self { client }
    }

    /// Currently active warnings (`wrn_now_data.php`).
    ///
    /// # Optional Builder Methods
    ///
    /// * `.fe(&str)`: `"f"` for warnings in effect (default), `"e"` for issued.
    /// * `.tm(&str)`: Reference time, `YYYYMMDDHHmm`. Omitted means now.
    /// * `.disp(u8)`: Upstream display mode. Defaults to `0`.
    #[builder(start_fn = current)]
    #[doc(hidden)]
    pub fn build_current(
        &self,
        #[builder(default = "f")] fe: &str,
        tm: Option<&str>,
        disp: Option<u8>,
    ) -> E::Output<'a> {
        self.client.dispatch(&WARNING_CURRENT, |params| {
            params
                .push("fe", fe)
                .push("disp", disp.unwrap_or(0).to_string());
            if let Some(tm) = tm {
                params.push_instant("tm", &LogicalInstant::minute(tm)?);
            }
            Ok(())
        })
    }

    /// Warnings issued between two days (`YYYYMMDD`), inclusive. `stn` is a
    /// region code, `0` for every region.
    pub fn history(&self, tm1: impl AnyDate, tm2: impl AnyDate, stn: i64) -> E::Output<'a> {
        self.client.dispatch(&WARNING_HISTORY, |params| {
            let period = LogicalInterval::dates(tm1, tm2)?;
            let stn = StationSelector::domestic(stn)?;
            params
                .push_interval("tm1", "tm2", &period)
                .push_station("stn", &stn);
            Ok(())
        })
    }

    /// Special weather report in effect at `tm`.
    pub fn special_report(&self, tm: impl AnyDateTime, stn: i64) -> E::Output<'a> {
        self.client.dispatch(&SPECIAL_WEATHER_REPORT, |params| {
            let tm = LogicalInstant::minute(tm)?;
            let stn = StationSelector::domestic(stn)?;
            params.push_instant("tm", &tm).push_station("stn", &stn);
            Ok(())
        })
    }

    /// Warning map image centred on a coordinate (`wrn/nph-wrn7`).
    ///
    /// # Arguments (Initial Builder Method)
    ///
    /// * `tm` - Map time, `YYYYMMDDHHmm`.
    /// * `lat`, `lon` - Map centre, inside the Korea box.
    ///
    /// # Required Builder Methods
    ///
    /// * `.range(u32)`: Map range in km.
    /// * `.size(u32)`: Image size in pixels.
    /// * `.wrn(&str)`: Comma-separated warning kinds to draw (e.g. `"W,R,C,D,O,V,T,S,Y,H"`).
    ///
    /// # Optional Builder Methods
    ///
    /// * `.stn(i64)`: Restrict to one forecast office.
    /// * `.tmef(u8)`, `.city(u8)`, `.name(u8)`, `.out(u8)`: Rendering flags, defaulting
    ///   to `1`, `1`, `0` and `0`.
    #[builder(start_fn = image)]
    #[doc(hidden)]
    pub fn build_image(
        &self,
        #[builder(start_fn)] tm: &str,
        #[builder(start_fn)] lat: f64,
        #[builder(start_fn)] lon: f64,
        range: u32,
        size: u32,
        wrn: &str,
        stn: Option<i64>,
        #[builder(default = 1)] tmef: u8,
        #[builder(default = 1)] city: u8,
        #[builder(default = 0)] name: u8,
        #[builder(default = 0)] out: u8,
    ) -> E::Output<'a> {
        self.client.dispatch(&WARNING_IMAGE, |params| {
            let tm = LogicalInstant::minute(tm)?;
            let centre = WARNING_IMAGE.coordinate(lat, lon)?;
            params
                .push_instant("tm", &tm)
                .push("lat", encode_coordinate(centre.latitude()))
                .push("lon", encode_coordinate(centre.longitude()))
                .push("range", range.to_string())
                .push("size", size.to_string())
                .push("wrn", wrn);
            if let Some(stn) = stn {
                params.push_station("stn", &StationSelector::domestic(stn)?);
            }
            params
                .push("tmef", tmef.to_string())
                .push("city", city.to_string())
                .push("name", name.to_string())
                .push("out", out.to_string());
            Ok(())
        })
    }
}
