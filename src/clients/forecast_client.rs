//! Provides the `ForecastClient` for short-term, village and medium-term forecasts.
//!
//! Obtained via [`Client::forecast()`]. The operations here span all four endpoint
//! families: regional text forecasts (legacy), village grids and grid conversion
//! (CGI), forecast messages and village forecasts (OpenAPI) and the distribution
//! map (image).

use crate::catalog::{
    FORECAST_COORDS_TO_GRID, FORECAST_DISTRIBUTION_MAP, FORECAST_GRID_TO_COORDS,
    FORECAST_MEDIUM_TEMPERATURE, FORECAST_SHORT_TERM_REGION, FORECAST_ULTRA_SHORT_OBSERVATION,
    FORECAST_VILLAGE, FORECAST_VILLAGE_GRID, FORECAST_WEATHER_SITUATION, FORECAST_WEEKLY,
};
use crate::client::Client;
use crate::endpoint::operation::Operation;
use crate::endpoint::router::{NUM_OF_ROWS_PARAM, PAGE_NO_PARAM};
use crate::normalize::{encode_date, encode_issue_time, encode_time_of_day, QueryParams};
use crate::transport::executor::Executor;
use crate::types::geo::GridPoint;
use crate::types::station::StationSelector;
use crate::types::time::{IssueTime, LogicalInstant};
use crate::types::traits::any::any_datetime::AnyDateTime;
use bon::bon;

/// Facade over the forecast endpoints.
///
/// Issue times (`tmfc`) accept `"0"` for the most recent issue. OpenAPI operations
/// take optional `page_no` / `num_of_rows`; unset values fall back to page `1` and
/// the operation's default row count.
pub struct ForecastClient<'a, E> {
    client: &'a Client<E>,
}

fn push_page(params: &mut QueryParams, page_no: Option<u32>, num_of_rows: Option<u32>) {
    params
        .push_opt(PAGE_NO_PARAM, page_no.map(|n| n.to_string()))
        .push_opt(NUM_OF_ROWS_PARAM, num_of_rows.map(|n| n.to_string()));
}

#[bon]
impl<'a, E: Executor> ForecastClient<'a, E> {
    pub(crate) fn new(client: &'a Client<E>) -> Self {
        Self { client }
    }

    /// Short-term forecast by region (`fct_shrt_reg.php`).
    ///
    /// Every filter is optional; with none set the upstream lists all regions.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.stn(i64)`: Domestic forecast office number.
    /// * `.reg(&str)`: Forecast zone code (e.g. `"11B10101"`).
    /// * `.tmfc(&str)`: Issue time, `YYYYMMDDHHmm` or `"0"` for the latest issue.
    /// * `.tmfc1(&str)` / `.tmfc2(&str)`: Issue time window.
    /// * `.tmef1(&str)` / `.tmef2(&str)`: Effective time window.
    /// * `.disp(u8)`: Upstream display mode. Defaults to `0`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use kma_mcp::{KmaClient, KmaError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), KmaError> {
    /// let client = KmaClient::from_env()?;
    /// let forecast = client
    ///     .forecast()
    ///     .short_term_region()
    ///     .reg("11B10101")
    ///     .tmfc("0")
    ///     .call()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = short_term_region)]
    #[doc(hidden)]
    pub fn build_short_term_region(
        &self,
        stn: Option<i64>,
        reg: Option<&str>,
        tmfc: Option<&str>,
        tmfc1: Option<&str>,
        tmfc2: Option<&str>,
        tmef1: Option<&str>,
        tmef2: Option<&str>,
        disp: Option<u8>,
    ) -> E::Output<'a> {
        self.client.dispatch(&FORECAST_SHORT_TERM_REGION, |params| {
            params.push("disp", disp.unwrap_or(0).to_string());
            if let Some(stn) = stn {
                params.push_station("stn", &StationSelector::domestic(stn)?);
            }
            if let Some(reg) = reg {
                params.push_station("reg", &StationSelector::zone(reg)?);
            }
            if let Some(tmfc) = tmfc {
                params.push("tmfc", encode_issue_time(&IssueTime::parse(tmfc)?));
            }
            for (key, value) in [
                ("tmfc1", tmfc1),
                ("tmfc2", tmfc2),
                ("tmef1", tmef1),
                ("tmef2", tmef2),
            ] {
                if let Some(value) = value {
                    params.push_instant(key, &LogicalInstant::minute(value)?);
                }
            }
            Ok(())
        })
    }

    /// Village short-term forecast grid (`nph-dfs_shrt_grd`).
    ///
    /// # Optional Builder Methods
    ///
    /// * `.tmfc(&str)`: Issue time, `YYYYMMDDHHmm` or `"0"`.
    /// * `.tmef(&str)`: Effective time.
    /// * `.vars(&str)`: Comma-separated forecast elements (e.g. `"TMP,POP"`).
    #[builder(start_fn = village_grid)]
    #[doc(hidden)]
    pub fn build_village_grid(
        &self,
        tmfc: Option<&str>,
        tmef: Option<&str>,
        vars: Option<&str>,
    ) -> E::Output<'a> {
        self.client.dispatch(&FORECAST_VILLAGE_GRID, |params| {
            if let Some(tmfc) = tmfc {
                params.push("tmfc", encode_issue_time(&IssueTime::parse(tmfc)?));
            }
            if let Some(tmef) = tmef {
                params.push_instant("tmef", &LogicalInstant::minute(tmef)?);
            }
            params.push_opt("vars", vars);
            Ok(())
        })
    }

    /// Converts a village grid cell to longitude/latitude.
    ///
    /// `.help(u8)` overrides the default `1`.
    #[builder(start_fn = grid_to_coords)]
    #[doc(hidden)]
    pub fn build_grid_to_coords(
        &self,
        #[builder(start_fn)] x: i64,
        #[builder(start_fn)] y: i64,
        help: Option<u8>,
    ) -> E::Output<'a> {
        self.client.dispatch(&FORECAST_GRID_TO_COORDS, |params| {
            params
                .push_grid("x", "y", &GridPoint::new(x, y)?)
                .push_opt("help", help.map(|h| h.to_string()));
            Ok(())
        })
    }

    /// Converts a latitude/longitude to the nearest village grid cell.
    ///
    /// Coordinates are checked against the extent of the forecast grid, which is
    /// wider than the general Korea box.
    #[builder(start_fn = coords_to_grid)]
    #[doc(hidden)]
    pub fn build_coords_to_grid(
        &self,
        #[builder(start_fn)] lat: f64,
        #[builder(start_fn)] lon: f64,
        help: Option<u8>,
    ) -> E::Output<'a> {
        self.client.dispatch(&FORECAST_COORDS_TO_GRID, |params| {
            let at = FORECAST_COORDS_TO_GRID.coordinate(lat, lon)?;
            params
                .push_lon_lat("lon", "lat", &at)
                .push_opt("help", help.map(|h| h.to_string()));
            Ok(())
        })
    }

    /// Weather situation messages issued by regional offices.
    #[builder(start_fn = weather_situation)]
    #[doc(hidden)]
    pub fn build_weather_situation(
        &self,
        stn_id: Option<i64>,
        page_no: Option<u32>,
        num_of_rows: Option<u32>,
    ) -> E::Output<'a> {
        self.client.dispatch(&FORECAST_WEATHER_SITUATION, |params| {
            push_page(params, page_no, num_of_rows);
            if let Some(stn_id) = stn_id {
                params.push_station("stnId", &StationSelector::domestic(stn_id)?);
            }
            Ok(())
        })
    }

    /// Village forecast for one grid cell, from the issue at `base`.
    ///
    /// `base` is split into `base_date` (`YYYYMMDD`) and `base_time` (`HHmm`) on the
    /// wire.
    #[builder(start_fn = village)]
    #[doc(hidden)]
    pub fn build_village(
        &self,
        #[builder(start_fn)] base: &str,
        #[builder(start_fn)] nx: i64,
        #[builder(start_fn)] ny: i64,
        page_no: Option<u32>,
        num_of_rows: Option<u32>,
    ) -> E::Output<'a> {
        self.grid_forecast(&FORECAST_VILLAGE, base, nx, ny, page_no, num_of_rows)
    }

    /// Ultra-short-term observation (nowcast) for one grid cell.
    #[builder(start_fn = ultra_short_observation)]
    #[doc(hidden)]
    pub fn build_ultra_short_observation(
        &self,
        #[builder(start_fn)] base: &str,
        #[builder(start_fn)] nx: i64,
        #[builder(start_fn)] ny: i64,
        page_no: Option<u32>,
        num_of_rows: Option<u32>,
    ) -> E::Output<'a> {
        self.grid_forecast(
            &FORECAST_ULTRA_SHORT_OBSERVATION,
            base,
            nx,
            ny,
            page_no,
            num_of_rows,
        )
    }

    fn grid_forecast(
        &self,
        operation: &Operation,
        base: impl AnyDateTime,
        nx: i64,
        ny: i64,
        page_no: Option<u32>,
        num_of_rows: Option<u32>,
    ) -> E::Output<'a> {
        self.client.dispatch(operation, |params| {
            let base = base.to_datetime()?;
            let cell = GridPoint::new(nx, ny)?;
            push_page(params, page_no, num_of_rows);
            params
                .push("base_date", encode_date(&base.date()))
                .push("base_time", encode_time_of_day(&base))
                .push_grid("nx", "ny", &cell);
            Ok(())
        })
    }

    /// Medium-term temperature forecast for a forecast zone.
    ///
    /// # Arguments (Initial Builder Method)
    ///
    /// * `reg_id` - Medium-term forecast zone (e.g. `"11B10101"` for Seoul).
    /// * `tm_fc` - Issue time, `YYYYMMDDHHmm` (issues are at 06:00 and 18:00).
    #[builder(start_fn = medium_temperature)]
    #[doc(hidden)]
    pub fn build_medium_temperature(
        &self,
        #[builder(start_fn)] reg_id: &str,
        #[builder(start_fn)] tm_fc: &str,
        page_no: Option<u32>,
        num_of_rows: Option<u32>,
    ) -> E::Output<'a> {
        self.client.dispatch(&FORECAST_MEDIUM_TEMPERATURE, |params| {
            let reg_id = StationSelector::zone(reg_id)?;
            let tm_fc = LogicalInstant::minute(tm_fc)?;
            push_page(params, page_no, num_of_rows);
            params
                .push_station("regId", &reg_id)
                .push_instant("tmFc", &tm_fc);
            Ok(())
        })
    }

    /// Weekly forecast issued at `tm_fc`. `stn` is a region code, `0` for all.
    ///
    /// The endpoint is undocumented upstream; prefer
    /// [`medium_temperature`](Self::medium_temperature) where it covers the need.
    pub fn weekly(&self, tm_fc: impl AnyDateTime, stn: i64) -> E::Output<'a> {
        self.client.dispatch(&FORECAST_WEEKLY, |params| {
            let tm_fc = LogicalInstant::minute(tm_fc)?;
            let stn = StationSelector::domestic(stn)?;
            params.push_instant("tm_fc", &tm_fc).push_station("stn", &stn);
            Ok(())
        })
    }

    /// Short-term forecast distribution map (an image endpoint).
    ///
    /// # Arguments (Initial Builder Method)
    ///
    /// * `data0`, `data1` - Product selectors (e.g. `"GEMD"`, `"3H"`).
    /// * `tm_fc` - Issue time, `YYYYMMDDHHmm`.
    /// * `tm_ef` - Effective time, `YYYYMMDDHHmm`.
    ///
    /// # Optional Builder Methods
    ///
    /// Rendering options default to the values the upstream documents: `dtm = "H0"`,
    /// `map = "G1"`, `mask = "M"`, `color = "E"`, `size = 600`, `effect = "NTL"`,
    /// `overlay = "S"`, `zoom_rate = 2`, `zoom_level = 0`, `zoom_x` and `zoom_y`
    /// `"0000000"`, `auto_man = "m"`, `mode = "I"`, `interval = 1`, `rand = 1412`.
    #[builder(start_fn = distribution_map)]
    #[doc(hidden)]
    pub fn build_distribution_map(
        &self,
        #[builder(start_fn)] data0: &str,
        #[builder(start_fn)] data1: &str,
        #[builder(start_fn)] tm_fc: &str,
        #[builder(start_fn)] tm_ef: &str,
        #[builder(default = "H0")] dtm: &str,
        #[builder(default = "G1")] map: &str,
        #[builder(default = "M")] mask: &str,
        #[builder(default = "E")] color: &str,
        #[builder(default = 600)] size: u32,
        #[builder(default = "NTL")] effect: &str,
        #[builder(default = "S")] overlay: &str,
        #[builder(default = 2)] zoom_rate: u32,
        #[builder(default = 0)] zoom_level: u32,
        #[builder(default = "0000000")] zoom_x: &str,
        #[builder(default = "0000000")] zoom_y: &str,
        #[builder(default = "m")] auto_man: &str,
        #[builder(default = "I")] mode: &str,
        #[builder(default = 1)] interval: u32,
        #[builder(default = 1412)] rand: u32,
    ) -> E::Output<'a> {
        self.client.dispatch(&FORECAST_DISTRIBUTION_MAP, |params| {
            let tm_fc = LogicalInstant::minute(tm_fc)?;
            let tm_ef = LogicalInstant::minute(tm_ef)?;
            params
                .push("data0", data0)
                .push("data1", data1)
                .push_instant("tm_fc", &tm_fc)
                .push_instant("tm_ef", &tm_ef)
                .push("dtm", dtm)
                .push("map", map)
                .push("mask", mask)
                .push("color", color)
                .push("size", size.to_string())
                .push("effect", effect)
                .push("overlay", overlay)
                .push("zoom_rate", zoom_rate.to_string())
                .push("zoom_level", zoom_level.to_string())
                .push("zoom_x", zoom_x)
                .push("zoom_y", zoom_y)
                .push("auto_man", auto_man)
                .push("mode", mode)
                .push("interval", interval.to_string())
                .push("rand", rand.to_string());
            Ok(())
        })
    }
}
