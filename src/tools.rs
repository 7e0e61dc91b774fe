//! The declarative tool table an MCP host registers.
//!
//! Every entry maps a stable tool name to a description, a JSON input schema, the
//! catalog operation it calls and a handler. The table is built once; calling a
//! tool never fails at the Rust level, errors come back as `"Error: ..."` text.

use crate::catalog::{self, *};
use crate::client::{Client, KmaClient};
use crate::config::ClientConfig;
use crate::endpoint::operation::Operation;
use crate::error::KmaError;
use crate::transport::executor::Cooperative;
use crate::transport::http::AsyncTransport;
use crate::normalize::encode_minute;
use crate::types::time::{kst_current_hour, kst_now};
use futures_util::future::BoxFuture;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::future;

pub(crate) const MISSING_KEY_MESSAGE: &str = "Error: KMA_API_KEY environment variable not set";

pub type ToolFuture<'a> = BoxFuture<'a, Result<Value, KmaError>>;

type Handler<T> = for<'a> fn(&'a Client<Cooperative<T>>, &'static str, Value) -> ToolFuture<'a>;

/// One registered tool.
pub struct Tool<T = reqwest::Client> {
    name: &'static str,
    description: &'static str,
    subject: &'static str,
    operation: &'static Operation,
    input_schema: Value,
    handler: Handler<T>,
}

impl<T> Tool<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    /// JSON schema of the `arguments` object, as MCP expects it.
    pub fn input_schema(&self) -> &Value {
        &self.input_schema
    }

    pub fn operation(&self) -> &'static Operation {
        self.operation
    }
}

/// The set of tools exposed over MCP, bound to at most one client.
///
/// Without a credential the table still lists every tool, but calling any of them
/// answers with an error string and never reaches the network.
///
/// # Example
///
/// ```no_run
/// # use kma_mcp::{KmaError, ToolTable};
/// # use serde_json::json;
/// # #[tokio::main]
/// # async fn main() -> Result<(), KmaError> {
/// let table = ToolTable::from_env()?;
/// for tool in table.tools() {
///     println!("{}: {}", tool.name(), tool.description());
/// }
/// let text = table
///     .call("get_hourly_weather", json!({"start_time": "202501011200", "end_time": "202501011800", "station_id": 108}))
///     .await;
/// println!("{text}");
/// # Ok(())
/// # }
/// ```
pub struct ToolTable<T = reqwest::Client> {
    client: Option<Client<Cooperative<T>>>,
    tools: BTreeMap<&'static str, Tool<T>>,
}

impl ToolTable {
    /// Builds the table over a `reqwest` session. `None`, or a config with a blank
    /// key, yields a table that refuses every call.
    pub fn standard(config: Option<ClientConfig>) -> Result<Self, KmaError> {
        let client = match config {
            Some(config) if config.has_credential() => Some(KmaClient::new(config)?),
            _ => None,
        };
        Ok(Self::with_client(client))
    }

    /// Like [`ToolTable::standard`], reading the configuration from the environment.
    ///
    /// A missing `KMA_API_KEY` is not an error here; a malformed timeout is.
    pub fn from_env() -> Result<Self, KmaError> {
        match ClientConfig::from_env() {
            Ok(config) => Self::standard(Some(config)),
            Err(KmaError::MissingCredential) => {
                warn!("KMA_API_KEY is not set; every tool call will be refused");
                Ok(Self::with_client(None))
            }
            Err(err) => Err(err),
        }
    }
}

impl<T: AsyncTransport + Sync> ToolTable<T> {
    pub fn with_client(client: Option<Client<Cooperative<T>>>) -> Self {
        let tools = standard_tools::<T>()
            .into_iter()
            .map(|tool| (tool.name, tool))
            .collect();
        Self { client, tools }
    }

    pub fn tools(&self) -> impl Iterator<Item = &Tool<T>> {
        self.tools.values()
    }

    pub fn get(&self, name: &str) -> Option<&Tool<T>> {
        self.tools.get(name)
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Runs one tool and renders the outcome as text.
    ///
    /// `args` is the MCP `arguments` object; `null` counts as `{}`. Success is the
    /// upstream JSON serialised compactly.
    pub async fn call(&self, name: &str, args: Value) -> String {
        let Some(tool) = self.tools.get(name) else {
            return format!("Error: {}", KmaError::UnknownTool(name.to_string()));
        };
        let Some(client) = &self.client else {
            return MISSING_KEY_MESSAGE.to_string();
        };
        let args = if args.is_null() {
            Value::Object(Map::new())
        } else {
            args
        };

        debug!("Calling tool {name} ({})", tool.operation.name);
        match (tool.handler)(client, tool.name, args).await {
            Ok(value) => value.to_string(),
            Err(err) => {
                warn!("Tool {name} failed: {err}");
                format!("Error fetching {}: {err}", tool.subject)
            }
        }
    }
}

fn with_args<'a, A, F>(tool: &'static str, args: Value, call: F) -> ToolFuture<'a>
where
    A: DeserializeOwned,
    F: FnOnce(A) -> ToolFuture<'a>,
{
    match serde_json::from_value(args) {
        Ok(args) => call(args),
        Err(source) => Box::pin(future::ready(Err(KmaError::ToolArguments { tool, source }))),
    }
}

#[derive(Deserialize)]
struct NoArgs {}

#[derive(Deserialize)]
struct StationArgs {
    #[serde(default)]
    station_id: i64,
}

#[derive(Deserialize)]
struct TimeRangeArgs {
    start_time: String,
    end_time: String,
    #[serde(default)]
    station_id: i64,
}

#[derive(Deserialize)]
struct DateRangeArgs {
    start_date: String,
    end_date: String,
    #[serde(default)]
    station_id: i64,
}

#[derive(Deserialize)]
struct DailyNormalsArgs {
    start_month: i64,
    start_day: i64,
    end_month: i64,
    end_day: i64,
    #[serde(default)]
    station_id: i64,
}

#[derive(Deserialize)]
struct MonthlyNormalsArgs {
    start_month: i64,
    end_month: i64,
    #[serde(default)]
    station_id: i64,
}

#[derive(Deserialize)]
struct PointArgs {
    longitude: f64,
    latitude: f64,
}

#[derive(Deserialize)]
struct PointPeriodArgs {
    start_time: String,
    end_time: String,
    longitude: f64,
    latitude: f64,
}

#[derive(Deserialize)]
struct ShortTermArgs {
    forecast_time: String,
    region_code: Option<String>,
}

#[derive(Deserialize)]
struct MediumTermArgs {
    forecast_time: String,
    region_code: String,
}

#[derive(Deserialize)]
struct RegionTimeArgs {
    forecast_time: String,
    #[serde(default)]
    region_id: i64,
}

#[derive(Deserialize)]
struct RegionDateRangeArgs {
    start_date: String,
    end_date: String,
    #[serde(default)]
    region_id: i64,
}

#[derive(Deserialize)]
struct ReportArgs {
    report_time: String,
    #[serde(default)]
    region_id: i64,
}

#[derive(Deserialize)]
struct TyphoonArgs {
    typhoon_id: String,
}

#[derive(Deserialize)]
struct YearArgs {
    year: i64,
}

#[derive(Deserialize)]
struct SoundingArgs {
    observation_time: String,
    station_id: i64,
    pressure_level: Option<f64>,
}

#[derive(Deserialize)]
struct SoundingPeriodArgs {
    start_time: String,
    end_time: String,
    station_id: i64,
}

#[derive(Deserialize)]
struct EarthquakeRangeArgs {
    start_time: String,
    end_time: String,
}

type ToolClient<T> = Client<Cooperative<T>>;

fn current_weather<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |a: StationArgs| {
        client.asos().hourly(kst_current_hour(), a.station_id)
    })
}

fn hourly_weather<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |a: TimeRangeArgs| {
        client
            .asos()
            .hourly_period(a.start_time, a.end_time, a.station_id)
    })
}

fn daily_weather<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |a: DateRangeArgs| {
        client
            .asos()
            .daily_period(&a.start_date, &a.end_date, a.station_id)
            .call()
    })
}

fn temperature_data<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |a: TimeRangeArgs| {
        client
            .asos()
            .element(a.start_time, a.end_time, "TA", a.station_id)
    })
}

fn precipitation_data<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |a: TimeRangeArgs| {
        client
            .asos()
            .element(a.start_time, a.end_time, "RN", a.station_id)
    })
}

fn aws_current_weather<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |a: StationArgs| {
        let now = encode_minute(&kst_now());
        client.aws().minutely(a.station_id).tm2(&now).call()
    })
}

fn aws_hourly_weather<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |a: TimeRangeArgs| {
        client
            .aws()
            .hourly_period(a.start_time, a.end_time, a.station_id)
    })
}

fn aws_daily_weather<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |a: DateRangeArgs| {
        client
            .aws()
            .daily_period(a.start_date, a.end_date, a.station_id)
    })
}

fn aws_minutely_weather<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |a: TimeRangeArgs| {
        client
            .aws()
            .minutely(a.station_id)
            .tm1(&a.start_time)
            .tm2(&a.end_time)
            .call()
    })
}

fn aws_oa_current<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |a: PointArgs| {
        client
            .aws()
            .objective_analysis(kst_current_hour(), a.latitude, a.longitude)
    })
}

fn aws_oa_period<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |a: PointPeriodArgs| {
        client
            .aws()
            .objective_analysis_period(a.start_time, a.end_time, a.latitude, a.longitude)
    })
}

fn climate_daily_normals<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |a: DailyNormalsArgs| {
        client.climate().daily_normals(
            a.start_month,
            a.start_day,
            a.end_month,
            a.end_day,
            a.station_id,
        )
    })
}

fn climate_monthly_normals<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |a: MonthlyNormalsArgs| {
        client
            .climate()
            .monthly_normals(a.start_month, a.end_month, a.station_id)
    })
}

fn climate_annual_normals<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |a: StationArgs| {
        client.climate().annual_normals(a.station_id)
    })
}

fn uv_current_index<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |a: StationArgs| {
        client.uv().observation(kst_current_hour(), a.station_id)
    })
}

fn short_term_forecast<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |a: ShortTermArgs| {
        client
            .forecast()
            .short_term_region()
            .tmfc(&a.forecast_time)
            .maybe_reg(a.region_code.as_deref())
            .call()
    })
}

fn medium_term_forecast<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |a: MediumTermArgs| {
        client
            .forecast()
            .medium_temperature(&a.region_code, &a.forecast_time)
            .call()
    })
}

fn weekly_forecast<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |a: RegionTimeArgs| {
        client.forecast().weekly(a.forecast_time, a.region_id)
    })
}

fn current_warnings<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |_: NoArgs| client.warning().current().call())
}

fn warning_history<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |a: RegionDateRangeArgs| {
        client
            .warning()
            .history(a.start_date, a.end_date, a.region_id)
    })
}

fn special_weather_report<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |a: ReportArgs| {
        client.warning().special_report(a.report_time, a.region_id)
    })
}

fn upper_air_data<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |a: SoundingArgs| {
        client
            .upper_air()
            .temp(&a.observation_time, a.station_id)
            .maybe_pa(a.pressure_level)
            .call()
    })
}

fn stability_indices<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |a: SoundingPeriodArgs| {
        client
            .upper_air()
            .stability_indices(a.start_time, a.end_time, a.station_id)
    })
}

fn recent_earthquake<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |_: NoArgs| client.earthquake().recent().call())
}

fn earthquake_list<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |a: EarthquakeRangeArgs| {
        client
            .earthquake()
            .list(&a.start_time, &a.end_time)
            .call()
    })
}

fn current_typhoons<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |_: NoArgs| client.typhoon().current())
}

fn typhoon_details<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |a: TyphoonArgs| {
        client.typhoon().details(&a.typhoon_id)
    })
}

fn typhoon_forecast_track<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |a: TyphoonArgs| {
        client.typhoon().forecast(&a.typhoon_id)
    })
}

fn typhoon_history<'a, T: AsyncTransport + Sync>(
    client: &'a ToolClient<T>,
    tool: &'static str,
    args: Value,
) -> ToolFuture<'a> {
    with_args(tool, args, |a: YearArgs| client.typhoon().history(a.year))
}

fn object_schema(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

fn station_property() -> Value {
    json!({
        "type": "integer",
        "default": 0,
        "description": "Station number (0 for all stations). Common: 108 Seoul, 112 Incheon, 133 Daejeon, 159 Busan, 184 Jeju",
    })
}

fn time_property(description: &str) -> Value {
    json!({ "type": "string", "pattern": "^[0-9]{12}$", "description": description })
}

fn region_property() -> Value {
    json!({ "type": "integer", "default": 0, "description": "Region code (0 for all regions)" })
}

fn date_property(description: &str) -> Value {
    json!({ "type": "string", "pattern": "^[0-9]{8}$", "description": description })
}

fn station_schema() -> Value {
    object_schema(json!({ "station_id": station_property() }), &[])
}

fn time_range_schema() -> Value {
    object_schema(
        json!({
            "start_time": time_property("Start time, YYYYMMDDHHmm"),
            "end_time": time_property("End time, YYYYMMDDHHmm"),
            "station_id": station_property(),
        }),
        &["start_time", "end_time"],
    )
}

fn point_properties() -> Value {
    json!({
        "longitude": { "type": "number", "minimum": 124.0, "maximum": 132.0 },
        "latitude": { "type": "number", "minimum": 33.0, "maximum": 43.0 },
    })
}

fn tool<T>(
    name: &'static str,
    operation: &'static Operation,
    subject: &'static str,
    description: &'static str,
    input_schema: Value,
    handler: Handler<T>,
) -> Tool<T> {
    Tool {
        name,
        description,
        subject,
        operation,
        input_schema,
        handler,
    }
}

fn standard_tools<T: AsyncTransport + Sync>() -> Vec<Tool<T>> {
    let mut point_period = point_properties();
    if let Some(map) = point_period.as_object_mut() {
        map.insert("start_time".into(), time_property("Start time, YYYYMMDDHHmm"));
        map.insert("end_time".into(), time_property("End time, YYYYMMDDHHmm"));
    }

    vec![
        tool(
            "get_current_weather",
            &ASOS_HOURLY,
            "weather data",
            "Current hourly ASOS observation (this KST hour) for a station.",
            station_schema(),
            current_weather::<T>,
        ),
        tool(
            "get_hourly_weather",
            &ASOS_HOURLY_PERIOD,
            "hourly weather data",
            "Hourly ASOS observations between two times.",
            time_range_schema(),
            hourly_weather::<T>,
        ),
        tool(
            "get_daily_weather",
            &ASOS_DAILY_PERIOD,
            "daily weather data",
            "Daily ASOS summaries between two dates.",
            object_schema(
                json!({
                    "start_date": date_property("Start date, YYYYMMDD"),
                    "end_date": date_property("End date, YYYYMMDD"),
                    "station_id": station_property(),
                }),
                &["start_date", "end_date"],
            ),
            daily_weather::<T>,
        ),
        tool(
            "get_temperature_data",
            &ASOS_ELEMENT,
            "temperature data",
            "Temperature (TA) observations between two times.",
            time_range_schema(),
            temperature_data::<T>,
        ),
        tool(
            "get_precipitation_data",
            &ASOS_ELEMENT,
            "precipitation data",
            "Precipitation (RN) observations between two times.",
            time_range_schema(),
            precipitation_data::<T>,
        ),
        tool(
            "get_aws_current_weather",
            &AWS_MINUTELY,
            "AWS weather data",
            "Latest minutely AWS observation for a station.",
            station_schema(),
            aws_current_weather::<T>,
        ),
        tool(
            "get_aws_hourly_weather",
            &AWS_HOURLY_PERIOD,
            "AWS hourly weather data",
            "Hourly AWS observations between two times.",
            time_range_schema(),
            aws_hourly_weather::<T>,
        ),
        tool(
            "get_aws_daily_weather",
            &AWS_DAILY_PERIOD,
            "AWS daily weather data",
            "Daily AWS summaries between two dates.",
            object_schema(
                json!({
                    "start_date": date_property("Start date, YYYYMMDD"),
                    "end_date": date_property("End date, YYYYMMDD"),
                    "station_id": station_property(),
                }),
                &["start_date", "end_date"],
            ),
            aws_daily_weather::<T>,
        ),
        tool(
            "get_aws_minutely_weather",
            &AWS_MINUTELY,
            "AWS minutely weather data",
            "Minutely AWS observations between two times.",
            time_range_schema(),
            aws_minutely_weather::<T>,
        ),
        tool(
            "get_aws_oa_current",
            &AWS_OA_ANALYSIS,
            "AWS objective analysis data",
            "AWS objective analysis at a coordinate for the current KST hour.",
            object_schema(point_properties(), &["longitude", "latitude"]),
            aws_oa_current::<T>,
        ),
        tool(
            "get_aws_oa_period",
            &AWS_OA_PERIOD,
            "AWS objective analysis period data",
            "AWS objective analysis at a coordinate between two times.",
            object_schema(
                point_period,
                &["start_time", "end_time", "longitude", "latitude"],
            ),
            aws_oa_period::<T>,
        ),
        tool(
            "get_climate_daily_normals",
            &CLIMATE_DAILY_NORMALS,
            "daily climate normals",
            "Daily 1991-2020 climate normals between two month/day pairs.",
            object_schema(
                json!({
                    "start_month": { "type": "integer", "minimum": 1, "maximum": 12 },
                    "start_day": { "type": "integer", "minimum": 1, "maximum": 31 },
                    "end_month": { "type": "integer", "minimum": 1, "maximum": 12 },
                    "end_day": { "type": "integer", "minimum": 1, "maximum": 31 },
                    "station_id": station_property(),
                }),
                &["start_month", "start_day", "end_month", "end_day"],
            ),
            climate_daily_normals::<T>,
        ),
        tool(
            "get_climate_monthly_normals",
            &CLIMATE_MONTHLY_NORMALS,
            "monthly climate normals",
            "Monthly 1991-2020 climate normals between two months.",
            object_schema(
                json!({
                    "start_month": { "type": "integer", "minimum": 1, "maximum": 12 },
                    "end_month": { "type": "integer", "minimum": 1, "maximum": 12 },
                    "station_id": station_property(),
                }),
                &["start_month", "end_month"],
            ),
            climate_monthly_normals::<T>,
        ),
        tool(
            "get_climate_annual_normals",
            &CLIMATE_ANNUAL_NORMALS,
            "annual climate normals",
            "Annual 1991-2020 climate normals.",
            station_schema(),
            climate_annual_normals::<T>,
        ),
        tool(
            "get_uv_current_index",
            &UV_OBSERVATION,
            "UV index data",
            "UV index observation for the current KST hour.",
            station_schema(),
            uv_current_index::<T>,
        ),
        tool(
            "get_short_term_forecast",
            &FORECAST_SHORT_TERM_REGION,
            "short-term forecast",
            "Short-term regional forecast. forecast_time is YYYYMMDDHHmm or \"0\" for the latest issue.",
            object_schema(
                json!({
                    "forecast_time": { "type": "string", "description": "Issue time, YYYYMMDDHHmm or \"0\"" },
                    "region_code": { "type": "string", "description": "Forecast zone code, e.g. 11B10101" },
                }),
                &["forecast_time"],
            ),
            short_term_forecast::<T>,
        ),
        tool(
            "get_medium_term_forecast",
            &FORECAST_MEDIUM_TEMPERATURE,
            "medium-term forecast",
            "Medium-term temperature forecast for a zone. Issues are at 0600 and 1800.",
            object_schema(
                json!({
                    "forecast_time": time_property("Issue time, YYYYMMDDHHmm"),
                    "region_code": { "type": "string", "description": "Medium-term zone code, e.g. 11B10101" },
                }),
                &["forecast_time", "region_code"],
            ),
            medium_term_forecast::<T>,
        ),
        tool(
            "get_weekly_forecast",
            &FORECAST_WEEKLY,
            "weekly forecast",
            "Weekly forecast by region.",
            object_schema(
                json!({
                    "forecast_time": time_property("Issue time, YYYYMMDDHHmm"),
                    "region_id": region_property(),
                }),
                &["forecast_time"],
            ),
            weekly_forecast::<T>,
        ),
        tool(
            "get_current_weather_warnings",
            &WARNING_CURRENT,
            "weather warnings",
            "Weather warnings currently in effect.",
            object_schema(json!({}), &[]),
            current_warnings::<T>,
        ),
        tool(
            "get_weather_warning_history",
            &WARNING_HISTORY,
            "warning history",
            "Weather warnings issued between two dates.",
            object_schema(
                json!({
                    "start_date": date_property("Start date, YYYYMMDD"),
                    "end_date": date_property("End date, YYYYMMDD"),
                    "region_id": region_property(),
                }),
                &["start_date", "end_date"],
            ),
            warning_history::<T>,
        ),
        tool(
            "get_special_weather_report",
            &SPECIAL_WEATHER_REPORT,
            "special weather report",
            "Special weather report for significant weather events.",
            object_schema(
                json!({
                    "report_time": time_property("Report time, YYYYMMDDHHmm"),
                    "region_id": region_property(),
                }),
                &["report_time"],
            ),
            special_weather_report::<T>,
        ),
        tool(
            "get_upper_air_data",
            &UPPER_AIR_TEMP,
            "upper air data",
            "Radiosonde TEMP profile, optionally at one pressure level (hPa).",
            object_schema(
                json!({
                    "observation_time": time_property("Sounding time, YYYYMMDDHHmm"),
                    "station_id": { "type": "integer", "description": "WMO station index, e.g. 47122 Osan" },
                    "pressure_level": { "type": "number", "description": "Pressure level in hPa" },
                }),
                &["observation_time", "station_id"],
            ),
            upper_air_data::<T>,
        ),
        tool(
            "get_atmospheric_stability_indices",
            &UPPER_AIR_STABILITY,
            "stability indices",
            "Atmospheric stability indices between two times.",
            object_schema(
                json!({
                    "start_time": time_property("Start time, YYYYMMDDHHmm"),
                    "end_time": time_property("End time, YYYYMMDDHHmm"),
                    "station_id": { "type": "integer", "description": "WMO station index" },
                }),
                &["start_time", "end_time", "station_id"],
            ),
            stability_indices::<T>,
        ),
        tool(
            "get_recent_earthquake_info",
            &EARTHQUAKE_RECENT,
            "earthquake information",
            "Most recent earthquake information.",
            object_schema(json!({}), &[]),
            recent_earthquake::<T>,
        ),
        tool(
            "get_earthquake_list",
            &EARTHQUAKE_LIST,
            "earthquake list",
            "Earthquakes between two times.",
            object_schema(
                json!({
                    "start_time": time_property("Start time, YYYYMMDDHHmm"),
                    "end_time": time_property("End time, YYYYMMDDHHmm"),
                }),
                &["start_time", "end_time"],
            ),
            earthquake_list::<T>,
        ),
        tool(
            "get_current_typhoons",
            &TYPHOON_CURRENT,
            "typhoon information",
            "Typhoons currently active.",
            object_schema(json!({}), &[]),
            current_typhoons::<T>,
        ),
        tool(
            "get_typhoon_details",
            &TYPHOON_DETAILS,
            "typhoon details",
            "Details of one typhoon.",
            object_schema(
                json!({ "typhoon_id": { "type": "string", "pattern": "^[0-9]{4}$", "description": "YYNN, e.g. 2401" } }),
                &["typhoon_id"],
            ),
            typhoon_details::<T>,
        ),
        tool(
            "get_typhoon_forecast_track",
            &TYPHOON_FORECAST,
            "typhoon forecast",
            "Forecast track of one typhoon.",
            object_schema(
                json!({ "typhoon_id": { "type": "string", "pattern": "^[0-9]{4}$", "description": "YYNN, e.g. 2401" } }),
                &["typhoon_id"],
            ),
            typhoon_forecast_track::<T>,
        ),
        tool(
            "get_typhoon_history_by_year",
            &TYPHOON_HISTORY,
            "typhoon history",
            "All typhoons of one year.",
            object_schema(
                json!({ "year": { "type": "integer", "minimum": 1900, "maximum": 2100 } }),
                &["year"],
            ),
            typhoon_history::<T>,
        ),
    ]
}

/// Names of every tool in [`ToolTable::standard`], for hosts that list them
/// before a client exists.
pub fn tool_names() -> impl Iterator<Item = &'static str> {
    standard_tools::<reqwest::Client>()
        .into_iter()
        .map(|tool| tool.name)
}

/// Operations with no tool.
pub fn uncovered_operations() -> impl Iterator<Item = &'static Operation> {
    let covered: Vec<&'static str> = standard_tools::<reqwest::Client>()
        .iter()
        .map(|tool| tool.operation.name)
        .collect();
    catalog::all().filter(move |op| !covered.contains(&op.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::config;
    use crate::transport::error::TransportErrorKind;
    use crate::transport::stub::StubTransport;
    use reqwest::StatusCode;

    fn stub_table() -> (ToolTable<StubTransport>, StubTransport) {
        let stub = StubTransport::new();
        let client = Client::with_executor(config(), Cooperative::new(stub.clone())).unwrap();
        (ToolTable::with_client(Some(client)), stub)
    }

    #[test]
    fn test_table_is_complete_and_consistent() {
        let (table, _) = stub_table();
        assert_eq!(table.tools().count(), 29);
        for tool in table.tools() {
            assert!(tool.name().starts_with("get_"));
            assert!(!tool.description().is_empty());
            assert_eq!(tool.input_schema()["type"], "object");
            assert!(catalog::find(tool.operation().name).is_some());
            assert!(tool.operation().is_supported(), "{} is not wired", tool.name());
        }
        assert_eq!(tool_names().count(), 29);
    }

    #[tokio::test]
    async fn test_hourly_weather_tool() {
        let (table, stub) = stub_table();
        stub.respond_json(json!([{"stn": 108, "ta": -1.5}]));
        let text = table
            .call(
                "get_hourly_weather",
                json!({"start_time": "202501011200", "end_time": "202501011800", "station_id": 108}),
            )
            .await;
        assert_eq!(text, r#"[{"stn":108,"ta":-1.5}]"#);
        assert_eq!(
            stub.requests()[0].query(),
            Some("tm1=202501011200&tm2=202501011800&stn=108&help=0&authKey=test-key")
        );
    }

    #[tokio::test]
    async fn test_defaults_and_null_arguments() {
        let (table, stub) = stub_table();
        table.call("get_climate_annual_normals", Value::Null).await;
        table.call("get_current_typhoons", json!({})).await;
        let requests = stub.requests();
        assert_eq!(requests[0].query(), Some("stn=0&help=0&authKey=test-key"));
        assert!(requests[1].path().ends_with("kma_typ.php"));
    }

    #[tokio::test]
    async fn test_missing_credential_refuses_before_network() {
        let table = ToolTable::<StubTransport>::with_client(None);
        assert!(!table.is_configured());
        let text = table.call("get_current_weather", json!({})).await;
        assert_eq!(text, MISSING_KEY_MESSAGE);

        let table = ToolTable::standard(None).unwrap();
        assert_eq!(table.call("get_current_typhoons", json!({})).await, MISSING_KEY_MESSAGE);
    }

    #[tokio::test]
    async fn test_errors_become_text() {
        let (table, stub) = stub_table();

        let text = table.call("get_weather_on_mars", json!({})).await;
        assert_eq!(text, "Error: Unknown tool 'get_weather_on_mars'");

        let text = table
            .call("get_hourly_weather", json!({"start_time": "202501011200"}))
            .await;
        assert!(text.starts_with("Error fetching hourly weather data: Invalid arguments"));

        let text = table
            .call("get_typhoon_details", json!({"typhoon_id": "24"}))
            .await;
        assert!(text.starts_with("Error fetching typhoon details:"));
        assert!(stub.requests().is_empty());

        stub.respond(StatusCode::SERVICE_UNAVAILABLE, "maintenance");
        let text = table.call("get_current_weather_warnings", json!({})).await;
        assert!(text.starts_with("Error fetching weather warnings: HTTP 503"));

        stub.fail(TransportErrorKind::Timeout);
        let text = table.call("get_recent_earthquake_info", json!({})).await;
        assert!(text.starts_with("Error fetching earthquake information:"));
        assert!(!text.contains("test-key"));
    }

    #[tokio::test]
    async fn test_forecast_tools_route_to_real_operations() {
        let (table, stub) = stub_table();
        table
            .call(
                "get_short_term_forecast",
                json!({"forecast_time": "0", "region_code": "11B10101"}),
            )
            .await;
        table
            .call(
                "get_medium_term_forecast",
                json!({"forecast_time": "202501010600", "region_code": "11B10101"}),
            )
            .await;

        let requests = stub.requests();
        assert!(requests[0].path().ends_with("fct_shrt_reg.php"));
        assert!(requests[0].as_str().contains("reg=11B10101&tmfc=0"));
        assert!(requests[1].path().ends_with("MidFcstInfoService/getMidTa"));
        assert!(requests[1]
            .as_str()
            .contains("regId=11B10101&tmFc=202501010600"));
    }

    #[tokio::test]
    async fn test_coordinate_tools_keep_axis_order() {
        let (table, stub) = stub_table();
        table
            .call(
                "get_aws_oa_period",
                json!({
                    "start_time": "202501010000",
                    "end_time": "202501010300",
                    "longitude": 126.978,
                    "latitude": 37.5665,
                }),
            )
            .await;
        assert!(stub.requests()[0].as_str().contains("x=126.978&y=37.5665"));
    }

    #[tokio::test]
    async fn test_handlers_borrow_only_the_client() {
        let (table, stub) = stub_table();
        let client = table.client.as_ref().unwrap();
        let futures: Vec<ToolFuture<'_>> = table
            .tools()
            .filter(|tool| tool.name().starts_with("get_current_"))
            .map(|tool| (tool.handler)(client, tool.name, json!({})))
            .collect();
        assert_eq!(futures.len(), 3);
        for future in futures {
            future.await.unwrap();
        }
        assert_eq!(stub.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_aws_current_weather_asks_for_now() {
        let (table, stub) = stub_table();
        let before = encode_minute(&kst_now());
        table
            .call("get_aws_current_weather", json!({"station_id": 400}))
            .await;
        let after = encode_minute(&kst_now());

        let url = &stub.requests()[0];
        assert!(url.path().ends_with("nph-aws2_min"));
        let tm2 = url
            .query_pairs()
            .find(|(key, _)| key == "tm2")
            .map(|(_, value)| value.into_owned())
            .unwrap();
        assert!(tm2 == before || tm2 == after, "{tm2}");
        assert!(!url.query_pairs().any(|(key, _)| key == "tm1"));
    }

    #[tokio::test]
    async fn test_aws_summary_tools() {
        let (table, stub) = stub_table();
        table
            .call(
                "get_aws_hourly_weather",
                json!({"start_time": "202501010000", "end_time": "202501011200", "station_id": 400}),
            )
            .await;
        table
            .call(
                "get_aws_daily_weather",
                json!({"start_date": "20250101", "end_date": "20250131"}),
            )
            .await;

        let requests = stub.requests();
        assert!(requests[0].path().ends_with("kma_aws4.php"));
        assert_eq!(
            requests[0].query(),
            Some("tm1=202501010000&tm2=202501011200&stn=400&help=0&authKey=test-key")
        );
        assert!(requests[1].path().ends_with("kma_aws6.php"));
        assert_eq!(
            requests[1].query(),
            Some("tm1=20250101&tm2=20250131&stn=0&help=0&authKey=test-key")
        );
    }

    #[tokio::test]
    async fn test_region_tools_default_to_every_region() {
        let (table, stub) = stub_table();
        table
            .call(
                "get_weather_warning_history",
                json!({"start_date": "20250101", "end_date": "20250107"}),
            )
            .await;
        table
            .call(
                "get_special_weather_report",
                json!({"report_time": "202501011200", "region_id": 108}),
            )
            .await;
        table
            .call("get_weekly_forecast", json!({"forecast_time": "202501010600"}))
            .await;
        let text = table
            .call(
                "get_weather_warning_history",
                json!({"start_date": "20250107", "end_date": "20250101"}),
            )
            .await;
        assert!(text.starts_with("Error fetching warning history: Invalid date:"));

        let queries: Vec<_> = stub
            .requests()
            .iter()
            .map(|url| url.query().unwrap_or_default().to_string())
            .collect();
        assert_eq!(
            queries,
            vec![
                "tm1=20250101&tm2=20250107&stn=0&help=0&authKey=test-key",
                "tm=202501011200&stn=108&help=0&authKey=test-key",
                "tm_fc=202501010600&stn=0&help=0&authKey=test-key",
            ]
        );
    }

    #[test]
    fn test_uncovered_operations_are_listed() {
        let uncovered: Vec<_> = uncovered_operations().map(|op| op.name).collect();
        assert!(uncovered.contains(&"uv_hourly"));
        assert!(uncovered.contains(&"warning_image"));
        assert!(!uncovered.contains(&"asos_hourly"));
    }
}
