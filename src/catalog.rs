//! Every upstream operation this crate knows about, including the ones that are
//! declared but not wired.
//!
//! Facade methods and tools refer to these descriptors; nothing else builds an
//! [`Operation`].

use crate::endpoint::family::EndpointFamily::{CgiQuery, ImageQuery, LegacyQuery, OpenApiQuery};
use crate::endpoint::operation::Operation;
use crate::types::geo::GeoBounds;
use crate::types::time::Granularity;

// ASOS surface observations

pub static ASOS_HOURLY: Operation = Operation::new("asos_hourly", LegacyQuery, "kma_sfctm2.php")
    .required(&["tm", "stn"])
    .help("0")
    .summary("Hourly ASOS observation at one time");

pub static ASOS_HOURLY_PERIOD: Operation =
    Operation::new("asos_hourly_period", LegacyQuery, "kma_sfctm3.php")
        .required(&["tm1", "tm2", "stn"])
        .help("0")
        .summary("Hourly ASOS observations over a period");

pub static ASOS_DAILY: Operation = Operation::new("asos_daily", LegacyQuery, "kma_sfcdd.php")
    .required(&["tm", "stn", "disp"])
    .help("0")
    .granularity(Granularity::Date)
    .summary("Daily ASOS summary for one day");

pub static ASOS_DAILY_PERIOD: Operation =
    Operation::new("asos_daily_period", LegacyQuery, "kma_sfcdd3.php")
        .required(&["tm1", "tm2", "stn", "mode"])
        .optional(&["obs"])
        .help("0")
        .granularity(Granularity::Date)
        .summary("Daily ASOS summaries over a period");

pub static ASOS_ELEMENT: Operation = Operation::new("asos_element", LegacyQuery, "kma_sfctm5.php")
    .required(&["tm1", "tm2", "obs", "stn"])
    .help("0")
    .summary("One ASOS element (e.g. TA, RN) over a period");

pub static ASOS_NORMALS: Operation = Operation::new("asos_normals", LegacyQuery, "sfc_norm1.php")
    .required(&["norm", "tmst", "stn", "MM1", "DD1", "MM2", "DD2"])
    .help("1")
    .summary("Climate normals of one base period, by day, ten-day period, month or year");

// AWS

pub static AWS_MINUTELY: Operation = Operation::new("aws_minutely", CgiQuery, "nph-aws2_min")
    .required(&["stn", "disp"])
    .optional(&["tm1", "tm2"])
    .help("1")
    .summary("Minutely AWS observations");

pub static AWS_HOURLY: Operation = Operation::new("aws_hourly", LegacyQuery, "kma_aws3.php")
    .required(&["tm", "stn"])
    .help("0")
    .summary("Hourly AWS observation at one time");

pub static AWS_HOURLY_PERIOD: Operation = Operation::new("aws_hourly_period", LegacyQuery, "kma_aws4.php")
    .required(&["tm1", "tm2", "stn"])
    .help("0")
    .summary("Hourly AWS observations over a period");

pub static AWS_DAILY: Operation = Operation::new("aws_daily", LegacyQuery, "kma_aws5.php")
    .required(&["tm", "stn"])
    .help("0")
    .granularity(Granularity::Date)
    .summary("Daily AWS summary for one day");

pub static AWS_DAILY_PERIOD: Operation = Operation::new("aws_daily_period", LegacyQuery, "kma_aws6.php")
    .required(&["tm1", "tm2", "stn"])
    .help("0")
    .granularity(Granularity::Date)
    .summary("Daily AWS summaries over a period");

pub static AWS_LAND_SURFACE_TEMPERATURE: Operation =
    Operation::new("aws_land_surface_temperature", CgiQuery, "nph-aws2_min_lst")
        .required(&["stn", "disp"])
        .optional(&["tm", "tm1", "tm2"])
        .help("1")
        .summary("Minutely AWS land surface temperature");

pub static AWS_OA_ANALYSIS: Operation = Operation::new("aws_oa_analysis", LegacyQuery, "kma_awsoa.php")
    .required(&["tm", "x", "y"])
    .help("0")
    .bounds(GeoBounds::KOREA)
    .summary("AWS objective analysis at a coordinate");

pub static AWS_OA_PERIOD: Operation = Operation::new("aws_oa_period", LegacyQuery, "kma_awsoa_2.php")
    .required(&["tm1", "tm2", "x", "y"])
    .help("0")
    .bounds(GeoBounds::KOREA)
    .summary("AWS objective analysis at a coordinate over a period");

// Climate normals

pub static CLIMATE_DAILY_NORMALS: Operation =
    Operation::new("climate_daily_normals", LegacyQuery, "kma_clm_daily.php")
        .required(&["stn", "mm1", "dd1", "mm2", "dd2"])
        .help("0")
        .summary("Daily climate normals between two month/day pairs");

pub static CLIMATE_TEN_DAY_NORMALS: Operation =
    Operation::new("climate_ten_day_normals", LegacyQuery, "kma_clm_tenday.php")
        .required(&["stn", "mm1", "dd1", "mm2", "dd2"])
        .help("0")
        .summary("Ten-day climate normals between two month/period pairs");

pub static CLIMATE_MONTHLY_NORMALS: Operation =
    Operation::new("climate_monthly_normals", LegacyQuery, "kma_clm_month.php")
        .required(&["stn", "mm1", "mm2"])
        .help("0")
        .summary("Monthly climate normals between two months");

pub static CLIMATE_ANNUAL_NORMALS: Operation =
    Operation::new("climate_annual_normals", LegacyQuery, "kma_clm_year.php")
        .required(&["stn"])
        .help("0")
        .summary("Annual climate normals");

// UV

pub static UV_OBSERVATION: Operation = Operation::new("uv_observation", LegacyQuery, "kma_sfctm_uv.php")
    .required(&["tm", "stn"])
    .help("1")
    .summary("UV index observation");

pub static UV_HOURLY: Operation = Operation::new("uv_hourly", LegacyQuery, "kma_sfctm_uv.php")
    .required(&["tm", "stn"])
    .not_yet_wired("not documented upstream; use uv_observation(tm, stn)")
    .summary("Hourly UV index");

pub static UV_HOURLY_PERIOD: Operation =
    Operation::new("uv_hourly_period", LegacyQuery, "kma_sfctm_uv.php")
        .required(&["tm1", "tm2", "stn"])
        .not_yet_wired("not documented upstream; call uv_observation once per hour")
        .summary("Hourly UV index over a period");

pub static UV_DAILY: Operation = Operation::new("uv_daily", LegacyQuery, "kma_sfctm_uv.php")
    .required(&["tm", "stn"])
    .granularity(Granularity::Date)
    .not_yet_wired("not documented upstream")
    .summary("Daily UV index");

pub static UV_DAILY_PERIOD: Operation =
    Operation::new("uv_daily_period", LegacyQuery, "kma_sfctm_uv.php")
        .required(&["tm1", "tm2", "stn"])
        .granularity(Granularity::Date)
        .not_yet_wired("not documented upstream")
        .summary("Daily UV index over a period");

// Forecasts

pub static FORECAST_SHORT_TERM_REGION: Operation =
    Operation::new("forecast_short_term_region", LegacyQuery, "fct_shrt_reg.php")
        .required(&["disp"])
        .optional(&["stn", "reg", "tmfc", "tmfc1", "tmfc2", "tmef1", "tmef2"])
        .help("1")
        .summary("Short-term forecast by region");

pub static FORECAST_VILLAGE_GRID: Operation =
    Operation::new("forecast_village_grid", CgiQuery, "nph-dfs_shrt_grd")
        .optional(&["tmfc", "tmef", "vars"])
        .help("1")
        .summary("Short-term village forecast grid");

pub static FORECAST_GRID_TO_COORDS: Operation =
    Operation::new("forecast_grid_to_coords", CgiQuery, "nph-dfs_xy_lonlat")
        .required(&["x", "y"])
        .optional(&["help"])
        .help("1")
        .summary("Village grid cell to longitude/latitude");

pub static FORECAST_COORDS_TO_GRID: Operation =
    Operation::new("forecast_coords_to_grid", CgiQuery, "nph-dfs_xy_lonlat")
        .required(&["lon", "lat"])
        .optional(&["help"])
        .help("1")
        .bounds(GeoBounds::GRID_CONVERSION)
        .summary("Longitude/latitude to nearest village grid cell");

pub static FORECAST_WEATHER_SITUATION: Operation = Operation::new(
    "forecast_weather_situation",
    OpenApiQuery,
    "VilageFcstMsgService/getWthrSituation",
)
.optional(&["stnId"])
.paginated(10)
.summary("Weather situation messages from regional offices");

pub static FORECAST_VILLAGE: Operation = Operation::new(
    "forecast_village",
    OpenApiQuery,
    "VilageFcstInfoService_2.0/getVilageFcst",
)
.required(&["base_date", "base_time", "nx", "ny"])
.paginated(1000)
.summary("Village short-term forecast for a grid cell");

pub static FORECAST_ULTRA_SHORT_OBSERVATION: Operation = Operation::new(
    "forecast_ultra_short_observation",
    OpenApiQuery,
    "VilageFcstInfoService_2.0/getUltraSrtNcst",
)
.required(&["base_date", "base_time", "nx", "ny"])
.paginated(1000)
.summary("Ultra-short-term observation for a grid cell");

pub static FORECAST_MEDIUM_TEMPERATURE: Operation =
    Operation::new("forecast_medium_temperature", OpenApiQuery, "MidFcstInfoService/getMidTa")
        .required(&["regId", "tmFc"])
        .paginated(10)
        .summary("Medium-term temperature forecast for a region");

pub static FORECAST_WEEKLY: Operation = Operation::new("forecast_weekly", LegacyQuery, "kma_wkfcst.php")
    .required(&["tm_fc", "stn"])
    .help("0")
    .summary("Weekly forecast by region (undocumented upstream)");

pub static FORECAST_DISTRIBUTION_MAP: Operation =
    Operation::new("forecast_distribution_map", ImageQuery, "dfs/nph-dfs_shrt_ana_5d_test")
        .required(&[
            "data0", "data1", "tm_fc", "tm_ef", "dtm", "map", "mask", "color", "size", "effect",
            "overlay", "zoom_rate", "zoom_level", "zoom_x", "zoom_y", "auto_man", "mode",
            "interval", "rand",
        ])
        .summary("Short-term forecast distribution map image");

// Warnings

pub static WARNING_CURRENT: Operation = Operation::new("warning_current", LegacyQuery, "wrn_now_data.php")
    .required(&["fe", "disp"])
    .optional(&["tm"])
    .help("1")
    .summary("Currently active weather warnings");

pub static WARNING_HISTORY: Operation = Operation::new("warning_history", LegacyQuery, "kma_wn_2.php")
    .required(&["tm1", "tm2", "stn"])
    .help("0")
    .granularity(Granularity::Date)
    .summary("Weather warnings issued over a period of days");

pub static SPECIAL_WEATHER_REPORT: Operation =
    Operation::new("special_weather_report", LegacyQuery, "kma_swr.php")
        .required(&["tm", "stn"])
        .help("0")
        .summary("Special weather report at one time");

pub static WARNING_IMAGE: Operation = Operation::new("warning_image", ImageQuery, "wrn/nph-wrn7")
    .required(&[
        "tm", "lat", "lon", "range", "size", "wrn", "tmef", "city", "name", "out",
    ])
    .optional(&["stn"])
    .bounds(GeoBounds::KOREA)
    .summary("Weather warning map around a coordinate");

// Upper air

pub static UPPER_AIR_TEMP: Operation = Operation::new("upper_air_temp", LegacyQuery, "upp_temp.php")
    .required(&["tm", "stn"])
    .optional(&["pa"])
    .help("0")
    .summary("Radiosonde TEMP profile");

pub static UPPER_AIR_STABILITY: Operation = Operation::new("upper_air_stability", LegacyQuery, "upp_idx.php")
    .required(&["tm1", "tm2", "stn"])
    .help("0")
    .summary("Atmospheric stability indices");

pub static UPPER_AIR_MAX_ALTITUDE: Operation =
    Operation::new("upper_air_max_altitude", LegacyQuery, "upp_raw_max.php")
        .required(&["tm1", "tm2", "stn"])
        .help("0")
        .granularity(Granularity::Date)
        .summary("Maximum altitude reached by radiosonde ascents over a period of days");

// Earthquakes

pub static EARTHQUAKE_RECENT: Operation = Operation::new("earthquake_recent", LegacyQuery, "eqk_now.php")
    .required(&["tm", "disp"])
    .help("0")
    .summary("Most recent earthquake");

pub static EARTHQUAKE_LIST: Operation = Operation::new("earthquake_list", LegacyQuery, "eqk_list.php")
    .required(&["tm1", "tm2", "disp"])
    .help("0")
    .summary("Earthquakes over a period");

// Typhoons

pub static TYPHOON_CURRENT: Operation = Operation::new("typhoon_current", LegacyQuery, "kma_typ.php")
    .help("0")
    .summary("Active typhoons");

pub static TYPHOON_DETAILS: Operation = Operation::new("typhoon_details", LegacyQuery, "kma_typ_dtl.php")
    .required(&["typ_id"])
    .help("0")
    .summary("Details of one typhoon");

pub static TYPHOON_FORECAST: Operation = Operation::new("typhoon_forecast", LegacyQuery, "kma_typ_fcst.php")
    .required(&["typ_id"])
    .help("0")
    .summary("Forecast track of one typhoon");

pub static TYPHOON_HISTORY: Operation = Operation::new("typhoon_history", LegacyQuery, "kma_typ_hist.php")
    .required(&["year"])
    .help("0")
    .summary("Typhoons of one year");

static ALL: [&Operation; 46] = [
    &ASOS_HOURLY,
    &ASOS_HOURLY_PERIOD,
    &ASOS_DAILY,
    &ASOS_DAILY_PERIOD,
    &ASOS_ELEMENT,
    &ASOS_NORMALS,
    &AWS_MINUTELY,
    &AWS_HOURLY,
    &AWS_HOURLY_PERIOD,
    &AWS_DAILY,
    &AWS_DAILY_PERIOD,
    &AWS_LAND_SURFACE_TEMPERATURE,
    &AWS_OA_ANALYSIS,
    &AWS_OA_PERIOD,
    &CLIMATE_DAILY_NORMALS,
    &CLIMATE_TEN_DAY_NORMALS,
    &CLIMATE_MONTHLY_NORMALS,
    &CLIMATE_ANNUAL_NORMALS,
    &UV_OBSERVATION,
    &UV_HOURLY,
    &UV_HOURLY_PERIOD,
    &UV_DAILY,
    &UV_DAILY_PERIOD,
    &FORECAST_SHORT_TERM_REGION,
    &FORECAST_VILLAGE_GRID,
    &FORECAST_GRID_TO_COORDS,
    &FORECAST_COORDS_TO_GRID,
    &FORECAST_WEATHER_SITUATION,
    &FORECAST_VILLAGE,
    &FORECAST_ULTRA_SHORT_OBSERVATION,
    &FORECAST_MEDIUM_TEMPERATURE,
    &FORECAST_WEEKLY,
    &FORECAST_DISTRIBUTION_MAP,
    &WARNING_CURRENT,
    &WARNING_HISTORY,
    &SPECIAL_WEATHER_REPORT,
    &WARNING_IMAGE,
    &UPPER_AIR_TEMP,
    &UPPER_AIR_STABILITY,
    &UPPER_AIR_MAX_ALTITUDE,
    &EARTHQUAKE_RECENT,
    &EARTHQUAKE_LIST,
    &TYPHOON_CURRENT,
    &TYPHOON_DETAILS,
    &TYPHOON_FORECAST,
    &TYPHOON_HISTORY,
];

/// All operations, in catalog order.
pub fn all() -> impl Iterator<Item = &'static Operation> {
    ALL.iter().copied()
}

pub fn find(name: &str) -> Option<&'static Operation> {
    all().find(|operation| operation.name == name)
}

/// Operations declared upstream but not implemented, with their hints.
pub fn not_yet_wired() -> impl Iterator<Item = &'static Operation> {
    all().filter(|operation| !operation.is_supported())
}
