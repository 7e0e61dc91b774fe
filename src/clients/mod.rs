pub mod asos_client;
pub mod aws_client;
pub mod climate_client;
pub mod earthquake_client;
pub mod forecast_client;
pub mod typhoon_client;
pub mod upper_air_client;
pub mod uv_client;
pub mod warning_client;
