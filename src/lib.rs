//! Client core for the Korea Meteorological Administration (KMA) API Hub.
//!
//! Logical parameters (a time, a period, a station, a coordinate) are validated up
//! front, encoded into the wire format of the endpoint family that serves the
//! operation, routed to a URL carrying the credential last, and executed either on
//! the calling thread ([`BlockingKmaClient`]) or as a future ([`KmaClient`]).
//!
//! ```no_run
//! use kma_mcp::{KmaClient, KmaError};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), KmaError> {
//! let client = KmaClient::from_env()?;
//! let normals = client.climate().monthly_normals(1, 12, 108).await?;
//! println!("{normals}");
//! # Ok(())
//! # }
//! ```
//!
//! [`ToolTable`] exposes a fixed set of operations as MCP tools that answer with
//! text.

pub mod catalog;
mod client;
mod clients;
mod config;
mod endpoint;
mod error;
mod normalize;
mod tools;
mod transport;
mod types;
mod validation;

pub use client::{BlockingKmaClient, Client, KmaClient};
pub use config::{ClientConfig, API_KEY_VAR, DEFAULT_TIMEOUT, TIMEOUT_VAR};
pub use error::KmaError;
pub use tools::{tool_names, uncovered_operations, Tool, ToolFuture, ToolTable};

pub use clients::asos_client::*;
pub use clients::aws_client::*;
pub use clients::climate_client::*;
pub use clients::earthquake_client::*;
pub use clients::forecast_client::*;
pub use clients::typhoon_client::*;
pub use clients::upper_air_client::*;
pub use clients::uv_client::*;
pub use clients::warning_client::*;

pub use endpoint::error::RouteError;
pub use endpoint::family::EndpointFamily;
pub use endpoint::operation::{Operation, OperationStatus, Pagination};
pub use endpoint::router::{BaseUrls, EndpointRouter, RequestSpec, AUTH_PARAM};

pub use transport::error::{TransportError, TransportErrorKind};
pub use transport::executor::{decode, Blocking, Cooperative, Executor};
pub use transport::http::{AsyncTransport, BlockingTransport, RawResponse};

pub use normalize::*;
pub use validation::error::{ValidationError, ValidationKind};
pub use validation::params::*;

pub use types::calendar::{ClimateMonth, DekadPeriod, MonthDay};
pub use types::geo::{GeoBounds, GeoCoordinate, GridPoint};
pub use types::station::StationSelector;
pub use types::time::{kst_current_hour, kst_now, Granularity, IssueTime, LogicalInstant, LogicalInterval};
pub use types::traits::any::any_date::AnyDate;
pub use types::traits::any::any_datetime::AnyDateTime;
