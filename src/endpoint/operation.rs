//! Static descriptors for upstream operations.
//!
//! A descriptor carries everything the router needs and nothing about how the
//! values were produced: family, path, accepted parameter names, the default
//! `help` flag, pagination defaults, and whether the operation is wired at all.

use crate::endpoint::family::EndpointFamily;
use crate::types::geo::{GeoBounds, GeoCoordinate};
use crate::types::time::Granularity;
use crate::validation::error::ValidationError;

/// Whether an operation can be called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationStatus {
    Supported,
    /// Declared by the upstream documentation but not implemented here.
    NotYetWired { hint: &'static str },
}

/// Row count used when the caller leaves `numOfRows` unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub default_rows: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operation {
    pub name: &'static str,
    pub family: EndpointFamily,
    /// Path below the family root, e.g. `kma_sfctm2.php` or `VilageFcstMsgService/getWthrSituation`.
    pub path: &'static str,
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
    pub help: Option<&'static str>,
    pub pagination: Option<Pagination>,
    pub bounds: Option<GeoBounds>,
    pub granularity: Option<Granularity>,
    pub status: OperationStatus,
    pub summary: &'static str,
}

impl Operation {
    pub const fn new(name: &'static str, family: EndpointFamily, path: &'static str) -> Self {
        Self {
            name,
            family,
            path,
            required: &[],
            optional: &[],
            help: None,
            pagination: None,
            bounds: None,
            granularity: None,
            status: OperationStatus::Supported,
            summary: "",
        }
    }

    pub const fn required(mut self, params: &'static [&'static str]) -> Self {
        self.required = params;
        self
    }

    pub const fn optional(mut self, params: &'static [&'static str]) -> Self {
        self.optional = params;
        self
    }

    pub const fn help(mut self, flag: &'static str) -> Self {
        self.help = Some(flag);
        self
    }

    pub const fn paginated(mut self, default_rows: u32) -> Self {
        self.pagination = Some(Pagination { default_rows });
        self
    }

    pub const fn bounds(mut self, bounds: GeoBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub const fn granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = Some(granularity);
        self
    }

    pub const fn not_yet_wired(mut self, hint: &'static str) -> Self {
        self.status = OperationStatus::NotYetWired { hint };
        self
    }

    pub const fn summary(mut self, summary: &'static str) -> Self {
        self.summary = summary;
        self
    }

    pub fn is_supported(&self) -> bool {
        matches!(self.status, OperationStatus::Supported)
    }

    pub fn accepts(&self, parameter: &str) -> bool {
        self.required.contains(&parameter) || self.optional.contains(&parameter)
    }

    /// The box coordinate parameters are checked against, if the operation takes any.
    pub fn coordinate_bounds(&self) -> Option<GeoBounds> {
        self.bounds
    }

    /// Validates a latitude/longitude pair against this operation's declared box.
    ///
    /// An operation that declares no box accepts no coordinates at all.
    pub fn coordinate(&self, latitude: f64, longitude: f64) -> Result<GeoCoordinate, ValidationError> {
        match &self.bounds {
            Some(bounds) => GeoCoordinate::new(latitude, longitude, bounds),
            None => Err(ValidationError::InvalidCoordinate(format!(
                "{} takes no coordinates",
                self.name
            ))),
        }
    }
}
