//! Coordinates and the bounding boxes operations validate them against.

use crate::validation::error::ValidationError;
use crate::validation::params::{validate_latitude, validate_longitude};
use std::fmt;

/// An inclusive latitude/longitude box declared by an operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub name: &'static str,
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl GeoBounds {
    /// General observation box around the Korean peninsula.
    pub const KOREA: GeoBounds = GeoBounds {
        name: "the Korea region",
        min_latitude: 33.0,
        max_latitude: 43.0,
        min_longitude: 124.0,
        max_longitude: 132.0,
    };

    /// Extent of the village-forecast grid, used by lon/lat to grid conversion.
    pub const GRID_CONVERSION: GeoBounds = GeoBounds {
        name: "the forecast grid",
        min_latitude: 31.651814,
        max_latitude: 43.393490,
        min_longitude: 123.310165,
        max_longitude: 132.774963,
    };

    pub fn contains_latitude(&self, latitude: f64) -> bool {
        (self.min_latitude..=self.max_latitude).contains(&latitude)
    }

    pub fn contains_longitude(&self, longitude: f64) -> bool {
        (self.min_longitude..=self.max_longitude).contains(&longitude)
    }
}

impl fmt::Display for GeoBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (lat {}..={}, lon {}..={})",
            self.name, self.min_latitude, self.max_latitude, self.min_longitude, self.max_longitude
        )
    }
}

/// A latitude/longitude pair validated against a specific [`GeoBounds`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64, bounds: &GeoBounds) -> Result<Self, ValidationError> {
        Ok(Self {
            latitude: validate_latitude(latitude, bounds)?,
            longitude: validate_longitude(longitude, bounds)?,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

pub const GRID_MAX_X: i64 = 149;
pub const GRID_MAX_Y: i64 = 253;

/// A cell of the village-forecast grid, `x` in `1..=149`, `y` in `1..=253`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPoint {
    x: u16,
    y: u16,
}

impl GridPoint {
    pub fn new(x: i64, y: i64) -> Result<Self, ValidationError> {
        if !(1..=GRID_MAX_X).contains(&x) {
            return Err(ValidationError::InvalidCoordinate(format!(
                "Grid X must be between 1 and {GRID_MAX_X}, got: {x}"
            )));
        }
        if !(1..=GRID_MAX_Y).contains(&y) {
            return Err(ValidationError::InvalidCoordinate(format!(
                "Grid Y must be between 1 and {GRID_MAX_Y}, got: {y}"
            )));
        }
        Ok(Self {
            x: x as u16,
            y: y as u16,
        })
    }

    pub fn x(&self) -> u16 {
        self.x
    }

    pub fn y(&self) -> u16 {
        self.y
    }
}
