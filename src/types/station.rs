//! Station selectors for the three identifier spaces the upstream uses.
//!
//! Domestic station numbers, WMO international codes and textual zone codes must
//! never be mixed up, so each facade method takes the selector it expects and the
//! constructor states which space the caller means.

use crate::validation::error::ValidationError;
use crate::validation::params::validate_station;
use std::fmt;

/// A station or zone identifier tagged with the space it belongs to.
///
/// The numeric spaces share one envelope, `0..=99999`, enforced by
/// [`validate_station`]. Domestic station `0` means "all stations" and is sent
/// literally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StationSelector {
    /// Domestic station number (e.g. `108` for Seoul).
    Domestic(u32),
    /// WMO international index (e.g. `47122` for Osan), used by upper-air endpoints.
    Wmo(u32),
    /// Administrative or forecast zone code (e.g. `11B10101`).
    Zone(String),
}

impl StationSelector {
    pub fn domestic(station: i64) -> Result<Self, ValidationError> {
        Ok(Self::Domestic(validate_station(station)?))
    }

    pub fn wmo(station: i64) -> Result<Self, ValidationError> {
        Ok(Self::Wmo(validate_station(station)?))
    }

    /// Zone codes are non-empty ASCII alphanumerics.
    pub fn zone(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();
        if code.is_empty() || !code.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidStation(format!(
                "Zone code must be non-empty ASCII alphanumeric, got: {code:?}"
            )));
        }
        Ok(Self::Zone(code))
    }

    /// The "all stations" sentinel.
    pub fn all() -> Self {
        Self::Domestic(0)
    }

    pub fn is_all(&self) -> bool {
        matches!(self, StationSelector::Domestic(0))
    }
}

impl fmt::Display for StationSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationSelector::Domestic(id) | StationSelector::Wmo(id) => write!(f, "{id}"),
            StationSelector::Zone(code) => f.write_str(code),
        }
    }
}
