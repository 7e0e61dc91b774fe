use std::fmt;
use thiserror::Error;

/// Rejection raised before any request is built.
///
/// The variants are the four validation subtypes. Match on the enum as a whole to
/// handle any bad input, or on a single variant (or [`ValidationError::kind`]) to
/// react to one class of mistake only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid datetime: {0}")]
    InvalidTime(String),

    #[error("Invalid station: {0}")]
    InvalidStation(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

/// The subtype of a [`ValidationError`], without its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationKind {
    Date,
    Time,
    Station,
    Coordinate,
}

impl ValidationError {
    pub fn kind(&self) -> ValidationKind {
        match self {
            ValidationError::InvalidDate(_) => ValidationKind::Date,
            ValidationError::InvalidTime(_) => ValidationKind::Time,
            ValidationError::InvalidStation(_) => ValidationKind::Station,
            ValidationError::InvalidCoordinate(_) => ValidationKind::Coordinate,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ValidationError::InvalidDate(msg)
            | ValidationError::InvalidTime(msg)
            | ValidationError::InvalidStation(msg)
            | ValidationError::InvalidCoordinate(msg) => msg,
        }
    }
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValidationKind::Date => "date",
            ValidationKind::Time => "time",
            ValidationKind::Station => "station",
            ValidationKind::Coordinate => "coordinate",
        };
        f.write_str(name)
    }
}
