use crate::endpoint::family::EndpointFamily;
use thiserror::Error;

/// Configuration errors found while turning an operation into a request.
///
/// These point at a bad operation descriptor or base-URL setup rather than at
/// caller input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Unknown endpoint family '{0}'")]
    UnknownFamily(String),

    #[error("No base URL registered for the {family} family (operation '{operation}')")]
    UnregisteredFamily {
        operation: &'static str,
        family: EndpointFamily,
    },

    #[error("Operation '{operation}' requires parameter '{parameter}'")]
    MissingParameter {
        operation: &'static str,
        parameter: &'static str,
    },

    #[error("Operation '{operation}' does not accept parameter '{parameter}'")]
    UnexpectedParameter {
        operation: &'static str,
        parameter: String,
    },

    #[error("Parameter '{parameter}' is reserved and set by the client (operation '{operation}')")]
    ReservedParameter {
        operation: &'static str,
        parameter: &'static str,
    },

    #[error("Operation '{operation}' pagination does not match the {family} family")]
    PaginationMismatch {
        operation: &'static str,
        family: EndpointFamily,
    },

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
