use crate::endpoint::error::RouteError;
use crate::transport::error::TransportError;
use crate::validation::error::ValidationError;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KmaError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("HTTP {status} from {url}: {body}")]
    HttpStatus {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("Response from {url} is not valid JSON")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Operation '{operation}' is not implemented yet: {hint}")]
    NotYetWired {
        operation: &'static str,
        hint: &'static str,
    },

    #[error("KMA API key is not configured. Set the KMA_API_KEY environment variable.")]
    MissingCredential,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Unknown tool '{0}'")]
    UnknownTool(String),

    #[error("Invalid arguments for tool '{tool}': {source}")]
    ToolArguments {
        tool: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl KmaError {
    pub fn is_validation(&self) -> bool {
        matches!(self, KmaError::Validation(_))
    }

    /// `true` for operations that exist upstream but are not implemented here.
    pub fn is_not_yet_wired(&self) -> bool {
        matches!(self, KmaError::NotYetWired { .. })
    }
}
