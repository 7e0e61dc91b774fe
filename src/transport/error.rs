use reqwest::Url;
use std::fmt;
use thiserror::Error;

use crate::endpoint::router::redact_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    Timeout,
    Connect,
    Body,
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransportErrorKind::Timeout => "Request timed out",
            TransportErrorKind::Connect => "Connection failed",
            TransportErrorKind::Body => "Failed to read response body",
            TransportErrorKind::Other => "Request failed",
        })
    }
}

/// A timeout or connection-level failure. Never retried.
///
/// `url` is already redacted.
#[derive(Debug, Error)]
#[error("{kind} for {url}")]
pub struct TransportError {
    pub url: String,
    pub kind: TransportErrorKind,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl TransportError {
    pub fn new(
        url: &Url,
        kind: TransportErrorKind,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            url: redact_url(url),
            kind,
            source: source.into(),
        }
    }

    /// Classifies a `reqwest` failure. The URL is stripped from the source so the
    /// credential cannot leak through its `Display`.
    pub fn from_reqwest(url: &Url, err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            TransportErrorKind::Timeout
        } else if err.is_connect() {
            TransportErrorKind::Connect
        } else if err.is_body() || err.is_decode() {
            TransportErrorKind::Body
        } else {
            TransportErrorKind::Other
        };
        Self::new(url, kind, err.without_url())
    }

    pub fn is_timeout(&self) -> bool {
        self.kind == TransportErrorKind::Timeout
    }
}
