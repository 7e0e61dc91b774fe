//! Issues a [`RequestSpec`] over a transport and decodes the answer.
//!
//! [`Blocking`] and [`Cooperative`] share [`decode`], so the same upstream answer
//! always yields the same value or the same error regardless of execution model.

use crate::endpoint::router::RequestSpec;
use crate::error::KmaError;
use crate::transport::http::{AsyncTransport, BlockingTransport, RawResponse};
use futures_util::future::BoxFuture;
use log::{debug, warn};
use serde_json::Value;

/// How a client runs its requests.
///
/// `Output` is what facade methods hand back: a `Result` for [`Blocking`], a
/// future of one for [`Cooperative`].
pub trait Executor {
    type Output<'a>
    where
        Self: 'a;

    fn execute(&self, spec: RequestSpec) -> Self::Output<'_>;

    /// Wraps an error raised before dispatch in this executor's output shape.
    fn reject(&self, error: KmaError) -> Self::Output<'_>;
}

/// Runs each request on the calling thread.
#[derive(Debug, Clone)]
pub struct Blocking<T = reqwest::blocking::Client> {
    transport: T,
}

impl<T> Blocking<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: BlockingTransport> Executor for Blocking<T> {
    type Output<'a>
        = Result<Value, KmaError>
    where
        Self: 'a;

    fn execute(&self, spec: RequestSpec) -> Self::Output<'_> {
        debug!("Dispatching {} to {}", spec.operation(), spec.redacted_url());
        let raw = self
            .transport
            .fetch(spec.url())
            .inspect_err(|e| warn!("{} failed: {e}", spec.operation()))?;
        decode(&spec, raw)
    }

    fn reject(&self, error: KmaError) -> Self::Output<'_> {
        Err(error)
    }
}

/// Runs each request as a future; the network call is the only await point.
#[derive(Debug, Clone)]
pub struct Cooperative<T = reqwest::Client> {
    transport: T,
}

impl<T> Cooperative<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: AsyncTransport + Sync> Executor for Cooperative<T> {
    type Output<'a>
        = BoxFuture<'a, Result<Value, KmaError>>
    where
        Self: 'a;

    fn execute(&self, spec: RequestSpec) -> Self::Output<'_> {
        debug!("Dispatching {} to {}", spec.operation(), spec.redacted_url());
        Box::pin(async move {
            let raw = self
                .transport
                .fetch(spec.url())
                .await
                .inspect_err(|e| warn!("{} failed: {e}", spec.operation()))?;
            decode(&spec, raw)
        })
    }

    fn reject(&self, error: KmaError) -> Self::Output<'_> {
        Box::pin(std::future::ready(Err(error)))
    }
}

/// Rejects non-2xx answers and parses the body as JSON without interpreting it.
pub fn decode(spec: &RequestSpec, raw: RawResponse) -> Result<Value, KmaError> {
    if !raw.status.is_success() {
        warn!(
            "{} returned HTTP {} from {}",
            spec.operation(),
            raw.status,
            spec.redacted_url()
        );
        return Err(KmaError::HttpStatus {
            url: spec.redacted_url(),
            status: raw.status,
            body: String::from_utf8_lossy(&raw.body).into_owned(),
        });
    }
    serde_json::from_slice(&raw.body).map_err(|source| KmaError::Decode {
        url: spec.redacted_url(),
        source,
    })
}
