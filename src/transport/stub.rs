//! In-process transport with canned answers, for tests.

use crate::transport::error::{TransportError, TransportErrorKind};
use crate::transport::http::{AsyncTransport, BlockingTransport, RawResponse};
use reqwest::{StatusCode, Url};
use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct StubState {
    answers: VecDeque<Result<RawResponse, TransportErrorKind>>,
    requests: Vec<Url>,
}

/// Records every URL it is asked for and replays queued answers in order.
///
/// Clones share state. With an empty queue it answers `200 {}`.
#[derive(Clone, Default)]
pub(crate) struct StubTransport {
    state: Arc<Mutex<StubState>>,
}

impl StubTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(&self, status: StatusCode, body: &str) {
        self.state
            .lock()
            .unwrap()
            .answers
            .push_back(Ok(RawResponse::new(status, body.as_bytes())));
    }

    pub(crate) fn respond_json(&self, value: serde_json::Value) {
        self.respond(StatusCode::OK, &value.to_string());
    }

    pub(crate) fn fail(&self, kind: TransportErrorKind) {
        self.state.lock().unwrap().answers.push_back(Err(kind));
    }

    pub(crate) fn requests(&self) -> Vec<Url> {
        self.state.lock().unwrap().requests.clone()
    }

    fn answer(&self, url: &Url) -> Result<RawResponse, TransportError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(url.clone());
        match state.answers.pop_front() {
            Some(Ok(raw)) => Ok(raw),
            Some(Err(kind)) => Err(TransportError::new(url, kind, "stub failure")),
            None => Ok(RawResponse::new(StatusCode::OK, "{}")),
        }
    }
}

impl BlockingTransport for StubTransport {
    fn fetch(&self, url: &Url) -> Result<RawResponse, TransportError> {
        self.answer(url)
    }
}

impl AsyncTransport for StubTransport {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<RawResponse, TransportError>> + Send {
        std::future::ready(self.answer(url))
    }
}
