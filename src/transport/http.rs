//! The two transport seams and their `reqwest` implementations.
//!
//! A transport performs one GET and hands back the status and raw body. Status
//! interpretation and JSON decoding happen in [`crate::transport::executor`], so
//! both execution models classify responses the same way.

use crate::transport::error::TransportError;
use reqwest::{StatusCode, Url};
use std::future::Future;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

pub trait BlockingTransport {
    fn fetch(&self, url: &Url) -> Result<RawResponse, TransportError>;
}

pub trait AsyncTransport {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}

impl BlockingTransport for reqwest::blocking::Client {
    fn fetch(&self, url: &Url) -> Result<RawResponse, TransportError> {
        let response = self
            .get(url.clone())
            .send()
            .map_err(|e| TransportError::from_reqwest(url, e))?;
        let status = response.status();
        let body = response
            .bytes()
            .map_err(|e| TransportError::from_reqwest(url, e))?;
        Ok(RawResponse::new(status, body.to_vec()))
    }
}

impl AsyncTransport for reqwest::Client {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<RawResponse, TransportError>> + Send {
        async move {
            let response = self
                .get(url.clone())
                .send()
                .await
                .map_err(|e| TransportError::from_reqwest(url, e))?;
            let status = response.status();
            let body = response
                .bytes()
                .await
                .map_err(|e| TransportError::from_reqwest(url, e))?;
            Ok(RawResponse::new(status, body.to_vec()))
        }
    }
}
