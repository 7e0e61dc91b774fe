//! Turns an [`Operation`] plus normalized parameters into a [`RequestSpec`].

use crate::endpoint::error::RouteError;
use crate::endpoint::family::EndpointFamily;
use crate::endpoint::operation::Operation;
use crate::normalize::QueryParams;
use reqwest::Url;
use std::collections::BTreeMap;
use std::fmt;

pub const AUTH_PARAM: &str = "authKey";
pub const HELP_PARAM: &str = "help";
pub const PAGE_NO_PARAM: &str = "pageNo";
pub const NUM_OF_ROWS_PARAM: &str = "numOfRows";
pub const DATA_TYPE_PARAM: &str = "dataType";

const PAGINATION_PARAMS: [&str; 3] = [PAGE_NO_PARAM, NUM_OF_ROWS_PARAM, DATA_TYPE_PARAM];
const REDACTED: &str = "***";

/// Root URL per endpoint family.
///
/// Roots always end in `/`. A family can be left out on purpose, in which case
/// routing any of its operations fails with [`RouteError::UnregisteredFamily`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrls {
    roots: BTreeMap<EndpointFamily, String>,
}

impl BaseUrls {
    pub fn production() -> Self {
        Self {
            roots: EndpointFamily::ALL
                .into_iter()
                .map(|family| (family, family.default_root().to_string()))
                .collect(),
        }
    }

    /// Every family under one root. Handy for proxies and local test servers.
    pub fn uniform(root: impl Into<String>) -> Self {
        let root = with_trailing_slash(root.into());
        Self {
            roots: EndpointFamily::ALL
                .into_iter()
                .map(|family| (family, root.clone()))
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            roots: BTreeMap::new(),
        }
    }

    pub fn with_root(mut self, family: EndpointFamily, root: impl Into<String>) -> Self {
        self.roots.insert(family, with_trailing_slash(root.into()));
        self
    }

    pub fn without(mut self, family: EndpointFamily) -> Self {
        self.roots.remove(&family);
        self
    }

    pub fn root(&self, family: EndpointFamily) -> Option<&str> {
        self.roots.get(&family).map(String::as_str)
    }
}

impl Default for BaseUrls {
    fn default() -> Self {
        Self::production()
    }
}

fn with_trailing_slash(mut root: String) -> String {
    if !root.ends_with('/') {
        root.push('/');
    }
    root
}

/// A fully assembled request. Immutable once built.
#[derive(Clone, PartialEq, Eq)]
pub struct RequestSpec {
    operation: &'static str,
    family: EndpointFamily,
    base_url: String,
    path: &'static str,
    query: QueryParams,
    url: Url,
}

impl RequestSpec {
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn family(&self) -> EndpointFamily {
        self.family
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    /// The ordered query, credential included as the last entry.
    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.get(key)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The URL with the credential replaced by `***`, safe for logs and errors.
    pub fn redacted_url(&self) -> String {
        redact_url(&self.url)
    }
}

impl fmt::Debug for RequestSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let query: Vec<(&str, &str)> = self
            .query
            .iter()
            .map(|(k, v)| if k == AUTH_PARAM { (k, REDACTED) } else { (k, v) })
            .collect();
        f.debug_struct("RequestSpec")
            .field("operation", &self.operation)
            .field("family", &self.family)
            .field("base_url", &self.base_url)
            .field("path", &self.path)
            .field("query", &query)
            .finish()
    }
}

pub(crate) fn redact_url(url: &Url) -> String {
    let mut redacted = url.clone();
    if url.query().is_some() {
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| {
                let v = if k == AUTH_PARAM {
                    REDACTED.to_string()
                } else {
                    v.into_owned()
                };
                (k.into_owned(), v)
            })
            .collect();
        redacted.query_pairs_mut().clear().extend_pairs(pairs);
    }
    redacted.to_string()
}

/// Selects a family root and assembles the final query for an operation.
///
/// The router owns the credential; it is appended as the last query parameter of
/// every request and cannot be supplied by callers.
#[derive(Clone)]
pub struct EndpointRouter {
    base_urls: BaseUrls,
    auth_key: String,
}

impl EndpointRouter {
    pub fn new(base_urls: BaseUrls, auth_key: impl Into<String>) -> Self {
        Self {
            base_urls,
            auth_key: auth_key.into(),
        }
    }

    pub fn base_urls(&self) -> &BaseUrls {
        &self.base_urls
    }

    pub fn route(&self, operation: &Operation, mut params: QueryParams) -> Result<RequestSpec, RouteError> {
        let base_url = self
            .base_urls
            .root(operation.family)
            .ok_or(RouteError::UnregisteredFamily {
                operation: operation.name,
                family: operation.family,
            })?;

        if operation.pagination.is_some() != operation.family.requires_pagination() {
            return Err(RouteError::PaginationMismatch {
                operation: operation.name,
                family: operation.family,
            });
        }

        if params.contains(AUTH_PARAM) {
            return Err(RouteError::ReservedParameter {
                operation: operation.name,
                parameter: AUTH_PARAM,
            });
        }

        let paginated = operation.pagination.is_some();
        if let Some(unexpected) = params.keys().find(|key| {
            !operation.accepts(key) && !(paginated && PAGINATION_PARAMS.contains(key))
        }) {
            return Err(RouteError::UnexpectedParameter {
                operation: operation.name,
                parameter: unexpected.to_string(),
            });
        }

        if let Some(missing) = operation.required.iter().find(|p| !params.contains(p)) {
            return Err(RouteError::MissingParameter {
                operation: operation.name,
                parameter: *missing,
            });
        }

        let mut query = QueryParams::new();
        if let Some(pagination) = operation.pagination {
            let page_no = params.remove(PAGE_NO_PARAM).unwrap_or_else(|| "1".to_string());
            let rows = params
                .remove(NUM_OF_ROWS_PARAM)
                .unwrap_or_else(|| pagination.default_rows.to_string());
            let data_type = params
                .remove(DATA_TYPE_PARAM)
                .unwrap_or_else(|| "JSON".to_string());
            query
                .push(PAGE_NO_PARAM, page_no)
                .push(NUM_OF_ROWS_PARAM, rows)
                .push(DATA_TYPE_PARAM, data_type);
        }

        let caller_help = params.contains(HELP_PARAM);
        for (key, value) in params {
            query.push(key, value);
        }
        if let (Some(help), false) = (operation.help, caller_help) {
            query.push(HELP_PARAM, help);
        }
        query.push(AUTH_PARAM, self.auth_key.as_str());

        let raw = format!("{base_url}{}", operation.path);
        let mut url = Url::parse(&raw).map_err(|e| RouteError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        url.query_pairs_mut().extend_pairs(query.iter());

        Ok(RequestSpec {
            operation: operation.name,
            family: operation.family,
            base_url: base_url.to_string(),
            path: operation.path,
            query,
            url,
        })
    }
}

impl fmt::Debug for EndpointRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointRouter")
            .field("base_urls", &self.base_urls)
            .field("auth_key", &REDACTED)
            .finish()
    }
}
