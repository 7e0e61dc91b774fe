//! Client configuration: credential, timeout and base URLs.

use crate::endpoint::router::BaseUrls;
use crate::error::KmaError;
use bon::bon;
use log::debug;
use std::fmt;
use std::time::Duration;

pub const API_KEY_VAR: &str = "KMA_API_KEY";
pub const TIMEOUT_VAR: &str = "KMA_TIMEOUT_SECS";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything a client needs at construction time.
///
/// The credential is fixed for the lifetime of a client and is never printed:
/// the `Debug` output shows `***` in its place.
///
/// # Example
///
/// ```
/// use kma_mcp::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::builder()
///     .auth_key("my-key")
///     .timeout(Duration::from_secs(10))
///     .build();
/// assert_eq!(config.timeout(), Duration::from_secs(10));
/// assert!(!format!("{config:?}").contains("my-key"));
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    auth_key: String,
    timeout: Duration,
    base_urls: BaseUrls,
}

#[bon]
impl ClientConfig {
    #[builder]
    pub fn new(
        #[builder(into)] auth_key: String,
        timeout: Option<Duration>,
        base_urls: Option<BaseUrls>,
    ) -> Self {
        Self {
            auth_key,
            timeout: timeout.unwrap_or(DEFAULT_TIMEOUT),
            base_urls: base_urls.unwrap_or_default(),
        }
    }

    /// Reads `KMA_API_KEY` and the optional `KMA_TIMEOUT_SECS`, loading a `.env`
    /// file first if one exists.
    ///
    /// # Errors
    ///
    /// [`KmaError::MissingCredential`] if the key is unset or blank,
    /// [`KmaError::Config`] if the timeout is not a positive integer.
    pub fn from_env() -> Result<Self, KmaError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, KmaError> {
        let auth_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(KmaError::MissingCredential)?;
        let timeout = lookup(TIMEOUT_VAR)
            .map(|raw| parse_timeout(&raw))
            .transpose()?;
        Ok(Self::builder()
            .auth_key(auth_key)
            .maybe_timeout(timeout)
            .build())
    }

    pub fn auth_key(&self) -> &str {
        &self.auth_key
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn base_urls(&self) -> &BaseUrls {
        &self.base_urls
    }

    pub fn has_credential(&self) -> bool {
        !self.auth_key.trim().is_empty()
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, KmaError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(KmaError::Config(format!(
            "{TIMEOUT_VAR} must be a positive number of seconds, got: {raw:?}"
        ))),
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("auth_key", &"***")
            .field("timeout", &self.timeout)
            .field("base_urls", &self.base_urls)
            .finish()
    }
}
