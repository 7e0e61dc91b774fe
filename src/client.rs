//! The client that owns the HTTP session and runs every operation.

use crate::catalog;
use crate::clients::asos_client::AsosClient;
use crate::clients::aws_client::AwsClient;
use crate::clients::climate_client::ClimateClient;
use crate::clients::earthquake_client::EarthquakeClient;
use crate::clients::forecast_client::ForecastClient;
use crate::clients::typhoon_client::TyphoonClient;
use crate::clients::upper_air_client::UpperAirClient;
use crate::clients::uv_client::UvClient;
use crate::clients::warning_client::WarningClient;
use crate::config::ClientConfig;
use crate::endpoint::operation::{Operation, OperationStatus};
use crate::endpoint::router::{EndpointRouter, RequestSpec};
use crate::error::KmaError;
use crate::normalize::QueryParams;
use crate::transport::executor::{Blocking, Cooperative, Executor};
use crate::validation::error::ValidationError;
use log::info;
use std::time::Duration;

/// A KMA API Hub client that owns exactly one HTTP session.
///
/// The execution model is fixed per instance by `E`: [`KmaClient`] runs requests
/// as futures, [`BlockingKmaClient`] runs them on the calling thread. Both share
/// every line of validation, normalization and routing; only the final network
/// call differs.
///
/// Domain facades are reached through accessor methods such as
/// [`Client::asos()`] or [`Client::forecast()`]. Each facade method validates its
/// inputs, encodes them, routes the request and executes it, in that order.
///
/// The session is released when the client is dropped or [`Client::close`]d.
///
/// # Example
///
/// ```no_run
/// use kma_mcp::{ClientConfig, KmaClient, KmaError};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), KmaError> {
/// let client = KmaClient::new(ClientConfig::builder().auth_key("your-key").build())?;
///
/// // Seoul (108), 2025-01-01 12:00 KST
/// let observation = client.asos().hourly("202501011200", 108).await?;
/// println!("{observation}");
///
/// client.close();
/// # Ok(())
/// # }
/// ```
pub struct Client<E = Cooperative> {
    router: EndpointRouter,
    executor: E,
    timeout: Duration,
}

/// Async client backed by `reqwest::Client`.
pub type KmaClient = Client<Cooperative>;

/// Blocking client backed by `reqwest::blocking::Client`.
pub type BlockingKmaClient = Client<Blocking>;

impl Client<Cooperative> {
    /// Opens an async session with the configured timeout.
    ///
    /// # Errors
    ///
    /// [`KmaError::MissingCredential`] for a blank key, [`KmaError::ClientBuild`] if
    /// the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, KmaError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .gzip(true)
            .build()
            .map_err(KmaError::ClientBuild)?;
        Self::with_executor(config, Cooperative::new(http))
    }

    pub fn from_env() -> Result<Self, KmaError> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl Client<Blocking> {
    /// Opens a blocking session with the configured timeout.
    ///
    /// Must not be called from inside an async runtime; use [`KmaClient`] there.
    pub fn new(config: ClientConfig) -> Result<Self, KmaError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .gzip(true)
            .build()
            .map_err(KmaError::ClientBuild)?;
        Self::with_executor(config, Blocking::new(http))
    }

    pub fn from_env() -> Result<Self, KmaError> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl<E> Client<E> {
    /// Builds a client around an already constructed executor.
    ///
    /// The executor's transport is responsible for honoring `config.timeout()`.
    pub fn with_executor(config: ClientConfig, executor: E) -> Result<Self, KmaError> {
        if !config.has_credential() {
            return Err(KmaError::MissingCredential);
        }
        info!(
            "Opened KMA client session (timeout {}s)",
            config.timeout().as_secs_f64()
        );
        Ok(Self {
            router: EndpointRouter::new(config.base_urls().clone(), config.auth_key()),
            executor,
            timeout: config.timeout(),
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Validates, encodes and routes a call without executing it.
    ///
    /// `build` fills the parameter list from validated values; any
    /// [`ValidationError`] it returns stops the call before routing.
    pub fn prepare<F>(&self, operation: &Operation, build: F) -> Result<RequestSpec, KmaError>
    where
        F: FnOnce(&mut QueryParams) -> Result<(), ValidationError>,
    {
        if let OperationStatus::NotYetWired { hint } = operation.status {
            return Err(KmaError::NotYetWired {
                operation: operation.name,
                hint,
            });
        }
        let mut params = QueryParams::with_granularity(operation.granularity);
        build(&mut params)?;
        Ok(self.router.route(operation, params)?)
    }

    /// Releases the session. Dropping the client has the same effect.
    pub fn close(self) {
        drop(self);
    }
}

impl<E: Executor> Client<E> {
    pub(crate) fn dispatch<F>(&self, operation: &Operation, build: F) -> E::Output<'_>
    where
        F: FnOnce(&mut QueryParams) -> Result<(), ValidationError>,
    {
        match self.prepare(operation, build) {
            Ok(spec) => self.executor.execute(spec),
            Err(err) => self.executor.reject(err),
        }
    }

    /// Calls an operation that is declared but not implemented.
    ///
    /// Always yields [`KmaError::NotYetWired`]; no request is made.
    pub fn call_unwired(&self, operation: &Operation) -> E::Output<'_> {
        self.dispatch(operation, |_| Ok(()))
    }

    pub fn asos(&self) -> AsosClient<'_, E> {
        AsosClient::new(self)
    }

    pub fn aws(&self) -> AwsClient<'_, E> {
        AwsClient::new(self)
    }

    pub fn climate(&self) -> ClimateClient<'_, E> {
        ClimateClient::new(self)
    }

    pub fn uv(&self) -> UvClient<'_, E> {
        UvClient::new(self)
    }

    pub fn forecast(&self) -> ForecastClient<'_, E> {
        ForecastClient::new(self)
    }

    pub fn warning(&self) -> WarningClient<'_, E> {
        WarningClient::new(self)
    }

    pub fn upper_air(&self) -> UpperAirClient<'_, E> {
        UpperAirClient::new(self)
    }

    pub fn earthquake(&self) -> EarthquakeClient<'_, E> {
        EarthquakeClient::new(self)
    }

    pub fn typhoon(&self) -> TyphoonClient<'_, E> {
        TyphoonClient::new(self)
    }

    /// Every operation this client can route, wired or not.
    pub fn operations(&self) -> impl Iterator<Item = &'static Operation> {
        catalog::all()
    }
}

impl<E> Drop for Client<E> {
    fn drop(&mut self) {
        info!("Closed KMA client session");
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::endpoint::family::EndpointFamily;
    use crate::endpoint::router::BaseUrls;
    use crate::transport::error::TransportErrorKind;
    use crate::transport::stub::StubTransport;
    use reqwest::StatusCode;
    use serde_json::json;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    pub(crate) fn config() -> ClientConfig {
        ClientConfig::builder().auth_key("test-key").build()
    }

    pub(crate) fn blocking_stub() -> (Client<Blocking<StubTransport>>, StubTransport) {
        let stub = StubTransport::new();
        let client = Client::with_executor(config(), Blocking::new(stub.clone())).unwrap();
        (client, stub)
    }

    pub(crate) fn cooperative_stub() -> (Client<Cooperative<StubTransport>>, StubTransport) {
        let stub = StubTransport::new();
        let client = Client::with_executor(config(), Cooperative::new(stub.clone())).unwrap();
        (client, stub)
    }

    #[test]
    fn test_blank_credential_rejected() {
        let config = ClientConfig::builder().auth_key("  ").build();
        assert!(matches!(
            Client::with_executor(config, Blocking::new(StubTransport::new())),
            Err(KmaError::MissingCredential)
        ));
    }

    #[test]
    fn test_hourly_observation_request() -> Result<(), KmaError> {
        let (client, stub) = blocking_stub();
        stub.respond_json(json!({"stn": 108}));

        let value = client.asos().hourly("202501011200", 108)?;
        assert_eq!(value, json!({"stn": 108}));

        let requests = stub.requests();
        assert_eq!(requests.len(), 1);
        let url = &requests[0];
        assert_eq!(
            url.as_str(),
            "https://apihub.kma.go.kr/api/typ01/url/kma_sfctm2.php?tm=202501011200&stn=108&help=0&authKey=test-key"
        );
        Ok(())
    }

    #[test]
    fn test_validation_happens_before_network() {
        let (client, stub) = blocking_stub();
        let err = client.asos().hourly("202501012560", 108).unwrap_err();
        assert!(matches!(
            err,
            KmaError::Validation(ValidationError::InvalidTime(_))
        ));
        let err = client.asos().hourly("202501011200", 100_000).unwrap_err();
        assert!(matches!(
            err,
            KmaError::Validation(ValidationError::InvalidStation(_))
        ));
        assert!(stub.requests().is_empty());
    }

    #[test]
    fn test_upstream_500_propagates() {
        let (client, stub) = blocking_stub();
        stub.respond(StatusCode::INTERNAL_SERVER_ERROR, "oops");
        let err = client.asos().hourly("202501011200", 108).unwrap_err();
        assert!(matches!(
            err,
            KmaError::HttpStatus {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_upstream_500_propagates_async() {
        let (client, stub) = cooperative_stub();
        stub.respond(StatusCode::INTERNAL_SERVER_ERROR, "oops");
        let err = client.asos().hourly("202501011200", 108).await.unwrap_err();
        assert!(matches!(err, KmaError::HttpStatus { .. }));
    }

    #[tokio::test]
    async fn test_models_send_identical_requests() -> Result<(), KmaError> {
        let (blocking, blocking_requests) = blocking_stub();
        let (cooperative, cooperative_requests) = cooperative_stub();

        blocking.asos().hourly_period("202501010000", "202501020000", 0)?;
        cooperative
            .asos()
            .hourly_period("202501010000", "202501020000", 0)
            .await?;
        blocking.climate().daily_normals(1, 1, 1, 31, 108)?;
        cooperative.climate().daily_normals(1, 1, 1, 31, 108).await?;
        blocking.forecast().weather_situation().call()?;
        cooperative.forecast().weather_situation().call().await?;

        assert_eq!(blocking_requests.requests(), cooperative_requests.requests());
        assert_eq!(blocking_requests.requests().len(), 3);
        Ok(())
    }

    #[test]
    fn test_prepare_matches_dispatch() -> Result<(), KmaError> {
        let (client, stub) = blocking_stub();
        let spec = client.prepare(&catalog::ASOS_HOURLY, |params| {
            params.push("tm", "202501011200").push("stn", "0");
            Ok(())
        })?;
        client.asos().hourly("202501011200", 0)?;
        assert_eq!(stub.requests(), vec![spec.url().clone()]);
        assert_eq!(spec.query_value("stn"), Some("0"));
        Ok(())
    }

    #[test]
    fn test_prepare_encodes_at_declared_granularity() -> Result<(), KmaError> {
        use crate::types::time::LogicalInstant;

        let (client, _) = blocking_stub();
        let spec = client.prepare(&catalog::ASOS_DAILY, |params| {
            params
                .push_instant("tm", &LogicalInstant::minute("202501011200")?)
                .push("stn", "108")
                .push("disp", "0");
            Ok(())
        })?;
        assert_eq!(spec.query_value("tm"), Some("20250101"));

        let spec = client.prepare(&catalog::ASOS_HOURLY, |params| {
            params
                .push_instant("tm", &LogicalInstant::minute("202501011200")?)
                .push("stn", "108");
            Ok(())
        })?;
        assert_eq!(spec.query_value("tm"), Some("202501011200"));
        Ok(())
    }

    #[tokio::test]
    async fn test_not_yet_wired_skips_network() {
        let (client, stub) = cooperative_stub();
        let err = client.uv().hourly("202501011200", 108).await.unwrap_err();
        assert!(err.is_not_yet_wired());
        let err = client.call_unwired(&catalog::UV_DAILY).await.unwrap_err();
        assert!(matches!(
            err,
            KmaError::NotYetWired {
                operation: "uv_daily",
                ..
            }
        ));
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let (client, stub) = cooperative_stub();
        stub.fail(TransportErrorKind::Connect);
        let err = client.typhoon().current().await.unwrap_err();
        match err {
            KmaError::Transport(e) => assert_eq!(e.kind, TransportErrorKind::Connect),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unregistered_family_is_route_error() {
        let config = ClientConfig::builder()
            .auth_key("test-key")
            .base_urls(BaseUrls::production().without(EndpointFamily::ImageQuery))
            .build();
        let stub = StubTransport::new();
        let client = Client::with_executor(config, Blocking::new(stub.clone())).unwrap();
        let err = client
            .warning()
            .image("201611082300", 36.1, 127.7)
            .range(300)
            .size(685)
            .wrn("W,R,C,D,O,V,T,S,Y,H")
            .call()
            .unwrap_err();
        assert!(matches!(err, KmaError::Route(_)));
        assert!(stub.requests().is_empty());
    }

    /// Serves one canned HTTP response on a loopback port and returns the base URL.
    fn serve_once(response: &'static str) -> (String, std::thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}/", listener.local_addr().unwrap());
        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 4096];
            let n = stream.read(&mut buf).unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).into_owned();
            stream.write_all(response.as_bytes()).unwrap();
            request
        });
        (base, handle)
    }

    fn loopback_config(base: &str) -> ClientConfig {
        ClientConfig::builder()
            .auth_key("loop-key")
            .timeout(Duration::from_secs(5))
            .base_urls(BaseUrls::uniform(base))
            .build()
    }

    #[tokio::test]
    async fn test_reqwest_async_round_trip() -> Result<(), KmaError> {
        let (base, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 11\r\nConnection: close\r\n\r\n{\"ok\":true}",
        );
        let client = KmaClient::new(loopback_config(&base))?;
        let value = client.typhoon().history(2024).await?;
        assert_eq!(value, json!({"ok": true}));

        let request = server.join().unwrap();
        assert!(request.starts_with("GET /kma_typ_hist.php?year=2024&help=0&authKey=loop-key "));
        Ok(())
    }

    #[test]
    fn test_reqwest_blocking_status_error() -> Result<(), KmaError> {
        let (base, server) = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 4\r\nConnection: close\r\n\r\nbusy",
        );
        let client = BlockingKmaClient::new(loopback_config(&base))?;
        let err = client
            .earthquake()
            .list("202501010000", "202501310000")
            .call()
            .unwrap_err();
        match err {
            KmaError::HttpStatus { status, body, url } => {
                assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
                assert_eq!(body, "busy");
                assert!(url.contains("authKey=***"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        server.join().unwrap();
        Ok(())
    }

    #[tokio::test]
    async fn test_reqwest_connection_refused() -> Result<(), KmaError> {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}/", listener.local_addr().unwrap());
        drop(listener);

        let client = KmaClient::new(loopback_config(&base))?;
        let err = client.typhoon().current().await.unwrap_err();
        match err {
            KmaError::Transport(e) => {
                assert_eq!(e.kind, TransportErrorKind::Connect);
                assert!(!e.to_string().contains("loop-key"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_reqwest_timeout() -> Result<(), KmaError> {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}/", listener.local_addr().unwrap());
        let config = ClientConfig::builder()
            .auth_key("loop-key")
            .timeout(Duration::from_millis(200))
            .base_urls(BaseUrls::uniform(base))
            .build();

        let client = KmaClient::new(config)?;
        let err = client.typhoon().current().await.unwrap_err();
        assert!(matches!(err, KmaError::Transport(ref e) if e.is_timeout()));
        drop(listener);
        Ok(())
    }
}
