//! HTTP client utilities and retry logic.
//!
//! This module provides HTTP client configuration, retry policies and the
//! [`ServiceClient`] that every service crate wraps. The service client is the
//! shared retry driver: it resolves the retry policy for a call, sends the
//! request one or more times and hands the raw response to the operation's
//! response decoder.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Certificate, Client, ClientBuilder};
use secrecy::{ExposeSecret, SecretString};
use tokio::time::sleep;
use tracing::{debug, warn};
use url::Url;

use crate::error::{map_status_to_error, Error, Result};
use crate::pagination::{PagedRequest, PagedResponse};
use crate::request::{HttpRequest, OciRequest, OciResponse, ResponseParts, OPC_OBO_TOKEN};
use crate::types::OciService;

// Service-specific timeout configurations (in seconds)

/// Default timeout for Block Storage requests
pub const BLOCKSTORAGE_DEFAULT_TIMEOUT: u64 = 60;

/// Default timeout for Compute requests
pub const COMPUTE_DEFAULT_TIMEOUT: u64 = 60;

/// Default timeout for Compute Management requests
pub const COMPUTEMANAGEMENT_DEFAULT_TIMEOUT: u64 = 60;

/// Default timeout for Virtual Network requests
pub const VIRTUALNETWORK_DEFAULT_TIMEOUT: u64 = 30;

/// Default TCP connect timeout
pub const DEFAULT_CONNECT_TIMEOUT: u64 = 10;

// Connection pool settings

/// Default idle timeout for connection pools
pub const DEFAULT_POOL_IDLE_TIMEOUT: u64 = 90;

/// Default maximum idle connections per host
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 10;

// Retry settings

/// Default maximum number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default initial retry delay in milliseconds
pub const DEFAULT_RETRY_DELAY_MS: u64 = 500;

/// Default maximum retry delay in milliseconds (for exponential backoff)
pub const DEFAULT_RETRY_MAX_DELAY_MS: u64 = 5000;

/// Which failures a [`RetryPolicy`] retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryCondition {
    /// Timeouts, connection failures, 429 and 5xx service errors.
    #[default]
    TransientErrors,
    /// Only 429, 500 and 503 service errors.
    ThrottlingAndServerErrors,
}

impl RetryCondition {
    /// Returns true when `error` matches this condition.
    #[must_use]
    pub const fn matches(self, error: &Error) -> bool {
        match self {
            Self::TransientErrors => error.is_retryable(),
            Self::ThrottlingAndServerErrors => {
                matches!(error.status_code(), Some(429 | 500 | 503))
            }
        }
    }
}

/// Retry policy with exponential backoff.
///
/// Configures how HTTP requests should be retried on failure, using exponential
/// backoff to avoid overwhelming failing services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of retry attempts
    pub max_retries: u32,

    /// Initial delay before first retry
    pub initial_delay: Duration,

    /// Maximum delay between retries (cap for exponential backoff)
    pub max_delay: Duration,

    /// Backoff multiplier (typically 2 for exponential backoff)
    pub backoff_multiplier: u32,

    /// Upper bound of the random delay added to each backoff
    pub jitter: Duration,

    /// Failures that trigger a retry
    pub condition: RetryCondition,
}

impl RetryPolicy {
    /// Create a new retry policy with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            initial_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
            max_delay: Duration::from_millis(DEFAULT_RETRY_MAX_DELAY_MS),
            backoff_multiplier: 2,
            jitter: Duration::from_millis(0),
            condition: RetryCondition::TransientErrors,
        }
    }

    /// Create a retry policy with no retries.
    #[must_use]
    pub const fn no_retry() -> Self {
        Self {
            max_retries: 0,
            initial_delay: Duration::from_millis(0),
            max_delay: Duration::from_millis(0),
            backoff_multiplier: 1,
            jitter: Duration::from_millis(0),
            condition: RetryCondition::TransientErrors,
        }
    }

    /// Policy for long-running build workflows hitting API rate limits.
    ///
    /// Ten attempts in total, retrying only 429, 500 and 503. The delay before
    /// retry `n` is `2^n` seconds plus up to two seconds of jitter.
    #[must_use]
    pub const fn for_throttling() -> Self {
        Self {
            max_retries: 9,
            initial_delay: Duration::from_secs(2),
            max_delay: Duration::from_secs(600),
            backoff_multiplier: 2,
            jitter: Duration::from_millis(2000),
            condition: RetryCondition::ThrottlingAndServerErrors,
        }
    }

    /// Set the maximum number of retries.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the initial delay.
    #[must_use]
    pub const fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Set the maximum delay.
    #[must_use]
    pub const fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Set the backoff multiplier.
    #[must_use]
    pub const fn with_backoff_multiplier(mut self, multiplier: u32) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }

    /// Set the jitter bound.
    #[must_use]
    pub const fn with_jitter(mut self, jitter: Duration) -> Self {
        self.jitter = jitter;
        self
    }

    /// Set the retry condition.
    #[must_use]
    pub const fn with_condition(mut self, condition: RetryCondition) -> Self {
        self.condition = condition;
        self
    }

    /// Calculate delay for a given attempt number.
    ///
    /// Uses exponential backoff: delay = min(initial_delay * multiplier^(attempt - 1), max_delay)
    #[must_use]
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::from_secs(0);
        }

        let multiplier = self.backoff_multiplier.saturating_pow(attempt - 1);
        let initial_ms = u64::try_from(self.initial_delay.as_millis()).unwrap_or(u64::MAX);
        let delay = Duration::from_millis(initial_ms.saturating_mul(u64::from(multiplier)));

        std::cmp::min(delay, self.max_delay)
    }

    /// Backoff for `attempt` plus a random share of the jitter bound.
    #[must_use]
    pub fn jittered_delay(&self, attempt: u32) -> Duration {
        let base = self.delay_for_attempt(attempt);
        if attempt == 0 || self.jitter.is_zero() {
            return base;
        }
        let jitter_ms = u64::try_from(self.jitter.as_millis()).unwrap_or(u64::MAX);
        base + Duration::from_millis(rand::thread_rng().gen_range(0..=jitter_ms))
    }

    /// Returns true if `error` should be retried under this policy.
    #[must_use]
    pub const fn should_retry(&self, error: &Error) -> bool {
        self.condition.matches(error)
    }

    /// Check if retries are enabled.
    #[must_use]
    pub const fn has_retries(&self) -> bool {
        self.max_retries > 0
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client configuration.
///
/// Configures HTTP client behavior including timeouts, retries, and connection pooling.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout
    pub timeout: Duration,

    /// Retry policy
    pub retry_policy: RetryPolicy,

    /// Connection pool idle timeout
    pub pool_idle_timeout: Duration,

    /// Maximum idle connections per host
    pub pool_max_idle_per_host: usize,

    /// Enable request/response logging
    pub enable_logging: bool,

    /// Enable response compression
    pub enable_compression: bool,
}

impl ClientConfig {
    /// Create a new client configuration with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            retry_policy: RetryPolicy::new(),
            pool_idle_timeout: Duration::from_secs(DEFAULT_POOL_IDLE_TIMEOUT),
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
            enable_logging: true,
            enable_compression: true,
        }
    }

    /// Set request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set retry policy.
    #[must_use]
    pub const fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Disable retries.
    #[must_use]
    pub const fn without_retries(mut self) -> Self {
        self.retry_policy = RetryPolicy::no_retry();
        self
    }

    /// Set connection pool idle timeout.
    #[must_use]
    pub const fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = timeout;
        self
    }

    /// Set maximum idle connections per host.
    #[must_use]
    pub const fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }

    /// Enable or disable logging.
    #[must_use]
    pub const fn with_logging(mut self, enabled: bool) -> Self {
        self.enable_logging = enabled;
        self
    }

    /// Enable or disable compression.
    #[must_use]
    pub const fn with_compression(mut self, enabled: bool) -> Self {
        self.enable_compression = enabled;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Signs outgoing requests before they are sent.
///
/// Implementations add the `authorization` header (and whatever else their
/// scheme requires) to the fully built request.
#[cfg_attr(test, mockall::automock)]
pub trait RequestSigner: Send + Sync {
    /// Sign the request in place.
    fn sign(&self, request: &mut reqwest::Request) -> Result<()>;
}

/// Builder for [`ServiceClient`].
pub struct ServiceClientBuilder {
    service: OciService,
    base_url: Url,
    user_agent: Option<String>,
    http_config: ClientConfig,
    retry_policy: Option<RetryPolicy>,
    signer: Option<Arc<dyn RequestSigner>>,
    obo_token: Option<SecretString>,
    tls_verify: bool,
    ca_cert_pem: Option<Vec<u8>>,
}

impl fmt::Debug for ServiceClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceClientBuilder")
            .field("service", &self.service)
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .field("http_config", &self.http_config)
            .field("retry_policy", &self.retry_policy)
            .field("signer", &self.signer.is_some())
            .field("obo_token", &self.obo_token.is_some())
            .field("tls_verify", &self.tls_verify)
            .finish_non_exhaustive()
    }
}

impl ServiceClientBuilder {
    /// Create a builder for `service` rooted at `base_url`.
    ///
    /// `base_url` includes the API version path, for example
    /// `https://iaas.us-phoenix-1.oraclecloud.com/20160918`.
    pub fn new(service: OciService, base_url: impl AsRef<str>, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidEndpoint(format!(
                "{base_url} cannot be used as a base URL"
            )));
        }

        Ok(Self {
            service,
            base_url,
            user_agent: None,
            http_config: ClientConfig::new().with_timeout(timeout),
            retry_policy: None,
            signer: None,
            obo_token: None,
            tls_verify: true,
            ca_cert_pem: None,
        })
    }

    /// Set the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the client-level retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry_policy = Some(retry);
        self
    }

    /// Override the HTTP client configuration.
    ///
    /// The configuration's retry policy becomes the client default unless
    /// [`Self::with_retry_policy`] is also used.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.retry_policy.get_or_insert(config.retry_policy);
        self.http_config = config;
        self
    }

    /// Install a request signer.
    #[must_use]
    pub fn with_signer(mut self, signer: Arc<dyn RequestSigner>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Send an `opc-obo-token` header with every request.
    #[must_use]
    pub fn with_obo_token(mut self, token: SecretString) -> Self {
        self.obo_token = Some(token);
        self
    }

    /// Enable or disable TLS certificate verification.
    #[must_use]
    pub fn with_tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }

    /// Trust an additional PEM encoded CA certificate.
    #[must_use]
    pub fn with_ca_cert_pem(mut self, pem: Vec<u8>) -> Self {
        self.ca_cert_pem = Some(pem);
        self
    }

    /// Finalise the builder.
    pub fn build(self) -> Result<ServiceClient> {
        let service = self.service;
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("oci-core/{}", env!("CARGO_PKG_VERSION")));

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &self.obo_token {
            let mut value = HeaderValue::from_str(token.expose_secret()).map_err(|err| {
                Error::ConfigError(format!("Invalid {OPC_OBO_TOKEN} value: {err}"))
            })?;
            value.set_sensitive(true);
            headers.insert(OPC_OBO_TOKEN, value);
        }

        let mut builder = ClientBuilder::new()
            .user_agent(user_agent)
            .default_headers(headers)
            .timeout(self.http_config.timeout)
            .pool_idle_timeout(self.http_config.pool_idle_timeout)
            .pool_max_idle_per_host(self.http_config.pool_max_idle_per_host)
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT));

        if !self.http_config.enable_compression {
            builder = builder.no_gzip();
        }

        if !self.tls_verify {
            warn!(%service, "TLS verification disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(pem) = &self.ca_cert_pem {
            debug!(%service, "adding custom CA certificate");
            let cert = Certificate::from_pem(pem)
                .map_err(|err| Error::ConfigError(format!("Invalid CA certificate: {err}")))?;
            builder = builder.add_root_certificate(cert);
        }

        let http = builder.build().map_err(|err| {
            Error::ConfigError(format!("Failed to build {service} HTTP client: {err}"))
        })?;

        Ok(ServiceClient {
            http,
            service,
            base_url: self.base_url,
            retry_policy: self.retry_policy,
            signer: self.signer,
            enable_logging: self.http_config.enable_logging,
        })
    }
}

/// Shared HTTP client and retry driver for one OCI service.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct ServiceClient {
    http: Client,
    service: OciService,
    base_url: Url,
    retry_policy: Option<RetryPolicy>,
    signer: Option<Arc<dyn RequestSigner>>,
    enable_logging: bool,
}

impl fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceClient")
            .field("service", &self.service)
            .field("base_url", &self.base_url.as_str())
            .field("retry_policy", &self.retry_policy)
            .field("signer", &self.signer.is_some())
            .finish_non_exhaustive()
    }
}

impl ServiceClient {
    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Return the service this client talks to.
    #[must_use]
    pub const fn service(&self) -> OciService {
        self.service
    }

    /// Client-level retry policy, if configured.
    #[must_use]
    pub const fn retry_policy(&self) -> Option<&RetryPolicy> {
        self.retry_policy.as_ref()
    }

    /// Pick the retry policy for one call.
    ///
    /// A request override beats the client policy; with neither the call is
    /// attempted once.
    #[must_use]
    pub fn resolve_retry_policy(&self, request_override: Option<&RetryPolicy>) -> RetryPolicy {
        request_override
            .or(self.retry_policy.as_ref())
            .copied()
            .unwrap_or_else(RetryPolicy::no_retry)
    }

    /// Run one operation through the retry driver and decode its response.
    ///
    /// The HTTP request is built once, so every attempt carries the same
    /// `opc-retry-token`.
    pub async fn call<R>(&self, request: &R) -> Result<R::Response>
    where
        R: OciRequest,
    {
        let http_request = request.to_http_request()?;
        let policy = self.resolve_retry_policy(request.retry_policy());
        let parts = self.execute(R::OPERATION, &http_request, &policy).await?;
        R::Response::from_parts(parts)
    }

    /// Call a list operation repeatedly, following `opc-next-page`.
    pub async fn call_all_pages<R>(
        &self,
        request: &R,
    ) -> Result<Vec<<R::Response as PagedResponse>::Item>>
    where
        R: PagedRequest,
        R::Response: PagedResponse,
    {
        let mut request = request.clone();
        let mut items = Vec::new();

        loop {
            let response = self.call(&request).await?;
            let next_page = response
                .next_page()
                .filter(|page| !page.is_empty())
                .map(str::to_owned);
            items.extend(response.into_items());

            match next_page {
                Some(page) => {
                    debug!(service = %self.service, operation = R::OPERATION, %page, "fetching next page");
                    request.set_page(Some(page));
                }
                None => return Ok(items),
            }
        }
    }

    /// Send `request`, retrying failures allowed by `policy`.
    pub async fn execute(
        &self,
        operation: &'static str,
        request: &HttpRequest,
        policy: &RetryPolicy,
    ) -> Result<ResponseParts> {
        let mut attempt: u32 = 0;

        loop {
            if self.enable_logging {
                debug!(
                    service = %self.service,
                    operation,
                    method = %request.method,
                    path = %request.path(),
                    attempt,
                    "sending OCI request"
                );
            }

            let error = match self.send_once(request).await {
                Ok(parts) => return Ok(parts),
                Err(error) => error,
            };

            if attempt >= policy.max_retries || !policy.should_retry(&error) {
                if error.should_log() {
                    warn!(
                        service = %self.service,
                        operation,
                        attempts = attempt + 1,
                        opc_request_id = error.opc_request_id().unwrap_or("-"),
                        %error,
                        "OCI request failed"
                    );
                }
                return Err(error);
            }

            attempt += 1;
            let delay = policy.jittered_delay(attempt);
            warn!(
                service = %self.service,
                operation,
                attempt,
                max_retries = policy.max_retries,
                ?delay,
                %error,
                "retrying OCI request"
            );
            if !delay.is_zero() {
                sleep(delay).await;
            }
        }
    }

    async fn send_once(&self, request: &HttpRequest) -> Result<ResponseParts> {
        let url = self.build_url(&request.segments)?;
        let mut builder = self.http.request(request.method.clone(), url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(body) = &request.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(body)?);
        }

        let mut http_request = builder.build()?;
        if let Some(signer) = &self.signer {
            signer.sign(&mut http_request)?;
        }

        let response = self.http.execute(http_request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        if status.is_success() {
            return Ok(ResponseParts {
                status,
                headers,
                body,
            });
        }

        Err(map_status_to_error(
            status,
            &headers,
            String::from_utf8_lossy(&body).into_owned(),
        ))
    }

    fn build_url(&self, segments: &[String]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                Error::InvalidEndpoint(format!("{} cannot be used as a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
