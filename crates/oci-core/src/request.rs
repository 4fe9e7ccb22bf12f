//! Request and response plumbing shared by every operation.
//!
//! Each operation is described by a request struct implementing
//! [`OciRequest`], which knows how to turn itself into an [`HttpRequest`],
//! and a response struct implementing [`OciResponse`], which is decoded from
//! the raw [`ResponseParts`] returned by the transport.

use bytes::Bytes;
use rand::distributions::Alphanumeric;
use rand::Rng;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::RetryPolicy;
use crate::error::{Error, Result};
use crate::query::QueryParams;

/// Request id header, echoed by the service.
pub const OPC_REQUEST_ID: &str = "opc-request-id";

/// Idempotency token header for create and action operations.
pub const OPC_RETRY_TOKEN: &str = "opc-retry-token";

/// Optimistic concurrency header.
pub const IF_MATCH: &str = "if-match";

/// Entity tag response header.
pub const ETAG: &str = "etag";

/// Pagination cursor response header.
pub const OPC_NEXT_PAGE: &str = "opc-next-page";

/// Work request id for asynchronous operations.
pub const OPC_WORK_REQUEST_ID: &str = "opc-work-request-id";

/// Total item count returned by some list operations.
pub const OPC_TOTAL_ITEMS: &str = "opc-total-items";

/// On-behalf-of token header.
pub const OPC_OBO_TOKEN: &str = "opc-obo-token";

const RETRY_TOKEN_LENGTH: usize = 30;

/// Per-call metadata carried by every request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestMetadata {
    /// Caller supplied request id sent as `opc-request-id`.
    pub opc_request_id: Option<String>,
    /// Retry policy overriding the client default for this call.
    pub retry_policy: Option<RetryPolicy>,
}

impl RequestMetadata {
    /// Create empty metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request id.
    #[must_use]
    pub fn with_opc_request_id(mut self, id: impl Into<String>) -> Self {
        self.opc_request_id = Some(id.into());
        self
    }

    /// Set the retry policy override.
    #[must_use]
    pub const fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = Some(policy);
        self
    }
}

/// Transport-level description of a single HTTP call.
///
/// Path segments are kept unencoded; the transport percent-encodes them when
/// joining with the service base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Path segments relative to the API version root.
    pub segments: Vec<String>,
    /// Query parameters.
    pub query: Vec<(&'static str, String)>,
    /// Extra request headers.
    pub headers: Vec<(&'static str, String)>,
    /// JSON body, if any.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Create a request for the given method and path segments.
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Add a header.
    #[must_use]
    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    /// Add a header when the value is present.
    #[must_use]
    pub fn header_opt<T>(mut self, name: &'static str, value: Option<T>) -> Self
    where
        T: ToString,
    {
        if let Some(value) = value {
            self.headers.push((name, value.to_string()));
        }
        self
    }

    /// Set `opc-retry-token`, generating one when `token` is absent or empty.
    #[must_use]
    pub fn retry_token(self, token: Option<&str>) -> Self {
        let token = token
            .filter(|token| !token.is_empty())
            .map_or_else(generate_retry_token, str::to_owned);
        self.header(OPC_RETRY_TOKEN, token)
    }

    /// Append query parameters.
    #[must_use]
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query.extend(query.into_pairs());
        self
    }

    /// Serialize `body` as the JSON payload.
    pub fn json_body<T>(mut self, body: &T) -> Result<Self>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(body)
            .map_err(|err| Error::InvalidRequest(format!("failed to serialize body: {err}")))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Apply the per-call metadata headers.
    #[must_use]
    pub fn with_metadata(self, metadata: &RequestMetadata) -> Self {
        self.header_opt(OPC_REQUEST_ID, metadata.opc_request_id.as_deref())
    }

    /// Look up a header that has been set on this request.
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Relative path, unencoded, for logging.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

/// Raw parts of a successful HTTP response.
#[derive(Debug, Clone)]
pub struct ResponseParts {
    /// Status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body.
    pub body: Bytes,
}

impl ResponseParts {
    /// Decode the body as JSON.
    pub fn json<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_slice(&self.body).map_err(|err| {
            Error::ResponseConversion(format!(
                "failed to convert response into {}: {err}",
                std::any::type_name::<T>()
            ))
        })
    }

    /// Header value as an owned string.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    }

    /// The `opc-request-id` header.
    #[must_use]
    pub fn opc_request_id(&self) -> Option<String> {
        self.header(OPC_REQUEST_ID)
    }

    /// The `etag` header.
    #[must_use]
    pub fn etag(&self) -> Option<String> {
        self.header(ETAG)
    }

    /// The `opc-next-page` header.
    #[must_use]
    pub fn opc_next_page(&self) -> Option<String> {
        self.header(OPC_NEXT_PAGE)
    }

    /// The `opc-work-request-id` header.
    #[must_use]
    pub fn opc_work_request_id(&self) -> Option<String> {
        self.header(OPC_WORK_REQUEST_ID)
    }

    /// The `opc-total-items` header, parsed.
    #[must_use]
    pub fn opc_total_items(&self) -> Option<u64> {
        self.header(OPC_TOTAL_ITEMS)
            .and_then(|value| value.trim().parse().ok())
    }
}

/// An operation request.
pub trait OciRequest: Send + Sync {
    /// Response produced by this operation.
    type Response: OciResponse;

    /// Operation name used in logs.
    const OPERATION: &'static str;

    /// Build the HTTP request for this operation.
    fn to_http_request(&self) -> Result<HttpRequest>;

    /// Per-call metadata.
    fn metadata(&self) -> &RequestMetadata;

    /// Mutable per-call metadata.
    fn metadata_mut(&mut self) -> &mut RequestMetadata;

    /// Retry policy override carried by this request.
    fn retry_policy(&self) -> Option<&RetryPolicy> {
        self.metadata().retry_policy.as_ref()
    }

    /// Override the retry policy for this call.
    #[must_use]
    fn with_retry_policy(mut self, policy: RetryPolicy) -> Self
    where
        Self: Sized,
    {
        self.metadata_mut().retry_policy = Some(policy);
        self
    }

    /// Set the `opc-request-id` for this call.
    #[must_use]
    fn with_opc_request_id(mut self, id: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.metadata_mut().opc_request_id = Some(id.into());
        self
    }
}

/// Implements [`OciRequest::metadata`] and [`OciRequest::metadata_mut`] for
/// request structs that keep their metadata in a `metadata` field.
#[macro_export]
macro_rules! impl_request_metadata {
    () => {
        fn metadata(&self) -> &$crate::request::RequestMetadata {
            &self.metadata
        }

        fn metadata_mut(&mut self) -> &mut $crate::request::RequestMetadata {
            &mut self.metadata
        }
    };
}

/// An operation response decoded from raw HTTP parts.
pub trait OciResponse: Sized + Send {
    /// Decode the response.
    fn from_parts(parts: ResponseParts) -> Result<Self>;
}

/// Response carrying only headers, returned by operations without a body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmptyResponse {
    /// Service request id.
    pub opc_request_id: Option<String>,
    /// Work request tracking an asynchronous operation.
    pub opc_work_request_id: Option<String>,
}

impl OciResponse for EmptyResponse {
    fn from_parts(parts: ResponseParts) -> Result<Self> {
        Ok(Self {
            opc_request_id: parts.opc_request_id(),
            opc_work_request_id: parts.opc_work_request_id(),
        })
    }
}

/// Response wrapping a single resource and its entity tag.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceResponse<T> {
    /// Decoded body.
    pub body: T,
    /// Entity tag for optimistic concurrency.
    pub etag: Option<String>,
    /// Service request id.
    pub opc_request_id: Option<String>,
    /// Work request tracking an asynchronous operation.
    pub opc_work_request_id: Option<String>,
}

impl<T> OciResponse for ResourceResponse<T>
where
    T: DeserializeOwned + Send,
{
    fn from_parts(parts: ResponseParts) -> Result<Self> {
        Ok(Self {
            etag: parts.etag(),
            opc_request_id: parts.opc_request_id(),
            opc_work_request_id: parts.opc_work_request_id(),
            body: parts.json()?,
        })
    }
}

/// Generate a random idempotency token for `opc-retry-token`.
#[must_use]
pub fn generate_retry_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(RETRY_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;
    use serde::Deserialize;

    fn parts(body: &'static str) -> ResponseParts {
        let mut headers = HeaderMap::new();
        headers.insert(OPC_REQUEST_ID, HeaderValue::from_static("req-1"));
        headers.insert(ETAG, HeaderValue::from_static("etag-1"));
        headers.insert(OPC_TOTAL_ITEMS, HeaderValue::from_static("42"));
        ResponseParts {
            status: StatusCode::OK,
            headers,
            body: Bytes::from_static(body.as_bytes()),
        }
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Thing {
        id: String,
    }

    #[test]
    fn test_http_request_builder() {
        let mut query = QueryParams::new();
        query.push("limit", 10);
        let request = HttpRequest::new(Method::PUT, ["volumes", "ocid1.volume.oc1..abc"])
            .header_opt(IF_MATCH, Some("etag-1"))
            .header_opt(OPC_RETRY_TOKEN, Option::<String>::None)
            .with_query(query)
            .with_metadata(&RequestMetadata::new().with_opc_request_id("req-9"));

        assert_eq!(request.path(), "/volumes/ocid1.volume.oc1..abc");
        assert_eq!(request.header_value("If-Match"), Some("etag-1"));
        assert_eq!(request.header_value(OPC_REQUEST_ID), Some("req-9"));
        assert!(request.header_value(OPC_RETRY_TOKEN).is_none());
        assert_eq!(request.query, vec![("limit", "10".to_string())]);
        assert!(request.body.is_none());
    }

    #[test]
    fn test_json_body() {
        let request = HttpRequest::new(Method::POST, ["volumes"])
            .json_body(&serde_json::json!({"displayName": "data"}))
            .unwrap();
        assert_eq!(
            request.body,
            Some(serde_json::json!({"displayName": "data"}))
        );
    }

    #[test]
    fn test_response_parts_headers() {
        let parts = parts("{}");
        assert_eq!(parts.opc_request_id().as_deref(), Some("req-1"));
        assert_eq!(parts.etag().as_deref(), Some("etag-1"));
        assert_eq!(parts.opc_total_items(), Some(42));
        assert!(parts.opc_next_page().is_none());
        assert!(parts.opc_work_request_id().is_none());
    }

    #[test]
    fn test_response_parts_json() {
        let thing: Thing = parts(r#"{"id":"abc"}"#).json().unwrap();
        assert_eq!(thing.id, "abc");
    }

    #[test]
    fn test_response_parts_json_conversion_failure() {
        let err = parts(r#"{"name":"abc"}"#).json::<Thing>().unwrap_err();
        match err {
            Error::ResponseConversion(message) => {
                assert!(message.starts_with("failed to convert response into"));
                assert!(message.contains("Thing"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_retry_token_keeps_caller_value() {
        let request = HttpRequest::new(Method::POST, ["volumes"]).retry_token(Some("mine"));
        assert_eq!(request.header_value(OPC_RETRY_TOKEN), Some("mine"));

        let request = HttpRequest::new(Method::POST, ["volumes"]).retry_token(Some(""));
        assert_eq!(request.header_value(OPC_RETRY_TOKEN).map(str::len), Some(30));

        let request = HttpRequest::new(Method::POST, ["volumes"]).retry_token(None);
        assert_eq!(request.header_value(OPC_RETRY_TOKEN).map(str::len), Some(30));
    }

    #[test]
    fn test_generate_retry_token() {
        let token = generate_retry_token();
        assert_eq!(token.len(), 30);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(token, generate_retry_token());
    }

    #[test]
    fn test_resource_response() {
        let response = ResourceResponse::<Thing>::from_parts(parts(r#"{"id":"abc"}"#)).unwrap();
        assert_eq!(response.body, Thing { id: "abc".to_string() });
        assert_eq!(response.etag.as_deref(), Some("etag-1"));
        assert_eq!(response.opc_request_id.as_deref(), Some("req-1"));
        assert!(response.opc_work_request_id.is_none());
    }

    #[test]
    fn test_empty_response_ignores_body() {
        let response = EmptyResponse::from_parts(parts("")).unwrap();
        assert_eq!(response.opc_request_id.as_deref(), Some("req-1"));
    }

    #[test]
    fn test_request_metadata_builder() {
        let metadata = RequestMetadata::new()
            .with_opc_request_id("abc")
            .with_retry_policy(RetryPolicy::no_retry());
        assert_eq!(metadata.opc_request_id.as_deref(), Some("abc"));
        assert_eq!(metadata.retry_policy, Some(RetryPolicy::no_retry()));
    }
}
