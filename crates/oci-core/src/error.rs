//! Error types for OCI operations.
//!
//! This module provides the error hierarchy shared by every service client,
//! including the decoded service error body and HTTP status code mapping.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::request::OPC_REQUEST_ID;

/// Main error type for OCI operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The service answered with a non-success status.
    #[error("{0}")]
    Service(ServiceError),

    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Operation timed out
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Service could not be reached
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Resource not found locally (no HTTP status involved)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Malformed OCID
    #[error("Invalid OCID: {0}")]
    InvalidOcid(String),

    /// Invalid endpoint
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Failed to parse a JSON document
    #[error("Failed to parse JSON: {0}")]
    ParseError(String),

    /// A response body could not be converted into the operation's response type
    #[error("Failed to convert response: {0}")]
    ResponseConversion(String),

    /// A polled resource reached a state outside the expected set
    #[error("Unexpected resource state: {0}")]
    UnexpectedState(String),

    /// A polled resource never reached the requested state
    #[error("Wait timed out: {0}")]
    WaitTimeout(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Specialized result type for OCI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error returned by an OCI service endpoint.
///
/// OCI services answer failures with a JSON body of the form
/// `{"code": "NotAuthorizedOrNotFound", "message": "..."}` and echo the
/// `opc-request-id` header, which support needs to trace the call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceError {
    /// HTTP status code of the response.
    pub status_code: u16,
    /// Service error code (e.g. `NotAuthorizedOrNotFound`).
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Request id echoed by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opc_request_id: Option<String>,
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Service error {} ({}): {}",
            self.status_code, self.code, self.message
        )?;
        if let Some(request_id) = &self.opc_request_id {
            write!(f, " [opc-request-id: {request_id}]")?;
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct ServiceErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ServiceError {
    /// Decode a service error from the raw response parts.
    ///
    /// Falls back to the status reason and raw body text when the body is not
    /// the usual JSON error document.
    #[must_use]
    pub fn from_response(status: StatusCode, headers: &HeaderMap, body: &str) -> Self {
        let opc_request_id = headers
            .get(OPC_REQUEST_ID)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let parsed = serde_json::from_str::<ServiceErrorBody>(body).ok();
        let code = parsed
            .as_ref()
            .and_then(|b| b.code.clone())
            .unwrap_or_else(|| fallback_code(status).to_string());
        let message = parsed
            .and_then(|b| b.message)
            .unwrap_or_else(|| body.trim().to_string());

        Self {
            status_code: status.as_u16(),
            code,
            message,
            opc_request_id,
        }
    }
}

fn fallback_code(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "InvalidParameter",
        StatusCode::UNAUTHORIZED => "NotAuthenticated",
        StatusCode::NOT_FOUND => "NotAuthorizedOrNotFound",
        StatusCode::CONFLICT => "Conflict",
        StatusCode::PRECONDITION_FAILED => "NoEtagMatch",
        StatusCode::TOO_MANY_REQUESTS => "TooManyRequests",
        StatusCode::SERVICE_UNAVAILABLE => "ServiceUnavailable",
        status if status.is_server_error() => "InternalServerError",
        _ => "Unknown",
    }
}

/// Maps a non-success HTTP response into an [`Error`].
///
/// Shared by every service client; OCI services use one error document shape.
#[must_use]
pub fn map_status_to_error(status: StatusCode, headers: &HeaderMap, body: String) -> Error {
    Error::Service(ServiceError::from_response(status, headers, &body))
}

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Service(_) => "SERVICE_ERROR",
            Self::HttpError(_) => "HTTP_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            Self::NotFound(_) => "NOT_FOUND",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::InvalidOcid(_) => "INVALID_OCID",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::ParseError(_) => "PARSE_ERROR",
            Self::ResponseConversion(_) => "RESPONSE_CONVERSION",
            Self::UnexpectedState(_) => "UNEXPECTED_STATE",
            Self::WaitTimeout(_) => "WAIT_TIMEOUT",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// HTTP status code of a service error, if any.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Service(err) => Some(err.status_code),
            _ => None,
        }
    }

    /// The decoded service error, if this is one.
    #[must_use]
    pub const fn as_service_error(&self) -> Option<&ServiceError> {
        match self {
            Self::Service(err) => Some(err),
            _ => None,
        }
    }

    /// Returns true when the service reported the resource as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.status_code(), Some(404)) || matches!(self, Self::NotFound(_))
    }

    /// Returns true for failures that are worth another attempt.
    ///
    /// Transport timeouts, connection failures, throttling and server-side
    /// errors qualify. Client errors never do.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout(_) | Self::ServiceUnavailable(_) => true,
            Self::Service(err) => matches!(err.status_code, 429 | 500 | 502 | 503 | 504),
            _ => false,
        }
    }

    /// Request id echoed by the service, quoted in support requests.
    #[must_use]
    pub fn opc_request_id(&self) -> Option<&str> {
        self.as_service_error()
            .and_then(|err| err.opc_request_id.as_deref())
    }

    /// Returns true if this error should be logged as a serious error.
    #[must_use]
    pub const fn should_log(&self) -> bool {
        match self {
            Self::InternalError(_) | Self::ConfigError(_) | Self::ResponseConversion(_) => true,
            Self::Service(err) => err.status_code >= 500,
            _ => false,
        }
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ServiceUnavailable(err.to_string())
        } else if err.is_decode() {
            Self::ResponseConversion(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<ServiceError> for Error {
    fn from(err: ServiceError) -> Self {
        Self::Service(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn service_error(status: u16) -> Error {
        Error::Service(ServiceError {
            status_code: status,
            code: "Code".to_string(),
            message: "msg".to_string(),
            opc_request_id: None,
        })
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(service_error(404).error_code(), "SERVICE_ERROR");
        assert_eq!(
            Error::HttpError("test".to_string()).error_code(),
            "HTTP_ERROR"
        );
        assert_eq!(Error::Timeout("test".to_string()).error_code(), "TIMEOUT");
        assert_eq!(
            Error::InvalidOcid("test".to_string()).error_code(),
            "INVALID_OCID"
        );
        assert_eq!(
            Error::ResponseConversion("test".to_string()).error_code(),
            "RESPONSE_CONVERSION"
        );
        assert_eq!(
            Error::WaitTimeout("test".to_string()).error_code(),
            "WAIT_TIMEOUT"
        );
    }

    #[test]
    fn test_service_error_from_json_body() {
        let mut headers = HeaderMap::new();
        headers.insert(OPC_REQUEST_ID, HeaderValue::from_static("req-123"));
        let body = r#"{"code":"NotAuthorizedOrNotFound","message":"volume not found"}"#;

        let err = ServiceError::from_response(StatusCode::NOT_FOUND, &headers, body);
        assert_eq!(err.status_code, 404);
        assert_eq!(err.code, "NotAuthorizedOrNotFound");
        assert_eq!(err.message, "volume not found");
        assert_eq!(err.opc_request_id.as_deref(), Some("req-123"));
    }

    #[test]
    fn test_service_error_from_plain_body() {
        let err = ServiceError::from_response(
            StatusCode::BAD_GATEWAY,
            &HeaderMap::new(),
            "upstream exploded\n",
        );
        assert_eq!(err.code, "InternalServerError");
        assert_eq!(err.message, "upstream exploded");
        assert!(err.opc_request_id.is_none());
    }

    #[test]
    fn test_error_display() {
        let err = Error::Service(ServiceError {
            status_code: 409,
            code: "IncorrectState".to_string(),
            message: "volume is attached".to_string(),
            opc_request_id: Some("abc".to_string()),
        });
        assert_eq!(
            err.to_string(),
            "Service error 409 (IncorrectState): volume is attached [opc-request-id: abc]"
        );
    }

    #[test]
    fn test_is_retryable() {
        assert!(service_error(429).is_retryable());
        assert!(service_error(500).is_retryable());
        assert!(service_error(503).is_retryable());
        assert!(!service_error(400).is_retryable());
        assert!(!service_error(404).is_retryable());
        assert!(Error::Timeout("t".to_string()).is_retryable());
        assert!(Error::ServiceUnavailable("down".to_string()).is_retryable());
        assert!(!Error::ParseError("bad".to_string()).is_retryable());
    }

    #[test]
    fn test_is_not_found() {
        assert!(service_error(404).is_not_found());
        assert!(Error::NotFound("x".to_string()).is_not_found());
        assert!(!service_error(409).is_not_found());
    }

    #[test]
    fn test_opc_request_id() {
        let err = Error::Service(ServiceError {
            status_code: 404,
            code: "NotAuthorizedOrNotFound".to_string(),
            message: "missing".to_string(),
            opc_request_id: Some("req-456".to_string()),
        });
        assert_eq!(err.opc_request_id(), Some("req-456"));
        assert_eq!(Error::NotFound("vm".to_string()).opc_request_id(), None);
    }

    #[test]
    fn test_should_log() {
        assert!(Error::InternalError("test".to_string()).should_log());
        assert!(Error::ConfigError("test".to_string()).should_log());
        assert!(service_error(500).should_log());
        assert!(!service_error(404).should_log());
        assert!(!Error::InvalidRequest("test".to_string()).should_log());
    }

    #[test]
    fn test_map_status_to_error() {
        let err = map_status_to_error(
            StatusCode::TOO_MANY_REQUESTS,
            &HeaderMap::new(),
            r#"{"code":"TooManyRequests","message":"slow down"}"#.to_string(),
        );
        assert_eq!(err.status_code(), Some(429));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_from_url_parse_error() {
        let err = url::Url::parse("not a url").unwrap_err();
        let oci_err: Error = err.into();
        assert!(matches!(oci_err, Error::InvalidEndpoint(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let oci_err: Error = err.into();
        assert!(matches!(oci_err, Error::ParseError(_)));
    }
}
