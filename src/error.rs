//! Error types for the AMC API client
//!
//! Two families live here:
//!
//! - [`ErrorDetail`] and [`ErrorBatch`], the error shapes the remote service
//!   returns in non-2xx response bodies. Both are usable as errors on their own.
//! - [`Error`], the crate-wide error every public API returns. Each variant
//!   belongs to exactly one class: construction, transport, application,
//!   bad response or decode.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Fallback text when an error carries no human-readable message.
const GENERIC_FAILURE: &str = "The operation couldn't be completed.";

// ============================================================================
// Service error envelope
// ============================================================================

/// A single error as reported by the AMC API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    /// Application error code (`-1` for locally synthesized errors)
    pub code: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
}

impl ErrorDetail {
    /// Create an error with a code and message
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: Some(message.into()),
            exception_message: None,
            exception_type: None,
            stack_trace: None,
        }
    }

    /// Wrap a lower-level failure as a local error with code `-1`
    pub fn from_error(error: &dyn std::error::Error) -> Self {
        Self::new(-1, error.to_string())
    }

    /// Text shown to users: `message`, then `exceptionMessage`, then a generic fallback
    pub fn description(&self) -> &str {
        self.message
            .as_deref()
            .or(self.exception_message.as_deref())
            .unwrap_or(GENERIC_FAILURE)
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl std::error::Error for ErrorDetail {}

/// The error envelope `{"errors": [...]}` returned by a failed API call.
///
/// Always holds at least one [`ErrorDetail`]; both [`ErrorBatch::new`] and
/// deserialization reject an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawErrorBatch")]
pub struct ErrorBatch {
    errors: Vec<ErrorDetail>,
}

#[derive(Deserialize)]
struct RawErrorBatch {
    errors: Vec<ErrorDetail>,
}

impl TryFrom<RawErrorBatch> for ErrorBatch {
    type Error = String;

    fn try_from(raw: RawErrorBatch) -> std::result::Result<Self, Self::Error> {
        Self::new(raw.errors).ok_or_else(|| "error envelope contains no errors".to_string())
    }
}

impl ErrorBatch {
    /// Create a batch; returns `None` when `errors` is empty
    pub fn new(errors: Vec<ErrorDetail>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// All errors in the order the service reported them
    pub fn errors(&self) -> &[ErrorDetail] {
        &self.errors
    }

    /// The first reported error
    pub fn first(&self) -> Option<&ErrorDetail> {
        self.errors.first()
    }

    /// Whether any contained error carries the given code
    pub fn has_code(&self, code: i64) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }
}

impl fmt::Display for ErrorBatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.first() {
            Some(first) => fmt::Display::fmt(first, f),
            None => f.write_str(GENERIC_FAILURE),
        }
    }
}

impl std::error::Error for ErrorBatch {}

// ============================================================================
// Crate error
// ============================================================================

/// The main error type for the AMC API client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Construction Errors (raised before any network activity)
    // ============================================================================
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to encode request body: {message}")]
    Encode { message: String },

    #[error("Unsupported query value for '{key}': {kind}")]
    UnsupportedQueryValue { key: String, kind: String },

    #[error("Invalid path segment '{segment}': {message}")]
    InvalidPathSegment { segment: String, message: String },

    #[error("Invalid header '{name}': {message}")]
    InvalidHeader { name: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response has no recognizable HTTP status code")]
    MissingStatus,

    // ============================================================================
    // Response Errors
    // ============================================================================
    /// The service answered non-2xx with a well-formed error envelope
    #[error("{errors}")]
    Api { status: u16, errors: ErrorBatch },

    /// The service answered non-2xx and the body was not an error envelope
    #[error("Bad server response (HTTP {status})")]
    BadServerResponse { status: u16 },

    /// A 2xx body (or one of its fields) did not match the expected model
    #[error("Failed to decode response: {message}")]
    Decode { message: String, fragment: String },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid path segment error
    pub fn invalid_path_segment(segment: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPathSegment {
            segment: segment.into(),
            message: message.into(),
        }
    }

    /// Create an encode error
    pub fn encode(message: impl Into<String>) -> Self {
        Self::Encode {
            message: message.into(),
        }
    }

    /// Create a decode error carrying the offending raw fragment
    pub fn decode(message: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
            fragment: fragment.into(),
        }
    }

    /// Whether the error was raised while building the request
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            Error::InvalidUrl(_)
                | Error::Encode { .. }
                | Error::UnsupportedQueryValue { .. }
                | Error::InvalidPathSegment { .. }
                | Error::InvalidHeader { .. }
                | Error::Config { .. }
                | Error::Io(_)
        )
    }

    /// Whether the error came from connectivity, timeout or response shape
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::MissingStatus)
    }

    /// Whether the error is a decode failure on the success path
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }

    /// HTTP status of a non-2xx response, if this error came from one
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } | Error::BadServerResponse { status } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The service-reported errors, if any
    pub fn api_errors(&self) -> Option<&ErrorBatch> {
        match self {
            Error::Api { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

/// Result type alias for the AMC API client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("missing vendor key");
        assert_eq!(err.to_string(), "Configuration error: missing vendor key");

        let err = Error::BadServerResponse { status: 502 };
        assert_eq!(err.to_string(), "Bad server response (HTTP 502)");

        let err = Error::decode("'garbage' is not a valid Genre", "garbage");
        assert_eq!(
            err.to_string(),
            "Failed to decode response: 'garbage' is not a valid Genre"
        );
    }

    #[test]
    fn test_error_detail_description_order() {
        let mut detail = ErrorDetail::new(7, "primary");
        detail.exception_message = Some("secondary".to_string());
        assert_eq!(detail.to_string(), "primary");

        detail.message = None;
        assert_eq!(detail.to_string(), "secondary");

        detail.exception_message = None;
        assert_eq!(detail.to_string(), GENERIC_FAILURE);
    }

    #[test]
    fn test_error_detail_from_error() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let detail = ErrorDetail::from_error(&io);
        assert_eq!(detail.code, -1);
        assert_eq!(detail.to_string(), "disk on fire");
    }

    #[test]
    fn test_error_batch_rejects_empty() {
        assert!(ErrorBatch::new(vec![]).is_none());

        let result: std::result::Result<ErrorBatch, _> =
            serde_json::from_str(r#"{"errors":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_batch_display_uses_first() {
        let batch: ErrorBatch = serde_json::from_str(
            r#"{"errors":[{"code":1,"message":"Not found"},{"code":2,"message":"Other"}]}"#,
        )
        .unwrap();
        assert_eq!(batch.to_string(), "Not found");
        assert_eq!(batch.errors().len(), 2);
        assert!(batch.has_code(2));
        assert!(!batch.has_code(3));
    }

    #[test]
    fn test_error_batch_decodes_exception_fields() {
        let batch: ErrorBatch = serde_json::from_str(
            r#"{"errors":[{"code":5001,"exceptionMessage":"boom","exceptionType":"System.Exception","stackTrace":"at X"}]}"#,
        )
        .unwrap();
        let first = batch.first().unwrap();
        assert_eq!(first.exception_type.as_deref(), Some("System.Exception"));
        assert_eq!(first.stack_trace.as_deref(), Some("at X"));
        assert_eq!(batch.to_string(), "boom");
    }

    #[test]
    fn test_error_classification() {
        let batch = ErrorBatch::new(vec![ErrorDetail::new(404, "Not found")]).unwrap();
        let err = Error::Api {
            status: 404,
            errors: batch,
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Not found");
        assert!(err.api_errors().is_some());
        assert!(!err.is_construction());

        assert!(Error::encode("bad").is_construction());
        assert!(Error::MissingStatus.is_transport());
        assert!(Error::decode("x", "y").is_decode());
        assert_eq!(Error::BadServerResponse { status: 500 }.status(), Some(500));
        assert_eq!(Error::config("x").status(), None);
    }
}
