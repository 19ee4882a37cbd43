//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`HostError`] - Host validation and localStorage persistence
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`RouteError`] - User-facing errors rendered by the files route

use thiserror::Error;

/// Host configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// localStorage not available.
    #[error("localStorage not available")]
    StorageUnavailable,
    /// Host input was empty.
    #[error("host is empty")]
    Empty,
    /// Host is not an http(s) URL.
    #[error("host must start with http:// or https://")]
    InvalidProtocol,
    /// Host could not be parsed as a URL.
    #[error("invalid host: {0}")]
    Invalid(String),
    /// Failed to save to localStorage.
    #[error("failed to save host to localStorage")]
    SaveFailed,
    /// Failed to remove from localStorage.
    #[error("failed to remove host from localStorage")]
    RemoveFailed,
}

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// No backend host configured
    #[error("No host configured")]
    MissingHost,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, connection refused, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Cached value had an unexpected type for its key
    #[error("Cached data type mismatch")]
    CacheTypeMismatch,
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Error shown by the files route.
///
/// HTTP transport failures collapse into two messages; the status code and
/// body never reach the user. Anything else is shown as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("invalid path")]
    InvalidPath,
    #[error("server error")]
    Server,
    #[error(transparent)]
    Other(FetchError),
}

impl From<FetchError> for RouteError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::HttpError(404) => Self::InvalidPath,
            FetchError::HttpError(_) => Self::Server,
            other => Self::Other(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_invalid_path() {
        let err = RouteError::from(FetchError::HttpError(404));
        assert_eq!(err, RouteError::InvalidPath);
        assert_eq!(err.to_string(), "invalid path");
    }

    #[test]
    fn test_other_status_is_server_error() {
        for status in [400, 401, 500, 502, 503] {
            let err = RouteError::from(FetchError::HttpError(status));
            assert_eq!(err.to_string(), "server error", "status {status}");
        }
    }

    #[test]
    fn test_non_http_error_passes_through() {
        let original = FetchError::NetworkError("connection refused".to_string());
        let err = RouteError::from(original.clone());
        assert_eq!(err, RouteError::Other(original.clone()));
        assert_eq!(err.to_string(), original.to_string());
        assert_eq!(
            RouteError::from(FetchError::Timeout).to_string(),
            "Request timed out"
        );
    }
}
