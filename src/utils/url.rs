//! URL validation utilities.
//!
//! Host input validation and same-origin checks for redirect targets.

use url::Url;

use crate::core::error::HostError;

/// Validate a user-entered backend host.
///
/// Checks:
/// 1. Host is not empty
/// 2. Host starts with http:// or https://
/// 3. Host parses as a URL with a host part
///
/// Returns the host with surrounding whitespace and trailing slashes removed.
pub fn validate_host(input: &str) -> Result<String, HostError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(HostError::Empty);
    }

    let lower = input.to_lowercase();
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return Err(HostError::InvalidProtocol);
    }

    let url = Url::parse(input).map_err(|e| HostError::Invalid(e.to_string()))?;
    if url.host_str().is_none_or(str::is_empty) {
        return Err(HostError::Invalid("missing host".to_string()));
    }

    Ok(input.trim_end_matches('/').to_string())
}

/// Join a host and an endpoint path with exactly one slash between them.
pub fn join_endpoint(host: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        host.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

/// Whether `href` belongs to `origin` (e.g. `http://localhost:8080`).
pub fn is_same_origin(href: &str, origin: &str) -> bool {
    Url::parse(href)
        .map(|url| url.origin().ascii_serialization() == origin.trim_end_matches('/'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_hosts() {
        assert_eq!(
            validate_host("http://localhost:5572"),
            Ok("http://localhost:5572".to_string())
        );
        assert_eq!(
            validate_host("  https://nas.example.com/rclone/  "),
            Ok("https://nas.example.com/rclone".to_string())
        );
    }

    #[test]
    fn test_invalid_hosts() {
        assert_eq!(validate_host(""), Err(HostError::Empty));
        assert_eq!(validate_host("   "), Err(HostError::Empty));
        assert_eq!(
            validate_host("localhost:5572"),
            Err(HostError::InvalidProtocol)
        );
        assert_eq!(
            validate_host("ftp://example.com"),
            Err(HostError::InvalidProtocol)
        );
        assert!(matches!(
            validate_host("http://"),
            Err(HostError::Invalid(_))
        ));
    }

    #[test]
    fn test_join_endpoint() {
        assert_eq!(
            join_endpoint("http://h:5572/", "/operations/list"),
            "http://h:5572/operations/list"
        );
        assert_eq!(
            join_endpoint("http://h/rc", "operations/list"),
            "http://h/rc/operations/list"
        );
    }

    #[test]
    fn test_same_origin() {
        assert!(is_same_origin("http://localhost:8080/#/fs", "http://localhost:8080"));
        assert!(!is_same_origin("https://evil.example/#/fs", "http://localhost:8080"));
        assert!(!is_same_origin("not a url", "http://localhost:8080"));
    }
}
