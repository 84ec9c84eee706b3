//! Authorization-header credential extraction.
//!
//! The caller passes the first `Authorization` header value as folded by
//! its HTTP layer (`HeaderMap::get` semantics); repeated header values
//! beyond the first are ignored. Scheme labels are matched as a strict,
//! case-sensitive prefix followed by whitespace.

use crate::errors::{AuthError, DomainResult};

/// Scheme label for bearer tokens
pub const BEARER_SCHEME: &str = "Bearer";

/// Scheme label for API keys
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Extract a bearer token from an `Authorization` header value
pub fn extract_bearer(header: Option<&str>) -> DomainResult<String> {
    extract_with_scheme(header, BEARER_SCHEME)
}

/// Extract an API key from an `Authorization` header value
pub fn extract_api_key(header: Option<&str>) -> DomainResult<String> {
    extract_with_scheme(header, API_KEY_SCHEME)
}

fn extract_with_scheme(header: Option<&str>, scheme: &str) -> DomainResult<String> {
    let value = header.ok_or(AuthError::MissingAuthorizationHeader)?;

    let rest = value
        .strip_prefix(scheme)
        .filter(|rest| rest.starts_with(char::is_whitespace))
        .ok_or(AuthError::UnsupportedScheme)?;

    let credential = rest.trim();
    if credential.is_empty() {
        return Err(AuthError::EmptyCredential.into());
    }

    Ok(credential.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    #[test]
    fn test_extract_bearer_token() {
        let token = extract_bearer(Some("Bearer abc123")).unwrap();
        assert_eq!(token, "abc123");
    }

    #[test]
    fn test_extract_bearer_trims_surrounding_whitespace() {
        let token = extract_bearer(Some("Bearer   abc123  ")).unwrap();
        assert_eq!(token, "abc123");
    }

    #[test]
    fn test_missing_header() {
        let result = extract_bearer(None);
        assert!(matches!(
            result.unwrap_err(),
            DomainError::Auth(AuthError::MissingAuthorizationHeader)
        ));
    }

    #[test]
    fn test_blank_credential() {
        let result = extract_bearer(Some("Bearer   "));
        assert!(matches!(
            result.unwrap_err(),
            DomainError::Auth(AuthError::EmptyCredential)
        ));
    }

    #[test]
    fn test_scheme_is_case_sensitive() {
        let result = extract_bearer(Some("bearer abc123"));
        assert!(matches!(
            result.unwrap_err(),
            DomainError::Auth(AuthError::UnsupportedScheme)
        ));
    }

    #[test]
    fn test_scheme_must_be_a_prefix() {
        // The scheme word appearing mid-value is not accepted
        let result = extract_bearer(Some("Basic Bearer abc123"));
        assert!(matches!(
            result.unwrap_err(),
            DomainError::Auth(AuthError::UnsupportedScheme)
        ));
    }

    #[test]
    fn test_scheme_without_credential() {
        let result = extract_bearer(Some("Bearer"));
        assert!(matches!(
            result.unwrap_err(),
            DomainError::Auth(AuthError::UnsupportedScheme)
        ));
    }

    #[test]
    fn test_extract_api_key() {
        let key = extract_api_key(Some("ApiKey my-service-key")).unwrap();
        assert_eq!(key, "my-service-key");
    }

    #[test]
    fn test_api_key_rejects_bearer_scheme() {
        let result = extract_api_key(Some("Bearer abc123"));
        assert!(matches!(
            result.unwrap_err(),
            DomainError::Auth(AuthError::UnsupportedScheme)
        ));
    }
}
