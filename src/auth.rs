use http::{header::AUTHORIZATION, HeaderMap};

/// The only accepted `Authorization` scheme.
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The `Authorization` header is missing or empty.
    ///
    /// Callers usually treat this as "no credentials supplied".
    #[error("no authorization header included")]
    NoAuthHeader,
    /// The `Authorization` header is present but is not `ApiKey <token>`.
    #[error("malformed authorization header")]
    MalformedAuthHeader,
}

/// Extracts the API key from an `Authorization: ApiKey <token>` header.
///
/// Only the first `Authorization` value is considered. The scheme is matched
/// case-sensitively and the value must consist of exactly two
/// whitespace-separated tokens.
pub fn get_api_key(headers: &HeaderMap) -> Result<String, AuthError> {
    let authorization = match headers.get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AuthError::NoAuthHeader),
    };

    let authorization = authorization
        .to_str()
        .map_err(|_| AuthError::MalformedAuthHeader)?;

    let mut parts = authorization.split_whitespace();

    match (parts.next(), parts.next(), parts.next()) {
        (Some(API_KEY_SCHEME), Some(key), None) => Ok(key.to_string()),
        _ => Err(AuthError::MalformedAuthHeader),
    }
}
