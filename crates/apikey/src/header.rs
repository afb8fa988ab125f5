//! `Authorization: ApiKey <token>` parsing.
//!
//! [`get_api_key`] is the entry point for a full header collection;
//! [`parse_api_key`] works on a raw header value. Both are pure and only
//! borrow their input.

use crate::error::ApiKeyError;
use http::{HeaderMap, header::AUTHORIZATION};

/// Scheme expected in front of the key.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Extract the API key from the `Authorization` header.
///
/// Header names are matched case-insensitively by [`HeaderMap`]. A missing or
/// empty header, or a scheme other than [`API_KEY_SCHEME`], yields
/// [`ApiKeyError::NoAuthHeader`]. A value that is not visible ASCII, or that
/// lacks a non-empty scheme and token, yields [`ApiKeyError::Malformed`].
pub fn get_api_key(headers: &HeaderMap) -> Result<String, ApiKeyError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(ApiKeyError::NoAuthHeader)?;
    if value.is_empty() {
        return Err(ApiKeyError::NoAuthHeader);
    }
    let value = value.to_str().map_err(|_| ApiKeyError::Malformed)?;
    parse_api_key(value).map(str::to_owned)
}

/// Parse a raw `Authorization` value of the form `ApiKey <token>`.
///
/// The value is split once, at the first run of whitespace; the token is
/// everything after it, inner whitespace included. The shape check runs
/// before the scheme check, so `"Bearer"` alone is malformed while
/// `"Bearer abc"` is treated as no header at all.
pub fn parse_api_key(value: &str) -> Result<&str, ApiKeyError> {
    if value.is_empty() {
        return Err(ApiKeyError::NoAuthHeader);
    }

    let (scheme, rest) = value
        .split_once(char::is_whitespace)
        .ok_or(ApiKeyError::Malformed)?;
    let token = rest.trim_start();
    if scheme.is_empty() || token.is_empty() {
        return Err(ApiKeyError::Malformed);
    }

    if scheme != API_KEY_SCHEME {
        return Err(ApiKeyError::NoAuthHeader);
    }
    Ok(token)
}
