//! # apikey
//!
//! Extract the credential from an `Authorization: ApiKey <key>` header.
//!
//! [`get_api_key`] is a pure function over an [`http::HeaderMap`]. It returns
//! the key or an [`ApiKeyError`] that callers match on by variant. Checking
//! the key itself is left to the caller.
//!
//! Handlers can take the key through the [`ApiKey`] axum extractor, which
//! rejects with the matching [`ApiKeyError`] response.
//!
//! ```rust,ignore
//! use apikey::{ApiKeyError, get_api_key};
//!
//! match get_api_key(request.headers()) {
//!     Ok(key) => lookup(&key),
//!     Err(ApiKeyError::NoAuthHeader) => unauthorized(),
//!     Err(ApiKeyError::Malformed) => bad_request(),
//! }
//! ```

pub use axum;

mod error;
mod extract;
mod header;

pub use error::ApiKeyError;
pub use extract::ApiKey;
pub use header::{API_KEY_SCHEME, get_api_key, parse_api_key};
