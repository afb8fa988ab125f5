//! Axum extractor for handlers that want the raw key.

use crate::{error::ApiKeyError, header::get_api_key};
use axum::extract::FromRequestParts;
use http::request::Parts;

/// API key taken from `Authorization: ApiKey <key>`.
///
/// Rejects with [`ApiKeyError`], which responds 401 or 400.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiKey(pub String);

impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = ApiKeyError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        get_api_key(&parts.headers).map(ApiKey).inspect_err(|err| {
            tracing::debug!(uri = %parts.uri, error = %err, "api key extraction failed");
        })
    }
}
