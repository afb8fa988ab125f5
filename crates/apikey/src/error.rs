use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

/// Errors from extracting an API key out of the `Authorization` header.
///
/// Compare variants to branch on the failure; the display text is meant for
/// logs and response bodies only.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyError {
    /// The header is absent, empty, or uses a scheme other than `ApiKey`.
    #[error("no authorization header included")]
    NoAuthHeader,
    /// The header is present but is not `<scheme> <token>`.
    #[error("malformed authorization header")]
    Malformed,
}

impl ApiKeyError {
    /// HTTP status a server should answer with for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiKeyError::NoAuthHeader => StatusCode::UNAUTHORIZED,
            ApiKeyError::Malformed => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiKeyError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ApiKeyError;
    use axum::response::IntoResponse;
    use http::StatusCode;

    #[test]
    fn messages() {
        assert_eq!(
            ApiKeyError::NoAuthHeader.to_string(),
            "no authorization header included"
        );
        assert_eq!(
            ApiKeyError::Malformed.to_string(),
            "malformed authorization header"
        );
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            ApiKeyError::NoAuthHeader.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiKeyError::Malformed.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn into_response_uses_status() {
        let response = ApiKeyError::Malformed.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
