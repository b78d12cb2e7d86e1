use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Query cannot be empty.")]
    InvalidInput,

    #[error("API key not configured on server.")]
    Misconfigured,

    #[error("Upstream rejected the API key.")]
    UpstreamAuth,

    #[error("Rate limit reached. Please wait a moment.")]
    RateLimited,

    /// Inbound body that is not a valid `{"query": ...}` document.
    #[error("{message}")]
    InvalidBody { status: StatusCode, message: String },

    #[error("{}", upstream_message(.status, .message))]
    Upstream { status: Option<u16>, message: String },

    #[error("Upstream request timed out.")]
    Timeout,

    #[error("Could not parse model response.")]
    UnparsableResponse,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

fn upstream_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("Upstream error {}", code),
        None => format!("Upstream error: {}", message),
    }
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn upstream(status: Option<u16>, msg: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: msg.into(),
        }
    }

    /// HTTP status the inbound caller sees for this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::Misconfigured => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UpstreamAuth => StatusCode::UNAUTHORIZED,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::InvalidBody { status, .. } => *status,
            Self::Upstream { .. } | Self::Timeout | Self::UnparsableResponse => {
                StatusCode::BAD_GATEWAY
            }
            Self::Config(_) | Self::Yaml(_) | Self::Io(_) | Self::AddrParse(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Body returned for every failed request. `detail` matches what the web
/// client reads.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(status = status.as_u16(), "Request failed: {}", self);
        }
        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::InvalidInput.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            Error::Misconfigured.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(Error::UpstreamAuth.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            Error::RateLimited.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            Error::upstream(Some(503), "overloaded").status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(Error::Timeout.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            Error::UnparsableResponse.status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_upstream_message_includes_status() {
        let err = Error::upstream(Some(503), "Service Unavailable");
        assert_eq!(err.to_string(), "Upstream error 503");

        let err = Error::upstream(None, "connection refused");
        assert_eq!(err.to_string(), "Upstream error: connection refused");
    }

    #[tokio::test]
    async fn test_into_response_body() {
        let response = Error::InvalidInput.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "detail": "Query cannot be empty." }));
    }
}
