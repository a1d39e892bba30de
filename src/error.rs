use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Outcome of a failed sign or verify call.
///
/// `InvalidSignature` and `ExpiredSignature` are judgments about a
/// well-formed URI; `Parse` means the input was never a URI to begin with.
#[derive(Debug, Error)]
pub enum SignatureError {
    #[error("Malformed URI {uri:?}: {source}")]
    Parse {
        uri: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid signature provided in {0}")]
    InvalidSignature(String),

    #[error("The signature for {0} has expired")]
    ExpiredSignature(String),
}

impl SignatureError {
    /// True for the precondition failure that the boolean API never swallows.
    pub fn is_parse(&self) -> bool {
        matches!(self, SignatureError::Parse { .. })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Signing key not set: environment variable {0} is missing or empty")]
    MissingKey(String),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Signature(#[from] SignatureError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Signature(SignatureError::Parse { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Signature(SignatureError::InvalidSignature(_)) => StatusCode::FORBIDDEN,
            ApiError::Signature(SignatureError::ExpiredSignature(_)) => StatusCode::GONE,
            ApiError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
