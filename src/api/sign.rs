use axum::{
    extract::State,
    response::{IntoResponse, Json},
    Json as JsonExtractor,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::{AppConfig, SecretKey};
use crate::services::SignatureEngine;

/// Request body for URI signing
#[derive(Debug, Deserialize, ToSchema)]
pub struct SignRequest {
    /// Absolute URI to sign
    pub uri: String,
    /// Seconds until the signature expires (server default if omitted)
    #[serde(default)]
    pub expiry: Option<u64>,
}

/// Response from the /api/sign endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct SignResponse {
    /// Status code (200 = success)
    pub status: u16,
    /// The signed URI
    pub uri: String,
}

/// Sign a URI
///
/// Adds `signature_expires` and `signature` query parameters and returns the
/// URI with all parameters in canonical order.
#[utoipa::path(
    post,
    path = "/api/sign",
    request_body = SignRequest,
    responses(
        (status = 200, description = "URI signed", body = SignResponse),
        (status = 400, description = "Malformed URI or expiry above the configured maximum"),
    ),
    tag = "Signing"
)]
pub async fn handle_sign(
    State(engine): State<Arc<SignatureEngine>>,
    State(config): State<Arc<AppConfig>>,
    State(key): State<Arc<SecretKey>>,
    JsonExtractor(request): JsonExtractor<SignRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let expiry = request.expiry.unwrap_or(config.default_expiry_secs);

    if !config.allows_expiry(expiry) {
        tracing::warn!(
            expiry,
            max_expiry_secs = ?config.max_expiry_secs,
            "Rejected sign request with excessive expiry"
        );
        return Err(ApiError::BadRequest(format!(
            "expiry {expiry}s exceeds the maximum of {}s",
            config.max_expiry_secs.unwrap_or_default()
        )));
    }

    let signed = engine.sign(&request.uri, expiry, &key)?;

    tracing::info!(expiry, "URI signed");

    Ok(Json(SignResponse {
        status: 200,
        uri: signed,
    }))
}
