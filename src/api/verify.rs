use axum::{
    extract::State,
    response::{IntoResponse, Json},
    Json as JsonExtractor,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::SecretKey;
use crate::services::SignatureEngine;

/// Request body for signature verification
#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyRequest {
    /// Signed URI exactly as received
    pub uri: String,
    /// Report invalid or expired signatures as errors (default) or as `valid: false`
    #[serde(default = "default_raise_error")]
    pub raise_error: bool,
}

fn default_raise_error() -> bool {
    true
}

/// Response from the /api/verify endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyResponse {
    /// Status code (200 = verdict reached)
    pub status: u16,
    /// Whether the signature matches and has not expired
    pub valid: bool,
}

/// Verify a signed URI
///
/// With `raise_error` (the default) an invalid signature answers 403 and an
/// expired one 410. Without it both answer 200 with `valid: false`. A
/// malformed URI is always a 400.
#[utoipa::path(
    post,
    path = "/api/verify",
    request_body = VerifyRequest,
    responses(
        (status = 200, description = "Verdict", body = VerifyResponse),
        (status = 400, description = "Malformed URI"),
        (status = 403, description = "Invalid signature"),
        (status = 410, description = "Expired signature"),
    ),
    tag = "Signing"
)]
pub async fn handle_verify(
    State(engine): State<Arc<SignatureEngine>>,
    State(key): State<Arc<SecretKey>>,
    JsonExtractor(request): JsonExtractor<VerifyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let valid = if request.raise_error {
        if let Err(e) = engine.verify(&request.uri, &key) {
            tracing::warn!(%e, "Signature rejected");
            return Err(e.into());
        }
        true
    } else {
        engine.is_valid(&request.uri, &key)?
    };

    tracing::info!(valid, "Signature checked");

    Ok(Json(VerifyResponse { status: 200, valid }))
}
