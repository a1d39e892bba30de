//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::error::ApiError;
use crate::models::{AppConfig, SecretKey};
use crate::services::{Clock, SignatureEngine, SystemClock};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub engine: Arc<SignatureEngine>,
    pub key: Arc<SecretKey>,
}

impl AppState {
    /// Assemble state from an explicit key and clock.
    pub fn new(config: AppConfig, key: SecretKey, clock: Arc<dyn Clock>) -> Self {
        let engine = SignatureEngine::with_clock(config.algorithm, clock);
        Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
            key: Arc::new(key),
        }
    }
}

/// Create application state from configuration, reading the key from the environment.
pub fn create_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let key = config.secret_key()?;

    tracing::info!(
        algorithm = %config.algorithm,
        key_env = %config.key_env,
        default_expiry_secs = config.default_expiry_secs,
        "Signature engine configured"
    );

    Ok(AppState::new(config, key, Arc::new(SystemClock)))
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/sign", post(handle_sign))
        .route("/api/verify", post(handle_verify))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_sign(
    axum::extract::State(state): axum::extract::State<AppState>,
    body: axum::Json<api::SignRequest>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    api::handle_sign(
        axum::extract::State(state.engine),
        axum::extract::State(state.config),
        axum::extract::State(state.key),
        body,
    )
    .await
}

async fn handle_verify(
    axum::extract::State(state): axum::extract::State<AppState>,
    body: axum::Json<api::VerifyRequest>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    api::handle_verify(
        axum::extract::State(state.engine),
        axum::extract::State(state.key),
        body,
    )
    .await
}
