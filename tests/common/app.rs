//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use signed_uri::models::{AppConfig, SecretKey};
use signed_uri::server::{build_router, AppState};
use signed_uri::services::FixedClock;

use super::fixtures;

/// Test application with router and direct access to the clock
pub struct TestApp {
    router: axum::Router,
    pub clock: Arc<FixedClock>,
}

impl TestApp {
    /// Create a new test application with default config and the fixture key
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a test application with custom configuration
    pub fn with_config(config: AppConfig) -> Self {
        let clock = Arc::new(FixedClock::new(fixtures::NOW));
        let state = AppState::new(config, SecretKey::from(fixtures::KEY), clock.clone());

        // Build router using shared server module (same as production)
        let router = build_router(state);

        Self { router, clock }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(request).await
    }

    /// Sign through the API and return the signed URI
    pub async fn sign(&self, uri: &str, expiry: Option<u64>) -> String {
        let response = self
            .post_json("/api/sign", &fixtures::sign_body(uri, expiry))
            .await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.text());

        let json: serde_json::Value = response.json();
        json["uri"].as_str().unwrap().to_string()
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}
