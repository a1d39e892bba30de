//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert an error response carries the matching JSON status and an error message
pub fn assert_error_response(response: &TestResponse, expected: StatusCode) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();

    assert_eq!(
        json["status"].as_u64(),
        Some(expected.as_u16() as u64),
        "Expected JSON status {}. Full response: {}",
        expected.as_u16(),
        serde_json::to_string_pretty(&json).unwrap()
    );
    assert!(json["error"].is_string(), "Expected error to be a string");
}

/// Assert verify response is a 200 with the given verdict
pub fn assert_verdict(response: &TestResponse, expected: bool) {
    assert_ok(response);
    let json: serde_json::Value = response.json();

    assert_eq!(json["status"], 200);
    assert_eq!(json["valid"].as_bool(), Some(expected));
}
