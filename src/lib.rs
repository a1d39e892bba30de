//! signed-uri
//!
//! Tamper-evident, time-limited URLs: an expiry timestamp and an HMAC over
//! the canonically ordered query string are appended as query parameters.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;

pub use error::SignatureError;
pub use models::{SecretKey, SignatureAlgorithm};
pub use services::SignatureEngine;
