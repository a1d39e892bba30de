//! Test fixtures and constants.

/// Clock reading every fixture below was produced at
pub const NOW: i64 = 1_444_620_194;

/// Signing key used across tests
pub const KEY: &str = "abc123";

/// URIs with known signatures (SHA-1, key `abc123`, clock `NOW`)
pub mod uris {
    /// Unsigned input, parameters in canonical order
    pub const UNSIGNED: &str =
        "https://thing.com?a=123&identity_uuid=fbd960b8-8d9f-4475-8fa1-cde8bcd507e0";

    /// Same parameters, reversed
    pub const UNSIGNED_REVERSED: &str =
        "https://thing.com?identity_uuid=fbd960b8-8d9f-4475-8fa1-cde8bcd507e0&a=123";

    /// `UNSIGNED` signed with the default 300s expiry
    pub const SIGNED: &str = "https://thing.com?a=123&identity_uuid=fbd960b8-8d9f-4475-8fa1-cde8bcd507e0&signature=42531af2672e0bd29d4fa4a3beb5ce6760bebf02&signature_expires=1444620494";

    /// Signature one hex digit too long
    pub const BAD_SIGNATURE: &str = "https://thing.com?a=123&identity_uuid=fbd960b8-8d9f-4475-8fa1-cde8bcd507e0&signature=42531af2672e0bd29d4fa4a3beb5ce6760bebf123&signature_expires=1444620494";

    /// Correctly signed but expired long before `NOW`
    pub const EXPIRED: &str = "https://thing.com?a=123&identity_uuid=fbd960b8-8d9f-4475-8fa1-cde8bcd507e0&signature=9fe13a9f22e16dd0fec4456a2b37fa39c46a6d36&signature_expires=1344620494";
}

/// JSON body for /api/sign
pub fn sign_body(uri: &str, expiry: Option<u64>) -> String {
    match expiry {
        Some(expiry) => serde_json::json!({ "uri": uri, "expiry": expiry }).to_string(),
        None => serde_json::json!({ "uri": uri }).to_string(),
    }
}

/// JSON body for /api/verify
pub fn verify_body(uri: &str, raise_error: bool) -> String {
    serde_json::json!({ "uri": uri, "raise_error": raise_error }).to_string()
}
