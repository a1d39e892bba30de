use serde::{Deserialize, Serialize};
use std::fmt;

/// HMAC secret supplied by the caller on every sign/verify call
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(Vec<u8>);

impl SecretKey {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

// Key material must never reach logs.
impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(<{} bytes redacted>)", self.0.len())
    }
}

impl From<&str> for SecretKey {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}

/// Digest behind the HMAC
///
/// SHA-1 is the default so that URLs issued by existing deployments keep
/// verifying; SHA-256 is available for new ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureAlgorithm {
    #[default]
    Sha1,
    Sha256,
}

impl SignatureAlgorithm {
    /// Length of the lowercase hex signature this algorithm produces
    pub fn hex_len(self) -> usize {
        match self {
            SignatureAlgorithm::Sha1 => 40,
            SignatureAlgorithm::Sha256 => 64,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SignatureAlgorithm::Sha1 => "sha1",
            SignatureAlgorithm::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_key_debug_is_redacted() {
        let key = SecretKey::from("abc123");
        let debug = format!("{key:?}");
        assert_eq!(debug, "SecretKey(<6 bytes redacted>)");
        assert!(!debug.contains("abc123"));
    }

    #[test]
    fn test_secret_key_bytes() {
        let key = SecretKey::new(vec![0u8, 1, 2]);
        assert_eq!(key.as_bytes(), &[0, 1, 2]);
    }

    #[test]
    fn test_algorithm_default_is_sha1() {
        assert_eq!(SignatureAlgorithm::default(), SignatureAlgorithm::Sha1);
    }

    #[test]
    fn test_algorithm_hex_len() {
        assert_eq!(SignatureAlgorithm::Sha1.hex_len(), 40);
        assert_eq!(SignatureAlgorithm::Sha256.hex_len(), 64);
    }

    #[test]
    fn test_algorithm_deserialize() {
        let alg: SignatureAlgorithm = serde_yaml::from_str("sha256").unwrap();
        assert_eq!(alg, SignatureAlgorithm::Sha256);
        let alg: SignatureAlgorithm = serde_yaml::from_str("sha1").unwrap();
        assert_eq!(alg, SignatureAlgorithm::Sha1);
        assert!(serde_yaml::from_str::<SignatureAlgorithm>("md5").is_err());
    }
}
