use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;
use std::sync::Arc;

use super::clock::{Clock, SystemClock};
use super::secure_compare::secure_compare;
use crate::error::SignatureError;
use crate::models::{SecretKey, SignableUri, SignatureAlgorithm};

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;

/// Query parameter carrying the hex HMAC
pub const SIGNATURE_PARAM: &str = "signature";

/// Query parameter carrying the Unix expiry timestamp
pub const EXPIRES_PARAM: &str = "signature_expires";

/// Signature lifetime used when the caller has no preference
pub const DEFAULT_EXPIRY_SECS: u64 = 300;

/// Signs URIs and verifies signed ones
///
/// Stateless apart from its algorithm choice and clock: the key is passed
/// in on every call and a verdict depends only on the URI and the time.
pub struct SignatureEngine {
    algorithm: SignatureAlgorithm,
    clock: Arc<dyn Clock>,
}

impl SignatureEngine {
    pub fn new(algorithm: SignatureAlgorithm) -> Self {
        Self::with_clock(algorithm, Arc::new(SystemClock))
    }

    pub fn with_clock(algorithm: SignatureAlgorithm, clock: Arc<dyn Clock>) -> Self {
        Self { algorithm, clock }
    }

    /// Sign `uri`, valid for `expiry_secs` from now.
    ///
    /// Returns the URI with `signature` and `signature_expires` added and all
    /// query parameters in canonical order.
    pub fn sign(
        &self,
        uri: &str,
        expiry_secs: u64,
        key: &SecretKey,
    ) -> Result<String, SignatureError> {
        let mut uri = SignableUri::parse(uri)?;

        // Re-signing replaces the old signature instead of signing over it.
        uri.params_mut().remove(SIGNATURE_PARAM);

        let expiry = i64::try_from(expiry_secs).unwrap_or(i64::MAX);
        let expires_at = self.clock.now().saturating_add(expiry);
        uri.params_mut().insert(EXPIRES_PARAM, expires_at.to_string());

        self.add_signature(&mut uri, key);

        tracing::debug!(
            expires_at,
            params = uri.params().len(),
            algorithm = %self.algorithm,
            "Signed URI"
        );

        Ok(uri.to_string())
    }

    /// Check that `uri` is exactly what `sign` would have produced and that
    /// it has not expired.
    pub fn verify(&self, uri: &str, key: &SecretKey) -> Result<(), SignatureError> {
        let mut comparison = SignableUri::parse(uri)?;

        // Wrong-length signatures cannot match; skip the HMAC for them.
        let presented_len = comparison
            .params()
            .get(SIGNATURE_PARAM)
            .map_or(0, <[u8]>::len);
        if presented_len != self.algorithm.hex_len() {
            tracing::debug!(uri, presented_len, "Signature has the wrong length");
            return Err(SignatureError::InvalidSignature(uri.to_string()));
        }

        comparison.params_mut().remove(SIGNATURE_PARAM);
        self.add_signature(&mut comparison, key);

        if !secure_compare(uri.as_bytes(), comparison.to_string().as_bytes()) {
            tracing::debug!(uri, "Signature mismatch");
            return Err(SignatureError::InvalidSignature(uri.to_string()));
        }

        // A signed URI without a readable expiry is treated as expired at the epoch.
        let expires_at = comparison
            .params()
            .get(EXPIRES_PARAM)
            .and_then(|v| std::str::from_utf8(v).ok())
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(0);

        let now = self.clock.now();
        if expires_at < now {
            tracing::debug!(uri, expires_at, now, "Signature expired");
            return Err(SignatureError::ExpiredSignature(uri.to_string()));
        }

        Ok(())
    }

    /// Boolean form of [`verify`](Self::verify).
    ///
    /// Invalid and expired signatures both yield `Ok(false)`. A malformed URI
    /// is still an error.
    pub fn is_valid(&self, uri: &str, key: &SecretKey) -> Result<bool, SignatureError> {
        match self.verify(uri, key) {
            Ok(()) => Ok(true),
            Err(e) if e.is_parse() => Err(e),
            Err(_) => Ok(false),
        }
    }

    fn add_signature(&self, uri: &mut SignableUri, key: &SecretKey) {
        uri.canonicalize();
        let signature = hmac_hex(self.algorithm, key.as_bytes(), uri.to_string().as_bytes());
        uri.params_mut().insert(SIGNATURE_PARAM, signature);
        uri.canonicalize();
    }
}

impl Default for SignatureEngine {
    fn default() -> Self {
        Self::new(SignatureAlgorithm::default())
    }
}

fn hmac_hex(algorithm: SignatureAlgorithm, key: &[u8], message: &[u8]) -> String {
    match algorithm {
        SignatureAlgorithm::Sha1 => {
            let mut mac = HmacSha1::new_from_slice(key).expect("HMAC can take key of any size");
            mac.update(message);
            hex::encode(mac.finalize().into_bytes())
        }
        SignatureAlgorithm::Sha256 => {
            let mut mac =
                HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
            mac.update(message);
            hex::encode(mac.finalize().into_bytes())
        }
    }
}
